//! Core logic for systidy: point-in-time host resource snapshots and
//! best-effort bulk deletion of temporary files.
//!
//! The two subsystems are independent leaves: `system` reads OS resource
//! accounting, `cleanup` walks and deletes files. They share no state and
//! are composed only by the caller (the CLI in `main.rs`).

pub mod cleanup;
pub mod config;
pub mod format;
pub mod system;
