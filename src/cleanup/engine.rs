use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::report::CleanupReport;

/// Best-effort recursive deleter for a fixed set of temp roots.
///
/// The location set is configured once at construction and processed in
/// order. Each `clean` run owns its accumulation state exclusively; the
/// only shared mutable state between concurrent runs is the filesystem
/// itself. Expected per-file failures (in-use files, permission holds,
/// races with other deleters) are skipped, never propagated.
pub struct CleanupEngine {
    locations: Vec<PathBuf>,
    removed: AtomicU64,
}

impl CleanupEngine {
    pub fn new(locations: Vec<PathBuf>) -> Self {
        CleanupEngine {
            locations,
            removed: AtomicU64::new(0),
        }
    }

    /// Total files removed across all runs on this engine. Monotonic;
    /// safe to poll from another thread while a run is in flight.
    pub fn files_removed_so_far(&self) -> u64 {
        self.removed.load(Ordering::Relaxed)
    }

    /// Walk every configured root and delete the regular files beneath it.
    /// Directories are left in place, even when emptied: applications often
    /// expect their cache directories to exist. Blocks for the duration of
    /// the walk and runs to completion.
    pub fn clean(&self) -> CleanupReport {
        let mut files_removed = 0u64;
        let mut bytes_freed = 0u64;
        let mut unreachable_locations = Vec::new();

        for location in &self.locations {
            // Top-level probe: a root that cannot be opened at all is
            // reported, unlike entry-level failures below.
            if let Err(err) = fs::read_dir(location) {
                warn!(path = %location.display(), %err, "cleanup root unreachable");
                unreachable_locations.push(location.clone());
                continue;
            }

            for entry in WalkDir::new(location)
                .into_iter()
                .filter_map(|entry| entry.ok())
            {
                // Symlinks are neither followed nor removed.
                if !entry.file_type().is_file() {
                    continue;
                }
                // Size is read before unlinking; an unreadable size
                // contributes 0 but must not stop the removal attempt.
                let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
                match fs::remove_file(entry.path()) {
                    Ok(()) => {
                        files_removed += 1;
                        bytes_freed += size;
                        self.removed.fetch_add(1, Ordering::Relaxed);
                    }
                    Err(err) => {
                        debug!(path = %entry.path().display(), %err, "skipped file");
                    }
                }
            }
        }

        CleanupReport::new(files_removed, bytes_freed, unreachable_locations)
    }
}
