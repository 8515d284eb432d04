use std::path::PathBuf;

const MIB: u64 = 1024 * 1024;

/// Aggregate outcome of a single cleanup run. Created fresh per invocation;
/// nothing survives between runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CleanupReport {
    /// Regular files actually unlinked.
    pub files_removed: u64,
    /// Pre-deletion sizes of every removed file, truncated to MiB.
    pub bytes_freed_mib: u64,
    /// Roots whose top-level open failed, in input order. Distinct from
    /// per-file failures, which are absorbed into the counts.
    pub unreachable_locations: Vec<PathBuf>,
}

impl CleanupReport {
    /// Byte totals are accumulated exactly during the run and truncated
    /// here, once. Truncating per file would lose up to a MiB for every
    /// small file in the set.
    pub fn new(
        files_removed: u64,
        bytes_freed: u64,
        unreachable_locations: Vec<PathBuf>,
    ) -> Self {
        CleanupReport {
            files_removed,
            bytes_freed_mib: bytes_freed / MIB,
            unreachable_locations,
        }
    }
}
