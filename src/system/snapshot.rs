use thiserror::Error;

/// Point-in-time bundle of host resource readings.
///
/// Subsystems that could not be read are `None`, never defaulted: a zero
/// would misleadingly suggest a just-booted or idle system.
#[derive(Debug, Clone)]
pub struct SystemSnapshot {
    /// Time since boot as `H:MM:SS`; `None` when the OS cannot report
    /// boot time.
    pub uptime: Option<String>,
    /// Global CPU usage in [0, 100], sampled over the collector's interval.
    pub cpu_usage_percent: f32,
    pub memory: Option<MemoryStats>,
    pub disk: Option<DiskStats>,
    pub network: Option<NetworkStats>,
}

#[derive(Debug, Clone, Copy)]
pub struct MemoryStats {
    pub usage_percent: f32,
    pub available_gib: u64,
    pub total_gib: u64,
}

/// Usage of the primary (root) volume.
#[derive(Debug, Clone, Copy)]
pub struct DiskStats {
    pub usage_percent: f32,
    pub free_gib: u64,
    pub total_gib: u64,
}

/// Cumulative traffic since the OS counters were last reset (commonly
/// boot), summed across interfaces. Raw totals, not rates.
#[derive(Debug, Clone, Copy)]
pub struct NetworkStats {
    pub sent_mib: u64,
    pub recv_mib: u64,
}

/// Returned when no resource-accounting subsystem could be read at all.
#[derive(Debug, Error)]
#[error("system statistics are unavailable on this host")]
pub struct MetricsUnavailable;
