use std::thread;
use std::time::Duration;

use sysinfo::{Disks, Networks, System};
use tracing::debug;

use super::snapshot::{
    DiskStats, MemoryStats, MetricsUnavailable, NetworkStats, SystemSnapshot,
};
use crate::format::format_uptime;

const GIB: u64 = 1024 * 1024 * 1024;
const MIB: u64 = 1024 * 1024;

/// CPU usage is meaningless on an instantaneous read (the first sample
/// returns 0 on most platforms), so every collection blocks for at least
/// this long between two refreshes.
pub const MIN_CPU_SAMPLE: Duration = Duration::from_millis(500);

pub struct Collector {
    sys: System,
    cpu_sample_interval: Duration,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new(MIN_CPU_SAMPLE)
    }
}

impl Collector {
    /// Intervals shorter than [`MIN_CPU_SAMPLE`] (or sysinfo's own minimum
    /// CPU update interval) are clamped up.
    pub fn new(cpu_sample_interval: Duration) -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_usage();
        Collector {
            sys,
            cpu_sample_interval: cpu_sample_interval
                .max(MIN_CPU_SAMPLE)
                .max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL),
        }
    }

    /// Gather a snapshot of host resource usage. Blocks for the CPU sample
    /// interval; callers needing responsiveness should run this on a worker
    /// thread. Read-only, no side effects.
    pub fn collect(&mut self) -> Result<SystemSnapshot, MetricsUnavailable> {
        self.sys.refresh_cpu_usage();
        thread::sleep(self.cpu_sample_interval);
        self.sys.refresh_cpu_usage();
        self.sys.refresh_memory();

        let cpu_usage_percent = self.sys.global_cpu_usage().clamp(0.0, 100.0);
        // Boot time of 0 means the OS could not report it; uptime is then
        // unavailable rather than "just booted".
        let uptime = (System::boot_time() > 0).then(|| format_uptime(System::uptime()));
        let memory = self.memory_stats();
        let disk = primary_disk_stats(&Disks::new_with_refreshed_list());
        let network = network_totals(&Networks::new_with_refreshed_list());

        if memory.is_none() && disk.is_none() && network.is_none() {
            return Err(MetricsUnavailable);
        }

        debug!(
            cpu = cpu_usage_percent,
            memory = memory.is_some(),
            disk = disk.is_some(),
            network = network.is_some(),
            "collected snapshot"
        );

        Ok(SystemSnapshot {
            uptime,
            cpu_usage_percent,
            memory,
            disk,
            network,
        })
    }

    fn memory_stats(&self) -> Option<MemoryStats> {
        let total = self.sys.total_memory();
        if total == 0 {
            return None;
        }
        let used = self.sys.used_memory();
        Some(MemoryStats {
            usage_percent: percent_of(used, total),
            available_gib: self.sys.available_memory() / GIB,
            total_gib: total / GIB,
        })
    }
}

/// The root volume is taken to be the disk with the shortest mount point
/// (`/` on Unix, the system drive root on Windows).
fn primary_disk_stats(disks: &Disks) -> Option<DiskStats> {
    let disk = disks
        .list()
        .iter()
        .min_by_key(|d| d.mount_point().as_os_str().len())?;
    let total = disk.total_space();
    if total == 0 {
        return None;
    }
    let free = disk.available_space();
    Some(DiskStats {
        usage_percent: percent_of(total.saturating_sub(free), total),
        free_gib: free / GIB,
        total_gib: total / GIB,
    })
}

fn network_totals(networks: &Networks) -> Option<NetworkStats> {
    if networks.list().is_empty() {
        return None;
    }
    let (sent, recv) = networks
        .iter()
        .fold((0u64, 0u64), |(sent, recv), (_name, data)| {
            (sent + data.total_transmitted(), recv + data.total_received())
        });
    Some(NetworkStats {
        sent_mib: sent / MIB,
        recv_mib: recv / MIB,
    })
}

fn percent_of(part: u64, whole: u64) -> f32 {
    (part as f32 / whole as f32 * 100.0).clamp(0.0, 100.0)
}
