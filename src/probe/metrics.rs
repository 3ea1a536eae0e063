//! Extended metrics capability
//!
//! Uptime, core counts, memory and disk usage come from sysinfo when the
//! platform supports it. On anything else the [`NoMetrics`] stand-in answers
//! `None` and the affected probes degrade to "unknown".

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use sysinfo::{Disks, System};
use tracing::debug;

/// Used/total pair in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    pub used: u64,
    pub total: u64,
}

/// Optional enhanced data source
pub trait Metrics {
    fn is_available(&self) -> bool;

    /// Seconds since boot (now minus boot time)
    fn uptime_seconds(&self) -> Option<u64>;

    /// Physical cores and logical threads
    fn core_counts(&self) -> Option<(usize, usize)>;

    fn memory(&self) -> Option<Usage>;

    /// Usage of the filesystem mounted at `/`
    fn root_disk(&self) -> Option<Usage>;
}

/// Pick the capability once at startup
pub fn detect(enabled: bool) -> Box<dyn Metrics> {
    if enabled && sysinfo::IS_SUPPORTED_SYSTEM {
        debug!("extended metrics: sysinfo");
        Box::new(SysinfoMetrics)
    } else {
        debug!(enabled, "extended metrics unavailable");
        Box::new(NoMetrics)
    }
}

/// sysinfo-backed metrics
pub struct SysinfoMetrics;

impl Metrics for SysinfoMetrics {
    fn is_available(&self) -> bool {
        true
    }

    fn uptime_seconds(&self) -> Option<u64> {
        let boot = System::boot_time();
        if boot == 0 {
            return None;
        }
        let now = SystemTime::now().duration_since(UNIX_EPOCH).ok()?.as_secs();
        now.checked_sub(boot)
    }

    fn core_counts(&self) -> Option<(usize, usize)> {
        let mut sys = System::new();
        sys.refresh_cpu_all();

        let threads = sys.cpus().len();
        if threads == 0 {
            return None;
        }
        let cores = sys.physical_core_count().unwrap_or(threads);
        Some((cores, threads))
    }

    fn memory(&self) -> Option<Usage> {
        let mut sys = System::new();
        sys.refresh_memory();

        let total = sys.total_memory();
        if total == 0 {
            return None;
        }
        Some(Usage {
            used: sys.used_memory(),
            total,
        })
    }

    fn root_disk(&self) -> Option<Usage> {
        let disks = Disks::new_with_refreshed_list();
        let root = disks
            .list()
            .iter()
            .find(|disk| disk.mount_point() == Path::new("/"))
            .or_else(|| disks.list().first())?;

        let total = root.total_space();
        if total == 0 {
            return None;
        }
        Some(Usage {
            used: total.saturating_sub(root.available_space()),
            total,
        })
    }
}

/// Degraded capability: every query is unavailable
pub struct NoMetrics;

impl Metrics for NoMetrics {
    fn is_available(&self) -> bool {
        false
    }

    fn uptime_seconds(&self) -> Option<u64> {
        None
    }

    fn core_counts(&self) -> Option<(usize, usize)> {
        None
    }

    fn memory(&self) -> Option<Usage> {
        None
    }

    fn root_disk(&self) -> Option<Usage> {
        None
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::{Metrics, Usage};

    /// Fixed answers for probe tests
    #[derive(Default)]
    pub(crate) struct FakeMetrics {
        pub(crate) uptime: Option<u64>,
        pub(crate) cores: Option<(usize, usize)>,
        pub(crate) memory: Option<Usage>,
        pub(crate) disk: Option<Usage>,
    }

    impl Metrics for FakeMetrics {
        fn is_available(&self) -> bool {
            true
        }

        fn uptime_seconds(&self) -> Option<u64> {
            self.uptime
        }

        fn core_counts(&self) -> Option<(usize, usize)> {
            self.cores
        }

        fn memory(&self) -> Option<Usage> {
            self.memory
        }

        fn root_disk(&self) -> Option<Usage> {
            self.disk
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_capability_is_degraded() {
        let metrics = detect(false);
        assert!(!metrics.is_available());
        assert_eq!(metrics.memory(), None);
        assert_eq!(metrics.root_disk(), None);
    }
}
