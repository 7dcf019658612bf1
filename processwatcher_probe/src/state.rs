//! Shared probe state: persistent sysinfo handles.

use std::sync::Arc;
use std::time::Duration;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};
use tokio::sync::Mutex;

pub type SharedSystem = Arc<Mutex<System>>;

/// Default window between the two CPU refreshes used for the system CPU%.
pub const DEFAULT_CPU_SAMPLE: Duration = Duration::from_millis(1000);

/// Production [`ProcessSource`](crate::ProcessSource) backed by sysinfo.
#[derive(Clone)]
pub struct SysinfoSource {
    // Keep System alive across calls so CPU deltas have a baseline
    pub(crate) sys: SharedSystem,
    pub(crate) cpu_sample: Duration,
}

impl SysinfoSource {
    pub fn new() -> Self {
        Self::with_cpu_sample(DEFAULT_CPU_SAMPLE)
    }

    pub fn with_cpu_sample(cpu_sample: Duration) -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
            .with_memory(MemoryRefreshKind::nothing().with_ram());
        let sys = System::new_with_specifics(refresh_kind);
        Self {
            sys: Arc::new(Mutex::new(sys)),
            // sysinfo needs at least this long between refreshes to produce a rate
            cpu_sample: cpu_sample.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL),
        }
    }
}

impl Default for SysinfoSource {
    fn default() -> Self {
        Self::new()
    }
}
