//! Plain data returned by a process source.
//! Everything here is an ephemeral snapshot; nothing is cached or persisted.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f32,
    pub memory_percent: f32,
    pub status: String,
}

/// Extended attributes for a single PID. Each optional field degrades on its own
/// when the OS refuses to disclose it (permissions, process exiting mid-read).
#[derive(Debug, Serialize, Clone, Default)]
pub struct ProcessDetails {
    pub pid: u32,
    pub name: String,
    pub status: String,
    pub cpu_percent: f32,
    pub memory_percent: f32,
    pub memory_bytes: u64,
    pub user: Option<String>,
    pub started: Option<DateTime<Local>>,
    pub exe: Option<PathBuf>,
    pub cwd: Option<PathBuf>,
    pub command: Option<String>,
}

#[derive(Debug, Serialize, Clone, Copy, Default, PartialEq)]
pub struct SystemSnapshot {
    pub cpu_percent: f32,
    pub memory_percent: f32,
    pub memory_used_bytes: u64,
    pub memory_total_bytes: u64,
    pub disk_percent: f32,
    pub disk_used_bytes: u64,
    pub disk_total_bytes: u64,
}

// cumulative since boot, summed over every interface
#[derive(Debug, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkSnapshot {
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub packets_sent: u64,
    pub packets_received: u64,
}

/// Percentages that could not be computed (NaN, inf) count as zero.
pub fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// `part / whole` as a 0..=100 percentage; zero when `whole` is zero.
pub fn percent_of(part: u64, whole: u64) -> f32 {
    if whole == 0 {
        return 0.0;
    }
    ((part as f64 / whole as f64) * 100.0).clamp(0.0, 100.0) as f32
}
