//! Process listing: filter idle entries, sort by one key, truncate.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use processwatcher_probe::types::finite_or_zero;
use processwatcher_probe::{ProcessRecord, ProcessSource};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortKey {
    #[default]
    Cpu,
    Memory,
    Name,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortKey::Cpu => "cpu",
            SortKey::Memory => "memory",
            SortKey::Name => "name",
        })
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpu" => Ok(SortKey::Cpu),
            "memory" | "mem" => Ok(SortKey::Memory),
            "name" => Ok(SortKey::Name),
            other => Err(format!("unknown sort key '{other}' (cpu, memory, name)")),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    pub sort_by: SortKey,
    pub limit: usize,
    pub show_all: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            sort_by: SortKey::Cpu,
            limit: 20,
            show_all: false,
        }
    }
}

/// Keep the successes of an enumeration; per-process failures just drop the entry.
async fn live_records<S: ProcessSource + ?Sized>(source: &S) -> Vec<ProcessRecord> {
    source
        .processes()
        .await
        .into_iter()
        .filter_map(|r| match r {
            Ok(p) => Some(p),
            Err(e) => {
                trace!("skipping process: {e}");
                None
            }
        })
        .collect()
}

/// Exactly zero CPU and memory at sample time. No hysteresis: a process that was
/// busy between samples still reads as idle.
pub fn is_idle(p: &ProcessRecord) -> bool {
    finite_or_zero(p.cpu_percent) == 0.0 && finite_or_zero(p.memory_percent) == 0.0
}

fn desc(a: f32, b: f32) -> Ordering {
    finite_or_zero(b)
        .partial_cmp(&finite_or_zero(a))
        .unwrap_or(Ordering::Equal)
}

pub fn sort_records(procs: &mut [ProcessRecord], key: SortKey) {
    match key {
        SortKey::Cpu => procs.sort_by(|a, b| desc(a.cpu_percent, b.cpu_percent)),
        SortKey::Memory => procs.sort_by(|a, b| desc(a.memory_percent, b.memory_percent)),
        SortKey::Name => procs.sort_by_cached_key(|p| p.name.to_lowercase()),
    }
}

/// Filter, sort and truncate a fresh enumeration. `limit == 0` yields nothing.
pub async fn list_processes<S: ProcessSource + ?Sized>(
    source: &S,
    opts: ListOptions,
) -> Vec<ProcessRecord> {
    if opts.limit == 0 {
        return Vec::new();
    }
    let mut procs = live_records(source).await;
    if !opts.show_all {
        procs.retain(|p| !is_idle(p));
    }
    sort_records(&mut procs, opts.sort_by);
    procs.truncate(opts.limit);
    procs
}

/// Case-insensitive substring match on the process name, in enumeration order.
pub async fn find_processes<S: ProcessSource + ?Sized>(
    source: &S,
    term: &str,
) -> Vec<ProcessRecord> {
    let needle = term.to_lowercase();
    live_records(source)
        .await
        .into_iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(pid: u32, name: &str, cpu: f32, mem: f32) -> ProcessRecord {
        ProcessRecord {
            pid,
            name: name.into(),
            cpu_percent: cpu,
            memory_percent: mem,
            status: "running".into(),
        }
    }

    #[test]
    fn sort_key_parses_and_displays() {
        assert_eq!("MEMORY".parse::<SortKey>().unwrap(), SortKey::Memory);
        assert_eq!("mem".parse::<SortKey>().unwrap(), SortKey::Memory);
        assert!("disk".parse::<SortKey>().is_err());
        assert_eq!(SortKey::Name.to_string(), "name");
    }

    #[test]
    fn nan_cpu_sorts_as_zero() {
        let mut v = vec![rec(1, "a", f32::NAN, 1.0), rec(2, "b", 3.0, 1.0)];
        sort_records(&mut v, SortKey::Cpu);
        assert_eq!(v[0].pid, 2);
    }

    #[test]
    fn idle_means_both_zero() {
        assert!(is_idle(&rec(1, "a", 0.0, 0.0)));
        assert!(!is_idle(&rec(1, "a", 0.0, 0.1)));
        assert!(!is_idle(&rec(1, "a", 0.1, 0.0)));
    }
}
