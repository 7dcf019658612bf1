//! Append-only CSV log of resource samples: `timestamp,cpu,mem,disk` per line,
//! no header. Writes are fire-and-forget.

use chrono::{Local, NaiveDateTime, TimeDelta};
use processwatcher_probe::SystemSnapshot;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// One parsed log line.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: String,
    pub cpu_percent: f32,
    pub memory_percent: f32,
    pub disk_percent: f32,
}

impl LogRecord {
    /// Parse one stored line. `None` for anything with fewer than four fields or
    /// non-numeric values; extra trailing fields are ignored.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.trim().split(',');
        let timestamp = parts.next()?.to_string();
        let cpu_percent = parts.next()?.trim().parse().ok()?;
        let memory_percent = parts.next()?.trim().parse().ok()?;
        let disk_percent = parts.next()?.trim().parse().ok()?;
        Some(Self {
            timestamp,
            cpu_percent,
            memory_percent,
            disk_percent,
        })
    }

    pub fn to_line(&self) -> String {
        format!(
            "{},{:.1},{:.1},{:.1}\n",
            self.timestamp, self.cpu_percent, self.memory_percent, self.disk_percent
        )
    }
}

pub struct ResourceLog {
    path: PathBuf,
    // last stamp written by this instance; keeps stamps strictly increasing
    last: Mutex<Option<NaiveDateTime>>,
}

impl ResourceLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one sample. Never fails from the caller's point of view: any I/O
    /// problem is dropped so a monitoring loop keeps going.
    pub fn append(&self, sample: &SystemSnapshot) {
        let record = LogRecord {
            timestamp: self.next_timestamp(),
            cpu_percent: sample.cpu_percent,
            memory_percent: sample.memory_percent,
            disk_percent: sample.disk_percent,
        };
        if let Err(e) = self.write_line(&record.to_line()) {
            debug!("resource log write to {} failed: {e}", self.path.display());
        }
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        // single write so concurrent appenders interleave whole lines only
        f.write_all(line.as_bytes())
    }

    fn next_timestamp(&self) -> String {
        let now = Local::now().naive_local();
        let stamp = match self.last.lock() {
            Ok(mut last) => {
                let next = match *last {
                    Some(prev) if now <= prev => prev + TimeDelta::microseconds(1),
                    _ => now,
                };
                *last = Some(next);
                next
            }
            Err(_) => now,
        };
        stamp.format(TIMESTAMP_FORMAT).to_string()
    }
}
