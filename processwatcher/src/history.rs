//! Read back the tail of the resource log.

use processwatcher_probe::ProbeError;
use std::fs;
use std::io;
use std::path::Path;

use crate::resource_log::LogRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum History {
    /// No log file yet; nothing has been monitored.
    Missing,
    /// File exists but there is nothing to show (or zero lines were asked for).
    Empty,
    /// The tail that was read: `lines` counts every line kept, `rows` only the
    /// ones that parsed, in chronological order.
    Records { lines: usize, rows: Vec<LogRecord> },
}

/// The last `max_lines` lines of the log at `path`.
pub fn read_history(path: &Path, max_lines: usize) -> Result<History, ProbeError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(History::Missing),
        Err(e) => return Err(e.into()),
    };
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(max_lines);
    let recent = &lines[start..];
    if recent.is_empty() {
        return Ok(History::Empty);
    }
    Ok(History::Records {
        lines: recent.len(),
        rows: recent.iter().filter_map(|l| LogRecord::parse(l)).collect(),
    })
}
