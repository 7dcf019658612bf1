//! Single-PID detail lookup.

use processwatcher_probe::{validate_pid, Lookup, ProbeError, ProcessDetails, ProcessSource};

/// Longest command line shown verbatim; anything longer is cut with "...".
pub const COMMAND_DISPLAY_MAX: usize = 100;

/// Fetch extended attributes for `raw_pid`.
///
/// A negative PID fails with [`ProbeError::InvalidInput`] before the source is
/// touched. A missing or forbidden process is a [`Lookup`] outcome, not an error.
pub async fn inspect<S: ProcessSource + ?Sized>(
    source: &S,
    raw_pid: i64,
) -> Result<Lookup<ProcessDetails>, ProbeError> {
    let pid = validate_pid(raw_pid)?;
    match source.process_details(pid).await {
        Ok(d) => Ok(Lookup::Found(d)),
        Err(ProbeError::NotFound(p)) => Ok(Lookup::NotFound(p)),
        Err(ProbeError::AccessDenied(p)) => Ok(Lookup::AccessDenied(p)),
        Err(e) => Err(e),
    }
}

/// Display form of a command line: at most [`COMMAND_DISPLAY_MAX`] characters.
pub fn display_command(cmd: &str) -> String {
    if cmd.chars().count() <= COMMAND_DISPLAY_MAX {
        return cmd.to_string();
    }
    let head: String = cmd.chars().take(COMMAND_DISPLAY_MAX - 3).collect();
    format!("{head}...")
}
