//! Terminate or kill a process by PID.

use processwatcher_probe::{validate_pid, ProbeError, ProcessSource, Signal};
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub enum KillOutcome {
    /// The signal was delivered. The target may still be running.
    Signalled {
        pid: u32,
        name: Option<String>,
        signal: Signal,
    },
    NotFound(u32),
    AccessDenied(u32),
}

/// Send SIGTERM (`force == false`) or SIGKILL (`force == true`) exactly once.
///
/// The name is read before signalling since it may be gone afterwards. Only
/// invalid input is an `Err`; missing and forbidden targets are outcomes.
pub async fn terminate<S: ProcessSource + ?Sized>(
    source: &S,
    raw_pid: i64,
    force: bool,
) -> Result<KillOutcome, ProbeError> {
    let pid = validate_pid(raw_pid)?;
    // 0 addresses our own process group
    if pid == 0 {
        return Err(ProbeError::InvalidInput(
            "pid 0 does not name a single process".into(),
        ));
    }
    let signal = if force { Signal::Kill } else { Signal::Terminate };
    let name = source.process_name(pid).await;

    match source.send_signal(pid, signal).await {
        Ok(()) => {
            info!(pid, ?signal, name = name.as_deref().unwrap_or("?"), "signal sent");
            Ok(KillOutcome::Signalled { pid, name, signal })
        }
        Err(ProbeError::NotFound(p)) => Ok(KillOutcome::NotFound(p)),
        Err(ProbeError::AccessDenied(p)) => Ok(KillOutcome::AccessDenied(p)),
        Err(e) => Err(e),
    }
}
