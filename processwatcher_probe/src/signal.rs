//! Signal delivery. Unix goes through kill(2) directly so ESRCH and EPERM stay
//! distinguishable; other platforms fall back to sysinfo.

use crate::error::{ProbeError, Result};
use crate::source::Signal;

#[cfg(unix)]
pub(crate) fn deliver(pid: u32, signal: Signal) -> Result<()> {
    use nix::errno::Errno;
    use nix::sys::signal::{kill, Signal as NixSignal};
    use nix::unistd::Pid;

    // Anything that doesn't fit a pid_t can't name a live process.
    let raw = i32::try_from(pid).map_err(|_| ProbeError::NotFound(pid))?;
    if raw <= 0 {
        return Err(ProbeError::InvalidInput(format!(
            "refusing to signal pid {pid}"
        )));
    }
    let sig = match signal {
        Signal::Terminate => NixSignal::SIGTERM,
        Signal::Kill => NixSignal::SIGKILL,
    };
    match kill(Pid::from_raw(raw), sig) {
        Ok(()) => Ok(()),
        Err(Errno::ESRCH) => Err(ProbeError::NotFound(pid)),
        Err(Errno::EPERM) => Err(ProbeError::AccessDenied(pid)),
        Err(e) => Err(ProbeError::Io(std::io::Error::from(e))),
    }
}

#[cfg(not(unix))]
pub(crate) fn deliver(
    sys: &mut sysinfo::System,
    pid: u32,
    signal: Signal,
) -> Result<()> {
    use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate};

    let spid = Pid::from_u32(pid);
    sys.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[spid]),
        true,
        ProcessRefreshKind::nothing(),
    );
    let proc_ = sys.process(spid).ok_or(ProbeError::NotFound(pid))?;
    let sent = match signal {
        Signal::Terminate => proc_
            .kill_with(sysinfo::Signal::Term)
            // no SIGTERM equivalent on this platform
            .unwrap_or_else(|| proc_.kill()),
        Signal::Kill => proc_.kill(),
    };
    if sent {
        Ok(())
    } else {
        Err(ProbeError::AccessDenied(pid))
    }
}
