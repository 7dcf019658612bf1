//! The OS capability boundary. Everything above this trait is pure logic that can
//! be driven by an in-memory fake; everything below it talks to the platform.

use async_trait::async_trait;

use crate::error::{ProbeError, Result};
use crate::types::{NetworkSnapshot, ProcessDetails, ProcessRecord, SystemSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// SIGTERM: the target may handle, delay or ignore it.
    Terminate,
    /// SIGKILL: cannot be intercepted.
    Kill,
}

/// Outcome of a single-PID query where "gone" and "not allowed" are answers,
/// not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound(u32),
    AccessDenied(u32),
}

#[async_trait]
pub trait ProcessSource: Send + Sync {
    /// Every visible process, one outcome per entry, ascending by PID.
    /// A process that vanished or refused access mid-scan yields an `Err` item
    /// instead of failing the whole enumeration.
    async fn processes(&self) -> Vec<Result<ProcessRecord>>;

    async fn process_details(&self, pid: u32) -> Result<ProcessDetails>;

    /// Best effort; `None` when the name cannot be read.
    async fn process_name(&self, pid: u32) -> Option<String>;

    /// Deliver `signal` once and return without waiting for the target to exit.
    async fn send_signal(&self, pid: u32, signal: Signal) -> Result<()>;

    /// Aggregate CPU/memory/disk usage. Blocks for the CPU sample window.
    async fn system(&self) -> SystemSnapshot;

    async fn network(&self) -> NetworkSnapshot;
}

/// Check a user-supplied PID before it goes anywhere near the OS.
pub fn validate_pid(raw: i64) -> Result<u32> {
    if raw < 0 {
        return Err(ProbeError::InvalidInput(format!(
            "pid must be non-negative, got {raw}"
        )));
    }
    u32::try_from(raw)
        .map_err(|_| ProbeError::InvalidInput(format!("pid {raw} is out of range")))
}
