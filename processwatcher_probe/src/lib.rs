//! Process and resource probes for processwatcher.
//!
//! [`ProcessSource`] is the single seam between processwatcher and the OS; the
//! production implementation is [`SysinfoSource`].

pub mod error;
pub mod metrics;
mod signal;
pub mod source;
pub mod state;
pub mod types;

pub use error::ProbeError;
pub use source::{validate_pid, Lookup, ProcessSource, Signal};
pub use state::SysinfoSource;
pub use types::{NetworkSnapshot, ProcessDetails, ProcessRecord, SystemSnapshot};
