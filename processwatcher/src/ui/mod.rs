//! UI module root: plain-text renderers. Each writes to any `io::Write` so the
//! binary targets stdout and tests target a buffer.

pub mod processes;
pub mod report;
pub mod stats;
pub mod util;
