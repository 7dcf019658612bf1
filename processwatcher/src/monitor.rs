//! Real-time monitor loop: sample, print, log, sleep, until interrupted.

use chrono::Local;
use std::future::Future;
use std::io::{self, Write};
use std::time::Duration;
use tokio::time::sleep;

use processwatcher_probe::ProcessSource;

use crate::resource_log::ResourceLog;
use crate::ui::stats::{render_monitor_header, render_monitor_row};

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(2);

/// Take one sample, print it and append it to the log.
pub async fn tick<S, W>(source: &S, log: &ResourceLog, out: &mut W) -> io::Result<()>
where
    S: ProcessSource + ?Sized,
    W: Write,
{
    let snap = source.system().await;
    render_monitor_row(out, Local::now(), &snap)?;
    log.append(&snap);
    Ok(())
}

async fn sample_forever<S, W>(
    source: &S,
    log: &ResourceLog,
    interval: Duration,
    out: &mut W,
) -> io::Result<()>
where
    S: ProcessSource + ?Sized,
    W: Write,
{
    loop {
        tick(source, log, out).await?;
        sleep(interval).await;
    }
}

/// Monitor until Ctrl-C.
pub async fn run<S, W>(
    source: &S,
    log: &ResourceLog,
    interval: Duration,
    out: &mut W,
) -> io::Result<()>
where
    S: ProcessSource + ?Sized,
    W: Write,
{
    run_until(source, log, interval, out, async {
        // if the handler can't be installed, monitor until killed
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    })
    .await
}

pub(crate) async fn run_until<S, W, F>(
    source: &S,
    log: &ResourceLog,
    interval: Duration,
    out: &mut W,
    stop: F,
) -> io::Result<()>
where
    S: ProcessSource + ?Sized,
    W: Write,
    F: Future<Output = ()>,
{
    render_monitor_header(out)?;
    let res = tokio::select! {
        res = sample_forever(source, log, interval, &mut *out) => res,
        _ = stop => Ok(()),
    };
    writeln!(out, "\n\n[Monitoring stopped]")?;
    res
}
