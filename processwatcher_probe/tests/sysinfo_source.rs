//! Probes against the real host. These only assert invariants that hold on any
//! machine, never specific values.

use processwatcher_probe::{ProbeError, ProcessSource, SysinfoSource};
use std::time::Duration;

fn fast_source() -> SysinfoSource {
    SysinfoSource::with_cpu_sample(Duration::from_millis(250))
}

#[tokio::test]
async fn system_snapshot_respects_bounds() {
    let snap = fast_source().system().await;
    assert!((0.0..=100.0).contains(&snap.cpu_percent), "{snap:?}");
    assert!((0.0..=100.0).contains(&snap.memory_percent), "{snap:?}");
    assert!((0.0..=100.0).contains(&snap.disk_percent), "{snap:?}");
    assert!(snap.memory_used_bytes <= snap.memory_total_bytes);
    assert!(snap.disk_used_bytes <= snap.disk_total_bytes);
    assert!(snap.memory_total_bytes > 0);
}

#[tokio::test]
async fn enumeration_includes_this_process() {
    let me = std::process::id();
    let procs = fast_source().processes().await;
    assert!(!procs.is_empty());
    let found = procs
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .any(|p| p.pid == me);
    assert!(found, "own pid {me} missing from enumeration");
    for p in procs.iter().filter_map(|r| r.as_ref().ok()) {
        assert!((0.0..=100.0).contains(&p.cpu_percent), "{p:?}");
        assert!((0.0..=100.0).contains(&p.memory_percent), "{p:?}");
    }
}

#[tokio::test]
async fn enumeration_is_ordered_by_pid() {
    let procs = fast_source().processes().await;
    let pids: Vec<u32> = procs
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .map(|p| p.pid)
        .collect();
    assert!(pids.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn details_for_implausible_pid_is_not_found() {
    let err = fast_source()
        .process_details(999_999_999)
        .await
        .expect_err("pid should not exist");
    assert!(matches!(err, ProbeError::NotFound(999_999_999)), "{err:?}");
}

#[tokio::test]
async fn details_for_self_has_name_and_memory() {
    let me = std::process::id();
    let d = fast_source()
        .process_details(me)
        .await
        .expect("own process is visible");
    assert_eq!(d.pid, me);
    assert!(!d.name.is_empty());
    assert!(d.memory_bytes > 0);
    assert!(d.started.is_some());
}

#[tokio::test]
async fn name_lookup_for_missing_pid_is_none() {
    assert!(fast_source().process_name(999_999_999).await.is_none());
}

#[cfg(unix)]
#[tokio::test]
async fn signalling_missing_pid_is_not_found() {
    use processwatcher_probe::Signal;
    let err = fast_source()
        .send_signal(999_999_999, Signal::Terminate)
        .await
        .expect_err("pid should not exist");
    assert!(matches!(err, ProbeError::NotFound(_)), "{err:?}");
}

#[cfg(unix)]
async fn signal_exit_code(signal: processwatcher_probe::Signal) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    use std::process::Command;

    let mut child = Command::new("sleep").arg("30").spawn().expect("spawn sleep");
    let sent = fast_source().send_signal(child.id(), signal).await;
    if sent.is_err() {
        let _ = child.kill();
    }
    let status = child.wait().expect("wait for sleep");
    sent.expect("signal delivered");
    status.signal()
}

#[cfg(unix)]
#[tokio::test]
async fn terminate_delivers_sigterm() {
    use processwatcher_probe::Signal;
    assert_eq!(signal_exit_code(Signal::Terminate).await, Some(15));
}

#[cfg(unix)]
#[tokio::test]
async fn kill_delivers_sigkill() {
    use processwatcher_probe::Signal;
    assert_eq!(signal_exit_code(Signal::Kill).await, Some(9));
}

#[tokio::test]
async fn network_counters_are_monotonic() {
    let src = fast_source();
    let a = src.network().await;
    let b = src.network().await;
    assert!(b.bytes_sent >= a.bytes_sent);
    assert!(b.bytes_received >= a.bytes_received);
    assert!(b.packets_sent >= a.packets_sent);
    assert!(b.packets_received >= a.packets_received);
}
