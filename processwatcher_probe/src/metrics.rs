//! Metrics and process collection using sysinfo.

use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::path::Path;
use sysinfo::{
    Disks, Networks, Pid, Process, ProcessRefreshKind, ProcessStatus, ProcessesToUpdate,
    System, UpdateKind, Users,
};
use tokio::time::sleep;
use tracing::{debug, trace};

use crate::error::{ProbeError, Result};
use crate::signal::deliver;
use crate::source::{ProcessSource, Signal};
use crate::state::SysinfoSource;
use crate::types::{
    finite_or_zero, percent_of, NetworkSnapshot, ProcessDetails, ProcessRecord, SystemSnapshot,
};

// Per-process cpu_usage is relative to one core; divide by the core count so a
// fully saturated multi-core process reads 100% rather than N*100%.
fn normalized_cpu(p: &Process, cores: f32) -> f32 {
    (finite_or_zero(p.cpu_usage()) / cores).clamp(0.0, 100.0)
}

fn status_label(status: ProcessStatus) -> String {
    status.to_string().to_lowercase()
}

fn core_count(sys: &System) -> f32 {
    sys.cpus().len().max(1) as f32
}

fn to_record(p: &Process, cores: f32, mem_total: u64) -> Result<ProcessRecord> {
    let pid = p.pid().as_u32();
    // exited between the two refreshes but not yet reaped from the table
    if matches!(p.status(), ProcessStatus::Dead) {
        return Err(ProbeError::NotFound(pid));
    }
    Ok(ProcessRecord {
        pid,
        name: p.name().to_string_lossy().into_owned(),
        cpu_percent: normalized_cpu(p, cores),
        memory_percent: percent_of(p.memory(), mem_total),
        status: status_label(p.status()),
    })
}

fn start_time(secs: u64) -> Option<DateTime<Local>> {
    if secs == 0 {
        return None;
    }
    DateTime::from_timestamp(i64::try_from(secs).ok()?, 0).map(|t| t.with_timezone(&Local))
}

fn command_line(p: &Process) -> Option<String> {
    let parts: Vec<String> = p
        .cmd()
        .iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

fn owner_name(p: &Process) -> Option<String> {
    let uid = p.user_id()?;
    let users = Users::new_with_refreshed_list();
    users.get_user_by_id(uid).map(|u| u.name().to_string())
}

fn root_disk(disks: &Disks) -> (u64, u64) {
    let list = disks.list();
    let disk = list
        .iter()
        .find(|d| d.mount_point() == Path::new("/"))
        .or_else(|| list.first());
    match disk {
        Some(d) => {
            let total = d.total_space();
            (total.saturating_sub(d.available_space()), total)
        }
        None => (0, 0),
    }
}

#[async_trait]
impl ProcessSource for SysinfoSource {
    async fn processes(&self) -> Vec<Result<ProcessRecord>> {
        let kind = ProcessRefreshKind::nothing().with_cpu().with_memory();
        {
            let mut sys = self.sys.lock().await;
            sys.refresh_processes_specifics(ProcessesToUpdate::All, true, kind);
        }
        // let cpu deltas accumulate
        sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL).await;

        let mut sys = self.sys.lock().await;
        sys.refresh_processes_specifics(ProcessesToUpdate::All, true, kind);
        sys.refresh_cpu_usage();
        sys.refresh_memory();
        let cores = core_count(&sys);
        let mem_total = sys.total_memory();

        let mut procs: Vec<&Process> = sys.processes().values().collect();
        procs.sort_by_key(|p| p.pid());
        debug!(count = procs.len(), "enumerated processes");
        procs
            .into_iter()
            .map(|p| to_record(p, cores, mem_total))
            .collect()
    }

    async fn process_details(&self, pid: u32) -> Result<ProcessDetails> {
        let spid = Pid::from_u32(pid);
        let baseline = ProcessRefreshKind::nothing().with_cpu();
        {
            let mut sys = self.sys.lock().await;
            if sys.refresh_processes_specifics(ProcessesToUpdate::Some(&[spid]), true, baseline)
                == 0
            {
                return Err(ProbeError::NotFound(pid));
            }
        }
        sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL).await;

        let full = ProcessRefreshKind::nothing()
            .with_cpu()
            .with_memory()
            .with_exe(UpdateKind::OnlyIfNotSet)
            .with_cwd(UpdateKind::Always)
            .with_cmd(UpdateKind::OnlyIfNotSet)
            .with_user(UpdateKind::OnlyIfNotSet);
        let mut sys = self.sys.lock().await;
        sys.refresh_processes_specifics(ProcessesToUpdate::Some(&[spid]), true, full);
        sys.refresh_cpu_usage();
        sys.refresh_memory();
        let cores = core_count(&sys);
        let mem_total = sys.total_memory();

        let p = sys.process(spid).ok_or(ProbeError::NotFound(pid))?;
        if matches!(p.status(), ProcessStatus::Dead) {
            return Err(ProbeError::NotFound(pid));
        }
        Ok(ProcessDetails {
            pid,
            name: p.name().to_string_lossy().into_owned(),
            status: status_label(p.status()),
            cpu_percent: normalized_cpu(p, cores),
            memory_percent: percent_of(p.memory(), mem_total),
            memory_bytes: p.memory(),
            user: owner_name(p),
            started: start_time(p.start_time()),
            exe: p.exe().map(Path::to_path_buf),
            cwd: p.cwd().map(Path::to_path_buf),
            command: command_line(p),
        })
    }

    async fn process_name(&self, pid: u32) -> Option<String> {
        let spid = Pid::from_u32(pid);
        let mut sys = self.sys.lock().await;
        sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[spid]),
            true,
            ProcessRefreshKind::nothing(),
        );
        sys.process(spid)
            .map(|p| p.name().to_string_lossy().into_owned())
    }

    async fn send_signal(&self, pid: u32, signal: Signal) -> Result<()> {
        trace!(pid, ?signal, "delivering signal");
        #[cfg(unix)]
        {
            deliver(pid, signal)
        }
        #[cfg(not(unix))]
        {
            let mut sys = self.sys.lock().await;
            deliver(&mut sys, pid, signal)
        }
    }

    async fn system(&self) -> SystemSnapshot {
        {
            let mut sys = self.sys.lock().await;
            sys.refresh_cpu_usage();
        }
        sleep(self.cpu_sample).await;

        let mut sys = self.sys.lock().await;
        sys.refresh_cpu_usage();
        sys.refresh_memory();
        let cpu_percent = finite_or_zero(sys.global_cpu_usage()).clamp(0.0, 100.0);
        let memory_total_bytes = sys.total_memory();
        let memory_used_bytes = memory_total_bytes.saturating_sub(sys.available_memory());
        drop(sys);

        let disks = Disks::new_with_refreshed_list();
        let (disk_used_bytes, disk_total_bytes) = root_disk(&disks);

        SystemSnapshot {
            cpu_percent,
            memory_percent: percent_of(memory_used_bytes, memory_total_bytes),
            memory_used_bytes,
            memory_total_bytes,
            disk_percent: percent_of(disk_used_bytes, disk_total_bytes),
            disk_used_bytes,
            disk_total_bytes,
        }
    }

    async fn network(&self) -> NetworkSnapshot {
        let nets = Networks::new_with_refreshed_list();
        nets.iter()
            .fold(NetworkSnapshot::default(), |acc, (_name, data)| NetworkSnapshot {
                bytes_sent: acc.bytes_sent.saturating_add(data.total_transmitted()),
                bytes_received: acc.bytes_received.saturating_add(data.total_received()),
                packets_sent: acc
                    .packets_sent
                    .saturating_add(data.total_packets_transmitted()),
                packets_received: acc
                    .packets_received
                    .saturating_add(data.total_packets_received()),
            })
    }
}
