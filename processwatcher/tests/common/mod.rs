//! In-memory process source that records every call it receives.
#![allow(dead_code)]

use async_trait::async_trait;
use processwatcher_probe::{
    NetworkSnapshot, ProbeError, ProcessDetails, ProcessRecord, ProcessSource, Signal,
    SystemSnapshot,
};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Processes,
    Details(u32),
    Name(u32),
    Signal(u32, Signal),
    System,
    Network,
}

/// How the fake answers for a PID that isn't in `procs`.
#[derive(Debug, Clone, Copy)]
pub enum Refusal {
    NotFound,
    AccessDenied,
}

pub struct FakeSource {
    pub procs: Vec<Result<ProcessRecord, Refusal>>,
    pub details: HashMap<u32, ProcessDetails>,
    pub refusals: HashMap<u32, Refusal>,
    pub system: SystemSnapshot,
    pub network: NetworkSnapshot,
    calls: Mutex<Vec<Call>>,
}

pub fn rec(pid: u32, name: &str, cpu: f32, mem: f32) -> ProcessRecord {
    ProcessRecord {
        pid,
        name: name.to_string(),
        cpu_percent: cpu,
        memory_percent: mem,
        status: "running".to_string(),
    }
}

impl FakeSource {
    pub fn new() -> Self {
        Self {
            procs: Vec::new(),
            details: HashMap::new(),
            refusals: HashMap::new(),
            system: SystemSnapshot::default(),
            network: NetworkSnapshot::default(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_procs(procs: Vec<ProcessRecord>) -> Self {
        let mut s = Self::new();
        s.procs = procs.into_iter().map(Ok).collect();
        s
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn signal_calls(&self) -> Vec<(u32, Signal)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Signal(p, s) => Some((p, s)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, c: Call) {
        self.calls.lock().unwrap().push(c);
    }

    fn refusal(&self, pid: u32) -> ProbeError {
        match self.refusals.get(&pid) {
            Some(Refusal::AccessDenied) => ProbeError::AccessDenied(pid),
            _ => ProbeError::NotFound(pid),
        }
    }
}

#[async_trait]
impl ProcessSource for FakeSource {
    async fn processes(&self) -> Vec<Result<ProcessRecord, ProbeError>> {
        self.record(Call::Processes);
        self.procs
            .iter()
            .enumerate()
            .map(|(i, r)| match r {
                Ok(p) => Ok(p.clone()),
                Err(Refusal::NotFound) => Err(ProbeError::NotFound(i as u32)),
                Err(Refusal::AccessDenied) => Err(ProbeError::AccessDenied(i as u32)),
            })
            .collect()
    }

    async fn process_details(&self, pid: u32) -> Result<ProcessDetails, ProbeError> {
        self.record(Call::Details(pid));
        self.details
            .get(&pid)
            .cloned()
            .ok_or_else(|| self.refusal(pid))
    }

    async fn process_name(&self, pid: u32) -> Option<String> {
        self.record(Call::Name(pid));
        self.details.get(&pid).map(|d| d.name.clone())
    }

    async fn send_signal(&self, pid: u32, signal: Signal) -> Result<(), ProbeError> {
        self.record(Call::Signal(pid, signal));
        if self.details.contains_key(&pid) {
            Ok(())
        } else {
            Err(self.refusal(pid))
        }
    }

    async fn system(&self) -> SystemSnapshot {
        self.record(Call::System);
        self.system
    }

    async fn network(&self) -> NetworkSnapshot {
        self.record(Call::Network);
        self.network
    }
}
