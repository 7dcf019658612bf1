//! Single-process reports (details, kill outcome) and the history table.

use std::io::{self, Write};
use std::path::Path;

use processwatcher_probe::{Lookup, ProcessDetails, Signal};

use crate::controller::KillOutcome;
use crate::history::History;
use crate::inspector::display_command;
use crate::ui::util::{mib, rule, truncate_chars};

const NA: &str = "N/A";

fn or_na(v: Option<String>) -> String {
    v.unwrap_or_else(|| NA.to_string())
}

fn path_or_na(p: Option<&Path>) -> String {
    or_na(p.map(|p| p.display().to_string()))
}

pub fn render_details<W: Write>(out: &mut W, lookup: &Lookup<ProcessDetails>) -> io::Result<()> {
    let d = match lookup {
        Lookup::Found(d) => d,
        Lookup::NotFound(pid) => return writeln!(out, "[X] Process {pid} not found!"),
        Lookup::AccessDenied(pid) => return writeln!(out, "[X] Access denied to process {pid}!"),
    };
    writeln!(out, "\n{}", rule(60))?;
    writeln!(out, "  Process Details - PID {}", d.pid)?;
    writeln!(out, "{}\n", rule(60))?;
    writeln!(out, "Name:         {}", d.name)?;
    writeln!(out, "PID:          {}", d.pid)?;
    writeln!(out, "Status:       {}", d.status)?;
    writeln!(out, "CPU:          {:.1}%", d.cpu_percent)?;
    writeln!(out, "Memory:       {:.2}%", d.memory_percent)?;
    writeln!(out, "Memory (MB):  {:.1} MB", mib(d.memory_bytes))?;
    writeln!(out, "User:         {}", or_na(d.user.clone()))?;
    writeln!(
        out,
        "Started:      {}",
        or_na(d.started.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string()))
    )?;
    writeln!(out, "Exe:          {}", path_or_na(d.exe.as_deref()))?;
    writeln!(out, "CWD:          {}", path_or_na(d.cwd.as_deref()))?;
    writeln!(
        out,
        "Command:      {}",
        or_na(d.command.as_deref().map(display_command))
    )?;
    writeln!(out, "\n{}\n", rule(60))
}

pub fn render_kill<W: Write>(out: &mut W, outcome: &KillOutcome) -> io::Result<()> {
    match outcome {
        KillOutcome::Signalled { pid, name, signal } => {
            let name = name.as_deref().unwrap_or("unknown");
            match signal {
                Signal::Kill => writeln!(out, "[OK] Force killed process {pid} ({name})"),
                Signal::Terminate => {
                    writeln!(out, "[OK] Terminated process {pid} ({name})")?;
                    writeln!(out, "     (Use --force to force kill if needed)")
                }
            }
        }
        KillOutcome::NotFound(pid) => writeln!(out, "[X] Process {pid} not found!"),
        KillOutcome::AccessDenied(pid) => {
            writeln!(out, "[X] Access denied! Cannot kill process {pid}")?;
            writeln!(out, "     (Try running with administrator/sudo)")
        }
    }
}

pub fn render_history<W: Write>(out: &mut W, history: &History) -> io::Result<()> {
    let (lines, records) = match history {
        History::Missing => {
            writeln!(out, "No resource history found.")?;
            return writeln!(out, "Run 'processwatcher monitor' to start logging.");
        }
        History::Empty => return writeln!(out, "No history data available."),
        History::Records { lines, rows } => (*lines, rows),
    };
    writeln!(out, "\n[Last {lines} resource measurements]")?;
    writeln!(
        out,
        "\n{:<25} {:<8} {:<8} {:<8}",
        "Timestamp", "CPU%", "MEM%", "DISK%"
    )?;
    writeln!(out, "{}", "-".repeat(55))?;
    for r in records {
        // drop sub-second precision for display
        writeln!(
            out,
            "{:<25} {:<8.1} {:<8.1} {:<8.1}",
            truncate_chars(&r.timestamp, 19),
            r.cpu_percent,
            r.memory_percent,
            r.disk_percent
        )?;
    }
    writeln!(out)
}
