//! System and network summaries, plus the monitor's rolling table.

use chrono::{DateTime, Local};
use std::io::{self, Write};

use processwatcher_probe::{NetworkSnapshot, SystemSnapshot};

use crate::ui::util::{gib, group_thousands, rule};

pub fn render_stats<W: Write>(out: &mut W, s: &SystemSnapshot) -> io::Result<()> {
    writeln!(out, "\n{}", rule(50))?;
    writeln!(out, "  SYSTEM RESOURCE MONITOR")?;
    writeln!(out, "{}", rule(50))?;
    writeln!(out, "\nCPU Usage:    {:.1}%", s.cpu_percent)?;
    writeln!(
        out,
        "Memory Usage: {:.1}% ({:.1}GB / {:.1}GB)",
        s.memory_percent,
        gib(s.memory_used_bytes),
        gib(s.memory_total_bytes)
    )?;
    writeln!(
        out,
        "Disk Usage:   {:.1}% ({:.1}GB / {:.1}GB)",
        s.disk_percent,
        gib(s.disk_used_bytes),
        gib(s.disk_total_bytes)
    )?;
    writeln!(out, "{}\n", rule(50))
}

pub fn render_network<W: Write>(out: &mut W, n: &NetworkSnapshot) -> io::Result<()> {
    writeln!(out, "\n{}", rule(50))?;
    writeln!(out, "  NETWORK STATISTICS")?;
    writeln!(out, "{}", rule(50))?;
    writeln!(out, "\nBytes Sent:     {:.2} GB", gib(n.bytes_sent))?;
    writeln!(out, "Bytes Received: {:.2} GB", gib(n.bytes_received))?;
    writeln!(out, "Packets Sent:   {}", group_thousands(n.packets_sent))?;
    writeln!(out, "Packets Recv:   {}", group_thousands(n.packets_received))?;
    writeln!(out, "{}\n", rule(50))
}

pub fn render_monitor_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n[Real-time monitoring - Press Ctrl+C to stop]\n")?;
    writeln!(
        out,
        "{:<20} {:<8} {:<8} {:<8}",
        "Time", "CPU%", "MEM%", "DISK%"
    )?;
    writeln!(out, "{}", "-".repeat(50))
}

pub fn render_monitor_row<W: Write>(
    out: &mut W,
    at: DateTime<Local>,
    s: &SystemSnapshot,
) -> io::Result<()> {
    writeln!(
        out,
        "{:<20} {:<8.1} {:<8.1} {:<8.1}",
        at.format("%Y-%m-%d %H:%M:%S").to_string(),
        s.cpu_percent,
        s.memory_percent,
        s.disk_percent
    )?;
    out.flush()
}
