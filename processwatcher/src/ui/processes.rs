//! Process tables for `list` and `find`.

use std::io::{self, Write};

use processwatcher_probe::types::finite_or_zero;
use processwatcher_probe::ProcessRecord;

use crate::lister::SortKey;
use crate::ui::util::truncate_chars;

// Names longer than this are cut so the columns stay aligned.
const NAME_MAX: usize = 28;

fn write_rows<W: Write>(out: &mut W, procs: &[ProcessRecord]) -> io::Result<()> {
    writeln!(
        out,
        "\n{:<8} {:<30} {:<8} {:<8} {:<10}",
        "PID", "NAME", "CPU%", "MEM%", "STATUS"
    )?;
    writeln!(out, "{}", "-".repeat(70))?;
    for p in procs {
        let name = if p.name.is_empty() {
            "N/A"
        } else {
            truncate_chars(&p.name, NAME_MAX)
        };
        writeln!(
            out,
            "{:<8} {:<30} {:<8.1} {:<8.2} {:<10}",
            p.pid,
            name,
            finite_or_zero(p.cpu_percent),
            finite_or_zero(p.memory_percent),
            p.status
        )?;
    }
    writeln!(out)
}

pub fn render_process_list<W: Write>(
    out: &mut W,
    procs: &[ProcessRecord],
    sort_by: SortKey,
) -> io::Result<()> {
    if procs.is_empty() {
        return writeln!(out, "No processes found.");
    }
    writeln!(
        out,
        "\n[Top {} processes by {}]",
        procs.len(),
        sort_by.to_string().to_uppercase()
    )?;
    write_rows(out, procs)
}

pub fn render_matches<W: Write>(
    out: &mut W,
    term: &str,
    procs: &[ProcessRecord],
) -> io::Result<()> {
    if procs.is_empty() {
        return writeln!(out, "No processes found matching '{term}'");
    }
    writeln!(
        out,
        "\n[Found {} process(es) matching '{term}']",
        procs.len()
    )?;
    write_rows(out, procs)
}
