//! Delimited text import and export of process lists.
//!
//! # Format
//!
//! Comma-separated, one process per line, columns in this order:
//!
//! | Column | Field | Missing/invalid |
//! |--------|-------|-----------------|
//! | 0 | name | `P{row}` |
//! | 1 | burst time | 0 (row discarded) |
//! | 2 | arrival time | 0 |
//! | 3 | deadline | 0 (none) |
//!
//! A first line mentioning `process`, `arrival`, `burst`, `priority` or
//! `deadline` (any case) is a header and is skipped. Exports always write the
//! header `Process,Burst Time,Arrival Time,Priority`; the last column carries
//! the deadline.
//!
//! Numeric cells are read by their leading number, so `10ms` imports as 10
//! and `x10` as 0. Only delimited text is handled; spreadsheet workbooks
//! (`.xlsx`/`.xls`) must be converted to comma-separated text first.

use tracing::warn;

use crate::error::ImportError;
use crate::models::{parse_or_zero, Process};

/// Header row written by [`write_processes`].
pub const EXPORT_HEADER: &str = "Process,Burst Time,Arrival Time,Priority";

const HEADER_KEYWORDS: [&str; 5] = ["process", "arrival", "burst", "priority", "deadline"];

/// Parses a comma-separated process list.
///
/// Ids are 1-based row positions (after the header). Rows with a
/// non-positive burst time are dropped with a warning.
///
/// # Example
/// ```
/// use ljf_sched::transfer::parse_processes;
///
/// let processes = parse_processes("Process,Burst,Arrival,Deadline\nP1,8,0,40\nP2,4,1\n").unwrap();
/// assert_eq!(processes.len(), 2);
/// assert_eq!(processes[1].arrival_time, 1.0);
/// assert_eq!(processes[1].deadline, 0.0);
/// ```
pub fn parse_processes(text: &str) -> Result<Vec<Process>, ImportError> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let Some(first) = lines.first() else {
        return Err(ImportError::Empty);
    };

    let data = if is_header(first) {
        &lines[1..]
    } else {
        &lines[..]
    };

    let processes: Vec<Process> = data
        .iter()
        .enumerate()
        .filter_map(|(row, line)| {
            let process = parse_row(row as u32 + 1, line);
            if process.burst_time > 0.0 && !process.name.is_empty() {
                Some(process)
            } else {
                warn!(row = row + 1, line = %line, "discarding row without positive burst time");
                None
            }
        })
        .collect();

    if processes.is_empty() {
        return Err(ImportError::NoValidProcesses);
    }
    Ok(processes)
}

/// Serializes processes as comma-separated text with [`EXPORT_HEADER`].
pub fn write_processes(processes: &[Process]) -> String {
    let mut out = String::from(EXPORT_HEADER);
    for p in processes {
        out.push('\n');
        out.push_str(&format!(
            "{},{},{},{}",
            p.name, p.burst_time, p.arrival_time, p.deadline
        ));
    }
    out
}

fn is_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    HEADER_KEYWORDS.iter().any(|k| lower.contains(k))
}

fn parse_row(id: u32, line: &str) -> Process {
    let cols: Vec<&str> = line.split(',').map(str::trim).collect();
    let field = |i: usize| cols.get(i).copied().unwrap_or("");

    let name = match field(0) {
        "" => format!("P{id}"),
        name => name.to_string(),
    };

    Process::new(id, name, parse_or_zero(field(1)))
        .with_arrival(parse_or_zero(field(2)))
        .with_deadline(parse_or_zero(field(3)))
}
