//! Editable process list.
//!
//! Backs an input table: rows are added with defaults, edited field by field
//! from raw text, and removed by id. Rows may be invalid while being edited
//! (e.g. zero burst time); validation happens when the list is simulated.

use serde::{Deserialize, Serialize};

use super::Process;

/// An editable field of a [`Process`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessField {
    Name,
    ArrivalTime,
    BurstTime,
    Deadline,
}

/// An ordered, editable list of processes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessTable {
    processes: Vec<Process>,
}

impl ProcessTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding `processes`.
    pub fn from_processes(processes: Vec<Process>) -> Self {
        Self { processes }
    }

    /// Current rows.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Consumes the table, returning its rows.
    pub fn into_processes(self) -> Vec<Process> {
        self.processes
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Next free id: largest existing id + 1, or 1 for an empty table.
    pub fn next_id(&self) -> u32 {
        self.processes
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Appends a row named `P{id}` with zeroed times. Returns its id.
    pub fn add_default(&mut self) -> u32 {
        let id = self.next_id();
        self.processes.push(Process::new(id, format!("P{id}"), 0.0));
        id
    }

    /// Removes the row with `id`. Returns the removed process, if any.
    pub fn remove(&mut self, id: u32) -> Option<Process> {
        let pos = self.processes.iter().position(|p| p.id == id)?;
        Some(self.processes.remove(pos))
    }

    /// Sets one field of row `id` from raw text.
    ///
    /// Names are stored verbatim. Numeric fields that fail to parse become 0.
    /// Returns `false` if no row has `id`.
    pub fn update(&mut self, id: u32, field: ProcessField, raw: &str) -> bool {
        let Some(process) = self.processes.iter_mut().find(|p| p.id == id) else {
            return false;
        };

        match field {
            ProcessField::Name => process.name = raw.to_string(),
            ProcessField::ArrivalTime => process.arrival_time = parse_or_zero(raw),
            ProcessField::BurstTime => process.burst_time = parse_or_zero(raw),
            ProcessField::Deadline => process.deadline = parse_or_zero(raw),
        }
        true
    }
}

/// Parses the leading real number of `raw` (`"10ms"` reads as 10), falling
/// back to 0 when there is none or it is not finite.
pub(crate) fn parse_or_zero(raw: &str) -> f64 {
    let text = raw.trim_start();
    text[..numeric_prefix_len(text)]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Byte length of the longest `[+-]digits[.digits][e[+-]digits]` prefix.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_end = int_end;
    let mut has_digits = int_end > end;
    if bytes.get(int_end) == Some(&b'.') {
        let frac_end = digits_from(int_end + 1);
        if has_digits || frac_end > int_end + 1 {
            mantissa_end = frac_end;
            has_digits = true;
        }
    }
    if !has_digits {
        return 0;
    }

    end = mantissa_end;
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    end
}
