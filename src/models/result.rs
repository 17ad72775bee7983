//! Simulation result model.

use serde::{Deserialize, Serialize};

use super::{ExecutionRecord, Timeline};

/// Output of one simulation run.
///
/// Owned by the caller; every run builds a fresh result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// One record per input process, in input order.
    pub execution_records: Vec<ExecutionRecord>,
    /// Segments in execution order.
    pub timeline: Timeline,
    /// Clock value when the simulation started.
    #[serde(default)]
    pub start_time: f64,
    /// Clock value when the last process completed.
    pub finish_time: f64,
}

impl SimulationResult {
    /// Length of the simulated horizon (`finish_time - start_time`).
    pub fn span(&self) -> f64 {
        self.finish_time - self.start_time
    }

    /// Number of simulated processes.
    pub fn process_count(&self) -> usize {
        self.execution_records.len()
    }

    /// Finds the record for a process id.
    pub fn record(&self, process_id: u32) -> Option<&ExecutionRecord> {
        self.execution_records
            .iter()
            .find(|r| r.process.id == process_id)
    }

    /// Finds the record for a process name (first match).
    pub fn record_by_name(&self, name: &str) -> Option<&ExecutionRecord> {
        self.execution_records
            .iter()
            .find(|r| r.process.name == name)
    }

    /// Process names in the order they ran.
    pub fn execution_order(&self) -> Vec<&str> {
        self.timeline
            .iter()
            .map(|s| s.process_name.as_str())
            .collect()
    }

    /// Records whose deadline annotation was missed.
    pub fn missed_deadlines(&self) -> Vec<&ExecutionRecord> {
        self.execution_records
            .iter()
            .filter(|r| r.deadline_met() == Some(false))
            .collect()
    }
}
