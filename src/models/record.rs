//! Per-process execution statistics.

use serde::{Deserialize, Serialize};

use super::Process;

/// Execution statistics for one process, produced by the simulator.
///
/// Built once, when the process is dispatched. Derived fields always satisfy:
/// - `turnaround_time = completion_time - arrival_time`
/// - `waiting_time = turnaround_time - burst_time`
/// - `response_time = start_time - arrival_time`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    /// The input process (an owned copy, not a reference into the input).
    #[serde(flatten)]
    pub process: Process,
    /// Time the process was dispatched.
    pub start_time: f64,
    /// Time the process finished.
    pub completion_time: f64,
    /// Completion minus arrival.
    pub turnaround_time: f64,
    /// Turnaround minus burst.
    pub waiting_time: f64,
    /// Start minus arrival.
    pub response_time: f64,
}

impl ExecutionRecord {
    /// Records a non-preemptive run of `process` starting at `start_time`.
    pub fn run(process: &Process, start_time: f64) -> Self {
        let completion_time = start_time + process.burst_time;
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            process: process.clone(),
            start_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
            response_time: start_time - process.arrival_time,
        }
    }

    /// Whether the process finished by its deadline. `None` without a deadline.
    ///
    /// Reporting only; dispatch never looks at deadlines.
    pub fn deadline_met(&self) -> Option<bool> {
        self.process
            .deadline()
            .map(|deadline| self.completion_time <= deadline)
    }

    /// How far past its deadline the process finished (0 if on time or no deadline).
    pub fn lateness(&self) -> f64 {
        self.process
            .deadline()
            .map(|deadline| (self.completion_time - deadline).max(0.0))
            .unwrap_or(0.0)
    }
}
