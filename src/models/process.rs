//! Process (input) model.
//!
//! A process is a single CPU job: it becomes eligible at its arrival time
//! and needs `burst_time` units of uninterrupted CPU.

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// # Time Representation
/// Times are abstract, non-negative real units relative to t=0.
///
/// # Deadline
/// `deadline == 0.0` means "no deadline". Deadlines are annotations only;
/// they never influence dispatch order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Earliest time the process may start.
    pub arrival_time: f64,
    /// Total CPU time required. Must be > 0.
    pub burst_time: f64,
    /// Deadline annotation (0 = none).
    pub deadline: f64,
}

impl Process {
    /// Creates a process arriving at t=0 with no deadline.
    pub fn new(id: u32, name: impl Into<String>, burst_time: f64) -> Self {
        Self {
            id,
            name: name.into(),
            arrival_time: 0.0,
            burst_time,
            deadline: 0.0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: f64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the deadline annotation.
    pub fn with_deadline(mut self, deadline: f64) -> Self {
        self.deadline = deadline;
        self
    }

    /// Deadline, or `None` when unset (zero).
    pub fn deadline(&self) -> Option<f64> {
        (self.deadline > 0.0).then_some(self.deadline)
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn is_arrived(&self, time: f64) -> bool {
        self.arrival_time <= time
    }
}
