//! Error types.
//!
//! Simulation and aggregation either succeed completely or fail before any
//! state is built. There is no partial result and no retry: a rejected call
//! is fixed by correcting its input.

use thiserror::Error;

/// Rejected simulation or aggregation input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    /// No processes were supplied.
    #[error("process list is empty")]
    EmptyProcessList,
    /// A process needs a strictly positive (and finite) burst time.
    #[error("process '{name}' (id {id}) has non-positive burst time {burst_time}")]
    NonPositiveBurst {
        id: u32,
        name: String,
        burst_time: f64,
    },
    /// Arrival time is negative or not a finite number.
    #[error("process '{name}' (id {id}) has invalid arrival time {arrival_time}")]
    InvalidArrival {
        id: u32,
        name: String,
        arrival_time: f64,
    },
    /// Deadline is negative or not a finite number.
    #[error("process '{name}' (id {id}) has invalid deadline {deadline}")]
    InvalidDeadline { id: u32, name: String, deadline: f64 },
    /// Two processes share an id.
    #[error("duplicate process id {0}")]
    DuplicateId(u32),
    /// Metrics were requested for a result without execution records.
    #[error("simulation result has no execution records")]
    EmptyResult,
    /// The result's finish time does not lie after its start time.
    #[error("simulation result spans a non-positive horizon {span}")]
    NonPositiveHorizon { span: f64 },
}

/// Failure to import a delimited process list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// The input contains no non-blank lines.
    #[error("input is empty")]
    Empty,
    /// Every data row was discarded (empty name or non-positive burst time).
    #[error("no valid processes found in input")]
    NoValidProcesses,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_descriptive() {
        let err = InvalidInputError::NonPositiveBurst {
            id: 3,
            name: "P3".into(),
            burst_time: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "process 'P3' (id 3) has non-positive burst time 0"
        );
        assert_eq!(
            InvalidInputError::DuplicateId(7).to_string(),
            "duplicate process id 7"
        );
        assert_eq!(
            ImportError::NoValidProcesses.to_string(),
            "no valid processes found in input"
        );
    }
}
