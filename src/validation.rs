//! Input validation for simulation.
//!
//! Checks, in order:
//! 1. The process list is not empty
//! 2. No duplicate process IDs
//! 3. Every burst time is finite and > 0
//! 4. Every arrival time is finite and >= 0
//! 5. Every deadline is finite and >= 0
//!
//! [`validate_processes`] stops at the first problem; [`collect_errors`]
//! reports all of them.

use std::collections::HashSet;

use crate::error::InvalidInputError;
use crate::models::Process;

/// Validates processes before simulation, failing on the first problem.
pub fn validate_processes(processes: &[Process]) -> Result<(), InvalidInputError> {
    match collect_errors(processes).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Returns every validation problem found in `processes`.
///
/// An empty vector means the input is valid.
pub fn collect_errors(processes: &[Process]) -> Vec<InvalidInputError> {
    if processes.is_empty() {
        return vec![InvalidInputError::EmptyProcessList];
    }

    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(InvalidInputError::DuplicateId(p.id));
        }
    }

    for p in processes {
        if !(p.burst_time.is_finite() && p.burst_time > 0.0) {
            errors.push(InvalidInputError::NonPositiveBurst {
                id: p.id,
                name: p.name.clone(),
                burst_time: p.burst_time,
            });
        }
        if !(p.arrival_time.is_finite() && p.arrival_time >= 0.0) {
            errors.push(InvalidInputError::InvalidArrival {
                id: p.id,
                name: p.name.clone(),
                arrival_time: p.arrival_time,
            });
        }
        if !(p.deadline.is_finite() && p.deadline >= 0.0) {
            errors.push(InvalidInputError::InvalidDeadline {
                id: p.id,
                name: p.name.clone(),
                deadline: p.deadline,
            });
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, "P1", 8.0).with_deadline(40.0),
            Process::new(2, "P2", 4.0).with_arrival(1.0),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
        assert!(collect_errors(&sample_processes()).is_empty());
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            validate_processes(&[]),
            Err(InvalidInputError::EmptyProcessList)
        );
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![Process::new(1, "P1", 0.0)];
        let err = validate_processes(&processes).unwrap_err();
        assert!(matches!(
            err,
            InvalidInputError::NonPositiveBurst { id: 1, .. }
        ));
    }

    #[test]
    fn test_negative_and_nan_burst() {
        let processes = vec![
            Process::new(1, "P1", -2.0),
            Process::new(2, "P2", f64::NAN),
        ];
        let errors = collect_errors(&processes);
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| matches!(e, InvalidInputError::NonPositiveBurst { .. })));
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new(1, "A", 1.0), Process::new(1, "B", 1.0)];
        assert_eq!(
            validate_processes(&processes),
            Err(InvalidInputError::DuplicateId(1))
        );
    }

    #[test]
    fn test_invalid_arrival_and_deadline() {
        let processes = vec![
            Process::new(1, "P1", 1.0).with_arrival(-1.0),
            Process::new(2, "P2", 1.0).with_deadline(f64::INFINITY),
        ];
        let errors = collect_errors(&processes);
        assert!(errors
            .iter()
            .any(|e| matches!(e, InvalidInputError::InvalidArrival { id: 1, .. })));
        assert!(errors
            .iter()
            .any(|e| matches!(e, InvalidInputError::InvalidDeadline { id: 2, .. })));
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![
            Process::new(1, "P1", 0.0),
            Process::new(1, "P1b", 3.0).with_arrival(-5.0),
        ];
        let errors = collect_errors(&processes);
        assert!(errors.len() >= 3);
    }
}
