//! Non-preemptive Longest-Job-First simulator.
//!
//! # Algorithm
//!
//! 1. Start the clock at `start_time` (0 by default); no process is done.
//! 2. While some process is not done:
//!    a. Collect the arrived, unfinished processes.
//!    b. If none, jump the clock to the earliest pending arrival (idle gap,
//!       no timeline segment) and retry.
//!    c. Otherwise dispatch the rule engine's pick (LJF: largest burst,
//!       then earliest arrival, then input order) and run it to completion.
//! 3. The finish time is the clock after the last completion.
//!
//! # Complexity
//! O(n² · r) where n=processes, r=rules; availability is rescanned each step.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use tracing::{debug, info};

use crate::dispatching::RuleEngine;
use crate::error::InvalidInputError;
use crate::models::{ExecutionRecord, Process, SimulationResult, Timeline, TimelineSegment};
use crate::validation::validate_processes;

/// Simulates `processes` under non-preemptive Longest-Job-First.
///
/// Shorthand for `Simulator::new().simulate(processes)`.
///
/// # Example
///
/// ```
/// use ljf_sched::models::Process;
/// use ljf_sched::scheduler::simulate;
///
/// let processes = vec![
///     Process::new(1, "P1", 8.0),
///     Process::new(2, "P2", 4.0).with_arrival(1.0),
///     Process::new(3, "P3", 9.0).with_arrival(2.0),
///     Process::new(4, "P4", 5.0).with_arrival(3.0),
/// ];
/// let result = simulate(&processes).unwrap();
/// assert_eq!(result.execution_order(), vec!["P1", "P3", "P4", "P2"]);
/// assert_eq!(result.finish_time, 26.0);
/// ```
pub fn simulate(processes: &[Process]) -> Result<SimulationResult, InvalidInputError> {
    Simulator::new().simulate(processes)
}

/// Single-CPU, non-preemptive scheduling simulator.
///
/// Holds only configuration; every [`simulate`](Self::simulate) call keeps
/// its state on the stack, so one simulator can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Simulator {
    rule_engine: RuleEngine,
    start_time: f64,
}

impl Simulator {
    /// Creates a Longest-Job-First simulator starting at t=0.
    pub fn new() -> Self {
        Self {
            rule_engine: RuleEngine::ljf(),
            start_time: 0.0,
        }
    }

    /// Same as [`new`](Self::new).
    pub fn ljf() -> Self {
        Self::new()
    }

    /// Replaces the dispatching policy. The run stays non-preemptive.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// Sets the initial clock value.
    pub fn with_start_time(mut self, start_time: f64) -> Self {
        self.start_time = start_time;
        self
    }

    /// The configured dispatching policy.
    pub fn rule_engine(&self) -> &RuleEngine {
        &self.rule_engine
    }

    /// Runs the simulation.
    ///
    /// Fails before any work is done if the input is empty or any process is
    /// invalid (non-positive burst, negative arrival, duplicate id, ...).
    pub fn simulate(&self, processes: &[Process]) -> Result<SimulationResult, InvalidInputError> {
        validate_processes(processes)?;

        let n = processes.len();
        let mut completed = vec![false; n];
        let mut records: Vec<Option<ExecutionRecord>> = vec![None; n];
        let mut timeline = Timeline::new();
        let mut current_time = self.start_time;
        let mut remaining = n;

        while remaining > 0 {
            let available = (0..n).filter(|&i| !completed[i] && processes[i].is_arrived(current_time));

            let Some(idx) = self.rule_engine.select_best(processes, available) else {
                // Nothing has arrived: jump to the next arrival.
                let next_arrival = (0..n)
                    .filter(|&i| !completed[i])
                    .map(|i| processes[i].arrival_time)
                    .fold(f64::INFINITY, f64::min);
                debug!(from = current_time, to = next_arrival, "cpu idle");
                current_time = next_arrival;
                continue;
            };

            let process = &processes[idx];
            debug!(
                process = %process.name,
                start = current_time,
                burst = process.burst_time,
                "dispatch"
            );

            let record = ExecutionRecord::run(process, current_time);
            timeline.push(TimelineSegment::new(
                process.name.clone(),
                current_time,
                process.burst_time,
            ));
            current_time = record.completion_time;
            records[idx] = Some(record);
            completed[idx] = true;
            remaining -= 1;
        }

        let execution_records: Vec<ExecutionRecord> = records.into_iter().flatten().collect();
        debug_assert_eq!(execution_records.len(), n);

        info!(
            processes = n,
            finish_time = current_time,
            "simulation complete"
        );

        Ok(SimulationResult {
            execution_records,
            timeline,
            start_time: self.start_time,
            finish_time: current_time,
        })
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, "P1", 8.0).with_deadline(40.0),
            Process::new(2, "P2", 4.0).with_arrival(1.0).with_deadline(70.0),
            Process::new(3, "P3", 9.0).with_arrival(2.0).with_deadline(90.0),
            Process::new(4, "P4", 5.0).with_arrival(3.0).with_deadline(140.0),
        ]
    }

    #[test]
    fn test_sample_order() {
        let result = simulate(&sample_processes()).unwrap();

        assert_eq!(result.execution_order(), vec!["P1", "P3", "P4", "P2"]);
        let spans: Vec<(f64, f64)> = result.timeline.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(spans, vec![(0.0, 8.0), (8.0, 17.0), (17.0, 22.0), (22.0, 26.0)]);
        assert_eq!(result.finish_time, 26.0);
    }

    #[test]
    fn test_records_keep_input_order() {
        let result = simulate(&sample_processes()).unwrap();
        let ids: Vec<u32> = result.execution_records.iter().map(|r| r.process.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let p2 = result.record(2).unwrap();
        assert_eq!(p2.start_time, 22.0);
        assert_eq!(p2.completion_time, 26.0);
        assert_eq!(p2.turnaround_time, 25.0);
        assert_eq!(p2.waiting_time, 21.0);
        assert_eq!(p2.response_time, 21.0);
    }

    #[test]
    fn test_single_process() {
        let result = simulate(&[Process::new(1, "P1", 5.0)]).unwrap();
        let r = &result.execution_records[0];
        assert_eq!(r.turnaround_time, 5.0);
        assert_eq!(r.waiting_time, 0.0);
        assert_eq!(r.response_time, 0.0);
        assert_eq!(result.timeline.segments, vec![TimelineSegment::new("P1", 0.0, 5.0)]);
    }

    #[test]
    fn test_idle_gap() {
        let processes = vec![
            Process::new(1, "P1", 2.0),
            Process::new(2, "P2", 3.0).with_arrival(10.0),
        ];
        let result = simulate(&processes).unwrap();

        assert_eq!(result.timeline.len(), 2);
        assert_eq!(result.timeline.segments[1].start, 10.0);
        assert_eq!(result.finish_time, 13.0);
        assert_eq!(result.timeline.idle_gaps(0.0).len(), 1);
    }

    #[test]
    fn test_leading_idle() {
        let result = simulate(&[Process::new(1, "late", 2.0).with_arrival(4.0)]).unwrap();
        assert_eq!(result.timeline.segments[0].start, 4.0);
        assert_eq!(result.finish_time, 6.0);
        assert_eq!(result.execution_records[0].response_time, 0.0);
    }

    #[test]
    fn test_tie_break_arrival_then_input_order() {
        let processes = vec![
            Process::new(1, "A", 5.0).with_arrival(2.0),
            Process::new(2, "B", 5.0).with_arrival(1.0),
            Process::new(3, "C", 5.0).with_arrival(1.0),
            Process::new(4, "gate", 1.0),
        ];
        // gate runs 0-1; at t=1 B and C tie on burst and arrival, B is earlier in input.
        let result = simulate(&processes).unwrap();
        assert_eq!(result.execution_order(), vec!["gate", "B", "C", "A"]);
    }

    #[test]
    fn test_slightly_longer_burst_beats_earlier_arrival() {
        let processes = vec![
            Process::new(1, "gate", 1.0),
            Process::new(2, "A", 5.0).with_arrival(0.5),
            Process::new(3, "B", 5.0 + 1e-10).with_arrival(0.8),
        ];
        let simulator = Simulator::ljf();
        assert_eq!(simulator.rule_engine().rule_names(), vec!["LJF", "FCFS"]);

        let result = simulator.simulate(&processes).unwrap();
        assert_eq!(result.execution_order(), vec!["gate", "B", "A"]);
        assert_eq!(result, simulate(&processes).unwrap());
    }

    #[test]
    fn test_deadlines_do_not_affect_order() {
        let mut urgent = sample_processes();
        for p in &mut urgent {
            p.deadline = 1.0;
        }
        let a = simulate(&sample_processes()).unwrap();
        let b = simulate(&urgent).unwrap();
        assert_eq!(a.execution_order(), b.execution_order());
        assert_eq!(a.finish_time, b.finish_time);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(simulate(&[]), Err(InvalidInputError::EmptyProcessList));
    }

    #[test]
    fn test_zero_burst_rejected() {
        let processes = vec![Process::new(1, "P1", 3.0), Process::new(2, "P2", 0.0)];
        assert!(matches!(
            simulate(&processes),
            Err(InvalidInputError::NonPositiveBurst { id: 2, .. })
        ));
    }

    #[test]
    fn test_deterministic() {
        let processes = sample_processes();
        assert_eq!(simulate(&processes).unwrap(), simulate(&processes).unwrap());
    }

    #[test]
    fn test_custom_rule_engine() {
        let engine = RuleEngine::new()
            .with_rule(rules::Sjf)
            .with_tie_breaker(rules::EarliestArrival);
        let result = Simulator::new()
            .with_rule_engine(engine)
            .simulate(&sample_processes())
            .unwrap();
        // At t=8 P2 (4), P4 (5), P3 (9) are waiting.
        assert_eq!(result.execution_order(), vec!["P1", "P2", "P4", "P3"]);
        assert_eq!(result.finish_time, 26.0);
    }

    #[test]
    fn test_start_time_offset() {
        let result = Simulator::new()
            .with_start_time(5.0)
            .simulate(&sample_processes())
            .unwrap();
        // All have arrived by t=5, so LJF runs P3 first.
        assert_eq!(result.execution_order(), vec!["P3", "P1", "P4", "P2"]);
        assert_eq!(result.start_time, 5.0);
        assert_eq!(result.finish_time, 31.0);
    }
}
