//! Random workload generation.
//!
//! Produces valid process sets for stress tests, benchmarks and demos.
//! Generation is driven by a caller-supplied RNG, so a seeded RNG gives a
//! reproducible workload.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Shape of a generated workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,
    /// Arrivals are drawn from `0..=max_arrival`.
    pub max_arrival: u32,
    /// Smallest burst time (clamped to at least 1).
    pub min_burst: u32,
    /// Largest burst time.
    pub max_burst: u32,
    /// Probability that a process carries a deadline annotation.
    pub deadline_probability: f64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 8,
            max_arrival: 20,
            min_burst: 1,
            max_burst: 10,
            deadline_probability: 0.0,
        }
    }
}

impl WorkloadConfig {
    /// Creates a config for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: u32) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst time range (inclusive).
    pub fn with_burst_range(mut self, min_burst: u32, max_burst: u32) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the share of processes that get a deadline.
    pub fn with_deadline_probability(mut self, p: f64) -> Self {
        self.deadline_probability = p.clamp(0.0, 1.0);
        self
    }
}

/// Generates `config.count` processes named `P1..Pn` with integral times.
///
/// Deadlines, when drawn, fall between the arrival and twice the total burst
/// time past it.
pub fn generate<R: Rng>(config: &WorkloadConfig, rng: &mut R) -> Vec<Process> {
    let min_burst = config.min_burst.max(1);
    let max_burst = config.max_burst.max(min_burst);
    let total_burst_bound = f64::from(max_burst) * config.count as f64;
    let deadline_probability = if config.deadline_probability.is_nan() {
        0.0
    } else {
        config.deadline_probability.clamp(0.0, 1.0)
    };

    (1..=config.count)
        .map(|i| {
            let id = i as u32;
            let arrival = f64::from(rng.random_range(0..=config.max_arrival));
            let burst = f64::from(rng.random_range(min_burst..=max_burst));
            let mut process = Process::new(id, format!("P{id}"), burst).with_arrival(arrival);

            if rng.random_bool(deadline_probability) {
                let slack = rng.random_range(burst..=burst + 2.0 * total_burst_bound);
                process = process.with_deadline((arrival + slack).round());
            }
            process
        })
        .collect()
}
