//! Scheduling performance metrics.
//!
//! Aggregates a completed [`SimulationResult`] into summary figures.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | CPU Utilization | 100 × Σ burst / horizon (percent) |
//! | Throughput | n / horizon (processes per time unit) |
//! | Avg Turnaround | mean(completion − arrival) |
//! | Avg Waiting | mean(turnaround − burst) |
//! | Avg Response | mean(start − arrival) |
//!
//! The horizon is `finish_time - start_time`; with the default start of 0 it
//! is the finish time.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::InvalidInputError;
use crate::models::SimulationResult;

/// Summary statistics of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Busy share of the horizon, 0..=100 (percent).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
}

impl MetricsSummary {
    /// Computes the summary for a simulation result.
    ///
    /// Fails on a result without records or with a non-positive horizon.
    pub fn calculate(result: &SimulationResult) -> Result<Self, InvalidInputError> {
        let records = &result.execution_records;
        if records.is_empty() {
            return Err(InvalidInputError::EmptyResult);
        }

        let span = result.span();
        if span.is_nan() || span <= 0.0 {
            return Err(InvalidInputError::NonPositiveHorizon { span });
        }

        let n = records.len() as f64;
        let mut total_burst = 0.0;
        let mut total_turnaround = 0.0;
        let mut total_waiting = 0.0;
        let mut total_response = 0.0;

        for r in records {
            total_burst += r.process.burst_time;
            total_turnaround += r.turnaround_time;
            total_waiting += r.waiting_time;
            total_response += r.response_time;
        }

        Ok(Self {
            cpu_utilization: 100.0 * total_burst / span,
            throughput: n / span,
            avg_turnaround_time: total_turnaround / n,
            avg_waiting_time: total_waiting / n,
            avg_response_time: total_response / n,
        })
    }

    /// Whether the CPU never sat idle (utilization at 100% within `epsilon`).
    pub fn is_fully_utilized(&self, epsilon: f64) -> bool {
        (self.cpu_utilization - 100.0).abs() <= epsilon
    }
}

/// Summarizes a simulation result. See [`MetricsSummary::calculate`].
pub fn summarize(result: &SimulationResult) -> Result<MetricsSummary, InvalidInputError> {
    MetricsSummary::calculate(result)
}
