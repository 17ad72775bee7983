//! Simulation and performance metrics.
//!
//! # Algorithm
//!
//! [`Simulator`] runs a single-CPU, non-preemptive dispatch loop driven by a
//! [`RuleEngine`](crate::dispatching::RuleEngine). The default policy is
//! Longest-Job-First with earliest-arrival and input-order tie breaking.
//!
//! # Metrics
//!
//! [`MetricsSummary`] derives CPU utilization, throughput, and mean
//! turnaround/waiting/response times from a [`SimulationResult`](crate::models::SimulationResult).
//!
//! # Concurrency
//!
//! Both stages are pure functions of their input. Independent runs can be
//! executed on separate threads without synchronization.

mod metrics;
mod simulator;

pub use metrics::{summarize, MetricsSummary};
pub use simulator::{simulate, Simulator};
