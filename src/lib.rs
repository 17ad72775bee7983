//! Non-preemptive Longest-Job-First CPU scheduling simulator.
//!
//! Simulates a single CPU running a finite set of processes under
//! Longest-Job-First, then derives the standard performance metrics
//! (CPU utilization, throughput, mean turnaround/waiting/response time)
//! and a timeline suitable for Gantt charts.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ExecutionRecord`,
//!   `TimelineSegment`, `Timeline`, `SimulationResult`, `ProcessTable`
//! - **`dispatching`**: Dispatch rules (`Ljf`, `Sjf`, `Fcfs`) and `RuleEngine`
//! - **`scheduler`**: `Simulator` and `MetricsSummary`
//! - **`validation`**: Input integrity checks (empty input, burst/arrival/deadline ranges, duplicate IDs)
//! - **`transfer`**: Comma-separated import/export of process lists
//! - **`workload`**: Random process sets for tests and demos
//!
//! # Example
//!
//! ```
//! use ljf_sched::models::Process;
//! use ljf_sched::scheduler::{simulate, summarize};
//!
//! let processes = vec![
//!     Process::new(1, "P1", 2.0),
//!     Process::new(2, "P2", 3.0).with_arrival(10.0),
//! ];
//! let result = simulate(&processes)?;
//! let metrics = summarize(&result)?;
//! assert_eq!(result.finish_time, 13.0);
//! assert!((metrics.cpu_utilization - 38.4615).abs() < 1e-3);
//! # Ok::<(), ljf_sched::InvalidInputError>(())
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod transfer;
pub mod validation;
pub mod workload;

pub use error::{ImportError, InvalidInputError};
