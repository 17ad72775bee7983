//! Built-in dispatching rules.
//!
//! - **Length-based**: LJF, SJF
//! - **Arrival-based**: FCFS (`EarliestArrival`)
//!
//! Deadlines are deliberately absent: they annotate results and never
//! steer dispatch.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// Longest Job First.
///
/// Prefers the arrived process with the largest burst time.
#[derive(Debug, Clone, Copy)]
pub struct Ljf;

impl DispatchingRule for Ljf {
    fn name(&self) -> &'static str {
        "LJF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        -process.burst_time
    }

    fn description(&self) -> &'static str {
        "Longest Job First"
    }
}

/// Shortest Job First.
///
/// Minimizes mean waiting time on a single CPU when all jobs are present.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl DispatchingRule for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Earliest arrival first. Used alone it is FCFS; after LJF it breaks ties.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

/// First-Come First-Served.
pub use self::EarliestArrival as Fcfs;

impl DispatchingRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}
