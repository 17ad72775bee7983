//! Dispatching rules and rule engine.
//!
//! When the CPU becomes free, the simulator asks a [`RuleEngine`] which of
//! the arrived processes runs next. The default engine implements
//! Longest-Job-First: largest burst time, then earliest arrival, then
//! input order.
//!
//! # Usage
//!
//! ```
//! use ljf_sched::dispatching::{rules, RuleEngine};
//! use ljf_sched::models::Process;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Ljf)
//!     .with_tie_breaker(rules::EarliestArrival);
//!
//! let processes = vec![Process::new(1, "A", 3.0), Process::new(2, "B", 9.0)];
//! assert_eq!(engine.select_best(&processes, [0, 1]), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = f64;

/// A rule that ranks arrived processes.
///
/// # Score Convention
/// **Lower score = higher priority.** A "largest first" rule negates its key.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Short rule name (e.g., "LJF").
    fn name(&self) -> &'static str;

    /// Scores a process; lower runs first.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
