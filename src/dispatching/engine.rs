//! Rule engine for multi-criteria dispatching.
//!
//! Rules are applied in sequence: the next rule only decides when every
//! earlier rule scored a tie. When all rules tie, the lower input index
//! wins, so dispatch is deterministic.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, DispatchingRule, RuleScore};
use crate::models::Process;

/// A composable, sequential rule engine.
///
/// # Example
/// ```
/// use ljf_sched::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Sjf)
///     .with_tie_breaker(rules::EarliestArrival);
/// assert_eq!(engine.rule_names(), vec!["SJF", "FCFS"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine (pure input order).
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 0.0,
        }
    }

    /// Longest-Job-First: burst descending, then arrival ascending, then input order.
    pub fn ljf() -> Self {
        Self::new()
            .with_rule(rules::Ljf)
            .with_tie_breaker(rules::EarliestArrival)
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when all earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the tolerance under which two scores count as equal.
    ///
    /// Defaults to 0: scores must be exactly equal to fall through to the
    /// next rule.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon.abs();
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Picks the best process among `candidates` (indices into `processes`).
    ///
    /// Candidates should be given in ascending index order; on a full tie
    /// the first one seen wins. Returns `None` if there are no candidates.
    pub fn select_best<I>(&self, processes: &[Process], candidates: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        candidates.into_iter().fold(None, |best, idx| match best {
            None => Some(idx),
            Some(current) => {
                if self.compare(&processes[idx], &processes[current]) == Ordering::Less {
                    Some(idx)
                } else {
                    Some(current)
                }
            }
        })
    }

    /// Returns indices of `processes` in dispatch order (stable on ties).
    pub fn sort_indices(&self, processes: &[Process]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        indices
    }

    /// Scores from each rule for one process.
    pub fn evaluate(&self, process: &Process) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(process)).collect()
    }

    /// Sequential comparison. `Equal` means every rule tied.
    pub fn compare(&self, a: &Process, b: &Process) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a);
            let score_b = rule.evaluate(b);

            if self.epsilon > 0.0 && (score_a - score_b).abs() <= self.epsilon {
                continue;
            }
            match score_a.partial_cmp(&score_b) {
                Some(Ordering::Equal) | None => continue,
                Some(order) => return order,
            }
        }
        Ordering::Equal
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::ljf()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("epsilon", &self.epsilon)
            .finish()
    }
}
