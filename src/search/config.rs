//! Search configuration parameters.

use std::time::Duration;

/// Configuration for the time-boxed tree search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Wall-clock budget per move. The deadline is checked once per
    /// iteration, so a search may overrun it by one iteration.
    pub time_budget: Duration,

    /// Weight of the exploration term in upper-confidence selection.
    /// 1.0 gives the plain `win_rate + sqrt(ln(N) / n)` rule.
    pub exploration: f64,

    /// Optional iteration cap. `None` means the search is bounded by time
    /// only.
    pub max_iterations: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_secs(10),
            exploration: 1.0,
            max_iterations: None,
        }
    }
}

impl SearchConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            time_budget: Duration::from_millis(200),
            exploration: 1.0,
            max_iterations: Some(2_000),
        }
    }

    /// Builder pattern: set time budget.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    /// Builder pattern: set exploration weight.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration = c;
        self
    }

    /// Builder pattern: cap the number of iterations.
    pub fn with_max_iterations(mut self, n: u64) -> Self {
        self.max_iterations = Some(n);
        self
    }
}
