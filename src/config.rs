//! Configuration options for the MCTS searcher.

use std::time::Duration;

use crate::{Error, Result};

/// Configuration for [`MctsSearcher`](crate::MctsSearcher)
///
/// Use the builder methods to customize a configuration:
///
/// ```
/// use ludus::MctsConfig;
/// use std::time::Duration;
///
/// let config = MctsConfig::default()
///     .with_exploration_constant(1.0)
///     .with_iterations(5_000)
///     .with_max_time(Duration::from_millis(250))
///     .with_seed(7);
/// ```
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Exploration constant for UCT
    ///
    /// Controls the balance between exploration and exploitation; higher
    /// values favor less-visited nodes. The standard value is sqrt(2).
    pub exploration_constant: f64,

    /// Number of search iterations to run per move decision
    ///
    /// This is the only mandatory bound on work; must be at least 1.
    pub iterations: usize,

    /// Optional wall-clock cutoff
    ///
    /// Checked between iterations only, so a hit never interrupts an
    /// iteration mid-flight; it simply completes fewer iterations than
    /// budgeted, which biases the visit statistics toward the moves explored
    /// first. [`SearchStatistics::stopped_early`](crate::SearchStatistics)
    /// records whether the cutoff fired.
    pub max_time: Option<Duration>,

    /// Seed for the rollout RNG
    ///
    /// Searches with the same seed, state, and budget are bit-identical.
    /// When unset, the RNG is seeded from entropy.
    pub seed: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        MctsConfig {
            exploration_constant: std::f64::consts::SQRT_2,
            iterations: 10_000,
            max_time: None,
            seed: None,
        }
    }
}

impl MctsConfig {
    /// Sets the exploration constant
    pub fn with_exploration_constant(mut self, constant: f64) -> Self {
        self.exploration_constant = constant;
        self
    }

    /// Sets the iteration budget
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the wall-clock cutoff
    pub fn with_max_time(mut self, duration: Duration) -> Self {
        self.max_time = Some(duration);
        self
    }

    /// Sets the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the configuration describes a runnable search
    pub fn validate(&self) -> Result<()> {
        if self.iterations < 1 {
            return Err(Error::InvalidConfig(
                "iteration budget must be at least 1".to_string(),
            ));
        }
        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "exploration constant must be finite and non-negative, got {}",
                self.exploration_constant
            )));
        }
        Ok(())
    }
}
