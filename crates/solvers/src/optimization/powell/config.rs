use thiserror::Error;

use crate::optimization::ternary;

/// Configuration for Powell's direction-set solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
    line: ternary::Config,
}

/// Errors that can occur when validating a Powell solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("tolerance must be finite and positive, got {0}")]
    Tolerance(f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tolerance: 1e-6,
            line: ternary::Config::default(),
        }
    }
}

impl Config {
    /// Creates a new config with a validated iteration cap and tolerance.
    ///
    /// The `tolerance` is relative: the solver converges once an outer
    /// iteration improves the objective by less than `tolerance` times the
    /// objective's magnitude. The `line` config controls each line search.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or if the tolerance is not
    /// finite and positive.
    pub fn new(
        max_iters: usize,
        tolerance: f64,
        line: ternary::Config,
    ) -> Result<Self, ConfigError> {
        if max_iters < 1 {
            return Err(ConfigError::MaxIters);
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance(tolerance));
        }

        Ok(Self {
            max_iters,
            tolerance,
            line,
        })
    }

    /// Returns the maximum number of outer iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the relative convergence tolerance on the objective.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the config used for every line search.
    #[must_use]
    pub fn line(&self) -> &ternary::Config {
        &self.line
    }
}
