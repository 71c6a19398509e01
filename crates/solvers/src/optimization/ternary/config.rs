use thiserror::Error;

/// Configuration for the ternary line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    bracket: [f64; 2],
}

/// Errors that can occur when validating a ternary line search config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive, got {0}")]
    Tolerance(f64),

    #[error("bracket must be finite with low < high, got [{low}, {high}]")]
    Bracket { low: f64, high: f64 },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-5,
            bracket: [-1.0, 1.0],
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance and bracket.
    ///
    /// The bracket is the closed interval of steps searched along a line.
    /// It is never expanded, so only minima reachable within it are found.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not finite and positive, or if
    /// the bracket is not finite with `low < high`.
    pub fn new(tolerance: f64, bracket: [f64; 2]) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance(tolerance));
        }

        let [low, high] = bracket;
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(ConfigError::Bracket { low, high });
        }

        Ok(Self { tolerance, bracket })
    }

    /// Returns the interval width at which the search stops.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the `[low, high]` range of steps searched.
    #[must_use]
    pub fn bracket(&self) -> [f64; 2] {
        self.bracket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let config = Config::default();

        assert_eq!(config, Config::new(1e-5, [-1.0, 1.0]).unwrap());
    }

    #[test]
    fn rejects_non_positive_tolerance() {
        assert_eq!(
            Config::new(0.0, [-1.0, 1.0]),
            Err(ConfigError::Tolerance(0.0))
        );
        assert_eq!(
            Config::new(-1e-3, [-1.0, 1.0]),
            Err(ConfigError::Tolerance(-1e-3))
        );
        assert!(Config::new(f64::NAN, [-1.0, 1.0]).is_err());
    }

    #[test]
    fn rejects_empty_or_reversed_bracket() {
        assert_eq!(
            Config::new(1e-5, [1.0, 1.0]),
            Err(ConfigError::Bracket {
                low: 1.0,
                high: 1.0
            })
        );
        assert!(Config::new(1e-5, [2.0, -2.0]).is_err());
        assert!(Config::new(1e-5, [0.0, f64::INFINITY]).is_err());
    }
}
