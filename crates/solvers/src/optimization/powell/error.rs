use std::error::Error as StdError;

use thiserror::Error;

use crate::optimization::{EvalError, ternary};

use super::ConfigError;

/// Errors that can occur during Powell's method.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("start point has no coordinates")]
    EmptyPoint,

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("non-finite objective {objective} at x = {x:?}")]
    NonFiniteObjective { x: Vec<f64>, objective: f64 },
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
            EvalError::NonFiniteObjective { x, objective } => {
                Self::NonFiniteObjective { x, objective }
            }
        }
    }
}

impl From<ternary::Error> for Error {
    fn from(err: ternary::Error) -> Self {
        match err {
            ternary::Error::Model(e) => Self::Model(e),
            ternary::Error::Problem(e) => Self::Problem(e),
            ternary::Error::NonFiniteObjective { x, objective } => {
                Self::NonFiniteObjective { x, objective }
            }
        }
    }
}
