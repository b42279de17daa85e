//! Crate-level error types.

use crate::data::DataError;

/// Numeric failures. Only produced when a caller opts into strict checking;
/// the default pipeline lets NaN and overflow propagate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumericError {
    #[error("feature column {column} is constant (min = max = {value}); min-max scaling is undefined")]
    ConstantColumn { column: usize, value: f64 },

    #[error("cost became non-finite at iteration {iteration}; learning rate is too large")]
    Diverged { iteration: usize },
}

/// Rejected hyperparameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("learning_rate must be a finite value > 0, got {0}")]
    LearningRate(f64),

    #[error("test_size must lie in [0, 1), got {0}")]
    TestSize(f64),
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Numeric(#[from] NumericError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
