pub mod math;
pub mod data;
pub mod preprocess;
pub mod loss;
pub mod optim;
pub mod train;
pub mod eval;
pub mod pipeline;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use data::{Dataset, DataError, Record};
pub use preprocess::{add_bias_column, train_test_split, MinMaxScaler, TrainTestSplit};
pub use loss::mse::MseLoss;
pub use optim::gradient_descent::GradientDescent;
pub use train::{gradient_descent, IterationStats, TrainConfig, TrainOutcome};
pub use eval::{evaluate, mean_squared_error, predict};
pub use pipeline::{Pipeline, PipelineConfig, RunReport};
pub use error::{ConfigError, NumericError, PipelineError};
