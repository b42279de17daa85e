pub mod metrics;

pub use metrics::{evaluate, mean_squared_error, predict};
