use serde::{Serialize, Deserialize};

/// Per-iteration statistics emitted by `gradient_descent`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the training
/// loop sends one `IterationStats` value after every parameter update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationStats {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Total iterations requested for this run.
    pub total_iterations: usize,
    /// Training cost J(θ) computed with the updated θ.
    pub cost: f64,
    /// Euclidean norm of the gradient used for this update.
    pub gradient_norm: f64,
}
