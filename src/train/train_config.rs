use std::sync::mpsc;
use crate::train::iteration_stats::IterationStats;

pub const DEFAULT_ITERATIONS: usize = 1000;
pub const DEFAULT_LOG_EVERY: usize = 100;

/// Configuration for a `gradient_descent` run.
///
/// # Fields
/// - `iterations`         — exact number of updates; there is no early stop
/// - `log_every`          — emit a `debug!` cost line every this many
///                          iterations (`0` disables it)
/// - `halt_on_divergence` — return `NumericError::Diverged` once the cost
///                          stops being finite, instead of continuing silently
/// - `progress_tx`        — optional channel sender; one `IterationStats` is
///                          sent per iteration. A dropped receiver is ignored.
pub struct TrainConfig {
    pub iterations: usize,
    pub log_every: usize,
    pub halt_on_divergence: bool,
    pub progress_tx: Option<mpsc::Sender<IterationStats>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no progress channel and no divergence check.
    pub fn new(iterations: usize) -> Self {
        TrainConfig {
            iterations,
            log_every: DEFAULT_LOG_EVERY,
            halt_on_divergence: false,
            progress_tx: None,
        }
    }
}
