use log::{debug, info, warn};

use crate::error::NumericError;
use crate::loss::mse::MseLoss;
use crate::math::matrix::Matrix;
use crate::optim::gradient_descent::GradientDescent;
use crate::train::iteration_stats::IterationStats;
use crate::train::train_config::TrainConfig;

/// Result of a training run.
#[derive(Debug, Clone)]
pub struct TrainOutcome {
    /// Final coefficients, shape `(features, 1)`.
    pub theta: Matrix,
    /// One cost per iteration, measured after that iteration's update.
    pub cost_history: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Runs `config.iterations` full-batch gradient-descent updates of `theta`
/// against the training data.
///
/// # Arguments
/// - `x_train`   — design matrix, shape `(m, k)`
/// - `y_train`   — targets, shape `(m, 1)`
/// - `theta`     — initial coefficients, shape `(k, 1)`; owned and updated in place
/// - `optimizer` — carries the learning rate
/// - `config`    — iteration count, logging cadence, optional progress channel
///
/// Each iteration computes `e = Xθ − y`, updates `θ ← θ − η·(1/m)·Xᵀe`, then
/// records `J(θ) = 1/(2m)·Σ(Xθ − y)²` for the *updated* θ.
///
/// A learning rate that is too large makes the cost grow without bound. That
/// is not reported unless `config.halt_on_divergence` is set; an empty
/// training set likewise produces NaN rather than an error.
///
/// # Panics
/// Panics if the shapes of `x_train`, `y_train` and `theta` are inconsistent.
pub fn gradient_descent(
    x_train: &Matrix,
    y_train: &Matrix,
    mut theta: Matrix,
    optimizer: &GradientDescent,
    config: &TrainConfig,
) -> Result<TrainOutcome, NumericError> {
    assert_eq!(
        x_train.rows,
        y_train.rows,
        "x_train and y_train must have the same number of rows"
    );
    assert_eq!(y_train.cols, 1, "y_train must be a column vector");
    assert_eq!(
        (theta.rows, theta.cols),
        (x_train.cols, 1),
        "theta must be a ({}, 1) column vector",
        x_train.cols
    );

    let mut cost_history = Vec::with_capacity(config.iterations);

    for iteration in 1..=config.iterations {
        let predictions = x_train * &theta;
        let errors = MseLoss::derivative(&predictions, y_train);
        let gradient = MseLoss::gradient(x_train, &errors);

        optimizer.step(&mut theta, &gradient);

        let cost = MseLoss::cost(x_train, y_train, &theta);
        cost_history.push(cost);

        if config.log_every > 0 && iteration % config.log_every == 0 {
            debug!("iteration {}/{}: cost = {:.6}", iteration, config.iterations, cost);
        }

        if let Some(ref tx) = config.progress_tx {
            let stats = IterationStats {
                iteration,
                total_iterations: config.iterations,
                cost,
                gradient_norm: gradient.sum_of_squares().sqrt(),
            };
            // Training never stops early, so a dropped receiver only ends reporting.
            let _ = tx.send(stats);
        }

        if !cost.is_finite() && config.halt_on_divergence {
            warn!("cost is {} at iteration {}; halting", cost, iteration);
            return Err(NumericError::Diverged { iteration });
        }
    }

    match cost_history.last() {
        Some(last) => info!("gradient descent finished after {} iterations, cost = {:.6}", cost_history.len(), last),
        None => info!("gradient descent ran zero iterations; theta unchanged"),
    }

    Ok(TrainOutcome { theta, cost_history })
}
