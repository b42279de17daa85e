use log::info;
use serde::{Deserialize, Serialize};

use crate::data::dataset::Dataset;
use crate::error::{ConfigError, PipelineError};
use crate::eval::metrics::evaluate;
use crate::math::matrix::Matrix;
use crate::optim::gradient_descent::GradientDescent;
use crate::pipeline::config::PipelineConfig;
use crate::preprocess::minmax::{add_bias_column, MinMaxScaler};
use crate::preprocess::split::train_test_split;
use crate::train::loop_fn::gradient_descent;
use crate::train::train_config::TrainConfig;

/// Everything a run produces. Kept in memory only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Extrema used to scale the features (fitted on every row).
    pub scaler: MinMaxScaler,
    /// Final coefficients `[bias, Deployment_Frequency, CI_CD_Failures]`, shape `(3, 1)`.
    pub theta: Matrix,
    pub cost_history: Vec<f64>,
    pub n_train: usize,
    pub n_test: usize,
    /// Mean squared error on the held-out rows.
    pub mse: f64,
}

/// Load → normalize → split → train → evaluate, driven by one validated
/// `PipelineConfig`.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Result<Pipeline, ConfigError> {
        config.validate()?;
        Ok(Pipeline { config })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Reads `config.data_path` and runs every stage on it.
    pub fn run(&self) -> Result<RunReport, PipelineError> {
        let dataset = Dataset::load(&self.config.data_path)?;
        self.run_on(&dataset)
    }

    /// Runs every stage on an already loaded dataset.
    pub fn run_on(&self, dataset: &Dataset) -> Result<RunReport, PipelineError> {
        let (scaler, design) = self.design_matrix(dataset)?;
        let targets = dataset.targets();

        let split = train_test_split(&design, &targets, self.config.test_size, self.config.random_state);
        info!(
            "training on {} rows, holding out {}",
            split.x_train.rows, split.x_test.rows
        );

        let mut train_config = TrainConfig::new(self.config.iterations);
        train_config.halt_on_divergence = self.config.strict;

        let optimizer = GradientDescent::new(self.config.learning_rate);
        let theta = Matrix::zeros(design.cols, 1);
        let outcome = gradient_descent(&split.x_train, &split.y_train, theta, &optimizer, &train_config)?;

        let mse = evaluate(&outcome.theta, &split.x_test, &split.y_test);
        info!("theta = {:?}, test MSE = {}", outcome.theta.values(), mse);

        Ok(RunReport {
            scaler,
            theta: outcome.theta,
            cost_history: outcome.cost_history,
            n_train: split.x_train.rows,
            n_test: split.x_test.rows,
            mse,
        })
    }

    /// Scales both features over the full dataset and prepends the bias column.
    fn design_matrix(&self, dataset: &Dataset) -> Result<(MinMaxScaler, Matrix), PipelineError> {
        let raw = dataset.features();
        let scaler = if self.config.strict {
            MinMaxScaler::fit_strict(&raw)?
        } else {
            MinMaxScaler::fit(&raw)
        };
        let design = add_bias_column(&scaler.transform(&raw));
        Ok((scaler, design))
    }
}
