use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_DATA_PATH: &str = "devops_synthetic_data.csv";
pub const DEFAULT_TEST_SIZE: f64 = 0.2;
pub const DEFAULT_RANDOM_STATE: u64 = 42;
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;
pub const DEFAULT_ITERATIONS: usize = crate::train::train_config::DEFAULT_ITERATIONS;

/// Settings for one end-to-end run. Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// CSV file with the three required columns.
    pub data_path: PathBuf,
    /// Fraction of rows held out for evaluation.
    pub test_size: f64,
    /// Seed for the train/test shuffle.
    pub random_state: u64,
    pub learning_rate: f64,
    pub iterations: usize,
    /// Reject constant feature columns and stop on a non-finite cost instead
    /// of letting NaN/inf flow through to the reported MSE.
    pub strict: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            test_size: DEFAULT_TEST_SIZE,
            random_state: DEFAULT_RANDOM_STATE,
            learning_rate: DEFAULT_LEARNING_RATE,
            iterations: DEFAULT_ITERATIONS,
            strict: false,
        }
    }
}

impl PipelineConfig {
    /// Checks hyperparameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ConfigError::LearningRate(self.learning_rate));
        }
        if !(0.0..1.0).contains(&self.test_size) {
            return Err(ConfigError::TestSize(self.test_size));
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a config from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<PipelineConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
