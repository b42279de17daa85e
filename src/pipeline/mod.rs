pub mod config;
pub mod run;

pub use config::PipelineConfig;
pub use run::{Pipeline, RunReport};
