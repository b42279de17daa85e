use std::process::ExitCode;

use log::error;
use reliability_regression::{Pipeline, PipelineConfig, PipelineError, RunReport};

fn run() -> Result<RunReport, PipelineError> {
    Pipeline::new(PipelineConfig::default())?.run()
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(report) => {
            println!("MSE on Test Set: {}", report.mse);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
