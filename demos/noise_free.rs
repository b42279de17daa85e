use reliability_regression::{Dataset, Pipeline, PipelineConfig, Record};

fn main() {
    env_logger::init();

    // Reliability is exactly twice the deployment frequency.
    let records: Vec<Record> = (0..10)
        .map(|i| {
            let df = (i + 1) as f64;
            Record {
                deployment_frequency: df,
                ci_cd_failures: (10 - i) as f64,
                system_reliability_score: 2.0 * df,
            }
        })
        .collect();
    let dataset = Dataset::from_records(records).expect("dataset is non-empty");

    let config = PipelineConfig { learning_rate: 0.1, iterations: 500, ..PipelineConfig::default() };
    let report = Pipeline::new(config)
        .expect("valid config")
        .run_on(&dataset)
        .expect("pipeline run");

    for (i, cost) in report.cost_history.iter().enumerate().step_by(100) {
        println!("Iteration {i}: cost = {cost:.6}");
    }
    println!("theta = {:?}", report.theta.values());
    println!("MSE on Test Set: {}", report.mse);
}
