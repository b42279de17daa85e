use std::io::Write;
use std::path::Path;

use reliability_regression::{
    DataError, Pipeline, PipelineConfig, PipelineError, RunReport,
};
use tempfile::NamedTempFile;

const HEADER: &str = "Deployment_Frequency,CI_CD_Failures,System_Reliability_Score";

fn write_csv(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", body).unwrap();
    file.flush().unwrap();
    file
}

/// Synthetic data with a known linear relation plus a small deterministic wobble.
fn synthetic_csv(n: usize) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for i in 0..n {
        let freq = (i % 17) as f64 + 1.0;
        let failures = ((i * 7) % 11) as f64;
        let wobble = ((i as f64) * 1.3).sin() * 0.5;
        let score = 60.0 + 2.0 * freq - 1.5 * failures + wobble;
        out.push_str(&format!("{},{},{}\n", freq, failures, score));
    }
    out
}

fn run_file(path: &Path, config: PipelineConfig) -> Result<RunReport, PipelineError> {
    let config = PipelineConfig { data_path: path.to_path_buf(), ..config };
    Pipeline::new(config).unwrap().run()
}

#[test]
fn default_run_reports_finite_mse() {
    let file = write_csv(&synthetic_csv(100));
    let report = run_file(file.path(), PipelineConfig::default()).unwrap();

    assert_eq!(report.n_train, 80);
    assert_eq!(report.n_test, 20);
    assert_eq!(report.cost_history.len(), 1000);
    assert_eq!((report.theta.rows, report.theta.cols), (3, 1));
    assert!(report.mse.is_finite());
    assert!(report.mse >= 0.0);
}

#[test]
fn default_learning_rate_never_raises_cost() {
    let file = write_csv(&synthetic_csv(100));
    let report = run_file(file.path(), PipelineConfig::default()).unwrap();
    for pair in report.cost_history.windows(2) {
        assert!(pair[1] <= pair[0] + 1e-9);
    }
}

#[test]
fn repeated_runs_are_identical() {
    let file = write_csv(&synthetic_csv(60));
    let a = run_file(file.path(), PipelineConfig::default()).unwrap();
    let b = run_file(file.path(), PipelineConfig::default()).unwrap();
    assert_eq!(a.theta, b.theta);
    assert_eq!(a.mse, b.mse);
}

#[test]
fn noise_free_csv_is_fit_almost_exactly() {
    let mut body = String::from(HEADER);
    body.push('\n');
    for i in 0..10 {
        let freq = i + 1;
        body.push_str(&format!("{},{},{}\n", freq, 10 - i, 2 * freq));
    }
    let file = write_csv(&body);

    let config = PipelineConfig { learning_rate: 0.1, iterations: 500, ..PipelineConfig::default() };
    let report = run_file(file.path(), config).unwrap();
    assert!(report.mse < 1e-2, "mse = {}", report.mse);
}

#[test]
fn scaler_is_fitted_on_all_rows() {
    let file = write_csv(&synthetic_csv(50));
    let report = run_file(file.path(), PipelineConfig::default()).unwrap();
    assert_eq!(report.scaler.min(), &[1.0, 0.0]);
    assert_eq!(report.scaler.max(), &[17.0, 10.0]);
}

#[test]
fn zero_iterations_leave_theta_at_zero() {
    let file = write_csv(&synthetic_csv(20));
    let config = PipelineConfig { iterations: 0, ..PipelineConfig::default() };
    let report = run_file(file.path(), config).unwrap();
    assert!(report.cost_history.is_empty());
    assert_eq!(report.theta.values(), vec![0.0, 0.0, 0.0]);
}

#[test]
fn missing_file_is_data_access_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_file(&dir.path().join("absent.csv"), PipelineConfig::default()).unwrap_err();
    assert!(matches!(err, PipelineError::Data(DataError::Io(_))));
}

#[test]
fn missing_target_column_is_schema_error() {
    let file = write_csv("Deployment_Frequency,CI_CD_Failures\n1,2\n3,4\n");
    let err = run_file(file.path(), PipelineConfig::default()).unwrap_err();
    match err {
        PipelineError::Data(DataError::MissingColumn(name)) => {
            assert_eq!(name, "System_Reliability_Score");
        }
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn huge_learning_rate_is_silent_by_default() {
    let file = write_csv(&synthetic_csv(40));
    let config = PipelineConfig { learning_rate: 50.0, ..PipelineConfig::default() };
    let report = run_file(file.path(), config).unwrap();
    assert!(!report.mse.is_finite() || report.mse > 1e12);
}

#[test]
fn strict_mode_stops_on_divergence() {
    let file = write_csv(&synthetic_csv(40));
    let config = PipelineConfig { learning_rate: 50.0, strict: true, ..PipelineConfig::default() };
    let err = run_file(file.path(), config).unwrap_err();
    assert!(matches!(err, PipelineError::Numeric(_)));
}

#[test]
fn report_serializes_to_json() {
    let file = write_csv(&synthetic_csv(30));
    let config = PipelineConfig { iterations: 5, ..PipelineConfig::default() };
    let report = run_file(file.path(), config).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["cost_history"].as_array().unwrap().len(), 5);
    assert_eq!(json["n_test"], 6);
}
