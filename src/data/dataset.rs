use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::data::error::DataError;
use crate::math::matrix::Matrix;

pub const DEPLOYMENT_FREQUENCY: &str = "Deployment_Frequency";
pub const CI_CD_FAILURES: &str = "CI_CD_Failures";
pub const SYSTEM_RELIABILITY_SCORE: &str = "System_Reliability_Score";

/// Feature columns in design-matrix order, followed by the target.
pub const REQUIRED_COLUMNS: [&str; 3] = [
    DEPLOYMENT_FREQUENCY,
    CI_CD_FAILURES,
    SYSTEM_RELIABILITY_SCORE,
];

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// One observation of the DevOps dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Deployment_Frequency")]
    pub deployment_frequency: f64,
    #[serde(rename = "CI_CD_Failures")]
    pub ci_cd_failures: f64,
    #[serde(rename = "System_Reliability_Score")]
    pub system_reliability_score: f64,
}

/// Rows of the dataset in file order. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

impl Dataset {
    /// Reads a comma-separated file whose header names at least the three
    /// required columns. Other columns are ignored; column order is free.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Dataset, DataError> {
        let path = path.as_ref();
        info!("loading dataset from {}", path.display());
        let file = File::open(path)?;
        Dataset::from_reader(BufReader::new(file))
    }

    /// Parses CSV from any reader. See [`Dataset::load`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset, DataError> {
        let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let headers = rdr.headers()?.clone();
        let positions = column_positions(&headers)?;

        let mut records = Vec::new();
        for (row_idx, result) in rdr.records().enumerate() {
            let row = result?;
            let mut values = [0.0f64; 3];
            for (slot, (&pos, name)) in values.iter_mut().zip(positions.iter().zip(REQUIRED_COLUMNS)) {
                *slot = parse_cell(&row, pos, name, row_idx + 1)?;
            }
            records.push(Record {
                deployment_frequency: values[0],
                ci_cd_failures: values[1],
                system_reliability_score: values[2],
            });
        }

        let dataset = Dataset::from_records(records)?;
        debug!("parsed {} rows", dataset.len());
        Ok(dataset)
    }

    /// Wraps already-parsed records. Fails only when `records` is empty.
    pub fn from_records(records: Vec<Record>) -> Result<Dataset, DataError> {
        if records.is_empty() {
            return Err(DataError::Empty);
        }
        Ok(Dataset { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Raw feature matrix, shape `(n, 2)`:
    /// `[Deployment_Frequency, CI_CD_Failures]`.
    pub fn features(&self) -> Matrix {
        Matrix::from_data(
            self.records.iter()
                .map(|r| vec![r.deployment_frequency, r.ci_cd_failures])
                .collect(),
        )
    }

    /// Raw target column, shape `(n, 1)`.
    pub fn targets(&self) -> Matrix {
        Matrix::column_vector(
            self.records.iter().map(|r| r.system_reliability_score).collect(),
        )
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Header index of each required column, in `REQUIRED_COLUMNS` order.
fn column_positions(headers: &StringRecord) -> Result<[usize; 3], DataError> {
    let mut positions = [0usize; 3];
    for (slot, name) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers.iter()
            .position(|h| h == name)
            .ok_or_else(|| DataError::MissingColumn(name.to_owned()))?;
    }
    Ok(positions)
}

fn parse_cell(row: &StringRecord, pos: usize, column: &str, row_num: usize) -> Result<f64, DataError> {
    let raw = row.get(pos).unwrap_or("");
    raw.parse::<f64>().map_err(|_| DataError::NonNumeric {
        row: row_num,
        column: column.to_owned(),
        value: raw.to_owned(),
    })
}
