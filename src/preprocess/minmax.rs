//! Min-max feature scaling.
//!
//! Each column is mapped to `[0, 1]` with
//! ```text
//! x_scaled = (x - min_j) / (max_j - min_j)
//! ```
//! where `min_j`/`max_j` are taken over whatever matrix the scaler was fitted
//! on. Values outside the fitted range are not clamped. A constant column has
//! a zero range and scales to NaN; use [`MinMaxScaler::fit_strict`] to reject
//! such columns instead.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::NumericError;
use crate::math::matrix::Matrix;

/// Fitted per-column minimum and maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    min: Vec<f64>,
    max: Vec<f64>,
}

impl MinMaxScaler {
    /// Records the per-column extrema of `data`.
    ///
    /// # Panics
    /// Panics if `data` has no rows.
    pub fn fit(data: &Matrix) -> MinMaxScaler {
        assert!(data.rows > 0, "cannot fit MinMaxScaler on empty data");

        let min: Vec<f64> = (0..data.cols)
            .map(|j| data.column(j).into_iter().fold(f64::INFINITY, f64::min))
            .collect();
        let max: Vec<f64> = (0..data.cols)
            .map(|j| data.column(j).into_iter().fold(f64::NEG_INFINITY, f64::max))
            .collect();

        let scaler = MinMaxScaler { min, max };
        for column in scaler.constant_columns() {
            warn!(
                "feature column {} is constant ({}); scaled values will be NaN",
                column, scaler.min[column]
            );
        }
        debug!("fitted min-max scaler: min={:?} max={:?}", scaler.min, scaler.max);
        scaler
    }

    /// Like [`MinMaxScaler::fit`] but fails on the first constant column.
    pub fn fit_strict(data: &Matrix) -> Result<MinMaxScaler, NumericError> {
        let scaler = MinMaxScaler::fit(data);
        match scaler.constant_columns().first() {
            Some(&column) => Err(NumericError::ConstantColumn {
                column,
                value: scaler.min[column],
            }),
            None => Ok(scaler),
        }
    }

    /// Rebuilds a scaler from previously fitted extrema.
    ///
    /// # Panics
    /// Panics if the two vectors differ in length.
    pub fn from_min_max(min: Vec<f64>, max: Vec<f64>) -> MinMaxScaler {
        assert_eq!(min.len(), max.len(), "min and max must have equal length");
        MinMaxScaler { min, max }
    }

    pub fn min(&self) -> &[f64] {
        &self.min
    }

    pub fn max(&self) -> &[f64] {
        &self.max
    }

    pub fn n_features(&self) -> usize {
        self.min.len()
    }

    /// Scales `data` with the fitted extrema.
    ///
    /// # Panics
    /// Panics if `data` does not have `n_features()` columns.
    pub fn transform(&self, data: &Matrix) -> Matrix {
        assert_eq!(
            data.cols,
            self.n_features(),
            "scaler was fitted on {} features, got {}",
            self.n_features(),
            data.cols
        );

        let scaled = data.data.iter()
            .map(|row| {
                row.iter()
                    .zip(self.min.iter().zip(self.max.iter()))
                    .map(|(&x, (&lo, &hi))| (x - lo) / (hi - lo))
                    .collect()
            })
            .collect();

        Matrix {
            rows: data.rows,
            cols: data.cols,
            data: scaled,
        }
    }

    pub fn fit_transform(data: &Matrix) -> (MinMaxScaler, Matrix) {
        let scaler = MinMaxScaler::fit(data);
        let scaled = scaler.transform(data);
        (scaler, scaled)
    }

    fn constant_columns(&self) -> Vec<usize> {
        self.min.iter()
            .zip(self.max.iter())
            .enumerate()
            .filter(|(_, (lo, hi))| lo == hi)
            .map(|(j, _)| j)
            .collect()
    }
}

/// Prepends the intercept column of ones, producing the design matrix.
pub fn add_bias_column(features: &Matrix) -> Matrix {
    features.prepend_column(1.0)
}
