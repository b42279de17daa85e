use serde::{Serialize, Deserialize};
use std::ops::{Sub, Mul};

/// Dense row-major matrix of `f64`.
///
/// Column vectors (targets, theta, predictions) are `n x 1` matrices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Builds a matrix from row vectors. An empty `data` yields a `0 x 0` matrix.
    ///
    /// # Panics
    /// Panics if the rows are ragged.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let cols = data.first().map(|r| r.len()).unwrap_or(0);
        assert!(
            data.iter().all(|r| r.len() == cols),
            "all rows must have the same length"
        );
        Matrix {
            rows: data.len(),
            cols,
            data
        }
    }

    /// Builds an `n x 1` column vector.
    pub fn column_vector(values: Vec<f64>) -> Matrix {
        Matrix {
            rows: values.len(),
            cols: 1,
            data: values.into_iter().map(|v| vec![v]).collect(),
        }
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// Values of column `j`, top to bottom.
    pub fn column(&self, j: usize) -> Vec<f64> {
        assert!(j < self.cols, "column {} out of range for {} columns", j, self.cols);
        self.data.iter().map(|row| row[j]).collect()
    }

    /// All entries in row-major order.
    pub fn values(&self) -> Vec<f64> {
        self.data.iter().flatten().copied().collect()
    }

    /// New matrix holding the given rows in the given order.
    pub fn select_rows(&self, indices: &[usize]) -> Matrix {
        Matrix {
            rows: indices.len(),
            cols: self.cols,
            data: indices.iter().map(|&i| self.data[i].clone()).collect(),
        }
    }

    /// Returns a copy with a constant column inserted at position 0.
    pub fn prepend_column(&self, value: f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols + 1,
            data: self.data.iter()
                .map(|row| {
                    let mut out = Vec::with_capacity(row.len() + 1);
                    out.push(value);
                    out.extend_from_slice(row);
                    out
                })
                .collect(),
        }
    }

    pub fn sum_of_squares(&self) -> f64 {
        self.data.iter().flatten().map(|x| x * x).sum()
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }

        res
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res =  Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        res
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}
