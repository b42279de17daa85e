use crate::math::matrix::Matrix;

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        assert_eq!(predicted.len(), expected.len(), "prediction and target lengths differ");
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n
    }

    /// Per-output gradient: predicted - expected
    pub fn derivative(predicted: &Matrix, expected: &Matrix) -> Matrix {
        predicted - expected
    }

    /// Regression cost J(θ) = 1/(2m) · Σ(Xθ - y)²
    pub fn cost(x: &Matrix, y: &Matrix, theta: &Matrix) -> f64 {
        let errors = MseLoss::derivative(&(x * theta), y);
        errors.sum_of_squares() / (2.0 * y.rows as f64)
    }

    /// Gradient of `cost` with respect to θ: 1/m · Xᵀ(Xθ - y), given the
    /// already computed errors `Xθ - y`.
    pub fn gradient(x: &Matrix, errors: &Matrix) -> Matrix {
        let m = errors.rows as f64;
        (&x.transpose() * errors).map(|g| g / m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn loss_is_mean_squared_difference() {
        let loss = MseLoss::loss(&[0.5, 1.0, 1.5], &[1.0, 1.0, 0.0]);
        // (0.25 + 0 + 2.25) / 3
        assert_abs_diff_eq!(loss, 2.5 / 3.0, epsilon = 1e-12);
        assert_eq!(MseLoss::loss(&[3.0, -1.0], &[3.0, -1.0]), 0.0);
    }

    #[test]
    fn cost_is_half_mean_squared_error() {
        let x = Matrix::from_data(vec![vec![1.0, 0.0], vec![1.0, 1.0]]);
        let y = Matrix::column_vector(vec![1.0, 3.0]);
        let theta = Matrix::zeros(2, 1);
        // (1 + 9) / (2 * 2)
        assert_abs_diff_eq!(MseLoss::cost(&x, &y, &theta), 2.5, epsilon = 1e-12);

        let exact = Matrix::column_vector(vec![1.0, 2.0]);
        assert_eq!(MseLoss::cost(&x, &y, &exact), 0.0);
    }

    #[test]
    fn gradient_matches_hand_computation() {
        let x = Matrix::from_data(vec![vec![1.0, 0.0], vec![1.0, 1.0]]);
        let errors = Matrix::column_vector(vec![-1.0, -3.0]);
        let grad = MseLoss::gradient(&x, &errors);
        assert_eq!((grad.rows, grad.cols), (2, 1));
        assert_abs_diff_eq!(grad.data[0][0], -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(grad.data[1][0], -1.5, epsilon = 1e-12);
    }
}
