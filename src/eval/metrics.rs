use crate::loss::mse::MseLoss;
use crate::math::matrix::Matrix;

/// Model output `Xθ`, shape `(n, 1)`.
pub fn predict(x: &Matrix, theta: &Matrix) -> Matrix {
    x * theta
}

/// Mean of squared element-wise differences. Always `>= 0`; NaN when either
/// input is empty or contains NaN.
pub fn mean_squared_error(y_true: &Matrix, y_pred: &Matrix) -> f64 {
    MseLoss::loss(&y_pred.values(), &y_true.values())
}

/// Test-set MSE of the coefficients `theta`.
pub fn evaluate(theta: &Matrix, x_test: &Matrix, y_test: &Matrix) -> f64 {
    mean_squared_error(y_test, &predict(x_test, theta))
}
