use crate::math::matrix::Matrix;

/// Plain full-batch gradient descent: θ ← θ − η·∇J.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDescent {
    pub learning_rate: f64,
}

impl GradientDescent {
    pub fn new(learning_rate: f64) -> GradientDescent {
        GradientDescent { learning_rate }
    }

    /// Applies one update to `theta` in place.
    pub fn step(&self, theta: &mut Matrix, gradient: &Matrix) {
        assert_eq!(
            (theta.rows, theta.cols),
            (gradient.rows, gradient.cols),
            "gradient shape must match theta"
        );
        for (row, grad_row) in theta.data.iter_mut().zip(gradient.data.iter()) {
            for (w, g) in row.iter_mut().zip(grad_row.iter()) {
                *w -= self.learning_rate * g;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_against_gradient() {
        let opt = GradientDescent::new(0.5);
        let mut theta = Matrix::column_vector(vec![1.0, 1.0, 1.0]);
        opt.step(&mut theta, &Matrix::column_vector(vec![2.0, -2.0, 0.0]));
        assert_eq!(theta.values(), vec![0.0, 2.0, 1.0]);
    }
}
