use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::math::matrix::Matrix;

/// Row partition of a design matrix and its targets.
///
/// `train_indices`/`test_indices` refer to rows of the matrices passed to
/// [`train_test_split`] and list them in the order they appear in the
/// corresponding subset.
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    pub x_train: Matrix,
    pub x_test: Matrix,
    pub y_train: Matrix,
    pub y_test: Matrix,
    pub train_indices: Vec<usize>,
    pub test_indices: Vec<usize>,
}

/// Number of rows assigned to the test subset: `round(n * test_size)`.
pub fn test_count(n: usize, test_size: f64) -> usize {
    ((n as f64 * test_size).round() as usize).min(n)
}

/// Shuffles row indices with a generator seeded from `seed`; the first
/// [`test_count`] shuffled rows form the test subset and the rest the
/// training subset.
///
/// # Panics
/// Panics if `x` and `y` have different row counts.
pub fn train_test_split(x: &Matrix, y: &Matrix, test_size: f64, seed: u64) -> TrainTestSplit {
    assert_eq!(x.rows, y.rows, "x and y must have the same number of rows");

    let n = x.rows;
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let n_test = test_count(n, test_size);
    let (test, train) = indices.split_at(n_test);
    debug!("split {} rows into {} train / {} test (seed {})", n, train.len(), test.len(), seed);

    TrainTestSplit {
        x_train: x.select_rows(train),
        x_test: x.select_rows(test),
        y_train: y.select_rows(train),
        y_test: y.select_rows(test),
        train_indices: train.to_vec(),
        test_indices: test.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn fixture(n: usize) -> (Matrix, Matrix) {
        let x = Matrix::from_data((0..n).map(|i| vec![1.0, i as f64]).collect());
        let y = Matrix::column_vector((0..n).map(|i| i as f64 * 10.0).collect());
        (x, y)
    }

    #[test]
    fn partition_is_disjoint_and_exhaustive() {
        for n in [1, 2, 5, 10, 37, 100] {
            for seed in [0, 7, 42] {
                let (x, y) = fixture(n);
                let split = train_test_split(&x, &y, 0.2, seed);

                assert_eq!(split.x_train.rows + split.x_test.rows, n);
                let train: HashSet<_> = split.train_indices.iter().copied().collect();
                let test: HashSet<_> = split.test_indices.iter().copied().collect();
                assert!(train.is_disjoint(&test));
                let all: HashSet<_> = train.union(&test).copied().collect();
                assert_eq!(all, (0..n).collect::<HashSet<_>>());
            }
        }
    }

    #[test]
    fn test_size_is_rounded() {
        assert_eq!(test_count(10, 0.2), 2);
        assert_eq!(test_count(12, 0.2), 2);
        assert_eq!(test_count(13, 0.2), 3);
        assert_eq!(test_count(4, 0.0), 0);
    }

    #[test]
    fn same_seed_gives_same_partition() {
        let (x, y) = fixture(50);
        let a = train_test_split(&x, &y, 0.2, 42);
        let b = train_test_split(&x, &y, 0.2, 42);
        assert_eq!(a.train_indices, b.train_indices);
        assert_eq!(a.test_indices, b.test_indices);
        assert_eq!(a.x_test, b.x_test);
    }

    #[test]
    fn rows_stay_paired_with_targets() {
        let (x, y) = fixture(20);
        let split = train_test_split(&x, &y, 0.2, 3);
        for (row, target) in split.x_train.data.iter().zip(split.y_train.values()) {
            assert_eq!(row[1] * 10.0, target);
        }
        for (pos, &idx) in split.test_indices.iter().enumerate() {
            assert_eq!(split.y_test.data[pos][0], idx as f64 * 10.0);
        }
    }
}
