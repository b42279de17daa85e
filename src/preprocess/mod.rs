pub mod minmax;
pub mod split;

pub use minmax::{add_bias_column, MinMaxScaler};
pub use split::{train_test_split, TrainTestSplit};
