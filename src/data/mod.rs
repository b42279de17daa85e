pub mod dataset;
pub mod error;

pub use dataset::{Dataset, Record, REQUIRED_COLUMNS};
pub use error::DataError;
