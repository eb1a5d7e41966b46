pub mod error;
pub mod sort;

pub use error::{Error, Result};
pub use sort::{quicksort_range, randomized_quicksort, randomized_quicksort_with_rng};
