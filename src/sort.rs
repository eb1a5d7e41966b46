pub mod randomized_quicksort;

pub use randomized_quicksort::{
    quicksort_range, randomized_quicksort, randomized_quicksort_with_rng,
};
