use thiserror::Error;

/// Errors returned by the sorting routines in this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested range does not satisfy `low <= high <= len`.
    ///
    /// Raised before any element is moved, so the slice is unchanged
    /// whenever this error is returned.
    #[error("invalid sort range [{low}, {high}) for slice of length {len}")]
    InvalidRange { low: usize, high: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
