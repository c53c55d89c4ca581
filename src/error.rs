//! Error type shared by the matrix, solvers, and dataset loaders.

/// Possible errors.
///
/// An exact-solver timeout is not an error; it is reported as
/// [`ExactOutcome::TimedOut`](crate::exact::ExactOutcome::TimedOut).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The matrix has no rows.
    #[error("distance matrix is empty")]
    EmptyMatrix,

    /// A row length differs from the number of rows.
    #[error("distance matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },

    /// Flat row-major data does not hold `size * size` entries.
    #[error("distance matrix of size {size} needs {expected} entries, got {len}")]
    WrongLength {
        /// Declared number of locations.
        size: usize,
        /// Entries supplied.
        len: usize,
        /// `size * size`.
        expected: usize,
    },

    /// A distance is negative, NaN, or infinite.
    #[error("invalid distance {value} from {from} to {to}")]
    InvalidDistance {
        /// Row index.
        from: usize,
        /// Column index.
        to: usize,
        /// Rejected value.
        value: f64,
    },

    /// A location has a non-zero distance to itself.
    #[error("distance from location {index} to itself is {value}, expected 0")]
    NonZeroDiagonal {
        /// Location index.
        index: usize,
        /// Rejected value.
        value: f64,
    },

    /// The start index does not name a location in the matrix.
    #[error("start location {start} is out of range for {size} locations")]
    StartOutOfRange {
        /// Requested start.
        start: usize,
        /// Number of locations.
        size: usize,
    },

    /// A dataset declares a different location count than its matrix holds.
    #[error("dataset declares {declared} locations but its matrix has {actual} rows")]
    SizeMismatch {
        /// `num_locations` from the dataset.
        declared: usize,
        /// Rows in `distances`.
        actual: usize,
    },

    /// No stored dataset exists for the requested size.
    #[error("dataset for {size} locations not found in {origin}")]
    DatasetNotFound {
        /// Requested number of locations.
        size: usize,
        /// Where the dataset was looked up, e.g. the expected file path.
        origin: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` when the error means the dataset has to be generated first.
    pub fn is_missing_data(&self) -> bool {
        matches!(self, Error::DatasetNotFound { .. })
    }
}
