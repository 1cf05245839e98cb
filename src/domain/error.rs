use thiserror::Error;

/// Precondition violations reported by the simulation core.
///
/// Every fallible operation checks its arguments before building anything,
/// so an error never leaves a partially applied result behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// A grid was requested with a zero row or column count.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    /// A random-seed probability outside `[0, 1]` (or NaN).
    #[error("alive probability {0} is outside [0, 1]")]
    InvalidProbability(f64),

    /// A coordinate outside `[0, rows) x [0, cols)`.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}
