use std::error::Error;
use std::fmt;

/// Error type for all fallible operations in the crate.
///
/// Every precondition failure is detected before any mutation takes place,
/// so a returned error never leaves an operand in a partially updated state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// Buffer length does not match the requested shape.
    ShapeDataMismatch {
        rows: usize,
        cols: usize,
        len: usize,
    },
    /// A grid constructor received rows of differing lengths.
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Two matrix operands have shapes that are incompatible for the
    /// requested operation.
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Two vector operands differ in dimension.
    DimensionMismatch { left: usize, right: usize },
    /// A fixed-dimension constructor received a vector of the wrong length.
    WrongDimension { expected: usize, found: usize },
    /// A square-only operation was invoked on a rectangular matrix.
    NotSquare { rows: usize, cols: usize },
    /// A closed-form operation was invoked on a matrix of the wrong size.
    WrongSize {
        expected: usize,
        rows: usize,
        cols: usize,
    },
    /// The result of the operation would be an empty matrix.
    ShapeTooSmall { rows: usize, cols: usize },
    /// A row, column, or component index is out of range.
    IndexOutOfBounds { index: usize, bound: usize },
    /// An equality comparison received a missing operand.
    NullOperand,
    /// The operation is recognized but intentionally not implemented.
    Unsupported(&'static str),
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinalgError::ShapeDataMismatch { rows, cols, len } => write!(
                f,
                "buffer of length {} does not fit a {} x {} grid",
                len, rows, cols
            ),
            LinalgError::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} values but {} were expected",
                row, found, expected
            ),
            LinalgError::ShapeMismatch { left, right } => write!(
                f,
                "matrix shapes {} x {} and {} x {} are not compatible",
                left.0, left.1, right.0, right.1
            ),
            LinalgError::DimensionMismatch { left, right } => write!(
                f,
                "vectors of dimension {} and {} are not compatible",
                left, right
            ),
            LinalgError::WrongDimension { expected, found } => write!(
                f,
                "expected a vector of dimension {}, got dimension {}",
                expected, found
            ),
            LinalgError::NotSquare { rows, cols } => write!(
                f,
                "operation requires a square matrix, got {} x {}",
                rows, cols
            ),
            LinalgError::WrongSize {
                expected,
                rows,
                cols,
            } => write!(
                f,
                "operation requires a {} x {} matrix, got {} x {}",
                expected, expected, rows, cols
            ),
            LinalgError::ShapeTooSmall { rows, cols } => {
                write!(f, "a {} x {} matrix has no proper submatrix", rows, cols)
            }
            LinalgError::IndexOutOfBounds { index, bound } => {
                write!(f, "index {} is out of range for size {}", index, bound)
            }
            LinalgError::NullOperand => write!(f, "comparison operand is missing"),
            LinalgError::Unsupported(op) => write!(f, "operation `{}` is not implemented", op),
        }
    }
}

impl Error for LinalgError {}
