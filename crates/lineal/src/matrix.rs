//! General rectangular matrix over `f64`.
//!
//! `Matrix` owns its storage exclusively; every operation that returns a
//! matrix allocates a new one, and the in-place row operations are the only
//! mutating methods besides indexed assignment. Shape is fixed at
//! construction and always derived from the backing grid, so the two can
//! never fall out of sync.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::LinalgError;
use crate::grid::Grid;
use crate::vector::Vector;

/// A dense matrix of `f64` values with at least one row and one column.
#[derive(Clone, Debug)]
pub struct Matrix {
    grid: Grid<f64>,
}

impl Matrix {
    /// A zero-filled matrix.
    ///
    /// # Panics
    ///
    /// Panics when either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            grid: Grid::zeros(rows, cols),
        }
    }

    /// Build a matrix from nested rows of values.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, LinalgError> {
        Ok(Self {
            grid: Grid::from_rows(rows)?,
        })
    }

    /// Build a matrix from a flat row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self, LinalgError> {
        Ok(Self {
            grid: Grid::from_shape_vec(shape, data)?,
        })
    }

    /// Wrap an existing grid. The matrix takes ownership; no copy is made.
    pub fn from_grid(grid: Grid<f64>) -> Self {
        Self { grid }
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.grid.shape()
    }

    pub fn is_square(&self) -> bool {
        self.grid.is_square()
    }

    /// Borrow the backing grid.
    pub fn grid(&self) -> &Grid<f64> {
        &self.grid
    }

    /// Bounds-checked read of a single entry.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, LinalgError> {
        self.grid.get(row, col).copied()
    }

    /// Bounds-checked write of a single entry.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), LinalgError> {
        self.grid.set(row, col, value)
    }

    /// Elementwise sum. Fails with [`LinalgError::ShapeMismatch`] unless
    /// both operands have the same shape.
    pub fn try_add(&self, rhs: &Matrix) -> Result<Matrix, LinalgError> {
        self.zip_with(rhs, |a, b| a + b)
    }

    /// Elementwise difference. Fails with [`LinalgError::ShapeMismatch`]
    /// unless both operands have the same shape.
    pub fn try_sub(&self, rhs: &Matrix) -> Result<Matrix, LinalgError> {
        self.zip_with(rhs, |a, b| a - b)
    }

    fn zip_with<F>(&self, rhs: &Matrix, f: F) -> Result<Matrix, LinalgError>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != rhs.shape() {
            return Err(LinalgError::ShapeMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        let data = self
            .grid
            .as_slice()
            .iter()
            .zip(rhs.grid.as_slice())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self {
            grid: Grid::from_parts(self.rows(), self.cols(), data),
        })
    }

    /// Matrix product `self * rhs`.
    ///
    /// Fails with [`LinalgError::ShapeMismatch`] unless
    /// `self.cols() == rhs.rows()`. The result has shape
    /// `self.rows() x rhs.cols()` with entry
    /// `(i, j) = sum over k of self[(i, k)] * rhs[(k, j)]`.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix, LinalgError> {
        if self.cols() != rhs.rows() {
            return Err(LinalgError::ShapeMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        let mut out = Grid::zeros(self.rows(), rhs.cols());
        for i in 0..self.rows() {
            for j in 0..rhs.cols() {
                let mut acc = 0.0;
                for k in 0..self.cols() {
                    acc += self[(i, k)] * rhs[(k, j)];
                }
                out[(i, j)] = acc;
            }
        }
        Ok(Self { grid: out })
    }

    /// Multiply every entry by a scalar, returning a new matrix.
    pub fn scale(&self, scalar: f64) -> Matrix {
        Self {
            grid: self.grid.mapv(|v| v * scalar),
        }
    }

    /// Compare two optional matrices for equality.
    ///
    /// Fails with [`LinalgError::NullOperand`] when either operand is
    /// absent. Present operands compare by shape first, then entry by
    /// entry using **exact** floating-point equality — there is no epsilon
    /// tolerance, so values that differ only by rounding noise compare
    /// unequal. `PartialEq` applies the same comparison to present
    /// operands.
    pub fn try_eq(lhs: Option<&Matrix>, rhs: Option<&Matrix>) -> Result<bool, LinalgError> {
        match (lhs, rhs) {
            (Some(a), Some(b)) => Ok(a == b),
            _ => Err(LinalgError::NullOperand),
        }
    }

    /// The transposed matrix: shape swapped, `out[(j, i)] = self[(i, j)]`.
    pub fn transpose(&self) -> Matrix {
        let mut out = Grid::zeros(self.cols(), self.rows());
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                out[(j, i)] = self[(i, j)];
            }
        }
        Self { grid: out }
    }

    /// Extract one row as an independently owned vector.
    pub fn row_vector(&self, row: usize) -> Result<Vector, LinalgError> {
        if row >= self.rows() {
            return Err(LinalgError::IndexOutOfBounds {
                index: row,
                bound: self.rows(),
            });
        }
        Ok(Vector::from_vec(self.grid.row_slice(row).to_vec()))
    }

    /// Extract one column as an independently owned vector.
    pub fn column_vector(&self, col: usize) -> Result<Vector, LinalgError> {
        if col >= self.cols() {
            return Err(LinalgError::IndexOutOfBounds {
                index: col,
                bound: self.cols(),
            });
        }
        let mut values = Vec::with_capacity(self.rows());
        for row in 0..self.rows() {
            values.push(self[(row, col)]);
        }
        Ok(Vector::from_vec(values))
    }

    /// The `(rows - 1) x (cols - 1)` matrix that remains after removing
    /// one row and one column, with the relative order of the remaining
    /// entries preserved.
    ///
    /// Fails with [`LinalgError::IndexOutOfBounds`] when either index is
    /// out of range, and with [`LinalgError::ShapeTooSmall`] when the
    /// result would have no rows or no columns.
    pub fn submatrix(&self, skip_row: usize, skip_col: usize) -> Result<Matrix, LinalgError> {
        if skip_row >= self.rows() {
            return Err(LinalgError::IndexOutOfBounds {
                index: skip_row,
                bound: self.rows(),
            });
        }
        if skip_col >= self.cols() {
            return Err(LinalgError::IndexOutOfBounds {
                index: skip_col,
                bound: self.cols(),
            });
        }
        if self.rows() < 2 || self.cols() < 2 {
            return Err(LinalgError::ShapeTooSmall {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        let mut data = Vec::with_capacity((self.rows() - 1) * (self.cols() - 1));
        for row in 0..self.rows() {
            if row == skip_row {
                continue;
            }
            for col in 0..self.cols() {
                if col == skip_col {
                    continue;
                }
                data.push(self[(row, col)]);
            }
        }
        Ok(Self {
            grid: Grid::from_parts(self.rows() - 1, self.cols() - 1, data),
        })
    }

    /// Swap two rows in place.
    ///
    /// # Panics
    ///
    /// Panics when either row index is out of range. The row operations
    /// are Gaussian-elimination primitives; index validation is the
    /// caller's responsibility.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        assert!(a < self.rows() && b < self.rows(), "row index out of bounds");
        for col in 0..self.cols() {
            let tmp = self[(a, col)];
            self[(a, col)] = self[(b, col)];
            self[(b, col)] = tmp;
        }
    }

    /// Multiply one row by a scalar in place.
    ///
    /// # Panics
    ///
    /// Panics when `row` is out of range.
    pub fn scale_row(&mut self, factor: f64, row: usize) {
        assert!(row < self.rows(), "row index out of bounds");
        for col in 0..self.cols() {
            self[(row, col)] *= factor;
        }
    }

    /// Add `factor` times row `src` to row `dst` in place.
    ///
    /// # Panics
    ///
    /// Panics when either row index is out of range.
    pub fn add_scaled_row(&mut self, factor: f64, src: usize, dst: usize) {
        assert!(
            src < self.rows() && dst < self.rows(),
            "row index out of bounds"
        );
        for col in 0..self.cols() {
            let addend = factor * self[(src, col)];
            self[(dst, col)] += addend;
        }
    }

    /// Sum of the main-diagonal entries.
    ///
    /// Fails with [`LinalgError::NotSquare`] on a rectangular matrix; the
    /// trace is only defined for square matrices.
    pub fn trace(&self) -> Result<f64, LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok((0..self.rows()).map(|i| self[(i, i)]).sum())
    }

    /// Matrix rank. Not implemented; always fails with
    /// [`LinalgError::Unsupported`].
    pub fn rank(&self) -> Result<usize, LinalgError> {
        Err(LinalgError::Unsupported("rank"))
    }

    /// Matrix inverse. Not implemented; always fails with
    /// [`LinalgError::Unsupported`].
    pub fn inverse(&self) -> Result<Matrix, LinalgError> {
        Err(LinalgError::Unsupported("inverse"))
    }

    /// Render the shape as `"<rows> x <cols>"`.
    pub fn format_shape(&self) -> String {
        format!("{} x {}", self.rows(), self.cols())
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.grid[index]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.grid[index]
    }
}

impl fmt::Display for Matrix {
    /// Rows are rendered `| v0 v1 ... |`, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            write!(f, "|")?;
            for col in 0..self.cols() {
                write!(f, " {}", self[(row, col)])?;
            }
            writeln!(f, " |")?;
        }
        Ok(())
    }
}
