//! Square matrices and the determinant engine.
//!
//! `SquareMatrix` is a capability-restricted view over [`Matrix`]: the
//! wrapper can only be constructed when the shape invariant
//! `rows == cols` holds, and it is the only type that exposes the
//! square-only operations (trace, triangularity, determinants, minors and
//! cofactors). Every `Matrix` operation remains available through deref;
//! none of them can change the shape, so the invariant survives mutation.
//!
//! The determinant engine dispatches between closed forms (2x2 and the
//! 3x3 Sarrus rule) and recursive Laplace cofactor expansion. The
//! recursive path is exponential in the matrix size; it is exact and fine
//! for the small matrices this crate targets, while an O(n^3)
//! row-reduction determinant remains a possible future addition for
//! larger inputs.

use std::fmt;
use std::ops::{Deref, DerefMut};

use log::trace;

use crate::config::{DetMethod, DetOptions, PivotRule};
use crate::error::LinalgError;
use crate::grid::Grid;
use crate::matrix::Matrix;

/// A matrix that is guaranteed square at construction time.
#[derive(Clone, Debug)]
pub struct SquareMatrix {
    inner: Matrix,
}

impl SquareMatrix {
    /// A zero-filled n x n matrix.
    ///
    /// # Panics
    ///
    /// Panics when `size` is zero.
    pub fn zeros(size: usize) -> Self {
        Self {
            inner: Matrix::zeros(size, size),
        }
    }

    /// The n x n identity matrix: one on the main diagonal, zero elsewhere.
    ///
    /// # Panics
    ///
    /// Panics when `size` is zero.
    pub fn identity(size: usize) -> Self {
        Self {
            inner: Matrix::from_grid(Grid::eye(size)),
        }
    }

    /// Validate an existing matrix as square.
    ///
    /// Fails with [`LinalgError::NotSquare`] when `matrix` is rectangular.
    pub fn from_matrix(matrix: Matrix) -> Result<Self, LinalgError> {
        if !matrix.is_square() {
            return Err(LinalgError::NotSquare {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }
        Ok(Self { inner: matrix })
    }

    /// Build a square matrix from nested rows of values.
    ///
    /// Fails with [`LinalgError::NotSquare`] when the value grid is not
    /// square, in addition to the grid constructor errors.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, LinalgError> {
        Self::from_matrix(Matrix::from_rows(rows)?)
    }

    /// The number of rows (equal to the number of columns).
    pub fn size(&self) -> usize {
        self.inner.rows()
    }

    pub fn as_matrix(&self) -> &Matrix {
        &self.inner
    }

    pub fn into_matrix(self) -> Matrix {
        self.inner
    }

    /// Sum of the main-diagonal entries. Squareness is guaranteed by the
    /// type, so unlike [`Matrix::trace`] this cannot fail.
    pub fn trace(&self) -> f64 {
        (0..self.size()).map(|i| self[(i, i)]).sum()
    }

    /// True when every entry strictly below the main diagonal is exactly
    /// zero.
    pub fn is_upper_triangular(&self) -> bool {
        for row in 1..self.size() {
            for col in 0..row {
                if self[(row, col)] != 0.0 {
                    return false;
                }
            }
        }
        true
    }

    /// True when every entry strictly above the main diagonal is exactly
    /// zero.
    pub fn is_lower_triangular(&self) -> bool {
        for row in 0..self.size() {
            for col in row + 1..self.size() {
                if self[(row, col)] != 0.0 {
                    return false;
                }
            }
        }
        true
    }

    /// True when the matrix is upper- or lower-triangular.
    pub fn is_triangular(&self) -> bool {
        self.is_upper_triangular() || self.is_lower_triangular()
    }

    /// The square submatrix that remains after removing row `skip_row` and
    /// column `skip_col`, preserving the relative order of the remaining
    /// entries.
    ///
    /// Fails with [`LinalgError::IndexOutOfBounds`] when either index is
    /// out of range, and with [`LinalgError::ShapeTooSmall`] on a 1x1
    /// matrix, whose submatrix would be empty.
    pub fn minor_matrix(
        &self,
        skip_row: usize,
        skip_col: usize,
    ) -> Result<SquareMatrix, LinalgError> {
        self.check_index(skip_row, skip_col)?;
        if self.size() < 2 {
            return Err(LinalgError::ShapeTooSmall { rows: 1, cols: 1 });
        }
        Ok(self.minor_unchecked(skip_row, skip_col))
    }

    // Callers have already validated the indices and `size() >= 2`.
    fn minor_unchecked(&self, skip_row: usize, skip_col: usize) -> SquareMatrix {
        let n = self.size();
        let mut data = Vec::with_capacity((n - 1) * (n - 1));
        for row in 0..n {
            if row == skip_row {
                continue;
            }
            for col in 0..n {
                if col == skip_col {
                    continue;
                }
                data.push(self[(row, col)]);
            }
        }
        Self {
            inner: Matrix::from_grid(Grid::from_parts(n - 1, n - 1, data)),
        }
    }

    fn check_index(&self, row: usize, col: usize) -> Result<(), LinalgError> {
        if row >= self.size() {
            return Err(LinalgError::IndexOutOfBounds {
                index: row,
                bound: self.size(),
            });
        }
        if col >= self.size() {
            return Err(LinalgError::IndexOutOfBounds {
                index: col,
                bound: self.size(),
            });
        }
        Ok(())
    }

    /// Closed-form 2x2 determinant: `a00*a11 - a01*a10`.
    ///
    /// Fails with [`LinalgError::WrongSize`] unless the matrix is exactly
    /// 2x2.
    pub fn det_2x2(&self) -> Result<f64, LinalgError> {
        if self.size() != 2 {
            return Err(LinalgError::WrongSize {
                expected: 2,
                rows: self.size(),
                cols: self.size(),
            });
        }
        Ok(self.det2())
    }

    /// Closed-form 3x3 determinant by Sarrus' rule.
    ///
    /// Fails with [`LinalgError::WrongSize`] unless the matrix is exactly
    /// 3x3.
    pub fn sarrus(&self) -> Result<f64, LinalgError> {
        if self.size() != 3 {
            return Err(LinalgError::WrongSize {
                expected: 3,
                rows: self.size(),
                cols: self.size(),
            });
        }
        Ok(self.det3())
    }

    fn det2(&self) -> f64 {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    fn det3(&self) -> f64 {
        self[(0, 0)] * self[(1, 1)] * self[(2, 2)]
            + self[(0, 1)] * self[(1, 2)] * self[(2, 0)]
            + self[(0, 2)] * self[(1, 0)] * self[(2, 1)]
            - self[(0, 2)] * self[(1, 1)] * self[(2, 0)]
            - self[(0, 0)] * self[(1, 2)] * self[(2, 1)]
            - self[(0, 1)] * self[(1, 0)] * self[(2, 2)]
    }

    /// The determinant, using the default [`DetOptions`]: closed forms for
    /// sizes up to 3, cofactor expansion along the first row above that.
    pub fn determinant(&self) -> f64 {
        self.determinant_with(&DetOptions::default())
    }

    /// The determinant, computed with an explicit method and pivot rule.
    ///
    /// Every combination of options produces the same value; the options
    /// only trade work for simplicity. `DetMethod::Laplace` forces the
    /// general expansion even for sizes with a closed form, and
    /// `PivotRule::MostZeros` expands along the row with the most zero
    /// entries so that more terms of the sum vanish.
    pub fn determinant_with(&self, options: &DetOptions) -> f64 {
        match options.method {
            DetMethod::Auto => match self.size() {
                1 => self[(0, 0)],
                2 => self.det2(),
                3 => self.det3(),
                _ => self.expand(options),
            },
            DetMethod::Laplace => self.expand(options),
        }
    }

    /// General cofactor (Laplace) expansion along the first row, applied
    /// uniformly for every size. Exponential in the matrix size; equal to
    /// the closed forms wherever both are defined.
    pub fn laplace_determinant(&self) -> f64 {
        self.determinant_with(&DetOptions {
            method: DetMethod::Laplace,
            pivot: PivotRule::FirstRow,
        })
    }

    // One level of cofactor expansion; recurses through
    // `determinant_with` so the chosen options apply at every level.
    fn expand(&self, options: &DetOptions) -> f64 {
        let n = self.size();
        if n == 1 {
            return self[(0, 0)];
        }
        let row = self.expansion_row(options.pivot);
        trace!("cofactor expansion of a {} matrix along row {}", self.format_shape(), row);
        let mut det = 0.0;
        for col in 0..n {
            let entry = self[(row, col)];
            if entry == 0.0 {
                continue;
            }
            let minor = self.minor_unchecked(row, col).determinant_with(options);
            if (row + col) % 2 == 0 {
                det += entry * minor;
            } else {
                det -= entry * minor;
            }
        }
        det
    }

    // Pick the expansion row for one level of Laplace expansion.
    fn expansion_row(&self, rule: PivotRule) -> usize {
        match rule {
            PivotRule::FirstRow => 0,
            PivotRule::MostZeros => {
                let mut best_row = 0;
                let mut best_zeros = self.zeros_in_row(0);
                for row in 1..self.size() {
                    let zeros = self.zeros_in_row(row);
                    if zeros > best_zeros {
                        best_row = row;
                        best_zeros = zeros;
                    }
                }
                best_row
            }
        }
    }

    fn zeros_in_row(&self, row: usize) -> usize {
        (0..self.size()).filter(|&col| self[(row, col)] == 0.0).count()
    }

    /// The minor at `(row, col)`: the determinant of
    /// [`minor_matrix`](Self::minor_matrix).
    pub fn minor(&self, row: usize, col: usize) -> Result<f64, LinalgError> {
        Ok(self.minor_matrix(row, col)?.determinant())
    }

    /// The cofactor (algebraic complement) at `(row, col)`:
    /// `(-1)^(row + col)` times the minor. The sign alternates with the
    /// parity of `row + col`, never with the column alone.
    ///
    /// Fails with [`LinalgError::IndexOutOfBounds`] when either index is
    /// out of range. On a 1x1 matrix the only valid index pair is (0, 0)
    /// and the cofactor is the sole entry.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<f64, LinalgError> {
        self.check_index(row, col)?;
        if self.size() == 1 {
            return Ok(self[(0, 0)]);
        }
        let minor = self.minor_unchecked(row, col).determinant();
        if (row + col) % 2 == 0 {
            Ok(minor)
        } else {
            Ok(-minor)
        }
    }

    /// Adjugate (transposed cofactor) matrix. Not implemented; always
    /// fails with [`LinalgError::Unsupported`].
    pub fn adjugate(&self) -> Result<Matrix, LinalgError> {
        Err(LinalgError::Unsupported("adjugate"))
    }

    /// Matrix inverse. Not implemented; always fails with
    /// [`LinalgError::Unsupported`].
    pub fn inverse(&self) -> Result<SquareMatrix, LinalgError> {
        Err(LinalgError::Unsupported("inverse"))
    }
}

impl Deref for SquareMatrix {
    type Target = Matrix;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SquareMatrix {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl PartialEq for SquareMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl PartialEq<Matrix> for SquareMatrix {
    fn eq(&self, other: &Matrix) -> bool {
        &self.inner == other
    }
}

impl From<SquareMatrix> for Matrix {
    fn from(value: SquareMatrix) -> Self {
        value.inner
    }
}

impl fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}
