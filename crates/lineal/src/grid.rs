//! Dense row-major 2D storage.
//!
//! `Grid` is the backing container for the matrix types: a flat `Vec` plus
//! a fixed shape. All rows have the same length by construction, and the
//! shape never changes after a grid has been created.

use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};

use crate::error::LinalgError;

/// A dense, row-major 2D container with a fixed, non-empty shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Grid<T> {
    /// Build a grid from a flat row-major buffer.
    ///
    /// Fails with [`LinalgError::ShapeTooSmall`] for an empty shape and
    /// [`LinalgError::ShapeDataMismatch`] when the buffer length does not
    /// equal `rows * cols`.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, LinalgError> {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 {
            return Err(LinalgError::ShapeTooSmall { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(LinalgError::ShapeDataMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a grid from nested rows.
    ///
    /// Fails with [`LinalgError::RaggedRows`] when the rows do not all have
    /// the same length, and [`LinalgError::ShapeTooSmall`] when there are no
    /// rows or the rows are empty.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, LinalgError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if nrows == 0 || ncols == 0 {
            return Err(LinalgError::ShapeTooSmall {
                rows: nrows,
                cols: ncols,
            });
        }
        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(LinalgError::RaggedRows {
                    row: i,
                    expected: ncols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    // Internal constructor for code paths that have already produced a
    // buffer of the right length.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of stored values.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Bounds-checked read access.
    pub fn get(&self, row: usize, col: usize) -> Result<&T, LinalgError> {
        self.check_index(row, col)?;
        Ok(&self.data[self.offset(row, col)])
    }

    /// Bounds-checked write access.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), LinalgError> {
        self.check_index(row, col)?;
        let offset = self.offset(row, col);
        self.data[offset] = value;
        Ok(())
    }

    fn check_index(&self, row: usize, col: usize) -> Result<(), LinalgError> {
        if row >= self.rows {
            return Err(LinalgError::IndexOutOfBounds {
                index: row,
                bound: self.rows,
            });
        }
        if col >= self.cols {
            return Err(LinalgError::IndexOutOfBounds {
                index: col,
                bound: self.cols,
            });
        }
        Ok(())
    }

    /// Borrow one row as a slice.
    ///
    /// # Panics
    ///
    /// Panics when `row` is out of range.
    pub fn row_slice(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Map every value, producing a grid of the same shape.
    pub fn mapv<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T> Grid<T>
where
    T: Clone + Zero,
{
    /// A zero-filled grid.
    ///
    /// # Panics
    ///
    /// Panics when either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be non-zero");
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> Grid<T>
where
    T: Clone + Zero + One,
{
    /// The n x n identity grid: one on the main diagonal, zero elsewhere.
    ///
    /// # Panics
    ///
    /// Panics when `n` is zero.
    pub fn eye(n: usize) -> Self {
        let mut grid = Self::zeros(n, n);
        for i in 0..n {
            let offset = grid.offset(i, i);
            grid.data[offset] = T::one();
        }
        grid
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        &self.data[self.offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}
