//! Owned 1D vectors and their fixed-dimension specializations.
//!
//! `Vector` is a general vector of `f64` values whose dimension is fixed
//! at construction. `Vector2` and `Vector3` are validated wrappers that
//! add named coordinate accessors, the Euclidean norm, and normalization;
//! the general operations stay available through deref.

use std::fmt;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice::Iter;

use log::warn;

use crate::error::LinalgError;
use crate::geometry::{Point2, Point3};

/// A vector of `f64` values with a fixed dimension.
#[derive(Clone, Debug)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// A zero-filled vector of the given dimension.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            data: vec![0.0; dimension],
        }
    }

    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// The dimension of the vector.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Bounds-checked read of a single component.
    pub fn get(&self, index: usize) -> Result<f64, LinalgError> {
        self.data
            .get(index)
            .copied()
            .ok_or(LinalgError::IndexOutOfBounds {
                index,
                bound: self.data.len(),
            })
    }

    /// Bounds-checked write of a single component.
    pub fn set(&mut self, index: usize, value: f64) -> Result<(), LinalgError> {
        let bound = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(LinalgError::IndexOutOfBounds { index, bound }),
        }
    }

    /// Elementwise sum. Fails with [`LinalgError::DimensionMismatch`]
    /// unless both operands have the same dimension.
    pub fn try_add(&self, rhs: &Vector) -> Result<Vector, LinalgError> {
        self.zip_with(rhs, |a, b| a + b)
    }

    /// Elementwise difference. Fails with
    /// [`LinalgError::DimensionMismatch`] unless both operands have the
    /// same dimension.
    pub fn try_sub(&self, rhs: &Vector) -> Result<Vector, LinalgError> {
        self.zip_with(rhs, |a, b| a - b)
    }

    fn zip_with<F>(&self, rhs: &Vector, f: F) -> Result<Vector, LinalgError>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.len() != rhs.len() {
            return Err(LinalgError::DimensionMismatch {
                left: self.len(),
                right: rhs.len(),
            });
        }
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    /// Multiply every component by a scalar, returning a new vector.
    pub fn scale(&self, scalar: f64) -> Vector {
        Self {
            data: self.data.iter().map(|v| v * scalar).collect(),
        }
    }

    /// Compare two optional vectors for equality.
    ///
    /// Fails with [`LinalgError::NullOperand`] when either operand is
    /// absent. Present operands compare by dimension first, then component
    /// by component using **exact** floating-point equality (no epsilon
    /// tolerance).
    pub fn try_eq(lhs: Option<&Vector>, rhs: Option<&Vector>) -> Result<bool, LinalgError> {
        match (lhs, rhs) {
            (Some(a), Some(b)) => Ok(a == b),
            _ => Err(LinalgError::NullOperand),
        }
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl From<Vec<f64>> for Vector {
    fn from(value: Vec<f64>) -> Self {
        Self::from_vec(value)
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

/// A two-dimensional vector with named coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector2 {
    inner: Vector,
}

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            inner: Vector::from_vec(vec![x, y]),
        }
    }

    /// The direction from `from` to `to`.
    pub fn from_points(from: &Point2, to: &Point2) -> Self {
        Self::new(to.x - from.x, to.y - from.y)
    }

    /// Validate a general vector as two-dimensional.
    ///
    /// Fails with [`LinalgError::WrongDimension`] otherwise.
    pub fn try_from_vector(vector: Vector) -> Result<Self, LinalgError> {
        if vector.len() != 2 {
            return Err(LinalgError::WrongDimension {
                expected: 2,
                found: vector.len(),
            });
        }
        Ok(Self { inner: vector })
    }

    pub fn x(&self) -> f64 {
        self.inner[0]
    }

    pub fn y(&self) -> f64 {
        self.inner[1]
    }

    pub fn set_x(&mut self, x: f64) {
        self.inner[0] = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.inner[1] = y;
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        (self.x() * self.x() + self.y() * self.y()).sqrt()
    }

    /// A unit-length copy of this vector.
    ///
    /// Divides each coordinate by the norm. A zero-length vector has norm
    /// zero, and the result then has non-finite components; this is
    /// reported with a warning rather than an error.
    pub fn normalized(&self) -> Vector2 {
        let norm = self.norm();
        if norm == 0.0 {
            warn!("normalizing a zero-length vector yields non-finite components");
        }
        Self::new(self.x() / norm, self.y() / norm)
    }
}

impl Deref for Vector2 {
    type Target = Vector;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for Vector2 {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl From<Vector2> for Vector {
    fn from(value: Vector2) -> Self {
        value.inner
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}; {})", self.x(), self.y())
    }
}

/// A three-dimensional vector with named coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector3 {
    inner: Vector,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            inner: Vector::from_vec(vec![x, y, z]),
        }
    }

    /// The direction from `from` to `to`.
    pub fn from_points(from: &Point3, to: &Point3) -> Self {
        Self::new(to.x - from.x, to.y - from.y, to.z - from.z)
    }

    /// Validate a general vector as three-dimensional.
    ///
    /// Fails with [`LinalgError::WrongDimension`] otherwise.
    pub fn try_from_vector(vector: Vector) -> Result<Self, LinalgError> {
        if vector.len() != 3 {
            return Err(LinalgError::WrongDimension {
                expected: 3,
                found: vector.len(),
            });
        }
        Ok(Self { inner: vector })
    }

    pub fn x(&self) -> f64 {
        self.inner[0]
    }

    pub fn y(&self) -> f64 {
        self.inner[1]
    }

    pub fn z(&self) -> f64 {
        self.inner[2]
    }

    pub fn set_x(&mut self, x: f64) {
        self.inner[0] = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.inner[1] = y;
    }

    pub fn set_z(&mut self, z: f64) {
        self.inner[2] = z;
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        (self.x() * self.x() + self.y() * self.y() + self.z() * self.z()).sqrt()
    }

    /// A unit-length copy of this vector.
    ///
    /// Divides each coordinate by the norm. A zero-length vector has norm
    /// zero, and the result then has non-finite components; this is
    /// reported with a warning rather than an error.
    pub fn normalized(&self) -> Vector3 {
        let norm = self.norm();
        if norm == 0.0 {
            warn!("normalizing a zero-length vector yields non-finite components");
        }
        Self::new(self.x() / norm, self.y() / norm, self.z() / norm)
    }
}

impl Deref for Vector3 {
    type Target = Vector;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for Vector3 {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl From<Vector3> for Vector {
    fn from(value: Vector3) -> Self {
        value.inner
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}; {}; {})", self.x(), self.y(), self.z())
    }
}
