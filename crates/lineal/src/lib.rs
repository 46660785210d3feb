//! lineal: dense matrix and vector arithmetic.
//!
//! This crate provides small, exclusively owned linear-algebra value types:
//! a rectangular [`Matrix`] over row-major storage, a square-validated
//! [`SquareMatrix`] with trace, triangularity checks, and a cofactor-
//! expansion determinant engine, plus [`Vector`] types and plain 2D/3D
//! geometric tuples.
//!
//! All operations are pure, synchronous value transformations; fallible
//! ones return [`LinalgError`] before any mutation takes place. Equality
//! is exact floating-point comparison throughout, which is a documented
//! precision limitation rather than an accident.
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod matrix;
pub mod square;
pub mod vector;

pub use config::{DetMethod, DetOptions, PivotRule};
pub use error::LinalgError;
pub use grid::Grid;
pub use matrix::Matrix;
pub use square::SquareMatrix;
pub use vector::{Vector, Vector2, Vector3};
