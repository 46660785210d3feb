//! Integration tests for the vector types, geometric value types, and the
//! determinant-engine options.

use lineal::geometry::{Line2, Line3, Point2, Point3};
use lineal::{DetMethod, DetOptions, LinalgError, Matrix, PivotRule, Vector, Vector2, Vector3};

// ---------------------------------------------------------------------------
// Vector basics
// ---------------------------------------------------------------------------

#[test]
fn zeros_and_len() {
    let v = Vector::zeros(4);
    assert_eq!(v.len(), 4);
    assert!(!v.is_empty());
    for value in v.iter() {
        assert_eq!(*value, 0.0);
    }
}

#[test]
fn from_vec_and_indexing() {
    let v = Vector::from_vec(vec![10.0, 20.0, 30.0]);
    assert_eq!(v[0], 10.0);
    assert_eq!(v[1], 20.0);
    assert_eq!(v[2], 30.0);
}

#[test]
fn get_and_set_bounds_checked() {
    let mut v = Vector::zeros(2);
    v.set(1, 5.0).unwrap();
    assert_eq!(v.get(1).unwrap(), 5.0);
    assert_eq!(
        v.get(2).unwrap_err(),
        LinalgError::IndexOutOfBounds { index: 2, bound: 2 }
    );
    assert!(v.set(9, 1.0).is_err());
}

// ---------------------------------------------------------------------------
// Vector arithmetic
// ---------------------------------------------------------------------------

#[test]
fn add_and_sub_concrete_values() {
    let a = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    let b = Vector::from_vec(vec![10.0, 20.0, 30.0]);
    assert_eq!(
        a.try_add(&b).unwrap(),
        Vector::from_vec(vec![11.0, 22.0, 33.0])
    );
    assert_eq!(
        b.try_sub(&a).unwrap(),
        Vector::from_vec(vec![9.0, 18.0, 27.0])
    );
}

#[test]
fn dimension_mismatch_errors() {
    let a = Vector::zeros(2);
    let b = Vector::zeros(3);
    assert_eq!(
        a.try_add(&b).unwrap_err(),
        LinalgError::DimensionMismatch { left: 2, right: 3 }
    );
    assert!(a.try_sub(&b).is_err());
}

#[test]
fn scale_returns_a_new_vector() {
    let v = Vector::from_vec(vec![1.0, -2.0]);
    let scaled = v.scale(3.0);
    assert_eq!(scaled, Vector::from_vec(vec![3.0, -6.0]));
    assert_eq!(v[0], 1.0);
}

#[test]
fn try_eq_requires_both_operands() {
    let v = Vector::zeros(2);
    assert_eq!(
        Vector::try_eq(Some(&v), None).unwrap_err(),
        LinalgError::NullOperand
    );
    assert_eq!(
        Vector::try_eq(None, None).unwrap_err(),
        LinalgError::NullOperand
    );
    assert!(Vector::try_eq(Some(&v), Some(&v.clone())).unwrap());
}

#[test]
fn equality_is_dimension_then_elementwise() {
    let a = Vector::from_vec(vec![1.0, 2.0]);
    let b = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    let c = Vector::from_vec(vec![1.0, 2.5]);
    assert!(!Vector::try_eq(Some(&a), Some(&b)).unwrap());
    assert!(!Vector::try_eq(Some(&a), Some(&c)).unwrap());
}

#[test]
fn display_renders_bracketed_components() {
    let v = Vector::from_vec(vec![1.0, 2.5, -3.0]);
    assert_eq!(v.to_string(), "[1, 2.5, -3]");
}

// ---------------------------------------------------------------------------
// Fixed-dimension vectors
// ---------------------------------------------------------------------------

#[test]
fn vector2_accessors_and_setters() {
    let mut v = Vector2::new(1.0, 2.0);
    assert_eq!(v.x(), 1.0);
    assert_eq!(v.y(), 2.0);
    v.set_x(9.0);
    v.set_y(8.0);
    assert_eq!(v.x(), 9.0);
    assert_eq!(v.y(), 8.0);
}

#[test]
fn vector2_from_points_runs_from_first_to_second() {
    let from = Point2::new(1.0, 1.0);
    let to = Point2::new(4.0, 5.0);
    let direction = Vector2::from_points(&from, &to);
    assert_eq!(direction.x(), 3.0);
    assert_eq!(direction.y(), 4.0);
}

#[test]
fn vector2_norm_and_normalized() {
    let v = Vector2::new(3.0, 4.0);
    assert_eq!(v.norm(), 5.0);
    let unit = v.normalized();
    assert_eq!(unit.x(), 0.6);
    assert_eq!(unit.y(), 0.8);
}

#[test]
fn vector2_zero_norm_normalization_is_non_finite() {
    let zero = Vector2::new(0.0, 0.0);
    let result = zero.normalized();
    assert!(!result.x().is_finite());
    assert!(!result.y().is_finite());
}

#[test]
fn vector2_try_from_vector_validates_dimension() {
    let ok = Vector2::try_from_vector(Vector::from_vec(vec![1.0, 2.0])).unwrap();
    assert_eq!(ok.y(), 2.0);
    assert_eq!(
        Vector2::try_from_vector(Vector::zeros(3)).unwrap_err(),
        LinalgError::WrongDimension {
            expected: 2,
            found: 3
        }
    );
}

#[test]
fn vector2_general_operations_apply_through_deref() {
    let a = Vector2::new(1.0, 2.0);
    let b = Vector2::new(3.0, 4.0);
    let sum = a.try_add(&b).unwrap();
    assert_eq!(sum, Vector::from_vec(vec![4.0, 6.0]));
}

#[test]
fn vector2_display() {
    assert_eq!(Vector2::new(1.0, -2.5).to_string(), "(1; -2.5)");
}

#[test]
fn vector3_accessors_norm_and_normalized() {
    let mut v = Vector3::new(2.0, 3.0, 6.0);
    assert_eq!(v.norm(), 7.0);
    let unit = v.normalized();
    assert_eq!(unit.x(), 2.0 / 7.0);
    assert_eq!(unit.y(), 3.0 / 7.0);
    assert_eq!(unit.z(), 6.0 / 7.0);
    v.set_z(0.0);
    assert_eq!(v.z(), 0.0);
}

#[test]
fn vector3_from_points_and_display() {
    let direction = Vector3::from_points(&Point3::new(0.0, 0.0, 0.0), &Point3::new(1.0, 2.0, 3.0));
    assert_eq!(direction.to_string(), "(1; 2; 3)");
}

#[test]
fn vector3_try_from_vector_validates_dimension() {
    assert!(Vector3::try_from_vector(Vector::zeros(3)).is_ok());
    assert_eq!(
        Vector3::try_from_vector(Vector::zeros(2)).unwrap_err(),
        LinalgError::WrongDimension {
            expected: 3,
            found: 2
        }
    );
}

// ---------------------------------------------------------------------------
// Matrix <-> vector extraction round trip
// ---------------------------------------------------------------------------

#[test]
fn extracted_rows_behave_as_vectors() {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let top = m.row_vector(0).unwrap();
    let bottom = m.row_vector(1).unwrap();
    assert_eq!(
        top.try_add(&bottom).unwrap(),
        Vector::from_vec(vec![4.0, 6.0])
    );
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

#[test]
fn points_are_plain_value_types() {
    let p = Point2::new(1.5, -2.0);
    let q = p; // Copy
    assert_eq!(p, q);
    assert_eq!(Point2::default(), Point2::new(0.0, 0.0));

    let p3 = Point3::new(1.0, 2.0, 3.0);
    assert_eq!(p3.z, 3.0);
}

#[test]
fn line2_through_points() {
    let line = Line2::through_points(Point2::new(1.0, 1.0), Point2::new(2.0, 3.0));
    assert_eq!(line.point, Point2::new(1.0, 1.0));
    assert_eq!(line.direction, Vector2::new(1.0, 2.0));
}

#[test]
fn line3_holds_point_and_direction() {
    let line = Line3::new(Point3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 0.0, 2.0));
    assert_eq!(line.point.z, 1.0);
    assert_eq!(line.direction.z(), 2.0);
}

#[test]
fn zero_length_directions_are_not_validated() {
    let line = Line2::new(Point2::new(1.0, 1.0), Vector2::new(0.0, 0.0));
    assert_eq!(line.direction.norm(), 0.0);
}

#[test]
fn points_round_trip_through_serde() {
    let p = Point3::new(1.0, -2.0, 0.5);
    let json = serde_json::to_string(&p).unwrap();
    let back: Point3 = serde_json::from_str(&json).unwrap();
    assert_eq!(p, back);
}

// ---------------------------------------------------------------------------
// Determinant options
// ---------------------------------------------------------------------------

#[test]
fn det_options_default() {
    let options = DetOptions::default();
    assert_eq!(options.method, DetMethod::Auto);
    assert_eq!(options.pivot, PivotRule::FirstRow);
}

#[test]
fn det_method_from_str() {
    let method: DetMethod = "laplace".parse().unwrap();
    assert_eq!(method, DetMethod::Laplace);
    let method: DetMethod = "AUTO".parse().unwrap();
    assert_eq!(method, DetMethod::Auto);
    assert!("gaussian".parse::<DetMethod>().is_err());
}

#[test]
fn pivot_rule_from_str() {
    let pivot: PivotRule = "most_zeros".parse().unwrap();
    assert_eq!(pivot, PivotRule::MostZeros);
    assert!("best_column".parse::<PivotRule>().is_err());
}

#[test]
fn det_options_round_trip_through_serde() {
    let options = DetOptions::new(DetMethod::Laplace, PivotRule::MostZeros);
    let json = serde_json::to_string(&options).unwrap();
    let back: DetOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(options, back);
}
