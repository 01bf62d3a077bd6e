// tests/integration_tests.rs
//! Integration tests for the public vector surface

use approx::assert_relative_eq;
use vtl::{Vector, Vector2, Vector3, Vector4, VectorError};

#[test]
fn test_add_3d_scenario() {
    let sum = Vector3::new(1, 2, 3) + Vector3::new(4, 5, 6);
    assert_eq!(sum, Vector3::new(5, 7, 9));

    let sum_f = Vector3::new(1.0_f64, 2.0, 3.0) + Vector3::new(4.0, 5.0, 6.0);
    assert_eq!(sum_f, Vector3::new(5.0, 7.0, 9.0));
}

#[test]
fn test_length_2d_scenario() {
    assert_eq!(Vector2::new(3.0_f64, 4.0).length(), 5.0);
}

#[test]
fn test_construct_and_read_back() {
    let v4 = Vector4::new(1.25_f32, -2.5, 3.75, 8.0);
    assert_eq!([v4[0], v4[1], v4[2], v4[3]], [1.25, -2.5, 3.75, 8.0]);
    assert_eq!([v4.x(), v4.y(), v4.z(), v4.w()], [1.25, -2.5, 3.75, 8.0]);

    let v7 = Vector::from_array([1_u64, 2, 3, 4, 5, 6, 7]);
    for i in 0..7 {
        assert_eq!(v7[i], i as u64 + 1);
        assert_eq!(v7.get(i), Some(&(i as u64 + 1)));
    }
    assert_eq!(v7.get(7), None);
}

#[test]
fn test_generic_dimension_workflow() {
    let samples = [
        Vector::from_array([1.0_f64, 0.0, 2.0, 0.0, 4.0]),
        Vector::from_array([0.0_f64, 3.0, 0.0, 1.0, 0.0]),
    ];

    let total: Vector<f64, 5> = samples.iter().sum();
    assert_eq!(total, Vector::from_array([1.0, 3.0, 2.0, 1.0, 4.0]));

    let mean = total / samples.len() as f64;
    assert_relative_eq!(mean.sum(), 5.5);

    let unit = total.try_unit_normal().unwrap();
    assert_relative_eq!(unit.norm(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(total.p_norm(2.0).unwrap(), total.magnitude(), epsilon = 1e-12);

    let rendered = total.to_string();
    assert_eq!(rendered, "(1,3,2,1,4)");
    let parsed: Vector<f64, 5> = rendered.parse().unwrap();
    assert_eq!(parsed, total);
}

#[test]
fn test_zero_vector_norm_policy() {
    let zero = Vector3::<f64>::zero();
    assert_eq!(zero.norm(), 0.0);
    assert_eq!(zero.try_unit_normal(), Err(VectorError::ZeroNorm));
    assert_eq!(zero.try_sum_normal(), Err(VectorError::ZeroNorm));
    assert_eq!(
        Vector3::new(1.0_f64, 2.0, 3.0).p_norm(0.0),
        Err(VectorError::InvalidNormOrder { order: 0.0 })
    );
}

#[test]
fn test_sum_normal_weights() {
    let weights = Vector4::new(2.0_f64, -1.0, 1.0, 0.0).sum_normal();
    assert_relative_eq!(weights, Vector4::new(0.5, -0.25, 0.25, 0.0));
    assert_relative_eq!(weights.abs_sum(), 1.0);
}

#[test]
fn test_errors_propagate_with_question_mark() {
    fn parse_and_normalize(text: &str) -> Result<Vector3<f64>, VectorError> {
        let v: Vector3<f64> = text.parse()?;
        v.try_unit_normal()
    }

    assert!(parse_and_normalize("(0,0,2)").is_ok());
    assert_eq!(parse_and_normalize("(0,0,0)"), Err(VectorError::ZeroNorm));
    assert_eq!(
        parse_and_normalize("(0,0)"),
        Err(VectorError::DimensionMismatch {
            expected: 3,
            found: 2
        })
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_binary_and_json_interchange() {
    let v = Vector3::new(0.5_f32, -1.0, 2.0);

    let bytes = v.to_bytes().unwrap();
    assert_eq!(Vector3::<f32>::from_bytes(&bytes).unwrap(), v);

    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(serde_json::from_str::<Vector3<f32>>(&json).unwrap(), v);
}
