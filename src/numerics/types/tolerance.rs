// src/numerics/types/tolerance.rs
// Approximate equality for vectors, component by component, via the approx crate.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::traits::Scalar;
use super::vector::Vector;

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: Scalar + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: Scalar + RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: Scalar + UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::types::fixed::Vector3;
    use approx::{assert_abs_diff_eq, assert_relative_eq, assert_relative_ne, assert_ulps_eq};

    #[test]
    fn test_vectors_compare_within_tolerance() {
        let a = Vector3::new(0.1_f64 + 0.2, 1.0, -3.0);
        let b = Vector3::new(0.3_f64, 1.0, -3.0);
        assert_ne!(a, b);
        assert_relative_eq!(a, b);
        assert_ulps_eq!(a, b);
        assert_abs_diff_eq!(a, b, epsilon = 1e-12);
    }

    #[test]
    fn test_one_component_outside_tolerance() {
        let a = Vector3::new(1.0_f32, 2.0, 3.0);
        let b = Vector3::new(1.0_f32, 2.0, 3.01);
        assert_relative_ne!(a, b);
        assert!(a.abs_diff_eq(&b, 0.1));
        assert!(!a.abs_diff_eq(&b, 0.001));
    }
}
