// src/numerics/types/ops.rs
// Component-wise operators for Vector<T, N>, against vectors and scalars.

use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::traits::Scalar;
use super::vector::Vector;

// Each binary operator is defined through its compound form, so both share a
// single per-component loop.
macro_rules! impl_componentwise_op {
    ($op:ident :: $method:ident, $assign:ident :: $assign_method:ident, $sym:tt) => {
        impl<T: Scalar, const N: usize> $assign for Vector<T, N> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                for (lhs, rhs) in self.iter_mut().zip(rhs) {
                    *lhs = *lhs $sym rhs;
                }
            }
        }

        impl<T: Scalar, const N: usize> $assign<T> for Vector<T, N> {
            #[inline]
            fn $assign_method(&mut self, rhs: T) {
                for lhs in self.iter_mut() {
                    *lhs = *lhs $sym rhs;
                }
            }
        }

        impl<T: Scalar, const N: usize> $op for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: Self) -> Self {
                $assign::$assign_method(&mut self, rhs);
                self
            }
        }

        impl<T: Scalar, const N: usize> $op<T> for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: T) -> Self {
                $assign::$assign_method(&mut self, rhs);
                self
            }
        }
    };
}

impl_componentwise_op!(Add::add, AddAssign::add_assign, +);
impl_componentwise_op!(Sub::sub, SubAssign::sub_assign, -);
impl_componentwise_op!(Mul::mul, MulAssign::mul_assign, *);
impl_componentwise_op!(Div::div, DivAssign::div_assign, /);

impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|component| -component)
    }
}

impl<T: Scalar, const N: usize> Sum for Vector<T, N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + v)
    }
}

impl<'a, T: Scalar, const N: usize> Sum<&'a Vector<T, N>> for Vector<T, N> {
    fn sum<I: Iterator<Item = &'a Vector<T, N>>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + *v)
    }
}

// scalar * vector, which cannot be written generically over T.
macro_rules! impl_scalar_lhs_mul {
    ($($scalar:ty),*) => {
        $(
            impl<const N: usize> Mul<Vector<$scalar, N>> for $scalar {
                type Output = Vector<$scalar, N>;

                #[inline]
                fn mul(self, rhs: Vector<$scalar, N>) -> Vector<$scalar, N> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
