// src/numerics/types/vector.rs
// Vector<T, N> generic implementation: fixed dimension, stack-resident storage.
// Uses the Scalar and FloatingPoint traits from super::traits.

use core::fmt;
use core::ops::{Index, IndexMut};

use tracing::debug;

use super::traits::{FloatingPoint, Scalar};
use crate::error::VectorError;

/// Vector is an ordered, fixed-length sequence of `N` scalar components.
///
/// The dimension is part of the type and never changes. Copies are cheap and
/// nothing is heap allocated. Dimensions 2 to 4 have aliases with named
/// accessors in [`super::fixed`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector<T: Scalar, const N: usize> {
    components: [T; N],
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Number of components.
    pub const DIMENSION: usize = N;

    /// Construct a vector from its components in order.
    pub const fn from_array(components: [T; N]) -> Self {
        Self { components }
    }

    /// Construct a vector from an ordered sequence whose length must be `N`.
    pub fn from_slice(values: &[T]) -> Result<Self, VectorError> {
        let components: [T; N] = values.try_into().map_err(|_| VectorError::DimensionMismatch {
            expected: N,
            found: values.len(),
        })?;
        Ok(Self { components })
    }

    /// Vector with every component set to `value`.
    pub fn splat(value: T) -> Self {
        Self {
            components: [value; N],
        }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self::splat(T::one())
    }

    pub const fn dimension(&self) -> usize {
        N
    }

    /// Component at `index`, or `None` if the index is out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.components.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.components.get_mut(index)
    }

    /// Overwrite the component at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), VectorError> {
        match self.components.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => {
                debug!(index, dimension = N, "rejected out-of-range component write");
                Err(VectorError::IndexOutOfBounds {
                    index,
                    dimension: N,
                })
            }
        }
    }

    pub const fn as_array(&self) -> &[T; N] {
        &self.components
    }

    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.components
    }

    pub fn into_array(self) -> [T; N] {
        self.components
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.components.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.components.iter_mut()
    }

    /// Apply `f` to every component, producing a vector of the same dimension.
    pub fn map<U: Scalar>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector {
            components: self.components.map(f),
        }
    }

    /// Sum of all components.
    pub fn sum(&self) -> T {
        self.components
            .iter()
            .fold(T::zero(), |acc, &component| acc + component)
    }

    /// Dot product: sum of the elementwise products.
    pub fn dot(&self, other: &Self) -> T {
        self.components
            .iter()
            .zip(other.components.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Return the squared length (avoids sqrt)
    pub fn magnitude_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: FloatingPoint, const N: usize> Vector<T, N> {
    /// Euclidean length: square root of the sum of squares.
    ///
    /// Components are scaled by the largest magnitude first, so the result
    /// neither overflows nor underflows unless the true length does.
    pub fn magnitude(&self) -> T {
        self.scaled_norm(|ratio| ratio * ratio, T::sqrt)
    }

    /// Alias for [`Vector::magnitude`].
    pub fn length(&self) -> T {
        self.magnitude()
    }

    /// Alias for [`Vector::magnitude`], the 2-norm.
    pub fn norm(&self) -> T {
        self.magnitude()
    }

    /// Component-wise absolute value.
    pub fn abs(&self) -> Self {
        self.map(T::abs)
    }

    /// Sum of absolute values (the 1-norm).
    pub fn abs_sum(&self) -> T {
        self.components
            .iter()
            .fold(T::zero(), |acc, &component| acc + component.abs())
    }

    /// Largest absolute value (the infinity norm). Zero for an empty vector,
    /// NaN if any component is NaN.
    pub fn max_norm(&self) -> T {
        self.components.iter().fold(T::zero(), |acc, &component| {
            if acc.is_nan() || component.is_nan() {
                T::nan()
            } else {
                acc.max(component.abs())
            }
        })
    }

    /// Generalized p-norm `(Σ|xᵢ|ᵖ)^(1/p)`.
    ///
    /// `p = +∞` yields [`Vector::max_norm`]. Orders that are zero, negative or
    /// NaN are rejected with [`VectorError::InvalidNormOrder`].
    pub fn p_norm(&self, p: T) -> Result<T, VectorError> {
        if p.is_nan() || p <= T::zero() {
            let order = p.to_f64().unwrap_or(f64::NAN);
            debug!(order, dimension = N, "rejected p-norm order");
            return Err(VectorError::InvalidNormOrder { order });
        }
        if p.is_infinite() {
            return Ok(self.max_norm());
        }
        if p == T::one() {
            return Ok(self.abs_sum());
        }
        Ok(self.scaled_norm(|ratio| ratio.powf(p), |total| total.powf(p.recip())))
    }

    // m * root(Σ power(|xᵢ| / m)) with m = max_norm. Zero, infinite and NaN
    // maxima are returned as-is.
    fn scaled_norm(&self, power: impl Fn(T) -> T, root: impl Fn(T) -> T) -> T {
        let largest = self.max_norm();
        if largest.is_nan() || largest.is_infinite() || largest == T::zero() {
            return largest;
        }
        let total = self
            .components
            .iter()
            .fold(T::zero(), |acc, &component| acc + power(component.abs() / largest));
        largest * root(total)
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Self) -> T {
        (*self - *other).magnitude()
    }

    /// Divide by the Euclidean norm.
    ///
    /// A zero vector yields NaN components; use [`Vector::try_unit_normal`] to
    /// get an error instead.
    pub fn unit_normal(&self) -> Self {
        *self / self.magnitude()
    }

    pub fn try_unit_normal(&self) -> Result<Self, VectorError> {
        let divisor = Self::checked_divisor(self.magnitude())?;
        Ok(*self / divisor)
    }

    /// Divide by the sum of absolute component values.
    ///
    /// A zero vector yields NaN components; use [`Vector::try_sum_normal`] to
    /// get an error instead.
    pub fn sum_normal(&self) -> Self {
        *self / self.abs_sum()
    }

    pub fn try_sum_normal(&self) -> Result<Self, VectorError> {
        let divisor = Self::checked_divisor(self.abs_sum())?;
        Ok(*self / divisor)
    }

    fn checked_divisor(norm: T) -> Result<T, VectorError> {
        if norm == T::zero() {
            debug!(dimension = N, "cannot normalize a zero-norm vector");
            Err(VectorError::ZeroNorm)
        } else if !norm.is_finite() {
            debug!(dimension = N, "cannot normalize a vector with a non-finite norm");
            Err(VectorError::NonFiniteNorm)
        } else {
            Ok(norm)
        }
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Renders `(v0,v1,...)` with no whitespace. Formatter options such as
/// precision apply to each component.
impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (index, component) in self.components.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            fmt::Display::fmt(component, f)?;
        }
        f.write_str(")")
    }
}

// Indexing panics on out-of-range indices, like arrays do.

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.components[index]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.components[index]
    }
}

// Conversions between Vector<T, N> and arrays / slices

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(components: [T; N]) -> Self {
        Self { components }
    }
}

impl<T: Scalar, const N: usize> From<&[T; N]> for Vector<T, N> {
    fn from(components: &[T; N]) -> Self {
        Self {
            components: *components,
        }
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.components
    }
}

impl<T: Scalar, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = VectorError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl<T: Scalar, const N: usize> TryFrom<Vec<T>> for Vector<T, N> {
    type Error = VectorError;

    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

impl<T: Scalar, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.components
    }
}

impl<T: Scalar, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a, T: Scalar, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
