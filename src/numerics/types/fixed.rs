// src/numerics/types/fixed.rs
// Vector2 / Vector3 / Vector4: named-accessor conveniences over Vector<T, N>.

use super::traits::Scalar;
use super::vector::Vector;

/// Two-component vector, `f32` by default.
pub type Vector2<T = f32> = Vector<T, 2>;
/// Three-component vector, `f32` by default.
pub type Vector3<T = f32> = Vector<T, 3>;
/// Four-component vector, `f32` by default.
pub type Vector4<T = f32> = Vector<T, 4>;

impl<T: Scalar> Vector<T, 2> {
    /// Construct a new Vector2
    pub const fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }

    pub fn x(&self) -> T {
        self[0]
    }

    pub fn y(&self) -> T {
        self[1]
    }

    pub fn x_mut(&mut self) -> &mut T {
        &mut self[0]
    }

    pub fn y_mut(&mut self) -> &mut T {
        &mut self[1]
    }

    /// Append a third component.
    pub fn extend(self, z: T) -> Vector3<T> {
        Vector3::new(self.x(), self.y(), z)
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Construct a new Vector3
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    pub fn x(&self) -> T {
        self[0]
    }

    pub fn y(&self) -> T {
        self[1]
    }

    pub fn z(&self) -> T {
        self[2]
    }

    pub fn x_mut(&mut self) -> &mut T {
        &mut self[0]
    }

    pub fn y_mut(&mut self) -> &mut T {
        &mut self[1]
    }

    pub fn z_mut(&mut self) -> &mut T {
        &mut self[2]
    }

    /// The first two components.
    pub fn xy(&self) -> Vector2<T> {
        Vector2::new(self.x(), self.y())
    }

    /// Append a fourth component.
    pub fn extend(self, w: T) -> Vector4<T> {
        Vector4::new(self.x(), self.y(), self.z(), w)
    }

    /// Cross product (right-handed determinant formula).
    pub fn cross(&self, other: &Self) -> Self {
        let (a, b) = (self, other);
        Self::new(
            a.y() * b.z() - a.z() * b.y(),
            a.z() * b.x() - a.x() * b.z(),
            a.x() * b.y() - a.y() * b.x(),
        )
    }
}

impl<T: Scalar> Vector<T, 4> {
    /// Construct a new Vector4
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_array([x, y, z, w])
    }

    pub fn x(&self) -> T {
        self[0]
    }

    pub fn y(&self) -> T {
        self[1]
    }

    pub fn z(&self) -> T {
        self[2]
    }

    pub fn w(&self) -> T {
        self[3]
    }

    /// Same as [`Vector::w`], for code that treats the fourth axis as time.
    pub fn t(&self) -> T {
        self.w()
    }

    pub fn x_mut(&mut self) -> &mut T {
        &mut self[0]
    }

    pub fn y_mut(&mut self) -> &mut T {
        &mut self[1]
    }

    pub fn z_mut(&mut self) -> &mut T {
        &mut self[2]
    }

    pub fn w_mut(&mut self) -> &mut T {
        &mut self[3]
    }

    pub fn t_mut(&mut self) -> &mut T {
        self.w_mut()
    }

    /// The first three components.
    pub fn xyz(&self) -> Vector3<T> {
        Vector3::new(self.x(), self.y(), self.z())
    }
}

// Conversions between the fixed vectors and tuples

impl<T: Scalar> From<(T, T)> for Vector2<T> {
    fn from(tuple: (T, T)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl<T: Scalar> From<(T, T, T)> for Vector3<T> {
    fn from(tuple: (T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl<T: Scalar> From<(T, T, T, T)> for Vector4<T> {
    fn from(tuple: (T, T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2, tuple.3)
    }
}

impl<T: Scalar> From<Vector2<T>> for (T, T) {
    fn from(v: Vector2<T>) -> Self {
        (v.x(), v.y())
    }
}

impl<T: Scalar> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self {
        (v.x(), v.y(), v.z())
    }
}

impl<T: Scalar> From<Vector4<T>> for (T, T, T, T) {
    fn from(v: Vector4<T>) -> Self {
        (v.x(), v.y(), v.z(), v.w())
    }
}
