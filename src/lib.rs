//! Vector template library.
//!
//! Generic, stack-resident numeric vectors of any compile-time dimension, with
//! named-accessor conveniences for the 2D, 3D and 4D cases.

pub mod error;
pub mod numerics;

pub use error::VectorError;
pub use numerics::types::fixed::{Vector2, Vector3, Vector4};
pub use numerics::types::traits::{FloatingPoint, Scalar};
pub use numerics::types::vector::Vector;
