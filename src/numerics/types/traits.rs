// src/numerics/types/traits.rs
// Scalar bounds shared by every vector type.

use core::fmt::{Debug, Display};

use num_traits::{Float, Num};

/// Scalar is the numeric bound for vector components.
///
/// Any copyable, ordered type with the four arithmetic operators and a zero and
/// one qualifies, so every primitive integer and float is a `Scalar`.
pub trait Scalar: Copy + PartialOrd + Debug + Display + Num {}

impl<T> Scalar for T where T: Copy + PartialOrd + Debug + Display + Num {}

/// FloatingPoint adds the operations norms need (`sqrt`, `powf`, `abs`, ...).
pub trait FloatingPoint: Scalar + Float {}

impl<T> FloatingPoint for T where T: Scalar + Float {}
