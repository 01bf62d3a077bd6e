// src/numerics/types/parse.rs
// Parsing of the `(v0,v1,...)` text form produced by Display.

use core::str::FromStr;

use tracing::debug;

use super::traits::Scalar;
use super::vector::Vector;
use crate::error::VectorError;

/// Parses the text produced by `Display`. Whitespace around the parentheses and
/// around each component is ignored.
impl<T, const N: usize> FromStr for Vector<T, N>
where
    T: Scalar + FromStr,
{
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| {
                debug!(input = s, "vector text is not parenthesized");
                VectorError::MissingParentheses
            })?;

        let pieces: Vec<&str> = if inner.trim().is_empty() {
            Vec::new()
        } else {
            inner.split(',').map(str::trim).collect()
        };

        if pieces.len() != N {
            debug!(expected = N, found = pieces.len(), "wrong number of vector components");
            return Err(VectorError::DimensionMismatch {
                expected: N,
                found: pieces.len(),
            });
        }

        let mut vector = Self::zero();
        for (index, (slot, piece)) in vector.iter_mut().zip(&pieces).enumerate() {
            *slot = piece.parse().map_err(|_| {
                debug!(index, text = *piece, "vector component is not a valid scalar");
                VectorError::InvalidComponent {
                    index,
                    text: (*piece).to_owned(),
                }
            })?;
        }
        Ok(vector)
    }
}
