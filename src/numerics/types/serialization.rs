// src/numerics/types/serialization.rs
// serde support for Vector<T, N> and a compact bincode codec on top of it.

use core::fmt;
use core::marker::PhantomData;

use bincode::config;
use serde::de::{self, DeserializeOwned, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use super::traits::Scalar;
use super::vector::Vector;
use crate::error::VectorError;

// A vector serializes as an N-tuple, so self-describing formats see a plain
// sequence and bincode writes no length prefix.
impl<T, const N: usize> Serialize for Vector<T, N>
where
    T: Scalar + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(N)?;
        for component in self.iter() {
            tuple.serialize_element(component)?;
        }
        tuple.end()
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for Vector<T, N>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(N, ComponentsVisitor(PhantomData))
    }
}

struct ComponentsVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> Visitor<'de> for ComponentsVisitor<T, N>
where
    T: Scalar + Deserialize<'de>,
{
    type Value = Vector<T, N>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a sequence of {N} vector components")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut vector = Vector::zero();
        for (index, slot) in vector.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(index, &self))?;
        }
        Ok(vector)
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Encode with bincode's standard configuration.
    pub fn to_bytes(&self) -> Result<Vec<u8>, VectorError>
    where
        T: Serialize,
    {
        bincode::serde::encode_to_vec(self, config::standard()).map_err(|err| {
            debug!(error = %err, dimension = N, "vector encoding failed");
            VectorError::Encode(err.to_string())
        })
    }

    /// Decode bytes produced by [`Vector::to_bytes`]. Every byte must be consumed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VectorError>
    where
        T: DeserializeOwned,
    {
        let (vector, consumed): (Self, usize) =
            bincode::serde::decode_from_slice(bytes, config::standard()).map_err(|err| {
                debug!(error = %err, dimension = N, "vector decoding failed");
                VectorError::Decode(err.to_string())
            })?;

        if consumed != bytes.len() {
            let trailing = bytes.len() - consumed;
            debug!(trailing, dimension = N, "trailing bytes after encoded vector");
            return Err(VectorError::Decode(format!(
                "{trailing} trailing bytes after encoded vector"
            )));
        }
        Ok(vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::types::fixed::{Vector2, Vector3, Vector4};

    #[test]
    fn test_bincode_roundtrip() {
        let v = Vector3::new(1.0f32, 2.0f32, 3.0f32);

        // Serialize to bytes
        let encoded = v.to_bytes().expect("serialize failed");
        assert_eq!(encoded.len(), 3 * 4);

        // Deserialize back
        let decoded = Vector3::<f32>::from_bytes(&encoded).expect("deserialize failed");
        assert_eq!(v, decoded);
    }

    #[test]
    fn test_bincode_generic_roundtrip() {
        let v_f64 = Vector::from_array([10.0f64, 20.0, 30.0, 40.0, 50.0, 60.0]);
        let dec_f64 = Vector::<f64, 6>::from_bytes(&v_f64.to_bytes().unwrap()).unwrap();
        assert_eq!(v_f64, dec_f64);

        let v_i32 = Vector4::new(-1_i32, 0, 1, 300);
        let dec_i32 = Vector4::<i32>::from_bytes(&v_i32.to_bytes().unwrap()).unwrap();
        assert_eq!(v_i32, dec_i32);
    }

    #[test]
    fn test_decode_rejects_short_and_long_input() {
        let bytes = Vector3::new(1.0f32, 2.0, 3.0).to_bytes().unwrap();

        let short = Vector3::<f32>::from_bytes(&bytes[..8]);
        assert!(matches!(short, Err(VectorError::Decode(_))));

        let as_2d = Vector2::<f32>::from_bytes(&bytes);
        assert_eq!(
            as_2d,
            Err(VectorError::Decode(
                "4 trailing bytes after encoded vector".to_owned()
            ))
        );
    }

    #[test]
    fn test_json_shape() {
        let v = Vector3::new(1.5_f64, -2.0, 0.25);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.5,-2.0,0.25]");

        let back: Vector3<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_json_wrong_length() {
        assert!(serde_json::from_str::<Vector3<f64>>("[1.0,2.0]").is_err());
        assert!(serde_json::from_str::<Vector3<f64>>("[1.0,2.0,3.0,4.0]").is_err());
    }
}
