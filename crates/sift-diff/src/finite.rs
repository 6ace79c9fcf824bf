// File: sift-diff/src/finite.rs
// Purpose: Detect NaN and infinite floats before they collapse into JSON null

use serde::ser::{self, Serialize};
use std::fmt;

/// Outcome of walking a value that did not come back clean
#[derive(Debug)]
pub(crate) enum FloatCheck {
    /// A NaN or infinite float was found
    NonFinite,
    /// The value's own `Serialize` impl failed
    Custom,
}

impl fmt::Display for FloatCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatCheck::NonFinite => write!(f, "non-finite float"),
            FloatCheck::Custom => write!(f, "serialization failed"),
        }
    }
}

impl std::error::Error for FloatCheck {}

impl ser::Error for FloatCheck {
    fn custom<T: fmt::Display>(_msg: T) -> Self {
        FloatCheck::Custom
    }
}

/// Whether `value` holds a NaN or infinite float at any depth
pub(crate) fn has_non_finite<T: Serialize + ?Sized>(value: &T) -> bool {
    matches!(value.serialize(FiniteWalker), Err(FloatCheck::NonFinite))
}

/// Serializer that produces nothing and fails on the first non-finite float
#[derive(Clone, Copy)]
struct FiniteWalker;

macro_rules! accept {
    ($($method:ident($ty:ty)),* $(,)?) => {
        $(
            fn $method(self, _v: $ty) -> Result<(), FloatCheck> {
                Ok(())
            }
        )*
    };
}

impl ser::Serializer for FiniteWalker {
    type Ok = ();
    type Error = FloatCheck;
    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    accept! {
        serialize_bool(bool),
        serialize_i8(i8),
        serialize_i16(i16),
        serialize_i32(i32),
        serialize_i64(i64),
        serialize_i128(i128),
        serialize_u8(u8),
        serialize_u16(u16),
        serialize_u32(u32),
        serialize_u64(u64),
        serialize_u128(u128),
        serialize_char(char),
        serialize_str(&str),
        serialize_bytes(&[u8]),
        serialize_unit_struct(&'static str),
    }

    fn serialize_f32(self, v: f32) -> Result<(), FloatCheck> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<(), FloatCheck> {
        if v.is_finite() {
            Ok(())
        } else {
            Err(FloatCheck::NonFinite)
        }
    }

    fn serialize_none(self) -> Result<(), FloatCheck> {
        Ok(())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<(), FloatCheck> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<(), FloatCheck> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
    ) -> Result<(), FloatCheck> {
        Ok(())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<(), FloatCheck> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        value: &T,
    ) -> Result<(), FloatCheck> {
        value.serialize(self)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self, FloatCheck> {
        Ok(self)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self, FloatCheck> {
        Ok(self)
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<Self, FloatCheck> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self, FloatCheck> {
        Ok(self)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self, FloatCheck> {
        Ok(self)
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self, FloatCheck> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self, FloatCheck> {
        Ok(self)
    }
}

impl ser::SerializeSeq for FiniteWalker {
    type Ok = ();
    type Error = FloatCheck;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FloatCheck> {
        value.serialize(*self)
    }

    fn end(self) -> Result<(), FloatCheck> {
        Ok(())
    }
}

impl ser::SerializeTuple for FiniteWalker {
    type Ok = ();
    type Error = FloatCheck;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FloatCheck> {
        value.serialize(*self)
    }

    fn end(self) -> Result<(), FloatCheck> {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for FiniteWalker {
    type Ok = ();
    type Error = FloatCheck;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FloatCheck> {
        value.serialize(*self)
    }

    fn end(self) -> Result<(), FloatCheck> {
        Ok(())
    }
}

impl ser::SerializeTupleVariant for FiniteWalker {
    type Ok = ();
    type Error = FloatCheck;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FloatCheck> {
        value.serialize(*self)
    }

    fn end(self) -> Result<(), FloatCheck> {
        Ok(())
    }
}

impl ser::SerializeMap for FiniteWalker {
    type Ok = ();
    type Error = FloatCheck;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), FloatCheck> {
        key.serialize(*self)
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FloatCheck> {
        value.serialize(*self)
    }

    fn end(self) -> Result<(), FloatCheck> {
        Ok(())
    }
}

impl ser::SerializeStruct for FiniteWalker {
    type Ok = ();
    type Error = FloatCheck;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _key: &'static str,
        value: &T,
    ) -> Result<(), FloatCheck> {
        value.serialize(*self)
    }

    fn end(self) -> Result<(), FloatCheck> {
        Ok(())
    }
}

impl ser::SerializeStructVariant for FiniteWalker {
    type Ok = ();
    type Error = FloatCheck;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _key: &'static str,
        value: &T,
    ) -> Result<(), FloatCheck> {
        value.serialize(*self)
    }

    fn end(self) -> Result<(), FloatCheck> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_finite_values_pass() {
        assert!(!has_non_finite(&1.5f64));
        assert!(!has_non_finite(&vec![0.0f32, -2.0]));
        assert!(!has_non_finite(&Some("text")));
        assert!(!has_non_finite(&()));
    }

    #[test]
    fn test_top_level_non_finite() {
        assert!(has_non_finite(&f64::NAN));
        assert!(has_non_finite(&f64::INFINITY));
        assert!(has_non_finite(&f32::NEG_INFINITY));
    }

    #[test]
    fn test_nested_non_finite() {
        assert!(has_non_finite(&vec![1.0, f64::NAN]));
        assert!(has_non_finite(&Some((1u8, f64::INFINITY))));

        let mut map = BTreeMap::new();
        map.insert("reading", f64::NEG_INFINITY);
        assert!(has_non_finite(&map));
    }
}
