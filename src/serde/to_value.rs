use serde::ser::{self, Impossible, Serialize};

use crate::error::{Error, ErrorKind};
use crate::{Normalize, ObjectDict, Value};

/// A [`Serializer`][ser::Serializer] which normalizes into a [`Value`].
pub(crate) struct ValueSerializer;

#[inline]
fn unsupported(kind: &'static str) -> Error {
    Error::new(ErrorKind::UnsupportedValueKind(kind))
}

/// Wrap a value in a single-entry mapping keyed by an enum variant.
fn variant(variant: &'static str, value: Value) -> Result<Value, Error> {
    let mut dict = ObjectDict::new();
    dict.insert(variant, value)?;
    Ok(Value::Mapping(dict))
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeSequence;
    type SerializeTuple = SerializeSequence;
    type SerializeTupleStruct = SerializeSequence;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMapping;
    type SerializeStruct = SerializeMapping;
    type SerializeStructVariant = SerializeStructVariant;

    #[inline]
    fn serialize_bool(self, v: bool) -> Result<Value, Error> {
        Ok(Value::Bool(v))
    }

    #[inline]
    fn serialize_i8(self, v: i8) -> Result<Value, Error> {
        v.normalize()
    }

    #[inline]
    fn serialize_i16(self, v: i16) -> Result<Value, Error> {
        v.normalize()
    }

    #[inline]
    fn serialize_i32(self, v: i32) -> Result<Value, Error> {
        v.normalize()
    }

    #[inline]
    fn serialize_i64(self, v: i64) -> Result<Value, Error> {
        v.normalize()
    }

    #[inline]
    fn serialize_i128(self, v: i128) -> Result<Value, Error> {
        v.normalize()
    }

    #[inline]
    fn serialize_u8(self, v: u8) -> Result<Value, Error> {
        v.normalize()
    }

    #[inline]
    fn serialize_u16(self, v: u16) -> Result<Value, Error> {
        v.normalize()
    }

    #[inline]
    fn serialize_u32(self, v: u32) -> Result<Value, Error> {
        v.normalize()
    }

    #[inline]
    fn serialize_u64(self, v: u64) -> Result<Value, Error> {
        v.normalize()
    }

    #[inline]
    fn serialize_u128(self, v: u128) -> Result<Value, Error> {
        v.normalize()
    }

    #[inline]
    fn serialize_f32(self, v: f32) -> Result<Value, Error> {
        v.normalize()
    }

    #[inline]
    fn serialize_f64(self, v: f64) -> Result<Value, Error> {
        v.normalize()
    }

    #[inline]
    fn serialize_char(self, v: char) -> Result<Value, Error> {
        v.normalize()
    }

    #[inline]
    fn serialize_str(self, v: &str) -> Result<Value, Error> {
        v.normalize()
    }

    #[inline]
    fn serialize_bytes(self, _: &[u8]) -> Result<Value, Error> {
        Err(unsupported("bytes"))
    }

    #[inline]
    fn serialize_none(self) -> Result<Value, Error> {
        Err(unsupported("none"))
    }

    #[inline]
    fn serialize_some<T>(self, value: &T) -> Result<Value, Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    #[inline]
    fn serialize_unit(self) -> Result<Value, Error> {
        Err(unsupported("unit"))
    }

    #[inline]
    fn serialize_unit_struct(self, name: &'static str) -> Result<Value, Error> {
        Err(unsupported(name))
    }

    #[inline]
    fn serialize_unit_variant(
        self,
        _: &'static str,
        _: u32,
        variant: &'static str,
    ) -> Result<Value, Error> {
        variant.normalize()
    }

    #[inline]
    fn serialize_newtype_struct<T>(self, _: &'static str, value: &T) -> Result<Value, Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _: &'static str,
        _: u32,
        name: &'static str,
        value: &T,
    ) -> Result<Value, Error>
    where
        T: ?Sized + Serialize,
    {
        variant(name, value.serialize(ValueSerializer)?)
    }

    #[inline]
    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq, Error> {
        Ok(SerializeSequence::new(len.unwrap_or_default()))
    }

    #[inline]
    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple, Error> {
        Ok(SerializeSequence::new(len))
    }

    #[inline]
    fn serialize_tuple_struct(
        self,
        _: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct, Error> {
        Ok(SerializeSequence::new(len))
    }

    #[inline]
    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant, Error> {
        Ok(SerializeTupleVariant {
            variant,
            inner: SerializeSequence::new(len),
        })
    }

    #[inline]
    fn serialize_map(self, _: Option<usize>) -> Result<Self::SerializeMap, Error> {
        Ok(SerializeMapping::new())
    }

    #[inline]
    fn serialize_struct(self, _: &'static str, _: usize) -> Result<Self::SerializeStruct, Error> {
        Ok(SerializeMapping::new())
    }

    #[inline]
    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        variant: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStructVariant, Error> {
        Ok(SerializeStructVariant {
            variant,
            inner: SerializeMapping::new(),
        })
    }
}

pub(crate) struct SerializeSequence {
    items: Vec<Value>,
}

impl SerializeSequence {
    #[inline]
    fn new(len: usize) -> Self {
        Self {
            items: Vec::with_capacity(len),
        }
    }

    #[inline]
    fn push<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }
}

impl ser::SerializeSeq for SerializeSequence {
    type Ok = Value;
    type Error = Error;

    #[inline]
    fn serialize_element<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    #[inline]
    fn end(self) -> Result<Value, Error> {
        Ok(Value::Sequence(self.items))
    }
}

impl ser::SerializeTuple for SerializeSequence {
    type Ok = Value;
    type Error = Error;

    #[inline]
    fn serialize_element<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    #[inline]
    fn end(self) -> Result<Value, Error> {
        Ok(Value::Sequence(self.items))
    }
}

impl ser::SerializeTupleStruct for SerializeSequence {
    type Ok = Value;
    type Error = Error;

    #[inline]
    fn serialize_field<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    #[inline]
    fn end(self) -> Result<Value, Error> {
        Ok(Value::Sequence(self.items))
    }
}

pub(crate) struct SerializeTupleVariant {
    variant: &'static str,
    inner: SerializeSequence,
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    #[inline]
    fn serialize_field<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        self.inner.push(value)
    }

    #[inline]
    fn end(self) -> Result<Value, Error> {
        variant(self.variant, Value::Sequence(self.inner.items))
    }
}

pub(crate) struct SerializeMapping {
    dict: ObjectDict,
    key: Option<String>,
}

impl SerializeMapping {
    #[inline]
    fn new() -> Self {
        Self {
            dict: ObjectDict::new(),
            key: None,
        }
    }

    #[inline]
    fn insert<T>(&mut self, key: &str, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        self.dict.insert(key, value.serialize(ValueSerializer)?)?;
        Ok(())
    }
}

impl ser::SerializeMap for SerializeMapping {
    type Ok = Value;
    type Error = Error;

    #[inline]
    fn serialize_key<T>(&mut self, key: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        self.key = Some(key.serialize(KeySerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        let Some(key) = self.key.take() else {
            return Err(<Error as ser::Error>::custom(
                "serialize_value called before serialize_key",
            ));
        };

        self.insert(&key, value)
    }

    #[inline]
    fn end(self) -> Result<Value, Error> {
        Ok(Value::Mapping(self.dict))
    }
}

impl ser::SerializeStruct for SerializeMapping {
    type Ok = Value;
    type Error = Error;

    #[inline]
    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        self.insert(key, value)
    }

    #[inline]
    fn end(self) -> Result<Value, Error> {
        Ok(Value::Mapping(self.dict))
    }
}

pub(crate) struct SerializeStructVariant {
    variant: &'static str,
    inner: SerializeMapping,
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    #[inline]
    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        self.inner.insert(key, value)
    }

    #[inline]
    fn end(self) -> Result<Value, Error> {
        variant(self.variant, Value::Mapping(self.inner.dict))
    }
}

/// Serializer for mapping keys, which only accepts strings.
struct KeySerializer;

#[inline]
fn invalid_key(kind: &'static str) -> Error {
    Error::new(ErrorKind::InvalidKeyKind(kind))
}

impl ser::Serializer for KeySerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = Impossible<String, Error>;
    type SerializeStructVariant = Impossible<String, Error>;

    #[inline]
    fn serialize_str(self, v: &str) -> Result<String, Error> {
        Ok(v.to_owned())
    }

    #[inline]
    fn serialize_char(self, v: char) -> Result<String, Error> {
        Ok(v.to_string())
    }

    #[inline]
    fn serialize_unit_variant(
        self,
        _: &'static str,
        _: u32,
        variant: &'static str,
    ) -> Result<String, Error> {
        Ok(variant.to_owned())
    }

    #[inline]
    fn serialize_newtype_struct<T>(self, _: &'static str, value: &T) -> Result<String, Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    #[inline]
    fn serialize_bool(self, _: bool) -> Result<String, Error> {
        Err(invalid_key("bool"))
    }

    #[inline]
    fn serialize_i8(self, _: i8) -> Result<String, Error> {
        Err(invalid_key("integer"))
    }

    #[inline]
    fn serialize_i16(self, _: i16) -> Result<String, Error> {
        Err(invalid_key("integer"))
    }

    #[inline]
    fn serialize_i32(self, _: i32) -> Result<String, Error> {
        Err(invalid_key("integer"))
    }

    #[inline]
    fn serialize_i64(self, _: i64) -> Result<String, Error> {
        Err(invalid_key("integer"))
    }

    #[inline]
    fn serialize_i128(self, _: i128) -> Result<String, Error> {
        Err(invalid_key("integer"))
    }

    #[inline]
    fn serialize_u8(self, _: u8) -> Result<String, Error> {
        Err(invalid_key("integer"))
    }

    #[inline]
    fn serialize_u16(self, _: u16) -> Result<String, Error> {
        Err(invalid_key("integer"))
    }

    #[inline]
    fn serialize_u32(self, _: u32) -> Result<String, Error> {
        Err(invalid_key("integer"))
    }

    #[inline]
    fn serialize_u64(self, _: u64) -> Result<String, Error> {
        Err(invalid_key("integer"))
    }

    #[inline]
    fn serialize_u128(self, _: u128) -> Result<String, Error> {
        Err(invalid_key("integer"))
    }

    #[inline]
    fn serialize_f32(self, _: f32) -> Result<String, Error> {
        Err(invalid_key("float"))
    }

    #[inline]
    fn serialize_f64(self, _: f64) -> Result<String, Error> {
        Err(invalid_key("float"))
    }

    #[inline]
    fn serialize_bytes(self, _: &[u8]) -> Result<String, Error> {
        Err(invalid_key("bytes"))
    }

    #[inline]
    fn serialize_none(self) -> Result<String, Error> {
        Err(invalid_key("none"))
    }

    #[inline]
    fn serialize_some<T>(self, value: &T) -> Result<String, Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    #[inline]
    fn serialize_unit(self) -> Result<String, Error> {
        Err(invalid_key("unit"))
    }

    #[inline]
    fn serialize_unit_struct(self, name: &'static str) -> Result<String, Error> {
        Err(invalid_key(name))
    }

    #[inline]
    fn serialize_newtype_variant<T>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: &T,
    ) -> Result<String, Error>
    where
        T: ?Sized + Serialize,
    {
        Err(invalid_key("enum variant"))
    }

    #[inline]
    fn serialize_seq(self, _: Option<usize>) -> Result<Self::SerializeSeq, Error> {
        Err(invalid_key("sequence"))
    }

    #[inline]
    fn serialize_tuple(self, _: usize) -> Result<Self::SerializeTuple, Error> {
        Err(invalid_key("tuple"))
    }

    #[inline]
    fn serialize_tuple_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleStruct, Error> {
        Err(invalid_key("tuple struct"))
    }

    #[inline]
    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleVariant, Error> {
        Err(invalid_key("enum variant"))
    }

    #[inline]
    fn serialize_map(self, _: Option<usize>) -> Result<Self::SerializeMap, Error> {
        Err(invalid_key("mapping"))
    }

    #[inline]
    fn serialize_struct(self, _: &'static str, _: usize) -> Result<Self::SerializeStruct, Error> {
        Err(invalid_key("struct"))
    }

    #[inline]
    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStructVariant, Error> {
        Err(invalid_key("enum variant"))
    }
}
