use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::{ObjectDict, Value};

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::String(string) => serializer.serialize_str(string),
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;

                for item in items {
                    seq.serialize_element(item)?;
                }

                seq.end()
            }
            Value::Mapping(dict) => dict.serialize(serializer),
        }
    }
}

impl Serialize for ObjectDict {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;

        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}
