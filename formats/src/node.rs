//! The tree type behind the bundled [`SerdeJson`](crate::backend::SerdeJson)
//! backend.
//!
//! Unlike `serde_json::Value`, objects here are an ordered list of pairs, so
//! field order survives and duplicate names are representable. Numbers reuse
//! `serde_json::Number` with the `arbitrary_precision` feature, which keeps
//! every significant digit as written.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Number, Value};

/// One node of a JSON document. A document root is an [`Array`] or
/// [`Object`] node.
///
/// [`Array`]: JsonNode::Array
/// [`Object`]: JsonNode::Object
#[derive(Debug, Clone, PartialEq)]
pub enum JsonNode {
    /// The null value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number, held as its exact decimal digits.
    Number(Number),
    /// A string.
    String(String),
    /// An ordered array of nodes.
    Array(Vec<JsonNode>),
    /// An ordered list of fields; duplicate names stay in place.
    Object(Vec<(String, JsonNode)>),
}

impl Serialize for JsonNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Number(value) => value.serialize(serializer),
            Self::String(value) => serializer.serialize_str(value),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (name, value) in fields {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
        }
    }
}

impl From<Value> for JsonNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(value) => Self::Bool(value),
            Value::Number(value) => Self::Number(value),
            Value::String(value) => Self::String(value),
            Value::Array(items) => Self::Array(items.into_iter().map(Into::into).collect()),
            Value::Object(fields) => Self::Object(
                fields
                    .into_iter()
                    .map(|(name, value)| (name, value.into()))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_fields_serialize_positionally() {
        let node = JsonNode::Object(vec![
            ("a".to_string(), JsonNode::Bool(true)),
            ("a".to_string(), JsonNode::Bool(false)),
        ]);
        assert_eq!(
            serde_json::to_string(&node).unwrap_or_default(),
            r#"{"a":true,"a":false}"#
        );
    }

    #[test]
    fn conversion_from_value_keeps_field_order() {
        let value: Value = match serde_json::from_str(r#"{"z":1,"a":2,"m":3}"#) {
            Ok(value) => value,
            Err(error) => unreachable!("well-formed document: {error}"),
        };
        let JsonNode::Object(fields) = JsonNode::from(value) else {
            unreachable!("an object parses to an object node");
        };
        let names: Vec<&str> = fields.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }
}
