//! The serde_json-backed implementation of the value algebra.

use bigdecimal::{BigDecimal, FromPrimitive};
use num_bigint::BigInt;
use serde_json::Number;

use crate::json::{Json, ParseError};
use crate::node::JsonNode;

/// The bundled [`Json`] backend.
///
/// Parsing and printing delegate to serde_json; numbers pass through as
/// exact decimal digits (the `arbitrary_precision` feature) and object field
/// order is preserved on both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerdeJson;

/// Parse pre-validated decimal digits into a number node.
///
/// The digit strings come from `BigDecimal`/`BigInt` rendering and are
/// always a valid JSON number; the fallback can only trigger on a bug in
/// those crates.
fn number_node(digits: &str) -> JsonNode {
    serde_json::from_str::<Number>(digits).map_or(JsonNode::Null, JsonNode::Number)
}

impl Json for SerdeJson {
    type Root = JsonNode;
    type Node = JsonNode;

    fn string(&self, value: Option<&str>) -> JsonNode {
        value.map_or(JsonNode::Null, |value| JsonNode::String(value.to_string()))
    }

    fn int(&self, value: Option<i32>) -> JsonNode {
        value.map_or(JsonNode::Null, |value| JsonNode::Number(Number::from(value)))
    }

    fn long(&self, value: Option<i64>) -> JsonNode {
        value.map_or(JsonNode::Null, |value| JsonNode::Number(Number::from(value)))
    }

    fn double(&self, value: Option<f64>) -> JsonNode {
        // Expand the exact binary value; non-finite doubles have no JSON
        // form. Normalizing drops the trailing zeros the binary-to-decimal
        // decomposition manufactures (1.0 must render as 1, not 1.000…0).
        value
            .and_then(BigDecimal::from_f64)
            .map_or(JsonNode::Null, |value| {
                number_node(&value.normalized().to_plain_string())
            })
    }

    fn decimal(&self, value: Option<BigDecimal>) -> JsonNode {
        value.map_or(JsonNode::Null, |value| {
            number_node(&value.to_plain_string())
        })
    }

    fn big_integer(&self, value: Option<BigInt>) -> JsonNode {
        value.map_or(JsonNode::Null, |value| number_node(&value.to_string()))
    }

    fn boolean(&self, value: Option<bool>) -> JsonNode {
        value.map_or(JsonNode::Null, JsonNode::Bool)
    }

    fn null(&self) -> JsonNode {
        JsonNode::Null
    }

    fn array<I>(&self, items: I) -> JsonNode
    where
        I: IntoIterator<Item = JsonNode>,
    {
        JsonNode::Array(items.into_iter().collect())
    }

    fn obj<N, I>(&self, fields: I) -> JsonNode
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, JsonNode)>,
    {
        JsonNode::Object(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }

    fn parse(&self, text: &str) -> Result<JsonNode, ParseError> {
        serde_json::from_str::<serde_json::Value>(text)
            .map(JsonNode::from)
            .map_err(ParseError::new)
    }

    fn compact(&self, root: &JsonNode) -> String {
        serde_json::to_string(root).unwrap_or_else(|error| {
            tracing::error!(%error, "compact JSON rendering failed");
            String::new()
        })
    }

    fn pretty(&self, root: &JsonNode) -> String {
        serde_json::to_string_pretty(root).unwrap_or_else(|error| {
            tracing::error!(%error, "pretty JSON rendering failed");
            String::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_EXPANSION_OF_1_2: &str =
        "1.1999999999999999555910790149937383830547332763671875";

    #[test]
    fn serializes_object_with_declared_field_order() {
        let j = SerdeJson;
        let input = j.obj(vec![
            ("string", j.string(Some("value"))),
            ("double", j.double(Some(1.0))),
            ("long", j.long(Some(10))),
            ("boolean", j.boolean(Some(true))),
            ("bigDec", j.decimal(BigDecimal::from_f64(1.2))),
            ("bigInt", j.big_integer("12344".parse::<BigInt>().ok())),
            ("null", j.null()),
            ("int", j.int(Some(2))),
            ("array", j.array(vec![j.string(Some("")), j.int(Some(123))])),
        ]);

        let expected = format!(
            r#"{{"string":"value","double":1,"long":10,"boolean":true,"bigDec":{FULL_EXPANSION_OF_1_2},"bigInt":12344,"null":null,"int":2,"array":["",123]}}"#
        );
        assert_eq!(j.compact(&input), expected);
    }

    #[test]
    fn decimal_from_nearest_double_expands_every_digit() {
        let j = SerdeJson;
        let root = j.array(vec![j.decimal(BigDecimal::from_f64(1.2))]);
        assert_eq!(j.compact(&root), format!("[{FULL_EXPANSION_OF_1_2}]"));
    }

    #[test]
    fn null_inputs_yield_null_nodes() {
        let j = SerdeJson;
        let root = j.array(vec![
            j.string(None),
            j.int(None),
            j.long(None),
            j.double(None),
            j.decimal(None),
            j.big_integer(None),
            j.boolean(None),
        ]);
        assert_eq!(j.compact(&root), "[null,null,null,null,null,null,null]");
    }

    #[test]
    fn non_finite_doubles_yield_null_nodes() {
        let j = SerdeJson;
        let root = j.array(vec![
            j.double(Some(f64::NAN)),
            j.double(Some(f64::INFINITY)),
        ]);
        assert_eq!(j.compact(&root), "[null,null]");
    }

    #[test]
    fn duplicate_field_names_are_preserved() {
        let j = SerdeJson;
        let root = j.obj(vec![
            ("key", j.string(Some("first"))),
            ("key", j.string(Some("second"))),
        ]);
        assert_eq!(j.compact(&root), r#"{"key":"first","key":"second"}"#);
    }

    #[test]
    fn parse_round_trips_compact_output() {
        let j = SerdeJson;
        let expected = j.obj(vec![("hello", j.string(Some("world")))]);
        assert_eq!(j.parse(r#"{"hello":"world"}"#).ok(), Some(expected));
    }

    #[test]
    fn invalid_text_blows_up_parse() {
        let j = SerdeJson;
        assert!(j.parse("").is_err());
        assert!(j.parse("{unterminated").is_err());
    }

    #[test]
    fn pretty_rendering_is_indented() {
        let j = SerdeJson;
        let root = j.obj(vec![("hello", j.string(Some("world")))]);
        assert_eq!(j.pretty(&root), "{\n  \"hello\": \"world\"\n}");
    }
}
