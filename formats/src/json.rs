//! The JSON value algebra.
//!
//! [`Json`] is the minimal constructor/conversion surface the rest of the
//! workspace programs against. Callers building bodies or diagnostics never
//! see a concrete tree shape; swapping the backing JSON implementation
//! changes zero caller code. [`SerdeJson`](crate::backend::SerdeJson) is the
//! bundled backend.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use thiserror::Error;

/// A malformed document was handed to [`Json::parse`].
///
/// Distinct from the accessor-level `Missing`/`Invalid` taxonomy: a document
/// that does not parse makes every field-level concern meaningless, so the
/// parse error fails the whole application that needed the document.
#[derive(Error, Debug)]
#[error("malformed JSON document: {message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    /// Wrap a backend's parse diagnostic.
    pub fn new(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// A generic interface over an abstract JSON tree.
///
/// Two node types are distinguished, mirroring the grammar: `Root` is a
/// complete document (array or object) and `Node` any value inside one. A
/// backend may use a single type for both; the `Root: Into<Node>` bound is
/// what lets documents nest.
///
/// Constructors over `Option` inputs are total: `None` yields the JSON null
/// node rather than failing.
pub trait Json {
    /// A complete document: an array or object.
    type Root: Into<Self::Node> + Clone;
    /// Any value inside a document.
    type Node: Clone;

    /// A string node, or null for `None`.
    fn string(&self, value: Option<&str>) -> Self::Node;

    /// A number node from a 32-bit integer, or null for `None`.
    fn int(&self, value: Option<i32>) -> Self::Node;

    /// A number node from a 64-bit integer, or null for `None`.
    fn long(&self, value: Option<i64>) -> Self::Node;

    /// A number node from a double, or null for `None`.
    ///
    /// The double's exact binary value is expanded to decimal digits; it is
    /// never re-rounded through IEEE-754 on the way out. Non-finite inputs
    /// have no JSON representation and yield null.
    fn double(&self, value: Option<f64>) -> Self::Node;

    /// A number node from an arbitrary-precision decimal, or null for
    /// `None`. All significant digits are preserved through rendering.
    fn decimal(&self, value: Option<BigDecimal>) -> Self::Node;

    /// A number node from an arbitrary-precision integer, or null for
    /// `None`.
    fn big_integer(&self, value: Option<BigInt>) -> Self::Node;

    /// A boolean node, or null for `None`.
    fn boolean(&self, value: Option<bool>) -> Self::Node;

    /// The null node.
    fn null(&self) -> Self::Node;

    /// An array document from ordered items.
    fn array<I>(&self, items: I) -> Self::Root
    where
        I: IntoIterator<Item = Self::Node>;

    /// An object document from ordered `(name, value)` pairs.
    ///
    /// Field order is preserved as given, and duplicate names are kept
    /// positionally — never dropped or merged.
    fn obj<N, I>(&self, fields: I) -> Self::Root
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Self::Node)>;

    /// Parse a document from text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the text is not a well-formed document.
    fn parse(&self, text: &str) -> Result<Self::Root, ParseError>;

    /// Render a document on a single line with no insignificant whitespace.
    fn compact(&self, root: &Self::Root) -> String;

    /// Render a document formatted for human reading.
    fn pretty(&self, root: &Self::Root) -> String;
}
