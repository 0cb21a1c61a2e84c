//! # Refract Formats
//!
//! The JSON side of refract: a backend-agnostic value algebra, a
//! serde_json-backed implementation of it, JSON body accessors, and the
//! uniform error-response renderer.
//!
//! ## The value algebra
//!
//! Everything that builds or renders JSON in this workspace goes through the
//! [`Json`] trait: constructors for each primitive, array/object assembly,
//! and parse/compact/pretty conversions. Code written against the trait is
//! indifferent to the backing tree; [`SerdeJson`] is the bundled backend and
//! preserves declared field order, positional duplicate names, and every
//! significant digit of arbitrary-precision numbers.
//!
//! ## Example
//!
//! ```
//! use refract_formats::{Json, SerdeJson};
//!
//! let j = SerdeJson;
//! let document = j.obj(vec![
//!     ("hello", j.string(Some("world"))),
//!     ("count", j.int(Some(2))),
//! ]);
//! assert_eq!(j.compact(&document), r#"{"hello":"world","count":2}"#);
//! ```

pub mod backend;
pub mod body;
pub mod json;
pub mod node;
pub mod renderer;

pub use backend::SerdeJson;
pub use body::json_body;
pub use json::{Json, ParseError};
pub use node::JsonNode;
pub use renderer::ErrorResponseRenderer;
