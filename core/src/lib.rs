//! # Refract Core
//!
//! Typed, composable, bidirectional accessors ("lenses") over immutable
//! HTTP-style carriers.
//!
//! A lens is declared once and names a location in a carrier — a query
//! parameter, header, path segment, cookie, form field, or the body. The
//! same declared lens both *extracts* a typed value from any carrier
//! instance (with validation) and *injects* a typed value back, producing a
//! new carrier. Failures are values, never panics: a failing application
//! yields a [`LensFailure`] carrying `Missing` or `Invalid` entries tagged
//! with the accessor's metadata.
//!
//! ## Core Concepts
//!
//! - **Carrier**: any immutable named-value container implementing
//!   [`Carrier`]; writes return new instances.
//! - **Accessor group**: a [`BiDiLensSpec`] for one [`Location`], composed
//!   with custom types through `map`/`try_map`.
//! - **Cardinality**: `required(name)`, `optional(name)`, and
//!   `multi().required(name)`/`multi().optional(name)`.
//! - **Batch validation**: [`validate`] runs every accessor and aggregates
//!   every failure in declaration order.
//!
//! ## Example
//!
//! ```ignore
//! use refract_core::{cookie, query, validate};
//!
//! // Declared once, applied to many requests.
//! let session = cookie::<Request>().required("session");
//! let page = query::<Request>()
//!     .try_map(|raw| raw.parse::<u32>(), |page: u32| page.to_string())
//!     .optional("page");
//!
//! let request = session.inject("abc123".to_string(), Request::default());
//! assert_eq!(session.extract(&request), Ok("abc123".to_string()));
//! validate(&request, &[&session, &page])?;
//! ```
//!
//! Every entity here — metadata, lenses, failures — is immutable after
//! construction, so declared accessors are freely shared across threads.

pub mod carrier;
pub mod failure;
pub mod lens;
pub mod meta;
pub mod param;
pub mod sources;
pub mod spec;
pub mod validate;

pub use carrier::{Carrier, Location};
pub use failure::{Failure, LensFailure};
pub use lens::{BiDiLens, Lens};
pub use meta::AccessorMeta;
pub use param::ParamKind;
pub use sources::{body_text, cookie, form_field, header, path, query};
pub use spec::{BiDiLensSpec, BiDiMultiLensSpec, LensGet, LensSet, LensSpec, MultiLensSpec};
pub use validate::{Checkable, validate};
