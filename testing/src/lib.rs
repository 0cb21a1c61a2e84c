//! # Refract Testing
//!
//! Testing utilities for refract lenses:
//!
//! - [`TestMessage`]: an in-memory [`Carrier`] for exercising accessors
//!   without a real HTTP stack
//! - [`check_contract`]: one call that asserts the full behavioral contract
//!   of a bidirectional accessor group — presence, absence, invalid decode,
//!   and the round-trip law
//!
//! ## Example
//!
//! ```
//! use refract_core::cookie;
//! use refract_testing::{check_contract, TestMessage};
//!
//! let message = TestMessage::new().with_cookie("hello", "world");
//! let lens = cookie::<TestMessage>().required("hello");
//! assert_eq!(lens.extract(&message), Ok("world".to_string()));
//!
//! let as_int = cookie::<TestMessage>()
//!     .try_map(|raw| raw.parse::<i32>(), |value: i32| value.to_string());
//! check_contract(&as_int, "123", Some("not-a-number"), &123);
//! ```

pub mod contract;
pub mod message;

pub use contract::check_contract;
pub use message::TestMessage;

// Re-exported so downstream test code only needs this crate in scope.
pub use refract_core::Carrier;
