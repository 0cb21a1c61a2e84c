//! The carrier contract consumed by the lens framework.
//!
//! A carrier is any immutable named-value container an accessor can read
//! from and write to: an HTTP request or response, or anything shaped like
//! one. The framework never touches a concrete message type; everything goes
//! through the [`Carrier`] trait.

use std::fmt;

/// The named region of a carrier an accessor targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// A query-string parameter.
    Query,
    /// An HTTP header.
    Header,
    /// A path segment bound by the router.
    Path,
    /// A cookie.
    Cookie,
    /// A form field from an encoded body.
    Form,
    /// The message body itself.
    Body,
}

impl Location {
    /// Canonical lowercase name, as used in accessor descriptions and
    /// rendered error bodies.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Header => "header",
            Self::Path => "path",
            Self::Cookie => "cookie",
            Self::Form => "form",
            Self::Body => "body",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable named-value container that accessors read from and write to.
///
/// Implementations must be persistent values: [`with_value`] returns a new
/// carrier and never mutates the receiver, which is what makes sharing one
/// carrier across concurrent accessor applications safe.
///
/// Whether a write appends or replaces is the carrier's policy per location:
/// repeatable locations (headers, cookies, query parameters, form fields)
/// append, single-valued locations (path segments, the body) replace.
///
/// [`with_value`]: Carrier::with_value
pub trait Carrier: Sized {
    /// All raw values stored at `name` in `location`, in occurrence order.
    fn values(&self, location: Location, name: &str) -> Vec<String>;

    /// A new carrier with `value` written at `name` in `location`.
    #[must_use]
    fn with_value(self, location: Location, name: &str, value: &str) -> Self;
}

#[cfg(test)]
pub(crate) mod test_support {
    //! A minimal in-memory carrier for the crate's own tests. Downstream
    //! crates use `refract-testing` instead.

    use super::{Carrier, Location};

    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct TestRequest {
        entries: Vec<(Location, String, String)>,
    }

    impl TestRequest {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(self, location: Location, name: &str, value: &str) -> Self {
            self.with_value(location, name, value)
        }
    }

    impl Carrier for TestRequest {
        fn values(&self, location: Location, name: &str) -> Vec<String> {
            self.entries
                .iter()
                .filter(|(l, n, _)| *l == location && n == name)
                .map(|(_, _, v)| v.clone())
                .collect()
        }

        fn with_value(mut self, location: Location, name: &str, value: &str) -> Self {
            if matches!(location, Location::Path | Location::Body) {
                self.entries
                    .retain(|(l, n, _)| !(*l == location && n == name));
            }
            self.entries
                .push((location, name.to_string(), value.to_string()));
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::TestRequest;
    use super::*;

    #[test]
    fn location_names() {
        assert_eq!(Location::Query.to_string(), "query");
        assert_eq!(Location::Cookie.to_string(), "cookie");
        assert_eq!(Location::Body.to_string(), "body");
    }

    #[test]
    fn values_preserve_occurrence_order() {
        let request = TestRequest::new()
            .with(Location::Cookie, "hello", "world")
            .with(Location::Cookie, "hello", "world2");

        assert_eq!(
            request.values(Location::Cookie, "hello"),
            vec!["world".to_string(), "world2".to_string()]
        );
    }

    #[test]
    fn with_value_does_not_mutate_original() {
        let request = TestRequest::new().with(Location::Query, "a", "1");
        let written = request.clone().with(Location::Query, "a", "2");

        assert_eq!(request.values(Location::Query, "a"), vec!["1".to_string()]);
        assert_eq!(
            written.values(Location::Query, "a"),
            vec!["1".to_string(), "2".to_string()]
        );
    }

    #[test]
    fn body_writes_replace() {
        let request = TestRequest::new()
            .with(Location::Body, "body", "first")
            .with(Location::Body, "body", "second");

        assert_eq!(
            request.values(Location::Body, "body"),
            vec!["second".to_string()]
        );
    }
}
