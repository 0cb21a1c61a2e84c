//! An in-memory carrier for tests.

use refract_core::{Carrier, Location};

/// An immutable in-memory carrier holding `(location, name, value)` entries
/// in insertion order.
///
/// Repeatable locations (query, header, cookie, form) accumulate values;
/// single-valued locations (path, body) replace on write — the same policy a
/// real HTTP message would apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestMessage {
    entries: Vec<(Location, String, String)>,
}

impl TestMessage {
    /// An empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this message with a query parameter appended.
    #[must_use]
    pub fn with_query(self, name: &str, value: &str) -> Self {
        self.with_value(Location::Query, name, value)
    }

    /// A copy of this message with a header appended.
    #[must_use]
    pub fn with_header(self, name: &str, value: &str) -> Self {
        self.with_value(Location::Header, name, value)
    }

    /// A copy of this message with a cookie appended.
    #[must_use]
    pub fn with_cookie(self, name: &str, value: &str) -> Self {
        self.with_value(Location::Cookie, name, value)
    }

    /// A copy of this message with a form field appended.
    #[must_use]
    pub fn with_form_field(self, name: &str, value: &str) -> Self {
        self.with_value(Location::Form, name, value)
    }

    /// A copy of this message with a bound path segment set.
    #[must_use]
    pub fn with_path(self, name: &str, value: &str) -> Self {
        self.with_value(Location::Path, name, value)
    }

    /// A copy of this message with the body set, under the conventional
    /// `"body"` name.
    #[must_use]
    pub fn with_body(self, value: &str) -> Self {
        self.with_value(Location::Body, "body", value)
    }
}

impl Carrier for TestMessage {
    fn values(&self, location: Location, name: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(entry_location, entry_name, _)| {
                *entry_location == location && entry_name == name
            })
            .map(|(_, _, value)| value.clone())
            .collect()
    }

    fn with_value(mut self, location: Location, name: &str, value: &str) -> Self {
        if matches!(location, Location::Path | Location::Body) {
            self.entries.retain(|(entry_location, entry_name, _)| {
                !(*entry_location == location && entry_name == name)
            });
        }
        self.entries
            .push((location, name.to_string(), value.to_string()));
        self
    }
}
