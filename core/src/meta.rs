//! Metadata describing a declared accessor.

use std::fmt;

use crate::carrier::Location;
use crate::param::ParamKind;

/// Describes one declared accessor: where it looks, what it is called,
/// whether it must be present, and the conceptual kind of value it yields.
///
/// A meta is created when the accessor is declared and shared by value across
/// every application of that accessor; it is never modified afterwards. Every
/// [`Failure`](crate::failure::Failure) carries the meta of the accessor that
/// produced it, so diagnostics can name the offending parameter precisely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessorMeta {
    name: String,
    location: Location,
    required: bool,
    kind: ParamKind,
}

impl AccessorMeta {
    /// Create metadata for a declared accessor.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        location: Location,
        required: bool,
        kind: ParamKind,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            required,
            kind,
        }
    }

    /// The key this accessor reads and writes in the carrier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The carrier region this accessor targets.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// Whether extraction fails with `Missing` when no value is present.
    #[must_use]
    pub const fn required(&self) -> bool {
        self.required
    }

    /// The conceptual datatype tag, used for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> ParamKind {
        self.kind
    }
}

impl fmt::Display for AccessorMeta {
    /// Renders as `"{Required|Optional} {location} '{name}'"`, e.g.
    /// `Optional cookie 'hello'`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let requirement = if self.required { "Required" } else { "Optional" };
        write!(f, "{requirement} {} '{}'", self.location, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_follows_diagnostic_pattern() {
        let optional = AccessorMeta::new("hello", Location::Cookie, false, ParamKind::String);
        assert_eq!(optional.to_string(), "Optional cookie 'hello'");

        let required = AccessorMeta::new("page", Location::Query, true, ParamKind::Integer);
        assert_eq!(required.to_string(), "Required query 'page'");
    }

    #[test]
    fn meta_is_shared_by_value() {
        let meta = AccessorMeta::new("id", Location::Path, true, ParamKind::String);
        let copy = meta.clone();
        assert_eq!(meta, copy);
    }
}
