//! Parameter kind tags for declared accessors.

use std::fmt;

/// The conceptual datatype an accessor produces, independent of the Rust
/// type it decodes into.
///
/// Kinds are purely diagnostic: they show up in accessor descriptions and in
/// rendered error bodies, and never influence extraction or injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// A plain string value.
    String,
    /// A structured object (e.g., a JSON document body).
    Object,
    /// A boolean value.
    Boolean,
    /// An integral value.
    Integer,
    /// An uploaded file.
    File,
    /// A general numeric value.
    Number,
    /// An explicit null.
    Null,
}

impl ParamKind {
    /// Canonical lowercase name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Object => "object",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::File => "file",
            Self::Number => "number",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_are_lowercase() {
        assert_eq!(ParamKind::String.as_str(), "string");
        assert_eq!(ParamKind::Object.as_str(), "object");
        assert_eq!(ParamKind::Boolean.as_str(), "boolean");
        assert_eq!(ParamKind::Integer.as_str(), "integer");
        assert_eq!(ParamKind::File.as_str(), "file");
        assert_eq!(ParamKind::Number.as_str(), "number");
        assert_eq!(ParamKind::Null.as_str(), "null");
    }

    #[test]
    fn display_matches_canonical_name() {
        assert_eq!(ParamKind::Number.to_string(), "number");
    }
}
