//! The accessor failure taxonomy.
//!
//! Extraction can go wrong in exactly two ways: a required value was absent
//! ([`Failure::Missing`]) or a value was present but could not be decoded
//! ([`Failure::Invalid`]). No raw decode error ever escapes an accessor
//! application; it is converted into this taxonomy at the decode boundary.
//! [`LensFailure`] is the unit of propagation and can carry the failures of
//! several accessors evaluated in one batch.

use std::fmt;

use smallvec::SmallVec;
use thiserror::Error;

use crate::meta::AccessorMeta;

/// A single accessor failure, tagged with the metadata of the accessor that
/// produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// A required accessor found no value in the carrier.
    #[error("{0} is missing")]
    Missing(AccessorMeta),
    /// A value was found but decoding or validation rejected it.
    #[error("{0} is invalid")]
    Invalid(AccessorMeta),
}

impl Failure {
    /// The metadata of the accessor that produced this failure.
    #[must_use]
    pub const fn meta(&self) -> &AccessorMeta {
        match self {
            Self::Missing(meta) | Self::Invalid(meta) => meta,
        }
    }

    /// The failure kind name used in rendered diagnostics.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::Missing(_) => "Missing",
            Self::Invalid(_) => "Invalid",
        }
    }
}

/// An ordered, non-empty collection of [`Failure`].
///
/// A single failing accessor application carries exactly one entry; batch
/// validation aggregates one entry per failing accessor, in the order the
/// accessors were evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LensFailure {
    failures: SmallVec<[Failure; 4]>,
}

impl LensFailure {
    /// Wrap every failure in `failures`, or `None` when the list is empty.
    #[must_use]
    pub fn from_failures(failures: impl IntoIterator<Item = Failure>) -> Option<Self> {
        let failures: SmallVec<[Failure; 4]> = failures.into_iter().collect();
        if failures.is_empty() {
            None
        } else {
            Some(Self { failures })
        }
    }

    /// The collected failures, in evaluation order.
    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Consume self, yielding the failures in evaluation order.
    #[must_use]
    pub fn into_failures(self) -> SmallVec<[Failure; 4]> {
        self.failures
    }
}

impl From<Failure> for LensFailure {
    fn from(failure: Failure) -> Self {
        Self {
            failures: smallvec::smallvec![failure],
        }
    }
}

impl fmt::Display for LensFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, failure) in self.failures.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for LensFailure {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carrier::Location;
    use crate::param::ParamKind;

    fn meta(name: &str, required: bool) -> AccessorMeta {
        AccessorMeta::new(name, Location::Query, required, ParamKind::String)
    }

    #[test]
    fn reason_names_match_rendered_diagnostics() {
        assert_eq!(Failure::Missing(meta("a", true)).reason(), "Missing");
        assert_eq!(Failure::Invalid(meta("a", true)).reason(), "Invalid");
    }

    #[test]
    fn empty_failure_list_is_rejected() {
        assert!(LensFailure::from_failures(Vec::new()).is_none());
    }

    #[test]
    fn failures_keep_evaluation_order() {
        let failure = LensFailure::from_failures([
            Failure::Missing(meta("first", true)),
            Failure::Invalid(meta("second", false)),
        ])
        .map(|f| f.into_failures());

        let failures = failure.unwrap_or_default();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].meta().name(), "first");
        assert_eq!(failures[1].meta().name(), "second");
    }

    #[test]
    fn display_lists_every_failure() {
        let failure: LensFailure = Failure::Missing(meta("page", true)).into();
        assert_eq!(failure.to_string(), "Required query 'page' is missing");
    }
}
