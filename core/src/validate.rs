//! Batch validation of a carrier against several declared accessors.
//!
//! Callers depend on seeing every problem at once: [`validate`] evaluates
//! every accessor, never short-circuiting, and aggregates each resulting
//! failure into one [`LensFailure`] in declaration order.

use crate::failure::LensFailure;
use crate::lens::{BiDiLens, Lens};

/// An accessor that can be checked against a carrier, with its typed output
/// erased. Implemented by [`Lens`] and [`BiDiLens`] so heterogeneous
/// accessors can be validated together.
pub trait Checkable<IN> {
    /// Apply the accessor to `target`, keeping only the failure channel.
    ///
    /// # Errors
    ///
    /// Returns the accessor's [`LensFailure`] when extraction fails.
    fn check(&self, target: &IN) -> Result<(), LensFailure>;
}

impl<IN, OUT> Checkable<IN> for Lens<IN, OUT> {
    fn check(&self, target: &IN) -> Result<(), LensFailure> {
        self.extract(target).map(|_| ())
    }
}

impl<IN, OUT> Checkable<IN> for BiDiLens<IN, OUT> {
    fn check(&self, target: &IN) -> Result<(), LensFailure> {
        self.extract(target).map(|_| ())
    }
}

/// Validate `target` against every accessor in `lenses`.
///
/// # Errors
///
/// Returns one [`LensFailure`] aggregating the failures of every accessor
/// that rejected the carrier, in the order the accessors were given.
pub fn validate<IN>(target: &IN, lenses: &[&dyn Checkable<IN>]) -> Result<(), LensFailure> {
    let mut failures = Vec::new();
    for lens in lenses {
        if let Err(failure) = lens.check(target) {
            failures.extend(failure.into_failures());
        }
    }
    LensFailure::from_failures(failures).map_or(Ok(()), Err)
}
