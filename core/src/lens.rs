//! Declared, reusable, typed accessors over carrier locations.
//!
//! A [`Lens`] is declared once (typically at startup) and applied many times
//! to different carrier instances. Lenses hold no carrier state: they are a
//! shared [`AccessorMeta`] plus pure functions, so one instance can be used
//! from any number of threads without coordination.

use std::fmt;
use std::sync::Arc;

use crate::failure::{Failure, LensFailure};
use crate::meta::AccessorMeta;

pub(crate) type GetFn<IN, OUT> = Arc<dyn Fn(&IN) -> Result<OUT, LensFailure> + Send + Sync>;
pub(crate) type SetFn<IN, OUT> = Arc<dyn Fn(OUT, IN) -> IN + Send + Sync>;

/// A read-only typed accessor over one named carrier location.
#[derive(Clone)]
pub struct Lens<IN, OUT> {
    meta: AccessorMeta,
    get: GetFn<IN, OUT>,
}

impl<IN, OUT> Lens<IN, OUT> {
    /// Build a lens from its metadata and extraction function.
    pub fn new<F>(meta: AccessorMeta, get: F) -> Self
    where
        F: Fn(&IN) -> Result<OUT, LensFailure> + Send + Sync + 'static,
    {
        Self {
            meta,
            get: Arc::new(get),
        }
    }

    /// The metadata this lens was declared with.
    #[must_use]
    pub const fn meta(&self) -> &AccessorMeta {
        &self.meta
    }

    /// Extract the typed value from `target`.
    ///
    /// # Errors
    ///
    /// Returns a [`LensFailure`] holding exactly one [`Failure`]: `Missing`
    /// when a required value is absent, `Invalid` when a present value fails
    /// to decode.
    pub fn extract(&self, target: &IN) -> Result<OUT, LensFailure> {
        (self.get)(target)
    }

    /// The `Missing` failure this lens produces, for assertions and tests.
    #[must_use]
    pub fn missing(&self) -> Failure {
        Failure::Missing(self.meta.clone())
    }

    /// The `Invalid` failure this lens produces, for assertions and tests.
    #[must_use]
    pub fn invalid(&self) -> Failure {
        Failure::Invalid(self.meta.clone())
    }
}

impl<IN, OUT> fmt::Display for Lens<IN, OUT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.meta)
    }
}

impl<IN, OUT> fmt::Debug for Lens<IN, OUT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lens").field("meta", &self.meta).finish()
    }
}

/// A typed accessor that can also inject a value back into a carrier.
///
/// Injection is copy-on-write: [`inject`](BiDiLens::inject) consumes the
/// carrier and returns a new one with the value embedded, never mutating
/// shared state. For every value that round-trips through the accessor's own
/// encoding, `extract(&inject(v, c))` yields `v` again.
#[derive(Clone)]
pub struct BiDiLens<IN, OUT> {
    lens: Lens<IN, OUT>,
    set: SetFn<IN, OUT>,
}

impl<IN, OUT> BiDiLens<IN, OUT> {
    /// Build a bidirectional lens from a read lens and an injection function.
    pub fn new<F>(lens: Lens<IN, OUT>, set: F) -> Self
    where
        F: Fn(OUT, IN) -> IN + Send + Sync + 'static,
    {
        Self {
            lens,
            set: Arc::new(set),
        }
    }

    /// The metadata this lens was declared with.
    #[must_use]
    pub const fn meta(&self) -> &AccessorMeta {
        self.lens.meta()
    }

    /// Extract the typed value from `target`.
    ///
    /// # Errors
    ///
    /// Returns a [`LensFailure`] holding exactly one [`Failure`], as for
    /// [`Lens::extract`].
    pub fn extract(&self, target: &IN) -> Result<OUT, LensFailure> {
        self.lens.extract(target)
    }

    /// A new carrier with `value` embedded at this lens's location.
    #[must_use]
    pub fn inject(&self, value: OUT, target: IN) -> IN {
        (self.set)(value, target)
    }

    /// The read-only half of this lens.
    #[must_use]
    pub const fn as_lens(&self) -> &Lens<IN, OUT> {
        &self.lens
    }

    /// The `Missing` failure this lens produces, for assertions and tests.
    #[must_use]
    pub fn missing(&self) -> Failure {
        self.lens.missing()
    }

    /// The `Invalid` failure this lens produces, for assertions and tests.
    #[must_use]
    pub fn invalid(&self) -> Failure {
        self.lens.invalid()
    }
}

impl<IN, OUT> fmt::Display for BiDiLens<IN, OUT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lens)
    }
}

impl<IN, OUT> fmt::Debug for BiDiLens<IN, OUT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BiDiLens")
            .field("meta", &self.lens.meta)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carrier::Location;
    use crate::param::ParamKind;

    fn meta() -> AccessorMeta {
        AccessorMeta::new("hello", Location::Cookie, false, ParamKind::String)
    }

    #[test]
    fn display_delegates_to_meta() {
        let lens: Lens<(), String> = Lens::new(meta(), |()| Ok(String::new()));
        assert_eq!(lens.to_string(), "Optional cookie 'hello'");
    }

    #[test]
    fn failure_builders_carry_meta() {
        let lens: Lens<(), String> = Lens::new(meta(), |()| Ok(String::new()));
        assert_eq!(lens.missing().meta(), &meta());
        assert_eq!(lens.invalid().reason(), "Invalid");
    }

    #[test]
    fn lenses_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Lens<String, i32>>();
        assert_send_sync::<BiDiLens<String, i32>>();
    }
}
