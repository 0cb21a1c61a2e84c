//! Accessor groups: the declaration API for lenses.
//!
//! A spec describes *how* to read and write raw values at a location; naming
//! it with [`required`](BiDiLensSpec::required),
//! [`optional`](BiDiLensSpec::optional) or [`multi`](BiDiLensSpec::multi)
//! produces a concrete lens. Specs compose through
//! [`map`](BiDiLensSpec::map)/[`try_map`](BiDiLensSpec::try_map), which is
//! the mechanism for custom value types: decode on the way out, encode on the
//! way back in. Mapping twice is equivalent to mapping once with the composed
//! function pair.
//!
//! Any error a fallible decode returns is converted to an `Invalid` failure
//! at the point the lens is applied; it never crosses the accessor boundary
//! raw.

use std::sync::Arc;

use crate::failure::Failure;
use crate::lens::{BiDiLens, Lens};
use crate::meta::AccessorMeta;
use crate::param::ParamKind;
use crate::Location;

type RawGet<IN, OUT> = Arc<dyn Fn(&str, &IN) -> Result<Vec<OUT>, anyhow::Error> + Send + Sync>;
type RawSet<IN, OUT> = Arc<dyn Fn(&str, Vec<OUT>, IN) -> IN + Send + Sync>;

/// The read half of an accessor group: `(name, carrier)` to the ordered raw
/// values at that name, already passed through any mapped decodes.
pub struct LensGet<IN, OUT> {
    get: RawGet<IN, OUT>,
}

impl<IN, OUT> Clone for LensGet<IN, OUT> {
    fn clone(&self) -> Self {
        Self {
            get: Arc::clone(&self.get),
        }
    }
}

impl<IN: 'static, OUT: 'static> LensGet<IN, OUT> {
    /// Build a base getter from an infallible carrier lookup.
    pub fn new<F>(get: F) -> Self
    where
        F: Fn(&str, &IN) -> Vec<OUT> + Send + Sync + 'static,
    {
        Self {
            get: Arc::new(move |name, target| Ok(get(name, target))),
        }
    }

    pub(crate) fn invoke(&self, name: &str, target: &IN) -> Result<Vec<OUT>, anyhow::Error> {
        (self.get)(name, target)
    }

    /// Compose an infallible decode onto every value this getter yields.
    #[must_use]
    pub fn map<NEXT, F>(&self, decode: F) -> LensGet<IN, NEXT>
    where
        F: Fn(OUT) -> NEXT + Send + Sync + 'static,
        NEXT: 'static,
    {
        let get = Arc::clone(&self.get);
        LensGet {
            get: Arc::new(move |name, target| {
                get(name, target).map(|values| values.into_iter().map(&decode).collect())
            }),
        }
    }

    /// Compose a fallible decode onto every value this getter yields.
    ///
    /// The first value the decode rejects fails the whole lookup.
    #[must_use]
    pub fn try_map<NEXT, E, F>(&self, decode: F) -> LensGet<IN, NEXT>
    where
        F: Fn(OUT) -> Result<NEXT, E> + Send + Sync + 'static,
        E: Into<anyhow::Error>,
        NEXT: 'static,
    {
        let get = Arc::clone(&self.get);
        LensGet {
            get: Arc::new(move |name, target| {
                get(name, target)?
                    .into_iter()
                    .map(|value| decode(value).map_err(Into::into))
                    .collect()
            }),
        }
    }
}

/// The write half of an accessor group: `(name, values, carrier)` to a new
/// carrier with those values embedded.
pub struct LensSet<IN, OUT> {
    set: RawSet<IN, OUT>,
}

impl<IN, OUT> Clone for LensSet<IN, OUT> {
    fn clone(&self) -> Self {
        Self {
            set: Arc::clone(&self.set),
        }
    }
}

impl<IN: 'static, OUT: 'static> LensSet<IN, OUT> {
    /// Build a base setter from a carrier write.
    pub fn new<F>(set: F) -> Self
    where
        F: Fn(&str, Vec<OUT>, IN) -> IN + Send + Sync + 'static,
    {
        Self { set: Arc::new(set) }
    }

    pub(crate) fn invoke(&self, name: &str, values: Vec<OUT>, target: IN) -> IN {
        (self.set)(name, values, target)
    }

    /// Compose an encode in front of this setter. Encodes are total.
    #[must_use]
    pub fn map<NEXT, F>(&self, encode: F) -> LensSet<IN, NEXT>
    where
        F: Fn(NEXT) -> OUT + Send + Sync + 'static,
        NEXT: 'static,
    {
        let set = Arc::clone(&self.set);
        LensSet {
            set: Arc::new(move |name, values, target| {
                set(name, values.into_iter().map(&encode).collect(), target)
            }),
        }
    }
}

/// A read-only accessor group over one carrier location.
pub struct LensSpec<IN, OUT> {
    location: Location,
    kind: ParamKind,
    get: LensGet<IN, OUT>,
}

impl<IN, OUT> Clone for LensSpec<IN, OUT> {
    fn clone(&self) -> Self {
        Self {
            location: self.location,
            kind: self.kind,
            get: self.get.clone(),
        }
    }
}

impl<IN: 'static, OUT: 'static> LensSpec<IN, OUT> {
    /// Build a spec from a location, a diagnostic kind, and a getter.
    #[must_use]
    pub const fn new(location: Location, kind: ParamKind, get: LensGet<IN, OUT>) -> Self {
        Self {
            location,
            kind,
            get,
        }
    }

    /// The carrier region this spec targets.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// The same spec with a different diagnostic kind tag.
    #[must_use]
    pub fn with_kind(mut self, kind: ParamKind) -> Self {
        self.kind = kind;
        self
    }

    /// A new spec whose lenses decode through `decode`.
    #[must_use]
    pub fn map<NEXT, F>(&self, decode: F) -> LensSpec<IN, NEXT>
    where
        F: Fn(OUT) -> NEXT + Send + Sync + 'static,
        NEXT: 'static,
    {
        LensSpec::new(self.location, self.kind, self.get.map(decode))
    }

    /// A new spec whose lenses decode through the fallible `decode`; a
    /// rejected value surfaces as `Invalid` when the lens is applied.
    #[must_use]
    pub fn try_map<NEXT, E, F>(&self, decode: F) -> LensSpec<IN, NEXT>
    where
        F: Fn(OUT) -> Result<NEXT, E> + Send + Sync + 'static,
        E: Into<anyhow::Error>,
        NEXT: 'static,
    {
        LensSpec::new(self.location, self.kind, self.get.try_map(decode))
    }

    /// A lens that requires exactly one value at `name`.
    ///
    /// When several raw values share the name, the first one wins; zero
    /// values fail with `Missing`.
    #[must_use]
    pub fn required(&self, name: &str) -> Lens<IN, OUT> {
        let meta = AccessorMeta::new(name, self.location, true, self.kind);
        let get = self.get.clone();
        let inner = meta.clone();
        Lens::new(meta, move |target| match get.invoke(inner.name(), target) {
            Ok(values) => values
                .into_iter()
                .next()
                .ok_or_else(|| Failure::Missing(inner.clone()).into()),
            Err(error) => {
                tracing::debug!(accessor = %inner, %error, "decode failed");
                Err(Failure::Invalid(inner.clone()).into())
            }
        })
    }

    /// A lens that yields `None` when no value is present at `name`.
    #[must_use]
    pub fn optional(&self, name: &str) -> Lens<IN, Option<OUT>> {
        let meta = AccessorMeta::new(name, self.location, false, self.kind);
        let get = self.get.clone();
        let inner = meta.clone();
        Lens::new(meta, move |target| match get.invoke(inner.name(), target) {
            Ok(values) => Ok(values.into_iter().next()),
            Err(error) => {
                tracing::debug!(accessor = %inner, %error, "decode failed");
                Err(Failure::Invalid(inner.clone()).into())
            }
        })
    }

    /// The multi-valued view of this spec.
    #[must_use]
    pub fn multi(&self) -> MultiLensSpec<IN, OUT> {
        MultiLensSpec { spec: self.clone() }
    }
}

/// The multi-valued view of a read-only accessor group.
pub struct MultiLensSpec<IN, OUT> {
    spec: LensSpec<IN, OUT>,
}

impl<IN: 'static, OUT: 'static> MultiLensSpec<IN, OUT> {
    /// A lens over all values at `name`, in carrier occurrence order; zero
    /// values fail with `Missing`.
    #[must_use]
    pub fn required(&self, name: &str) -> Lens<IN, Vec<OUT>> {
        let meta = AccessorMeta::new(name, self.spec.location, true, self.spec.kind);
        let get = self.spec.get.clone();
        let inner = meta.clone();
        Lens::new(meta, move |target| match get.invoke(inner.name(), target) {
            Ok(values) if values.is_empty() => Err(Failure::Missing(inner.clone()).into()),
            Ok(values) => Ok(values),
            Err(error) => {
                tracing::debug!(accessor = %inner, %error, "decode failed");
                Err(Failure::Invalid(inner.clone()).into())
            }
        })
    }

    /// A lens over all values at `name`, yielding `None` when there are none.
    #[must_use]
    pub fn optional(&self, name: &str) -> Lens<IN, Option<Vec<OUT>>> {
        let meta = AccessorMeta::new(name, self.spec.location, false, self.spec.kind);
        let get = self.spec.get.clone();
        let inner = meta.clone();
        Lens::new(meta, move |target| match get.invoke(inner.name(), target) {
            Ok(values) if values.is_empty() => Ok(None),
            Ok(values) => Ok(Some(values)),
            Err(error) => {
                tracing::debug!(accessor = %inner, %error, "decode failed");
                Err(Failure::Invalid(inner.clone()).into())
            }
        })
    }
}

/// A read-write accessor group over one carrier location.
pub struct BiDiLensSpec<IN, OUT> {
    spec: LensSpec<IN, OUT>,
    set: LensSet<IN, OUT>,
}

impl<IN, OUT> Clone for BiDiLensSpec<IN, OUT> {
    fn clone(&self) -> Self {
        Self {
            spec: self.spec.clone(),
            set: self.set.clone(),
        }
    }
}

impl<IN: 'static, OUT: 'static> BiDiLensSpec<IN, OUT> {
    /// Build a spec from a location, a diagnostic kind, and both halves.
    #[must_use]
    pub const fn new(
        location: Location,
        kind: ParamKind,
        get: LensGet<IN, OUT>,
        set: LensSet<IN, OUT>,
    ) -> Self {
        Self {
            spec: LensSpec::new(location, kind, get),
            set,
        }
    }

    /// The carrier region this spec targets.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.spec.location()
    }

    /// The same spec with a different diagnostic kind tag.
    #[must_use]
    pub fn with_kind(self, kind: ParamKind) -> Self {
        Self {
            spec: self.spec.with_kind(kind),
            set: self.set,
        }
    }

    /// The read-only half of this group.
    #[must_use]
    pub fn read_only(&self) -> LensSpec<IN, OUT> {
        self.spec.clone()
    }

    /// A new group decoding through `decode` and encoding through `encode`.
    #[must_use]
    pub fn map<NEXT, D, E>(&self, decode: D, encode: E) -> BiDiLensSpec<IN, NEXT>
    where
        D: Fn(OUT) -> NEXT + Send + Sync + 'static,
        E: Fn(NEXT) -> OUT + Send + Sync + 'static,
        NEXT: 'static,
    {
        BiDiLensSpec {
            spec: self.spec.map(decode),
            set: self.set.map(encode),
        }
    }

    /// A new group with a fallible decode; a rejected value surfaces as
    /// `Invalid` when the lens is applied.
    #[must_use]
    pub fn try_map<NEXT, ERR, D, E>(&self, decode: D, encode: E) -> BiDiLensSpec<IN, NEXT>
    where
        D: Fn(OUT) -> Result<NEXT, ERR> + Send + Sync + 'static,
        ERR: Into<anyhow::Error>,
        E: Fn(NEXT) -> OUT + Send + Sync + 'static,
        NEXT: 'static,
    {
        BiDiLensSpec {
            spec: self.spec.try_map(decode),
            set: self.set.map(encode),
        }
    }

    /// A bidirectional lens requiring exactly one value at `name`.
    #[must_use]
    pub fn required(&self, name: &str) -> BiDiLens<IN, OUT> {
        let set = self.set.clone();
        let name_owned = name.to_string();
        BiDiLens::new(self.spec.required(name), move |value, target| {
            set.invoke(&name_owned, vec![value], target)
        })
    }

    /// A bidirectional lens yielding `None` when no value is present;
    /// injecting `None` leaves the carrier untouched.
    #[must_use]
    pub fn optional(&self, name: &str) -> BiDiLens<IN, Option<OUT>> {
        let set = self.set.clone();
        let name_owned = name.to_string();
        BiDiLens::new(self.spec.optional(name), move |value, target| match value {
            Some(value) => set.invoke(&name_owned, vec![value], target),
            None => target,
        })
    }

    /// The multi-valued view of this group.
    #[must_use]
    pub fn multi(&self) -> BiDiMultiLensSpec<IN, OUT> {
        BiDiMultiLensSpec { spec: self.clone() }
    }
}

/// The multi-valued view of a read-write accessor group.
pub struct BiDiMultiLensSpec<IN, OUT> {
    spec: BiDiLensSpec<IN, OUT>,
}

impl<IN: 'static, OUT: 'static> BiDiMultiLensSpec<IN, OUT> {
    /// A bidirectional lens over all values at `name`; zero values fail with
    /// `Missing`, and injection writes every value in order.
    #[must_use]
    pub fn required(&self, name: &str) -> BiDiLens<IN, Vec<OUT>> {
        let set = self.spec.set.clone();
        let name_owned = name.to_string();
        BiDiLens::new(
            self.spec.spec.multi().required(name),
            move |values, target| set.invoke(&name_owned, values, target),
        )
    }

    /// A bidirectional lens over all values at `name`, yielding `None` when
    /// there are none; injecting `None` leaves the carrier untouched.
    #[must_use]
    pub fn optional(&self, name: &str) -> BiDiLens<IN, Option<Vec<OUT>>> {
        let set = self.spec.set.clone();
        let name_owned = name.to_string();
        BiDiLens::new(
            self.spec.spec.multi().optional(name),
            move |values, target| match values {
                Some(values) => set.invoke(&name_owned, values, target),
                None => target,
            },
        )
    }
}
