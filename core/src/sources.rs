//! Ready-made accessor groups for each carrier location.
//!
//! Each function returns a string-valued [`BiDiLensSpec`] wired to the
//! [`Carrier`] contract; custom types hang off it through
//! [`map`](BiDiLensSpec::map)/[`try_map`](BiDiLensSpec::try_map).
//!
//! ```
//! use refract_core::{query, Carrier, Location};
//! # #[derive(Clone, Default)]
//! # struct Message(Vec<(Location, String, String)>);
//! # impl Carrier for Message {
//! #     fn values(&self, location: Location, name: &str) -> Vec<String> {
//! #         self.0.iter().filter(|(l, n, _)| *l == location && n == name).map(|(_, _, v)| v.clone()).collect()
//! #     }
//! #     fn with_value(mut self, location: Location, name: &str, value: &str) -> Self {
//! #         self.0.push((location, name.to_string(), value.to_string()));
//! #         self
//! #     }
//! # }
//! let page = query::<Message>()
//!     .try_map(|raw| raw.parse::<u32>(), |page: u32| page.to_string())
//!     .required("page");
//!
//! let request = page.inject(3, Message::default());
//! assert_eq!(page.extract(&request), Ok(3));
//! ```

use crate::carrier::{Carrier, Location};
use crate::param::ParamKind;
use crate::spec::{BiDiLensSpec, LensGet, LensSet};

fn spec_for<C: Carrier + 'static>(location: Location) -> BiDiLensSpec<C, String> {
    BiDiLensSpec::new(
        location,
        ParamKind::String,
        LensGet::new(move |name, carrier: &C| carrier.values(location, name)),
        LensSet::new(move |name, values: Vec<String>, carrier: C| {
            values
                .into_iter()
                .fold(carrier, |carrier, value| carrier.with_value(location, name, &value))
        }),
    )
}

/// Accessors over query-string parameters.
#[must_use]
pub fn query<C: Carrier + 'static>() -> BiDiLensSpec<C, String> {
    spec_for(Location::Query)
}

/// Accessors over HTTP headers.
#[must_use]
pub fn header<C: Carrier + 'static>() -> BiDiLensSpec<C, String> {
    spec_for(Location::Header)
}

/// Accessors over router-bound path segments.
#[must_use]
pub fn path<C: Carrier + 'static>() -> BiDiLensSpec<C, String> {
    spec_for(Location::Path)
}

/// Accessors over cookies.
#[must_use]
pub fn cookie<C: Carrier + 'static>() -> BiDiLensSpec<C, String> {
    spec_for(Location::Cookie)
}

/// Accessors over form fields.
#[must_use]
pub fn form_field<C: Carrier + 'static>() -> BiDiLensSpec<C, String> {
    spec_for(Location::Form)
}

/// Accessors over the raw message body text.
///
/// Format layers build on this, re-kinding it and mapping parse/print pairs
/// onto it (e.g. a JSON body accessor).
#[must_use]
pub fn body_text<C: Carrier + 'static>() -> BiDiLensSpec<C, String> {
    spec_for(Location::Body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carrier::test_support::TestRequest;

    #[test]
    fn each_group_targets_its_location() {
        assert_eq!(query::<TestRequest>().location(), Location::Query);
        assert_eq!(header::<TestRequest>().location(), Location::Header);
        assert_eq!(path::<TestRequest>().location(), Location::Path);
        assert_eq!(cookie::<TestRequest>().location(), Location::Cookie);
        assert_eq!(form_field::<TestRequest>().location(), Location::Form);
        assert_eq!(body_text::<TestRequest>().location(), Location::Body);
    }

    #[test]
    fn body_text_round_trips() {
        let body = body_text::<TestRequest>().required("body");
        let request = body.inject("{\"hello\":\"world\"}".to_string(), TestRequest::new());
        assert_eq!(body.extract(&request), Ok("{\"hello\":\"world\"}".to_string()));
    }

    mod round_trip_law {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn query_lens_round_trips_any_value(value in ".*") {
                let lens = query::<TestRequest>().required("q");
                let written = lens.inject(value.clone(), TestRequest::new());
                prop_assert_eq!(lens.extract(&written), Ok(value));
            }

            #[test]
            fn multi_query_lens_round_trips_any_values(values in proptest::collection::vec(".*", 1..8)) {
                let lens = query::<TestRequest>().multi().required("q");
                let written = lens.inject(values.clone(), TestRequest::new());
                prop_assert_eq!(lens.extract(&written), Ok(values));
            }
        }
    }
}
