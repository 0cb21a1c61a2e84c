//! The behavioral contract every bidirectional accessor group must satisfy.

use std::fmt::Debug;

use refract_core::{BiDiLensSpec, Carrier};

use crate::message::TestMessage;

/// Assert the full lens contract for a bidirectional accessor group.
///
/// Given a raw value the group decodes to `expected`, this checks every
/// cardinality variant against a message where the value is present, absent,
/// and (when `invalid_raw` is given) undecodable, then verifies the
/// round-trip law `extract(&inject(v, m)) == v`. The value is exercised
/// under the name `"hello"` at the group's own location.
///
/// # Panics
///
/// Panics when any part of the contract is violated, as a test helper
/// should.
pub fn check_contract<T>(
    spec: &BiDiLensSpec<TestMessage, T>,
    valid_raw: &str,
    invalid_raw: Option<&str>,
    expected: &T,
) where
    T: Clone + PartialEq + Debug + 'static,
{
    let location = spec.location();
    let present = TestMessage::new().with_value(location, "hello", valid_raw);
    let absent = TestMessage::new();

    let required = spec.required("hello");
    let optional = spec.optional("hello");
    let required_multi = spec.multi().required("hello");
    let optional_multi = spec.multi().optional("hello");

    // Presence, every cardinality.
    assert_eq!(required.extract(&present), Ok(expected.clone()));
    assert_eq!(optional.extract(&present), Ok(Some(expected.clone())));
    assert_eq!(
        required_multi.extract(&present),
        Ok(vec![expected.clone()])
    );
    assert_eq!(
        optional_multi.extract(&present),
        Ok(Some(vec![expected.clone()]))
    );

    // Absence: required fails with Missing, optional is simply absent.
    assert_eq!(
        required.extract(&absent),
        Err(required.missing().into())
    );
    assert_eq!(optional.extract(&absent), Ok(None));
    assert_eq!(
        required_multi.extract(&absent),
        Err(required_multi.missing().into())
    );
    assert_eq!(optional_multi.extract(&absent), Ok(None));

    // Undecodable input: Invalid for every cardinality.
    if let Some(invalid_raw) = invalid_raw {
        let undecodable = TestMessage::new().with_value(location, "hello", invalid_raw);
        assert_eq!(
            required.extract(&undecodable),
            Err(required.invalid().into())
        );
        assert_eq!(
            optional.extract(&undecodable),
            Err(optional.invalid().into())
        );
        assert_eq!(
            required_multi.extract(&undecodable),
            Err(required_multi.invalid().into())
        );
        assert_eq!(
            optional_multi.extract(&undecodable),
            Err(optional_multi.invalid().into())
        );
    }

    // Round-trip law, every cardinality.
    let injected = required.inject(expected.clone(), TestMessage::new());
    assert_eq!(required.extract(&injected), Ok(expected.clone()));

    let injected_optional = optional.inject(Some(expected.clone()), TestMessage::new());
    assert_eq!(
        optional.extract(&injected_optional),
        Ok(Some(expected.clone()))
    );

    let injected_multi = required_multi.inject(vec![expected.clone()], TestMessage::new());
    assert_eq!(
        required_multi.extract(&injected_multi),
        Ok(vec![expected.clone()])
    );

    let injected_optional_multi =
        optional_multi.inject(Some(vec![expected.clone()]), TestMessage::new());
    assert_eq!(
        optional_multi.extract(&injected_optional_multi),
        Ok(Some(vec![expected.clone()]))
    );
}

#[cfg(test)]
mod tests {
    use refract_core::{cookie, query};

    use super::*;

    #[test]
    fn string_group_satisfies_the_contract() {
        check_contract(
            &cookie::<TestMessage>(),
            "world",
            None,
            &"world".to_string(),
        );
    }

    #[test]
    fn mapped_group_satisfies_the_contract() {
        let as_int =
            query::<TestMessage>().try_map(|raw| raw.parse::<i32>(), |value: i32| value.to_string());
        check_contract(&as_int, "42", Some("not-a-number"), &42);
    }
}
