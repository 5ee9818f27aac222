//! Property-based tests for criteria typecasting

mod common;

use common::*;
use docquery_selector::Selector;
use docquery_types::{Coercer, FieldType, TypeCoercer, Value};
use proptest::prelude::*;

/// Raw scalar values as application code hands them over
fn raw_scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Boolean),
        any::<i64>().prop_map(Value::Integer),
        "[a-zA-Z0-9 .:-]{0,20}".prop_map(Value::String),
    ]
}

/// Raw condition values including operator documents and ranges
fn raw_condition_strategy() -> impl Strategy<Value = Value> {
    raw_scalar_strategy().prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::vec(("\\$[a-z]{2,6}", inner.clone()), 0..4)
                .prop_map(|operators| Value::document(operators)),
            (inner.clone(), inner).prop_map(|(first, last)| Value::range(first, last)),
        ]
    })
}

proptest! {
    #[test]
    fn undeclared_keys_are_stored_unchanged(
        key in "[a-z]{1,8}_(x|y|z)",
        raw in raw_condition_strategy(),
    ) {
        let coercer = RecordingCoercer::new();
        let mut selector = Selector::new(person()).with_coercer(coercer.clone());

        selector.assign(&key, raw.clone()).unwrap();

        prop_assert_eq!(selector.get(&key), Some(&raw));
        prop_assert_eq!(coercer.call_count(), 0);
    }

    #[test]
    fn integer_ranges_expand_to_coerced_bounds(a in any::<i64>(), b in any::<i64>()) {
        let mut selector = Selector::new(person());

        selector
            .assign("age", Value::range(a.to_string(), b.to_string()))
            .unwrap();

        prop_assert_eq!(
            selector.get("age"),
            Some(&Value::document([("$gte", a), ("$lte", b)]))
        );
    }

    #[test]
    fn scalars_match_the_coercer(raw in raw_scalar_strategy()) {
        let mut selector = Selector::new(person());
        let expected = TypeCoercer::new().coerce(&raw, &FieldType::String);

        selector.assign("title", raw).unwrap();

        let expected = expected.ok();
        prop_assert_eq!(selector.get("title"), expected.as_ref());
    }

    #[test]
    fn integer_arrays_are_coerced_per_element(items in proptest::collection::vec(any::<i32>(), 0..8)) {
        let mut selector = Selector::new(person());
        let raw = Value::array(items.iter().map(|i| i.to_string()));

        selector.assign("age", raw).unwrap();

        prop_assert_eq!(
            selector.get("age"),
            Some(&Value::array(items.iter().map(|i| i64::from(*i))))
        );
    }
}
