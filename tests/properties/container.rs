//! Property tests for ValidatedContainer's accessor pair.

use proptest::prelude::*;

use circle_lab::{HiddenValue, ValidatedContainer, ValidationError};

fn valid_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        HiddenValue::MINIMUM..1.0e12f64,
        Just(HiddenValue::MINIMUM),
        Just(f64::INFINITY),
    ]
}

fn invalid_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e12f64..HiddenValue::MINIMUM,
        Just(f64::NEG_INFINITY),
        Just(f64::NAN),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every value at or above the minimum is accepted and read back.
    #[test]
    fn property_valid_write_is_readable(radius in any::<f64>(), v in valid_value()) {
        let mut c = ValidatedContainer::create(radius);
        prop_assert!(c.write(v).is_ok());
        prop_assert_eq!(c.read(), v);
    }

    /// PROPERTY: Every value below the minimum is rejected and leaves the state unchanged.
    #[test]
    fn property_invalid_write_leaves_state(
        prefix in proptest::collection::vec(valid_value(), 0..4),
        v in invalid_value(),
    ) {
        let mut c = ValidatedContainer::create(1.0);
        for p in &prefix {
            c.write(*p).unwrap();
        }
        let before = c.read();

        let err = c.write(v).unwrap_err();
        prop_assert!(
            err.reason == ValidationError::BELOW_MINIMUM
                || err.reason == ValidationError::NOT_A_NUMBER
        );
        prop_assert_eq!(c.read(), before);
    }

    /// PROPERTY: create keeps the radius exactly and starts at the default hidden value.
    #[test]
    fn property_create_keeps_radius(r in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        let c = ValidatedContainer::create(r);
        prop_assert_eq!(c.radius, r);
        prop_assert_eq!(c.read(), HiddenValue::DEFAULT);
    }

    /// PROPERTY: Writing the same valid value twice is idempotent.
    #[test]
    fn property_write_is_idempotent(v in valid_value()) {
        let mut c = ValidatedContainer::create(1.0);
        c.write(v).unwrap();
        prop_assert_eq!(c.read(), v);
        c.write(v).unwrap();
        prop_assert_eq!(c.read(), v);
    }

    /// PROPERTY: After any sequence of writes the invariant holds.
    #[test]
    fn property_invariant_holds_after_any_sequence(
        values in proptest::collection::vec(-100.0f64..100.0, 0..32)
    ) {
        let mut c = ValidatedContainer::create(1.0);
        let mut expected = HiddenValue::DEFAULT;
        for v in values {
            if c.write(v).is_ok() {
                expected = v;
            }
            prop_assert!(c.read() >= HiddenValue::MINIMUM);
        }
        prop_assert_eq!(c.read(), expected);
    }

    /// PROPERTY: The radius is independent of the hidden value.
    #[test]
    fn property_radius_mutation_is_unvalidated(r in -1.0e6f64..1.0e6, v in valid_value()) {
        let mut c = ValidatedContainer::create(0.0);
        c.write(v).unwrap();
        c.radius = r;
        prop_assert_eq!(c.radius, r);
        prop_assert_eq!(c.read(), v);
    }
}
