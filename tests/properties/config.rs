//! Property tests for config parsing.

use proptest::prelude::*;

use circle_lab::{Config, HiddenValue};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary small input as config never panics.
    #[test]
    fn property_config_parse_never_panics(content in "(?s).{0,256}") {
        let _ = toml::from_str::<Config>(&content);
    }

    /// PROPERTY: Any finite radius survives a TOML round trip.
    #[test]
    fn property_radius_round_trips(r in -1.0e9f64..1.0e9) {
        let mut config = Config::default();
        config.container.radius = r;
        let parsed: Config = toml::from_str(&config.to_toml().unwrap()).unwrap();
        prop_assert_eq!(parsed.container.radius, r);
    }

    /// PROPERTY: A hidden value deserialized from JSON always satisfies the minimum.
    #[test]
    fn property_hidden_value_deserialize_checks_minimum(v in -1.0e6f64..1.0e6) {
        let parsed = serde_json::from_str::<HiddenValue>(&v.to_string());
        match parsed {
            Ok(h) => prop_assert!(h.get() >= HiddenValue::MINIMUM),
            Err(_) => prop_assert!(v < HiddenValue::MINIMUM),
        }
    }
}
