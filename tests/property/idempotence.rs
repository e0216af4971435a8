use super::common::*;
use formtree::*;
use proptest::prelude::*;
use std::sync::Arc;

struct Uppercase;

impl ErrorTranslator for Uppercase {
    fn translate(&self, error: &RawError) -> String {
        error.template.to_uppercase()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // For a validator/translator pair that is a pure function of node
    // content, re-validating a validated tree changes nothing.
    #[test]
    fn validate_twice_equals_validate_once(node in arb_node(true)) {
        let config = ValidationConfig::new()
            .with_validator(Arc::new(ErrorOnEPrefix))
            .with_translator(Arc::new(Uppercase));

        let once = validate(node, &config);
        let twice = validate(once.clone(), &config);
        prop_assert_eq!(once, twice);
    }

    // Idempotence also holds with no configured capabilities at all.
    #[test]
    fn noop_validation_is_idempotent(node in arb_node(true)) {
        let config = ValidationConfig::new();
        let once = validate(node, &config);
        let twice = validate(once.clone(), &config);
        prop_assert_eq!(once, twice);
    }
}
