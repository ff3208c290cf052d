//! Property tests for the validator
use passguard_lib::{validate, PasswordValidator, PolicyOverrides, PolicyViolation};
use proptest::prelude::*;

const EMPTY_OR_SPACE: &str = "Password cannot be empty or contain spaces";

fn overrides_strategy() -> impl Strategy<Value = PolicyOverrides> {
    (
        proptest::option::of(0usize..40),
        proptest::option::of(40usize..200),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(min, max, upper, lower, numbers, symbols)| PolicyOverrides {
            min_length: min,
            max_length: max,
            require_uppercase: upper,
            require_lowercase: lower,
            require_numbers: numbers,
            require_symbols: symbols,
        })
}

proptest! {
    #[test]
    fn empty_password_always_single_error(overrides in overrides_strategy()) {
        let result = validate("", Some(&overrides));
        prop_assert!(!result.valid);
        prop_assert_eq!(result.errors, vec![EMPTY_OR_SPACE]);
    }

    #[test]
    fn any_space_always_single_error(
        prefix in "\\PC*",
        suffix in "\\PC*",
        overrides in overrides_strategy(),
    ) {
        let password = format!("{prefix} {suffix}");
        let result = validate(&password, Some(&overrides));
        prop_assert!(!result.valid);
        prop_assert_eq!(result.errors, vec![EMPTY_OR_SPACE]);
    }

    #[test]
    fn short_passwords_report_minimum(
        password in "[a-zA-Z0-9!@#]{1,39}",
        overrides in overrides_strategy(),
    ) {
        let validator = PasswordValidator::with_overrides(&overrides);
        let min = validator.policy().min_length();
        prop_assume!(password.chars().count() < min);

        let result = validator.validate(&password);
        let expected = format!("Password must be at least {min} characters long");
        prop_assert!(!result.valid);
        prop_assert!(result.errors.contains(&expected));
    }

    #[test]
    fn validation_is_deterministic(password in "\\PC*", overrides in overrides_strategy()) {
        prop_assert_eq!(
            validate(&password, Some(&overrides)),
            validate(&password, Some(&overrides))
        );
    }

    #[test]
    fn valid_iff_no_violations(password in "\\PC{0,64}", overrides in overrides_strategy()) {
        let validator = PasswordValidator::with_overrides(&overrides);
        let violations = validator.violations(&password);
        let result = validator.validate(&password);

        prop_assert_eq!(result.valid, violations.is_empty());
        let rendered: Vec<String> = violations.iter().map(PolicyViolation::to_string).collect();
        prop_assert_eq!(result.errors, rendered);
    }
}
