// ============================
// passguard-lib/src/validator.rs
// ============================
//! Password validation against a [`PolicyConfig`].
use passguard_common::{PolicyOverrides, ValidationResult};
use tracing::trace;

use crate::policy::PolicyConfig;
use crate::violation::PolicyViolation;

/// Characters that count as symbols
pub const SYMBOLS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Check whether `c` is in [`SYMBOLS`]
pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}

/// Length of `password` in UTF-16 code units.
/// Characters outside the Basic Multilingual Plane count as 2.
pub fn password_length(password: &str) -> usize {
    password.encode_utf16().count()
}

/// Character classes present in a password
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClasses {
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_numbers: bool,
    pub has_symbols: bool,
}

impl CharacterClasses {
    /// Scan `password` once and record which classes occur.
    /// Only ASCII letters and digits count; other letters are ignored.
    pub fn scan(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut classes, c| {
            match c {
                'A'..='Z' => classes.has_uppercase = true,
                'a'..='z' => classes.has_lowercase = true,
                '0'..='9' => classes.has_numbers = true,
                c if is_symbol(c) => classes.has_symbols = true,
                _ => {},
            }
            classes
        })
    }
}

/// Validates passwords against a fixed policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordValidator {
    policy: PolicyConfig,
}

impl PasswordValidator {
    /// Create a validator for `policy`
    pub fn new(policy: PolicyConfig) -> Self {
        Self { policy }
    }

    /// Create a validator for the default policy overlaid with `overrides`
    pub fn with_overrides(overrides: &PolicyOverrides) -> Self {
        Self::new(PolicyConfig::with_overrides(overrides))
    }

    /// The policy this validator enforces
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Collect every rule `password` breaks, in check order.
    ///
    /// An empty password or one containing a space yields only
    /// [`PolicyViolation::EmptyOrContainsSpace`]; otherwise all checks run.
    pub fn violations(&self, password: &str) -> Vec<PolicyViolation> {
        if password.is_empty() || password.contains(' ') {
            return vec![PolicyViolation::EmptyOrContainsSpace];
        }

        let policy = &self.policy;
        let classes = CharacterClasses::scan(password);
        let length = password_length(password);
        let mut violations = Vec::new();

        if length < policy.min_length() {
            violations.push(PolicyViolation::TooShort(policy.min_length()));
        }

        if length > policy.max_length() {
            violations.push(PolicyViolation::TooLong(policy.max_length()));
        }

        if policy.require_uppercase() && !classes.has_uppercase {
            violations.push(PolicyViolation::MissingUppercase);
        }

        if policy.require_lowercase() && !classes.has_lowercase {
            violations.push(PolicyViolation::MissingLowercase);
        }

        if policy.require_numbers() && !classes.has_numbers {
            violations.push(PolicyViolation::MissingNumber);
        }

        if policy.require_symbols() && !classes.has_symbols {
            violations.push(PolicyViolation::MissingSymbol);
        }

        violations
    }

    /// Validate `password` and render the violations as messages
    pub fn validate(&self, password: &str) -> ValidationResult {
        let violations = self.violations(password);
        trace!(violations = violations.len(), "password checked");
        ValidationResult::from_errors(violations.iter().map(ToString::to_string).collect())
    }
}

/// Validate `password` against the default policy, overlaid with `overrides` if given
pub fn validate(password: &str, overrides: Option<&PolicyOverrides>) -> ValidationResult {
    let validator = match overrides {
        Some(overrides) => PasswordValidator::with_overrides(overrides),
        None => PasswordValidator::default(),
    };
    validator.validate(password)
}
