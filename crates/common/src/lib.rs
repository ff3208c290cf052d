// ================
// common/src/lib.rs
// ================
//! Common types shared between the password validator and its callers.
//! These are the values that cross the call boundary: the partial policy a
//! caller supplies and the result it gets back.

use serde::{Deserialize, Serialize};

/// Partial password policy supplied by a caller
///
/// Every field is optional; a field left as `None` falls back to the default
/// policy. Field names serialize as camelCase, snake_case is accepted on input.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicyOverrides {
    /// Minimum password length
    #[serde(alias = "min_length", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Maximum password length
    #[serde(alias = "max_length", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Require an ASCII uppercase letter
    #[serde(alias = "require_uppercase", skip_serializing_if = "Option::is_none")]
    pub require_uppercase: Option<bool>,
    /// Require an ASCII lowercase letter
    #[serde(alias = "require_lowercase", skip_serializing_if = "Option::is_none")]
    pub require_lowercase: Option<bool>,
    /// Require an ASCII digit
    #[serde(alias = "require_numbers", skip_serializing_if = "Option::is_none")]
    pub require_numbers: Option<bool>,
    /// Require a character from the symbol set
    #[serde(alias = "require_symbols", skip_serializing_if = "Option::is_none")]
    pub require_symbols: Option<bool>,
}

impl PolicyOverrides {
    /// True when no field is overridden
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Layer `other` on top of `self`, field by field.
    /// Fields set in `other` win; unset fields keep the value from `self`.
    pub fn merged_with(self, other: &PolicyOverrides) -> PolicyOverrides {
        PolicyOverrides {
            min_length: other.min_length.or(self.min_length),
            max_length: other.max_length.or(self.max_length),
            require_uppercase: other.require_uppercase.or(self.require_uppercase),
            require_lowercase: other.require_lowercase.or(self.require_lowercase),
            require_numbers: other.require_numbers.or(self.require_numbers),
            require_symbols: other.require_symbols.or(self.require_symbols),
        }
    }
}

/// Outcome of validating one password
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// True iff `errors` is empty
    pub valid: bool,
    /// Violation messages in the order the checks ran
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Build a result from the collected messages
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}
