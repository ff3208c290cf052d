//! Password policy configuration.
use passguard_common::PolicyOverrides;
use serde::Serialize;

use crate::error::AppError;

/// Default minimum password length
pub const DEFAULT_MIN_LENGTH: usize = 10;
/// Default maximum password length
pub const DEFAULT_MAX_LENGTH: usize = 128;

/// Fully resolved password policy
///
/// Built from the defaults with [`PolicyConfig::with_overrides`]; fields are
/// read-only once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicyConfig {
    min_length: usize,
    max_length: usize,
    require_uppercase: bool,
    require_lowercase: bool,
    require_numbers: bool,
    require_symbols: bool,
}

impl PolicyConfig {
    /// Default policy: 10..=128 characters, every character class required
    pub const DEFAULT: PolicyConfig = PolicyConfig {
        min_length: DEFAULT_MIN_LENGTH,
        max_length: DEFAULT_MAX_LENGTH,
        require_uppercase: true,
        require_lowercase: true,
        require_numbers: true,
        require_symbols: true,
    };

    /// Overlay `overrides` on the default policy, field by field
    pub fn with_overrides(overrides: &PolicyOverrides) -> Self {
        let defaults = Self::DEFAULT;
        Self {
            min_length: overrides.min_length.unwrap_or(defaults.min_length),
            max_length: overrides.max_length.unwrap_or(defaults.max_length),
            require_uppercase: overrides
                .require_uppercase
                .unwrap_or(defaults.require_uppercase),
            require_lowercase: overrides
                .require_lowercase
                .unwrap_or(defaults.require_lowercase),
            require_numbers: overrides.require_numbers.unwrap_or(defaults.require_numbers),
            require_symbols: overrides.require_symbols.unwrap_or(defaults.require_symbols),
        }
    }

    /// Check that the policy is well formed
    pub fn check(&self) -> Result<(), AppError> {
        if self.min_length > self.max_length {
            return Err(AppError::InvalidPolicy(format!(
                "minimum length {} exceeds maximum length {}",
                self.min_length, self.max_length
            )));
        }
        Ok(())
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn require_uppercase(&self) -> bool {
        self.require_uppercase
    }

    pub fn require_lowercase(&self) -> bool {
        self.require_lowercase
    }

    pub fn require_numbers(&self) -> bool {
        self.require_numbers
    }

    pub fn require_symbols(&self) -> bool {
        self.require_symbols
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<&PolicyOverrides> for PolicyConfig {
    fn from(overrides: &PolicyOverrides) -> Self {
        Self::with_overrides(overrides)
    }
}
