//! Password policy violations.
use thiserror::Error;

/// A single rule a password failed
///
/// The `Display` text is the message reported to end users.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("Password cannot be empty or contain spaces")]
    EmptyOrContainsSpace,

    #[error("Password must be at least {0} characters long")]
    TooShort(usize),

    #[error("Password must be less than {0} characters long")]
    TooLong(usize),

    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("Password must contain at least one number")]
    MissingNumber,

    #[error("Password must contain at least one special character")]
    MissingSymbol,
}

impl PolicyViolation {
    /// Get the stable code for this violation, for callers that localize messages
    pub fn code(&self) -> &'static str {
        match self {
            PolicyViolation::EmptyOrContainsSpace => "PWD_001",
            PolicyViolation::TooShort(_) => "PWD_002",
            PolicyViolation::TooLong(_) => "PWD_003",
            PolicyViolation::MissingUppercase => "PWD_004",
            PolicyViolation::MissingLowercase => "PWD_005",
            PolicyViolation::MissingNumber => "PWD_006",
            PolicyViolation::MissingSymbol => "PWD_007",
        }
    }
}
