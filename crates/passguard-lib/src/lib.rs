// ============================
// passguard-lib/src/lib.rs
// ============================
//! Core password policy validation.
//!
//! [`validate`] checks a password against the default policy, optionally
//! overlaid with a caller's [`PolicyOverrides`], and reports every rule the
//! password breaks:
//!
//! ```
//! use passguard_lib::{validate, PolicyOverrides};
//!
//! let result = validate("Ab1!", Some(&PolicyOverrides {
//!     min_length: Some(4),
//!     ..Default::default()
//! }));
//! assert!(result.valid);
//! ```

pub mod config;
pub mod error;
pub mod policy;
pub mod validator;
pub mod violation;

pub use config::Settings;
pub use error::AppError;
pub use passguard_common::{PolicyOverrides, ValidationResult};
pub use policy::PolicyConfig;
pub use validator::{validate, CharacterClasses, PasswordValidator};
pub use violation::PolicyViolation;
