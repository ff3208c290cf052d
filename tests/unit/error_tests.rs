// =======================
// tests/unit/error_tests.rs
// =======================
//! Unit tests for error types
use passguard_lib::{AppError, PolicyViolation};
use std::io::{Error as IoError, ErrorKind};

#[test]
fn test_app_error_codes() {
    let io_error: AppError = IoError::new(ErrorKind::NotFound, "missing").into();
    assert_eq!(io_error.error_code(), "IO_001");
    assert_eq!(
        AppError::InvalidPolicy("test".to_string()).error_code(),
        "POL_001"
    );
}

#[test]
fn test_app_error_is_std_error() {
    let error: Box<dyn std::error::Error + Send + Sync> =
        Box::new(AppError::InvalidInput("bad extension".to_string()));
    assert_eq!(error.to_string(), "Invalid input: bad extension");
}

#[test]
fn test_violation_codes() {
    assert_eq!(PolicyViolation::EmptyOrContainsSpace.code(), "PWD_001");
    assert_eq!(PolicyViolation::TooShort(10).code(), "PWD_002");
    assert_eq!(PolicyViolation::TooLong(128).code(), "PWD_003");
    assert_eq!(PolicyViolation::MissingUppercase.code(), "PWD_004");
    assert_eq!(PolicyViolation::MissingLowercase.code(), "PWD_005");
    assert_eq!(PolicyViolation::MissingNumber.code(), "PWD_006");
    assert_eq!(PolicyViolation::MissingSymbol.code(), "PWD_007");
}
