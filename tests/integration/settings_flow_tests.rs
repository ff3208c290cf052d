//! Settings file -> policy -> validator
use figment::Jail;
use passguard_lib::{AppError, PasswordValidator, Settings};
use std::io::Write;

#[test]
fn test_json_settings_drive_validation() {
    Jail::expect_with(|_jail| {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .map_err(|e| e.to_string())?;
        write!(
            file,
            r#"{{"log_level": "debug", "policy": {{"minLength": 4, "maxLength": 8, "requireSymbols": false}}}}"#
        )
        .map_err(|e| e.to_string())?;

        let settings = Settings::load_from(file.path()).map_err(|e| e.to_string())?;
        let validator = PasswordValidator::new(settings.policy().map_err(|e| e.to_string())?);

        assert!(validator.validate("Abc1").valid);
        assert_eq!(
            validator.validate("Abcdefgh1").errors,
            vec!["Password must be less than 8 characters long"]
        );
        assert_eq!(
            validator.validate("abc").errors,
            vec![
                "Password must be at least 4 characters long",
                "Password must contain at least one uppercase letter",
                "Password must contain at least one number",
            ]
        );
        Ok(())
    });
}

#[test]
fn test_env_overrides_explicit_file() {
    Jail::expect_with(|jail| {
        jail.create_file("policy.toml", "[policy]\nmin_length = 6\n")?;
        jail.set_env("PASSGUARD_POLICY__MIN_LENGTH", "12");

        let settings = Settings::load_from("policy.toml").map_err(|e| e.to_string())?;
        assert_eq!(settings.policy.min_length, Some(12));
        Ok(())
    });
}

#[test]
fn test_inverted_bounds_in_file_rejected_on_resolve() {
    Jail::expect_with(|jail| {
        jail.create_file("policy.toml", "[policy]\nmin_length = 30\nmax_length = 20\n")?;

        let settings = Settings::load_from("policy.toml").map_err(|e| e.to_string())?;
        assert!(settings.validate().is_err());
        match settings.policy() {
            Err(error @ AppError::InvalidPolicy(_)) => {
                assert_eq!(error.error_code(), "POL_001");
            },
            other => panic!("expected invalid policy, got {other:?}"),
        }
        Ok(())
    });
}
