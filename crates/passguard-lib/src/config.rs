// ============================
// passguard-lib/src/config.rs
// ============================
//! Configuration management.
use std::io;
use std::path::Path;

use figment::{
    providers::{Env, Format, Json, Toml, Yaml},
    Figment,
};
use passguard_common::PolicyOverrides;
use serde::{Deserialize, Serialize};
use tracing::{debug, Level};

use crate::error::AppError;
use crate::policy::PolicyConfig;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "PASSGUARD_";
/// Separator for nested keys in environment variables
pub const ENV_SEPARATOR: &str = "__";
/// Config files looked up in the working directory, lowest priority first
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["passguard.toml", "passguard.yaml", "passguard.json"];

/// Application settings
///
/// Policy keys may be written in snake_case or camelCase, but each key should
/// use one spelling across all sources: environment variables always arrive
/// as snake_case, so config files that are overridden from the environment
/// should use snake_case too.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Log level
    pub log_level: String,
    /// Overrides applied on top of the default password policy
    pub policy: PolicyOverrides,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            policy: PolicyOverrides::default(),
        }
    }
}

impl Settings {
    /// Load settings from the default config files, then environment variables
    pub fn load() -> Result<Self, AppError> {
        let figment = Figment::new()
            .merge(Toml::file(DEFAULT_CONFIG_FILES[0]))
            .merge(Yaml::file(DEFAULT_CONFIG_FILES[1]))
            .merge(Json::file(DEFAULT_CONFIG_FILES[2]))
            .merge(env_provider());

        Self::extract(figment)
    }

    /// Load settings from an explicit file, then environment variables.
    /// The file format is picked from the extension.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("config file not found: {}", path.display()),
            )));
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let figment = match extension.as_deref() {
            Some("toml") => Figment::from(Toml::file(path)),
            Some("yaml" | "yml") => Figment::from(Yaml::file(path)),
            Some("json") => Figment::from(Json::file(path)),
            _ => {
                return Err(AppError::InvalidInput(format!(
                    "unsupported config file format: {}",
                    path.display()
                )))
            },
        };

        debug!(path = %path.display(), "loading settings");
        Self::extract(figment.merge(env_provider()))
    }

    /// Extract without checking the policy; callers may still layer more
    /// overrides before resolving it with [`Settings::policy`].
    fn extract(figment: Figment) -> Result<Self, AppError> {
        let settings: Settings = figment.extract()?;
        settings.check_log_level()?;
        debug!(
            log_level = %settings.log_level,
            overrides = ?settings.policy,
            "settings loaded"
        );
        Ok(settings)
    }

    /// Validate the settings, including the resolved policy
    pub fn validate(&self) -> Result<(), AppError> {
        self.check_log_level()?;
        self.policy()?;
        Ok(())
    }

    fn check_log_level(&self) -> Result<(), AppError> {
        if self.log_level.parse::<Level>().is_err() {
            return Err(AppError::InvalidInput(format!(
                "unknown log level: {}",
                self.log_level
            )));
        }
        Ok(())
    }

    /// Resolve the configured overrides into a checked policy
    pub fn policy(&self) -> Result<PolicyConfig, AppError> {
        let policy = PolicyConfig::with_overrides(&self.policy);
        policy.check()?;
        Ok(policy)
    }
}

fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX).split(ENV_SEPARATOR)
}
