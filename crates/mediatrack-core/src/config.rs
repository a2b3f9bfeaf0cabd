//! Configuration module
//!
//! Settings for media reference tracking, read from the environment.

use std::env;

// Common constants
const TRACKING_ENABLED: bool = true;
const MAKE_TRANSIENT_ON_ORPHAN: bool = false;
const DEFAULT_ENVIRONMENT: &str = "development";

/// Media tracking configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackingConfig {
    /// When false, hooks built from this config never derive track actions.
    pub enabled: bool,
    /// Passed to the media tracker when a batch scope is opened. Files that lose their
    /// last reference inside the scope become transient instead of staying permanent.
    pub make_transient_on_orphan: bool,
    pub environment: String,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            enabled: TRACKING_ENABLED,
            make_transient_on_orphan: MAKE_TRANSIENT_ON_ORPHAN,
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl TrackingConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let enabled = match lookup("MEDIA_TRACKING_ENABLED") {
            Some(value) => parse_bool("MEDIA_TRACKING_ENABLED", &value)?,
            None => TRACKING_ENABLED,
        };

        let make_transient_on_orphan = match lookup("MEDIA_TRACKING_MAKE_TRANSIENT_ON_ORPHAN") {
            Some(value) => parse_bool("MEDIA_TRACKING_MAKE_TRANSIENT_ON_ORPHAN", &value)?,
            None => MAKE_TRANSIENT_ON_ORPHAN,
        };

        Ok(Self {
            enabled,
            make_transient_on_orphan,
            environment,
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let environment = self.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, anyhow::Error> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(anyhow::anyhow!(
            "{} must be a boolean (true/false), got '{}'",
            key,
            other
        )),
    }
}
