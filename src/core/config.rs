//! Application configuration.
//!
//! The server loads `Config::from_env()` after calling `dotenvy::dotenv()`.
//! The loader duration is handed to the browser through a `<meta>` tag in
//! the page shell and read back with `LoaderSettings::from_page()`.

use std::time::Duration;

use thiserror::Error;

use super::loader::DEFAULT_LOADER_DURATION;

/// Loader duration in milliseconds
pub const LOADER_MS_VAR: &str = "WAITROOM_LOADER_MS";

/// Enables response compression (default: on)
pub const COMPRESSION_VAR: &str = "WAITROOM_COMPRESSION";

/// Name of the `<meta>` tag carrying the loader duration
pub const LOADER_META_NAME: &str = "waitroom-loader-ms";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidDuration { var: &'static str, value: String },

    #[error("{var} must be greater than zero")]
    ZeroDuration { var: &'static str },

    #[error("{var} must be a boolean flag, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

/// Settings shared between the server shell and the hydrated loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderSettings {
    pub duration: Duration,
}

impl LoaderSettings {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        parse_duration_ms(LOADER_MS_VAR, value).map(|duration| Self { duration })
    }

    pub fn duration_ms(&self) -> u128 {
        self.duration.as_millis()
    }

    /// Read the settings the server rendered into the page head.
    /// Falls back to the default when the tag is missing or malformed.
    #[cfg(feature = "hydrate")]
    pub fn from_page() -> Self {
        let selector = format!("meta[name=\"{LOADER_META_NAME}\"]");
        let content = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.query_selector(&selector).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"));

        match content.as_deref().map(Self::parse) {
            Some(Ok(settings)) => settings,
            Some(Err(err)) => {
                leptos::logging::warn!("ignoring loader settings: {}", err);
                Self::default()
            }
            None => Self::default(),
        }
    }

    #[cfg(not(feature = "hydrate"))]
    pub fn from_page() -> Self {
        Self::default()
    }
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            duration: DEFAULT_LOADER_DURATION,
        }
    }
}

/// Server configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub loader: LoaderSettings,
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from any variable source; unset variables keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOADER_MS_VAR) {
            config.loader.duration = parse_duration_ms(LOADER_MS_VAR, &raw)?;
        }
        if let Some(raw) = lookup(COMPRESSION_VAR) {
            config.compression = parse_flag(COMPRESSION_VAR, &raw)?;
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            loader: LoaderSettings::default(),
            compression: true,
        }
    }
}

fn parse_duration_ms(var: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    let ms: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidDuration {
        var,
        value: raw.to_string(),
    })?;
    if ms == 0 {
        return Err(ConfigError::ZeroDuration { var });
    }
    Ok(Duration::from_millis(ms))
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.loader.duration, Duration::from_millis(3500));
        assert!(config.compression);
    }

    #[test]
    fn test_loader_duration_override() {
        let config = Config::from_lookup(lookup(&[(LOADER_MS_VAR, " 1200 ")])).unwrap();
        assert_eq!(config.loader.duration_ms(), 1200);
    }

    #[test]
    fn test_invalid_duration() {
        let err = Config::from_lookup(lookup(&[(LOADER_MS_VAR, "abc")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidDuration {
                var: LOADER_MS_VAR,
                value: "abc".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "WAITROOM_LOADER_MS must be a whole number of milliseconds, got \"abc\""
        );
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert_eq!(
            LoaderSettings::parse("0"),
            Err(ConfigError::ZeroDuration { var: LOADER_MS_VAR })
        );
    }

    #[test]
    fn test_negative_duration_rejected() {
        assert!(matches!(
            LoaderSettings::parse("-5"),
            Err(ConfigError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn test_compression_flags() {
        for (raw, expected) in [("1", true), ("TRUE", true), ("on", true), ("no", false), ("0", false)] {
            let config = Config::from_lookup(lookup(&[(COMPRESSION_VAR, raw)])).unwrap();
            assert_eq!(config.compression, expected, "{raw}");
        }
        assert!(matches!(
            Config::from_lookup(lookup(&[(COMPRESSION_VAR, "maybe")])),
            Err(ConfigError::InvalidFlag { .. })
        ));
    }

    #[test]
    fn test_from_page_defaults_outside_browser() {
        assert_eq!(LoaderSettings::from_page(), LoaderSettings::default());
    }
}
