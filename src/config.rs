//! Application configuration loaded from environment variables.
//!
//! Everything has a sensible default so the app runs with no environment
//! at all; a `.env` file is honored for local overrides.

use std::env;

use crate::models::workout::Coordinates;

/// Fallback map center when geolocation is unavailable:
/// Newcastle upon Tyne, UK.
const DEFAULT_CENTER: (f64, f64) = (54.9784, -1.617439);

/// Default map zoom level.
const DEFAULT_ZOOM: u8 = 13;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Map center used when no geolocation fix is available
    pub fallback_center: Coordinates,
    /// Initial map zoom level
    pub map_zoom: u8,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            fallback_center: Coordinates::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            map_zoom: DEFAULT_ZOOM,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// built-in defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            fallback_center: Coordinates::new(
                read_f64("PACELINE_DEFAULT_LAT", DEFAULT_CENTER.0)?,
                read_f64("PACELINE_DEFAULT_LNG", DEFAULT_CENTER.1)?,
            ),
            map_zoom: read_u8("PACELINE_MAP_ZOOM", DEFAULT_ZOOM)?,
        })
    }
}

fn read_f64(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(name)),
        Err(_) => Ok(default),
    }
}

fn read_u8(name: &'static str, default: u8) -> Result<u8, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(name)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable {0} is not a valid number")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.fallback_center.lat, 54.9784);
        assert_eq!(config.fallback_center.lng, -1.617439);
        assert_eq!(config.map_zoom, 13);
    }

    #[test]
    fn test_config_from_env_overrides() {
        env::set_var("PACELINE_DEFAULT_LAT", "51.5072");
        env::set_var("PACELINE_DEFAULT_LNG", "-0.1276");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.fallback_center.lat, 51.5072);
        assert_eq!(config.fallback_center.lng, -0.1276);

        env::remove_var("PACELINE_DEFAULT_LAT");
        env::remove_var("PACELINE_DEFAULT_LNG");
    }

    #[test]
    fn test_read_u8_rejects_garbage() {
        env::set_var("PACELINE_TEST_ZOOM", "not-a-number");
        assert!(read_u8("PACELINE_TEST_ZOOM", 13).is_err());
        env::remove_var("PACELINE_TEST_ZOOM");
    }
}
