//! Demo configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `snowfall.ron` file (if exists)
//! 3. Environment variables prefixed with `SNOWFALL_`
//!
//! Example environment variable: `SNOWFALL_SNOW__PARTICLE_COUNT=20000`

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use snowfall_core::SnowSettings;

/// Main demo configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub snow: SnowSettings,
}

/// Window settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial window width (defaults to the viewport width)
    pub width: u32,
    /// Initial window height (defaults to the viewport height)
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Snowfall".to_string(),
            width: 1024,
            height: 768,
        }
    }
}

impl AppConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `snowfall.ron` file (if exists)
    /// 3. Environment variables prefixed with `SNOWFALL_` (highest priority)
    pub fn load() -> Result<Self> {
        Self::load_from("snowfall")
    }

    /// Same as [`AppConfig::load`] with an explicit config file stem
    pub fn load_from(file_stem: &str) -> Result<Self> {
        Self::load_layers(file_stem, Self::environment())
    }

    /// Environment layer: `SNOWFALL_` prefix, `__` between nested keys
    fn environment() -> Environment {
        Environment::with_prefix("SNOWFALL")
            .prefix_separator("_")
            .separator("__")
    }

    fn load_layers(file_stem: &str, environment: Environment) -> Result<Self> {
        let defaults = Self::default();
        let snow = &defaults.snow;

        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("window.title", defaults.window.title.clone())?
            .set_default("window.width", i64::from(defaults.window.width))?
            .set_default("window.height", i64::from(defaults.window.height))?
            .set_default("snow.particle_count", snow.particle_count as i64)?
            .set_default("snow.viewport_width", f64::from(snow.viewport_width))?
            .set_default("snow.viewport_height", f64::from(snow.viewport_height))?
            .set_default("snow.flake_size", f64::from(snow.flake_size))?
            .set_default("snow.fall_speed", f64::from(snow.fall_speed))?
            .set_default("snow.fall_speed_spread", f64::from(snow.fall_speed_spread))?
            .set_default("snow.snowiness", f64::from(snow.snowiness))?
            .set_default("snow.drift", f64::from(snow.drift))?
            .set_default("snow.impulse_strength", f64::from(snow.impulse_strength))?
            .set_default("snow.impulse_softening", f64::from(snow.impulse_softening))?
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name(file_stem)
                    .format(config::FileFormat::Ron)
                    .required(false),
            )
            // Layer 3: Environment variables (SNOWFALL_SNOW__SNOWINESS, etc.)
            .add_source(environment);

        let config = builder.build().context("Failed to build configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config
            .snow
            .validate()
            .context("Invalid snow settings")?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Map;
    use std::io::Write;

    /// Environment layer fed from `vars` instead of the process environment
    fn fake_env(vars: &[(&str, &str)]) -> Environment {
        let vars: Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::environment().source(Some(vars))
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.title, "Snowfall");
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.snow.particle_count, 50_000);
        assert_eq!(config.snow.snowiness, 0.998);
    }

    #[test]
    fn test_load_config_with_defaults() {
        // Should load defaults when no config file exists
        let config = AppConfig::load_from("does-not-exist/snowfall")
            .expect("Failed to load config");
        assert_eq!(config.window.height, 768);
        assert_eq!(config.snow.particle_count, 50_000);
        assert_eq!(config.snow.flake_size, 2.0);
        assert_eq!(config.snow.impulse_softening, 0.1);
    }

    #[test]
    fn test_ron_file_overrides_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("snowfall.ron");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(
            file,
            "(window: (title: \"Blizzard\"), snow: (particle_count: 1000, snowiness: 0.9))"
        )
        .expect("write config");

        let stem = dir.path().join("snowfall");
        let config = AppConfig::load_from(stem.to_str().expect("utf-8 path"))
            .expect("Failed to load config");

        assert_eq!(config.window.title, "Blizzard");
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.snow.particle_count, 1000);
        assert_eq!(config.snow.snowiness, 0.9);
        assert_eq!(config.snow.fall_speed, 0.04);
    }

    #[test]
    fn test_invalid_file_values_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("snowfall.ron");
        std::fs::write(&path, "(snow: (snowiness: 2.0))").expect("write config");

        let stem = dir.path().join("snowfall");
        assert!(AppConfig::load_from(stem.to_str().expect("utf-8 path")).is_err());
    }

    #[test]
    fn test_env_overrides_ron_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("snowfall.ron");
        std::fs::write(&path, "(snow: (particle_count: 1000, snowiness: 0.9))")
            .expect("write config");

        let env = fake_env(&[
            ("SNOWFALL_SNOW__PARTICLE_COUNT", "20000"),
            ("SNOWFALL_SNOW__SNOWINESS", "0.5"),
            ("SNOWFALL_WINDOW__TITLE", "Flurry"),
            ("OTHER_SNOW__DRIFT", "9.0"),
        ]);
        let stem = dir.path().join("snowfall");
        let config = AppConfig::load_layers(stem.to_str().expect("utf-8 path"), env)
            .expect("Failed to load config");

        assert_eq!(config.snow.particle_count, 20_000);
        assert_eq!(config.snow.snowiness, 0.5);
        assert_eq!(config.window.title, "Flurry");
        // Unprefixed variables are ignored
        assert_eq!(config.snow.drift, 0.02);
    }

    #[test]
    fn test_invalid_env_values_are_rejected() {
        let env = fake_env(&[("SNOWFALL_SNOW__PARTICLE_COUNT", "0")]);
        assert!(AppConfig::load_layers("does-not-exist/snowfall", env).is_err());
    }
}
