use std::path::PathBuf;

use anyhow::{anyhow, Context};
use serde::Deserialize;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "FOLIO_ENV";
const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";
const ENV_PREFIX: &str = "FOLIO";

/// Deployment environment the application is running in.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

impl Environment {
    fn parse(value: &str) -> anyhow::Result<Self> {
        match value {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(anyhow!(
                "unsupported environment '{}'; expected local/staging/production",
                other
            )),
        }
    }
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
    #[serde(default)]
    pub generation: GenerationSettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, environment overlay
    /// and `FOLIO_*` variables (`FOLIO_SERVER__PORT=9000`).
    pub fn load() -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let config_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => std::env::current_dir()
                .with_context(|| "unable to resolve current directory")?
                .join("config"),
        };

        Self::load_from(&config_dir, &environment)
    }

    /// Load configuration from an explicit directory and environment name.
    pub fn load_from(config_dir: &std::path::Path, environment: &str) -> anyhow::Result<Self> {
        let parsed_environment = Environment::parse(environment)?;

        let base_path = config_dir.join("base.toml");
        let environment_path = config_dir.join(format!("{}.toml", environment));

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;

        settings.environment = parsed_environment;
        settings.generation.validate()?;

        Ok(settings)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "ServerSettings::default_host")]
    pub host: String,
    #[serde(default = "ServerSettings::default_port")]
    pub port: u16,
    #[serde(default = "ServerSettings::default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl ServerSettings {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        5007
    }

    fn default_request_timeout_ms() -> u64 {
        15000
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            request_timeout_ms: Self::default_request_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default)]
    pub log_format: LogFormat,
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "TelemetrySettings::default_log_level")]
    pub log_level: String,
}

impl TelemetrySettings {
    fn default_log_level() -> String {
        "info".to_string()
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            log_level: Self::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Limits the request layer enforces before handing work to the generator.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    #[serde(default = "GenerationSettings::default_max_count")]
    pub max_count: u32,
    #[serde(default = "GenerationSettings::default_max_average_likes")]
    pub max_average_likes: f64,
    #[serde(default = "GenerationSettings::default_max_average_reviews")]
    pub max_average_reviews: f64,
    #[serde(default = "GenerationSettings::default_locale")]
    pub default_locale: String,
}

impl GenerationSettings {
    fn default_max_count() -> u32 {
        50
    }

    fn default_max_average_likes() -> f64 {
        10.0
    }

    fn default_max_average_reviews() -> f64 {
        100.0
    }

    fn default_locale() -> String {
        "en-US".to_string()
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.max_count == 0 {
            return Err(anyhow!("generation.max_count must be at least 1"));
        }
        for (name, value) in [
            ("max_average_likes", self.max_average_likes),
            ("max_average_reviews", self.max_average_reviews),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(anyhow!(
                    "generation.{} must be a finite, non-negative number",
                    name
                ));
            }
        }
        Ok(())
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_count: Self::default_max_count(),
            max_average_likes: Self::default_max_average_likes(),
            max_average_reviews: Self::default_max_average_reviews(),
            default_locale: Self::default_locale(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_environment_is_local() {
        let settings = Settings::default();
        assert_eq!(settings.environment, Environment::Local);
    }

    #[test]
    fn default_generation_limits() {
        let settings = Settings::default();
        assert_eq!(settings.generation.max_count, 50);
        assert_eq!(settings.generation.max_average_likes, 10.0);
        assert_eq!(settings.generation.default_locale, "en-US");
    }

    #[test]
    fn missing_config_dir_yields_defaults() {
        let dir = std::env::temp_dir().join("folio-settings-missing");
        let settings = Settings::load_from(&dir, "staging").unwrap();
        assert_eq!(settings.environment, Environment::Staging);
        assert_eq!(settings.server.port, 5007);
        assert_eq!(settings.telemetry.log_format, LogFormat::Pretty);
    }

    #[test]
    fn config_files_are_layered() {
        let dir = std::env::temp_dir().join(format!("folio-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("base.toml"),
            "[server]\nport = 6000\n[generation]\nmax_count = 25\n",
        )
        .unwrap();
        std::fs::write(dir.join("production.toml"), "[telemetry]\nlog_format = \"json\"\n").unwrap();

        let settings = Settings::load_from(&dir, "production").unwrap();
        assert_eq!(settings.server.port, 6000);
        assert_eq!(settings.generation.max_count, 25);
        assert_eq!(settings.telemetry.log_format, LogFormat::Json);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let dir = std::env::temp_dir().join("folio-settings-missing");
        let err = Settings::load_from(&dir, "qa").unwrap_err();
        assert!(err.to_string().contains("unsupported environment 'qa'"));
    }

    #[test]
    fn zero_max_count_is_rejected() {
        let settings = GenerationSettings {
            max_count: 0,
            ..GenerationSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
