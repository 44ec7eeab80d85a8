use std::time::Duration;

use crate::timer::DEFAULT_PERIOD;

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_period", with = "humantime_serde")]
    pub period: Duration,

    #[serde(default, rename = "countdown")]
    pub countdowns: Vec<CountdownConfig>,
}

/// One display surface: its id and the raw countdown attribute.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountdownConfig {
    pub id: String,
    pub targets: String,
}

fn default_period() -> Duration {
    DEFAULT_PERIOD
}

impl Default for Config {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            countdowns: Vec::new(),
        }
    }
}

impl Config {
    pub async fn load(path: &camino::Utf8Path) -> Result<Self, ConfigError> {
        let config_str =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::ReadingFile {
                    path: path.to_path_buf(),
                    source,
                })?;

        Self::parse(&config_str)
    }

    pub fn parse(config_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(config_str).map_err(ConfigError::ParsingConfig)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.period.is_zero() {
            return Err(ConfigError::InvalidPeriod);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file from path '{}'", .path)]
    ReadingFile {
        path: camino::Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    ParsingConfig(#[from] toml::de::Error),

    #[error("Tick period must be greater than 0")]
    InvalidPeriod,
}
