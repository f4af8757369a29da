use serde::Deserialize;

use lightcycle_duel::config::DuelConfig;

use crate::error::AppError;

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "lightcycle.toml";

/// Top-level frontend configuration, loaded from `lightcycle.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// File the tracing output goes to. The terminal itself is busy drawing.
    pub log_file: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Canvas settings. When absent, the duel loads its own config file.
    pub duel: Option<DuelConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_file: "lightcycle.log".to_string(),
            log_filter: "info".to_string(),
            duel: None,
        }
    }
}

/// Where the configuration came from; logged once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(String),
    Defaults,
    /// The default file existed but did not parse.
    Invalid { path: String, error: String },
}

impl AppConfig {
    /// Load from `LIGHTCYCLE_CONFIG` (must exist and parse) or
    /// [`DEFAULT_CONFIG_PATH`] (optional), then apply env overrides.
    pub fn load() -> Result<(Self, ConfigSource), AppError> {
        let (mut config, source) = match std::env::var("LIGHTCYCLE_CONFIG") {
            Ok(path) if !path.is_empty() => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| AppError::Config(format!("cannot read {path}: {e}")))?;
                let config = Self::parse(&content)
                    .map_err(|e| AppError::Config(format!("cannot parse {path}: {e}")))?;
                (config, ConfigSource::File(path))
            },
            _ => match std::fs::read_to_string(DEFAULT_CONFIG_PATH) {
                Ok(content) => match Self::parse(&content) {
                    Ok(cfg) => (cfg, ConfigSource::File(DEFAULT_CONFIG_PATH.to_string())),
                    Err(error) => (
                        Self::default(),
                        ConfigSource::Invalid {
                            path: DEFAULT_CONFIG_PATH.to_string(),
                            error,
                        },
                    ),
                },
                Err(_) => (Self::default(), ConfigSource::Defaults),
            },
        };

        if let Ok(path) = std::env::var("LIGHTCYCLE_LOG_FILE")
            && !path.is_empty()
        {
            config.log_file = path;
        }
        if let Ok(filter) = std::env::var("LIGHTCYCLE_LOG_FILTER")
            && !filter.is_empty()
        {
            config.log_filter = filter;
        }

        Ok((config, source))
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Canvas settings from this file, or from the duel's own config file.
    pub fn duel_config(&self) -> DuelConfig {
        self.duel.clone().unwrap_or_else(DuelConfig::load)
    }
}
