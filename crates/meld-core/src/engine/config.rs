use crate::core::temperature::TemperatureScaler;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Parameters of an exchange run: ladder size, trials per round, the
/// temperature schedule assigned to the rungs and an optional RNG seed.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeConfig {
    pub n_replicas: usize,
    pub n_trials: usize,
    pub seed: Option<u64>,
    pub temperature: TemperatureScaler,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct FileExchangeConfig {
    n_replicas: Option<usize>,
    n_trials: Option<usize>,
    seed: Option<u64>,
    temperature: Option<TemperatureScaler>,
}

impl ExchangeConfig {
    /// Loads a configuration from a kebab-case TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.to_string_lossy())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, "<string>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let file: FileExchangeConfig = toml::from_str(content).map_err(|e| ConfigError::Toml {
            path: origin.to_string(),
            source: e,
        })?;

        let mut builder = ExchangeConfigBuilder::new();
        if let Some(n) = file.n_replicas {
            builder = builder.n_replicas(n);
        }
        if let Some(n) = file.n_trials {
            builder = builder.n_trials(n);
        }
        if let Some(seed) = file.seed {
            builder = builder.seed(seed);
        }
        if let Some(scaler) = file.temperature {
            builder = builder.temperature(scaler);
        }
        builder.build()
    }
}

#[derive(Default)]
pub struct ExchangeConfigBuilder {
    n_replicas: Option<usize>,
    n_trials: Option<usize>,
    seed: Option<u64>,
    temperature: Option<TemperatureScaler>,
}

impl ExchangeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn n_replicas(mut self, n: usize) -> Self {
        self.n_replicas = Some(n);
        self
    }
    pub fn n_trials(mut self, n: usize) -> Self {
        self.n_trials = Some(n);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn temperature(mut self, scaler: TemperatureScaler) -> Self {
        self.temperature = Some(scaler);
        self
    }

    pub fn build(self) -> Result<ExchangeConfig, ConfigError> {
        let n_replicas = self
            .n_replicas
            .ok_or(ConfigError::MissingParameter("n_replicas"))?;
        if n_replicas < 2 {
            return Err(ConfigError::InvalidParameter {
                name: "n_replicas",
                reason: format!(
                    "an exchange ladder needs at least two replicas, got {n_replicas}"
                ),
            });
        }
        Ok(ExchangeConfig {
            n_replicas,
            n_trials: self
                .n_trials
                .ok_or(ConfigError::MissingParameter("n_trials"))?,
            seed: self.seed,
            temperature: self
                .temperature
                .ok_or(ConfigError::MissingParameter("temperature"))?,
        })
    }
}
