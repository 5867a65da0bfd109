//! Translator credential configuration
//!
//! This module holds the credentials used to authenticate against the
//! Gemini API:
//! - Construction-time validation of API keys
//! - Random key selection to spread load across multiple keys
//! - Loading from TOML files and environment variables

use crate::error::{ConfigError, Result};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Model targeted when the caller does not supply one
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variable holding one or more comma-separated API keys
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the default model
pub const MODEL_ENV: &str = "GEMINI_MODEL";

/// Credentials and model selection for the translation client.
///
/// Holds one or more API keys and the model name requests should target.
/// Immutable after construction, so it can be shared by reference across
/// threads without synchronization. API keys are never serialized back out
/// and are redacted from `Debug` output.
#[derive(Clone, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct TranslatorConfig {
    api_keys: Vec<String>,
    model_name: String,
}

/// On-disk configuration shape, validated into [`TranslatorConfig`]
#[derive(Deserialize)]
struct RawConfig {
    #[serde(alias = "api_key")]
    api_keys: KeyInput,

    #[serde(default, alias = "model_name")]
    model: Option<String>,
}

/// The key field accepts either a single string or a list of strings
#[derive(Deserialize)]
#[serde(untagged)]
enum KeyInput {
    One(String),
    Many(Vec<String>),
}

impl TranslatorConfig {
    /// Create a configuration with a single API key and the default model.
    ///
    /// Fails with [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_keys([api_key.into()])
    }

    /// Create a configuration with multiple API keys and the default model.
    ///
    /// The sequence must contain at least one key and no empty keys;
    /// an empty input is caller misuse and fails immediately.
    pub fn from_keys<I, S>(api_keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let api_keys: Vec<String> = api_keys.into_iter().map(Into::into).collect();

        if api_keys.is_empty() {
            return Err(ConfigError::NoApiKeys);
        }
        if api_keys.iter().any(|key| key.is_empty()) {
            return Err(ConfigError::EmptyApiKey);
        }

        Ok(Self {
            api_keys,
            model_name: DEFAULT_MODEL.to_string(),
        })
    }

    /// Target a different model than [`DEFAULT_MODEL`]
    pub fn with_model(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Load configuration from the environment.
    ///
    /// Reads comma-separated keys from `GEMINI_API_KEY` and an optional
    /// model override from `GEMINI_MODEL`. Keys are trimmed and empty
    /// segments are dropped.
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment");

        let raw_keys =
            std::env::var(API_KEY_ENV).map_err(|_| ConfigError::EnvVarNotFound {
                var: API_KEY_ENV.to_string(),
            })?;
        let model = std::env::var(MODEL_ENV).ok().filter(|m| !m.is_empty());

        Self::from_env_parts(&raw_keys, model)
    }

    fn from_env_parts(raw_keys: &str, model: Option<String>) -> Result<Self> {
        let keys = raw_keys
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty());
        let config = Self::from_keys(keys)?;

        Ok(match model {
            Some(model) => config.with_model(model),
            None => config,
        })
    }

    /// Load configuration from a TOML file.
    ///
    /// The file supplies either `api_key = "..."` or `api_keys = [...]`,
    /// and an optional `model`. Keys found in files pass through the same
    /// validation as the constructors.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from: {}", path.display());

        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let raw: RawConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::InvalidFormat {
                message: e.to_string(),
            })?;

        Self::try_from(raw)
    }

    /// Load configuration with automatic discovery.
    ///
    /// Tries `./htmljp.toml`, then `<config dir>/htmljp/config.toml`,
    /// and falls back to the environment when no file is found.
    pub fn discover() -> Result<Self> {
        for path in Self::config_search_paths() {
            if path.exists() {
                debug!("Found configuration at: {}", path.display());
                return Self::from_file(path);
            }
        }

        warn!("No configuration file found, falling back to environment");
        Self::from_env()
    }

    fn config_search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("htmljp.toml")];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("htmljp").join("config.toml"));
        }
        paths
    }

    /// Pick one API key uniformly at random.
    ///
    /// Repeated calls are independent draws with replacement; the key list
    /// itself is never mutated. Call this before each outbound request so
    /// load spreads across all configured keys.
    pub fn random_api_key(&self) -> &str {
        self.random_api_key_with(&mut rand::thread_rng())
    }

    /// Pick one API key using the supplied random source.
    ///
    /// Tests use this with a seeded RNG for deterministic selection.
    pub fn random_api_key_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Construction guarantees at least one key; a violation here is a
        // bug in this crate, not a recoverable condition.
        self.api_keys
            .choose(rng)
            .expect("api_keys validated non-empty at construction")
    }

    /// The model requests should target
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Number of configured API keys
    pub fn key_count(&self) -> usize {
        self.api_keys.len()
    }
}

impl TryFrom<RawConfig> for TranslatorConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let config = match raw.api_keys {
            KeyInput::One(key) => Self::new(key)?,
            KeyInput::Many(keys) => Self::from_keys(keys)?,
        };

        Ok(match raw.model {
            Some(model) => config.with_model(model),
            None => config,
        })
    }
}

// Key material stays out of logs and error reports.
impl fmt::Debug for TranslatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslatorConfig")
            .field("api_keys", &format_args!("<{} redacted>", self.api_keys.len()))
            .field("model_name", &self.model_name)
            .finish()
    }
}
