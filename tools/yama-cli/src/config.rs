//! Layered configuration.
//!
//! Sources, lowest priority first:
//! 1. built-in defaults
//! 2. `yama.toml` in the working directory, or the file given with `--config`
//! 3. environment variables prefixed `YAMA_`, nested with `__`
//!    (`YAMA_SEGMENTER__OFFSET_UNIT=utf16`, `YAMA_LOG__LEVEL=debug`)

use std::path::Path;

use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use yama_segmenter::SegmentOptions;
use yama_tokenize::Tagset;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(String),

    #[error("failed to parse configuration: {0}")]
    Parse(String),

    #[error("invalid configuration: {0}")]
    Validation(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::Load(err.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub segmenter: SegmentOptions,
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Tagset of the analyzer that produced `--text` token files.
    #[serde(default)]
    pub tagset: Tagset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

const CONFIG_FILE_NAME: &str = "yama";

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(Config::builder()
        .set_default("segmenter.merge_tokens", true)?
        .set_default("segmenter.offset_unit", "char")?
        .set_default("tokenizer.tagset", "ipadic")?
        .set_default("log.level", default_log_level())?)
}

/// Load the configuration, reading `path` instead of `yama.toml` when given.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(CONFIG_FILE_NAME).required(false),
    };

    let builder = defaults()?.add_source(file).add_source(
        Environment::with_prefix("YAMA")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );
    finish(builder)
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = builder
        .build()?
        .try_deserialize()
        .map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.log.level.trim().is_empty() {
        return Err(ConfigError::Validation("log.level cannot be empty".to_string()));
    }
    Ok(())
}
