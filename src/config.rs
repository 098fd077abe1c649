// file: src/config.rs
// description: application configuration management with toml and environment support
// reference: https://docs.rs/config

use crate::error::{ReindexError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const API_URL_VAR: &str = "SEARCH_API_URL";
pub const API_KEY_VAR: &str = "SEARCH_API_KEY";
pub const API_KEY_FALLBACK_VAR: &str = "API_KEY";

pub const DEFAULT_CONFIG_PATH: &str = "config/reindex.toml";
pub const DEFAULT_SEED_PATH: &str = "data/seed.json";

const ENV_PREFIX: &str = "REINDEX";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    pub seed: SeedConfig,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedConfig {
    pub path: PathBuf,
}

/// Shape of the layered sources before required values are checked.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    api: RawApiConfig,
    #[serde(default)]
    seed: RawSeedConfig,
}

#[derive(Debug, Default, Deserialize)]
struct RawApiConfig {
    base_url: Option<String>,
    api_key: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSeedConfig {
    path: Option<PathBuf>,
}

impl Config {
    /// Loads `.env`, then layers the config file and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_sources(path, &vars)
    }

    /// Builds the configuration from an optional file and an explicit set of
    /// environment variables.
    ///
    /// An explicit `path` must exist. Without one, `config/reindex.toml` is
    /// used when present.
    pub fn from_sources(path: Option<&Path>, vars: &HashMap<String, String>) -> Result<Self> {
        let mut builder = config::Config::builder();

        builder = match path {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false)),
        };

        let env_source = vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<config::Map<String, String>>();

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .source(Some(env_source)),
        );

        let settings = builder
            .build()
            .map_err(|e| ReindexError::Config(e.to_string()))?;

        let raw: RawConfig = settings
            .try_deserialize()
            .map_err(|e| ReindexError::Config(e.to_string()))?;

        let base_url = non_empty(vars.get(API_URL_VAR))
            .or_else(|| non_empty(raw.api.base_url.as_ref()))
            .ok_or_else(|| ReindexError::MissingConfig {
                name: API_URL_VAR,
                hint: format!(
                    "set {API_URL_VAR} (e.g. export {API_URL_VAR}=https://search.example.com) \
                     or api.base_url in {DEFAULT_CONFIG_PATH}"
                ),
            })?;

        let api_key = non_empty(vars.get(API_KEY_VAR))
            .or_else(|| non_empty(vars.get(API_KEY_FALLBACK_VAR)))
            .or_else(|| non_empty(raw.api.api_key.as_ref()))
            .ok_or_else(|| ReindexError::MissingConfig {
                name: API_KEY_VAR,
                hint: format!(
                    "set {API_KEY_VAR} or {API_KEY_FALLBACK_VAR} to the service bearer token, \
                     or add it to a .env file in the working directory"
                ),
            })?;

        let config = Config {
            api: ApiConfig { base_url, api_key },
            seed: SeedConfig {
                path: raw
                    .seed
                    .path
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED_PATH)),
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.api.base_url)
            .map_err(|e| ReindexError::Config(format!("{API_URL_VAR}: {e}")))?;

        Ok(())
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
