//! Configuration loader
//!
//! Layers configuration from defaults, an optional TOML file, and
//! prefixed environment variables, then validates the result before
//! anything is constructed from it.

use crate::config::types::AppConfig;
use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_FILENAME};
use crate::logging::log_config_probed;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use porter_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources merge in this order, later overriding earlier:
    /// 1. `AppConfig::default()`
    /// 2. TOML file (explicit path, else `porter.toml` in the working
    ///    directory if present)
    /// 3. Environment variables, e.g. `PORTER__SERVER__PORT=9000` - the
    ///    double underscore separates nesting levels so snake_case keys
    ///    survive the split
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            log_config_probed(config_path, config_path.exists());
            figment = figment.merge(Toml::file(config_path));
        } else if let Some(default_path) = Self::find_default_config_path() {
            log_config_probed(&default_path, true);
            figment = figment.merge(Toml::file(default_path));
        }

        figment = figment.merge(Env::prefixed(&format!("{}__", self.env_prefix)).split("__"));

        let config: AppConfig = figment
            .extract()
            .map_err(|e| Error::config_with_source("failed to extract configuration", e))?;

        validate_app_config(&config)?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config)
            .map_err(|e| Error::config_with_source("failed to serialize configuration", e))?;

        std::fs::write(path.as_ref(), toml_string)
            .map_err(|e| Error::config_with_source("failed to write configuration file", e))?;

        Ok(())
    }

    /// Get the configured file path, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;
        let candidate = current_dir.join(DEFAULT_CONFIG_FILENAME);
        candidate.exists().then_some(candidate)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from an optional explicit path
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => ConfigLoader::new().with_config_path(path).load(),
        None => ConfigLoader::new().load(),
    }
}

/// Validate every configuration section, failing on the first problem
fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_cache_config(config)?;
    validate_throttle_config(config)?;
    validate_admin_config(config)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::config("server port cannot be 0"));
    }
    Ok(())
}

fn validate_cache_config(config: &AppConfig) -> Result<()> {
    if config.cache.region_ttl_secs == 0 {
        return Err(Error::config("cache region TTL cannot be 0"));
    }
    Ok(())
}

fn validate_throttle_config(config: &AppConfig) -> Result<()> {
    if config.throttle.window_secs == 0 {
        return Err(Error::config("throttle window cannot be 0"));
    }
    if config.throttle.max_attempts == 0 {
        return Err(Error::config("throttle max attempts cannot be 0"));
    }
    Ok(())
}

fn validate_admin_config(config: &AppConfig) -> Result<()> {
    if config.auth.admin.enabled {
        if config
            .auth
            .admin
            .key
            .as_deref()
            .is_none_or(|key| key.is_empty())
        {
            return Err(Error::config(
                "admin key cannot be empty when the admin key check is enabled",
            ));
        }
        if config.auth.admin.header.is_empty() {
            return Err(Error::config(
                "admin key header cannot be empty when the admin key check is enabled",
            ));
        }
    }
    Ok(())
}
