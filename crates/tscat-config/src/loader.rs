//! Configuration loading and persistence with atomic file operations.

use crate::schema::Config;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tscat_common::{Result, TsCatError};

/// Environment variable overriding `i18n.language`.
pub const ENV_LANGUAGE: &str = "TSCAT_LANGUAGE";
/// Environment variable overriding `i18n.translations_dir`.
pub const ENV_TRANSLATIONS_DIR: &str = "TSCAT_TRANSLATIONS_DIR";
/// Environment variable overriding `logging.level`.
pub const ENV_LOG_LEVEL: &str = "TSCAT_LOG_LEVEL";

/// Configuration loader with atomic file operations.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the configuration file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads configuration from file, then applies environment overrides.
    ///
    /// A missing file yields the defaults.
    pub fn load(&self) -> Result<Config> {
        self.load_with_env(|key| std::env::var(key).ok())
    }

    /// Like [`load`](Self::load), reading overrides through `lookup`.
    pub fn load_with_env<F>(&self, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = if self.path.exists() {
            debug!("Reading configuration from {:?}", self.path);
            let content = std::fs::read_to_string(&self.path)?;
            toml::from_str(&content).map_err(|e| {
                TsCatError::config(format!("{}: {e}", self.path.display()))
            })?
        } else {
            info!(
                "Configuration file {:?} not found, using defaults",
                self.path
            );
            Config::default()
        };

        apply_overrides(&mut config, lookup);
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to file atomically.
    pub fn save(&self, config: &Config) -> Result<()> {
        let content = config.to_toml()?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(content.as_bytes())?;
        file.persist(&self.path).map_err(|e| TsCatError::Io(e.error))?;

        info!("Saved configuration to {:?}", self.path);
        Ok(())
    }
}

impl Config {
    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| TsCatError::Serialization(e.to_string()))
    }
}

fn apply_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(language) = lookup(ENV_LANGUAGE) {
        debug!("{} overrides i18n.language", ENV_LANGUAGE);
        config.i18n.language = language;
    }
    if let Some(dir) = lookup(ENV_TRANSLATIONS_DIR) {
        debug!("{} overrides i18n.translations_dir", ENV_TRANSLATIONS_DIR);
        config.i18n.translations_dir = PathBuf::from(dir);
    }
    if let Some(level) = lookup(ENV_LOG_LEVEL) {
        debug!("{} overrides logging.level", ENV_LOG_LEVEL);
        config.logging.level = level;
    }
}
