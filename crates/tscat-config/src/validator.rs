//! Runtime validation of loaded configuration.

use crate::schema::Config;
use tscat_catalog::LocaleTag;
use tscat_common::{Result, TsCatError};

/// Log levels accepted in `logging.level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> Result<()> {
        config.validate()
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.i18n.language.trim().is_empty() {
            return Err(TsCatError::config("i18n.language cannot be empty"));
        }

        LocaleTag::parse(&self.i18n.language).map_err(|e| {
            TsCatError::config(format!("i18n.language '{}': {e}", self.i18n.language))
        })?;

        if self.i18n.translations_dir.as_os_str().is_empty() {
            return Err(TsCatError::config("i18n.translations_dir cannot be empty"));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(TsCatError::config(format!(
                "logging.level '{}' must be one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// The configured UI language as a parsed tag.
    pub fn language_tag(&self) -> Result<LocaleTag> {
        LocaleTag::parse(&self.i18n.language).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_language() {
        let mut config = Config::default();
        config.i18n.language = String::new();
        assert!(config.validate().is_err());

        config.i18n.language = "not a locale".to_string();
        assert!(matches!(config.validate(), Err(TsCatError::Config(_))));
    }

    #[test]
    fn test_rejects_bad_level_and_dir() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "WARN".to_string();
        assert!(config.validate().is_ok());
        config.i18n.translations_dir = std::path::PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_language_tag() {
        let tag = Config::default().language_tag().unwrap();
        assert_eq!(tag.raw(), "en_us");
        assert_eq!(tag.region(), Some("US"));
    }
}
