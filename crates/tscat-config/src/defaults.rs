//! Default values matching a fresh Papagayo-NG installation.

use crate::schema::{Config, I18nConfig, LogFormat, LoggingConfig};
use std::path::PathBuf;

/// UI language used when nothing is configured.
pub const DEFAULT_LANGUAGE: &str = "en_us";

/// Translations directory relative to the application root.
pub const DEFAULT_TRANSLATIONS_DIR: &str = "rsrc/i18n";

/// Log level used when nothing is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

impl Default for Config {
    fn default() -> Self {
        Self {
            i18n: I18nConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            translations_dir: PathBuf::from(DEFAULT_TRANSLATIONS_DIR),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::Pretty,
        }
    }
}
