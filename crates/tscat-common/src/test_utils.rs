//! Test utilities and shared fixtures for tscat.
//!
//! This module provides common testing helpers and `.ts` catalog fixtures
//! that can be used across all crates in the workspace for unit and
//! integration testing.

use std::path::{Path, PathBuf};
use std::sync::Once;

#[cfg(feature = "tracing-subscriber")]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// No-op version when tracing-subscriber is not available
#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_test_logging() {
    INIT.call_once(|| {});
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Writes `contents` to `dir/name` and returns the full path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture file");
    path
}

/// Translation catalog fixtures taken from the Papagayo-NG sources.
pub mod ts_fixtures {
    /// A German catalog: finished translations, some of them empty.
    pub const GERMAN_TS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de_DE">
<context>
    <name>AboutBox</name>
    <message>
        <location filename="rsrc/about_box.ui" line="38"/>
        <source>About Papagayo-NG</source>
        <translation>Über Papagayo-NG</translation>
    </message>
    <message>
        <location filename="rsrc/about_box.ui" line="89"/>
        <source>Papagayo-NG</source>
        <translation></translation>
    </message>
    <message>
        <location filename="rsrc/about_box.ui" line="193"/>
        <source>A lip-sync tool.</source>
        <translation>Ein Lippensynchronisations Werkzeug.</translation>
    </message>
</context>
<context>
    <name>MouthView</name>
    <message>
        <location filename="MouthViewQt.py" line="95"/>
        <source>Missing Mouth: {0}</source>
        <translation>Fehlender Mund: {0}</translation>
    </message>
</context>
<context>
    <name>WaveformView</name>
    <message>
        <location filename="WaveformViewRewrite.py" line="501"/>
        <source>Phrase: </source>
        <translation>Satz: </translation>
    </message>
    <message>
        <location filename="WaveformViewRewrite.py" line="435"/>
        <source>Selected Object Tags</source>
        <translation>Gewählte Objekt Tags</translation>
    </message>
</context>
</TS>
"#;

    /// A French catalog where every translation is still unfinished.
    pub const FRENCH_TS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="fr_FR">
<context>
    <name>AboutBox</name>
    <message>
        <location filename="rsrc/about_box.ui" line="38"/>
        <source>About Papagayo-NG</source>
        <translation type="unfinished">À propos de Papagayo-NG</translation>
    </message>
    <message>
        <location filename="rsrc/about_box.ui" line="235"/>
        <source>OK</source>
        <translation type="unfinished"></translation>
    </message>
</context>
<context>
    <name>CLI</name>
    <message>
        <location filename="papagayo-ng.py" line="40"/>
        <source>Possible options: {}</source>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>
"#;

    /// A document that is not well-formed XML.
    pub const MALFORMED_TS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<TS version="2.1" language="de_DE">
<context>
    <name>AboutBox</name>
    <message>
        <source>About Papagayo-NG</source>
        <translation>Über Papagayo-NG</translation>
</context>
</TS>
"#;
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// A complete configuration file as TOML.
    pub fn full_config_toml() -> &'static str {
        r#"
[i18n]
language = "de_de"
translations_dir = "rsrc/i18n"

[logging]
level = "debug"
format = "json"
"#
    }
}
