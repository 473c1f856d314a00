//! Process-wide translator holding the active catalog

use crate::catalog::LocaleCatalog;
use crate::locale::LocaleTag;
use crate::resource::ResourceManager;
use arc_swap::ArcSwap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// What [`Translator::install`] ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The catalog was loaded and is now active
    Loaded,
    /// The locale was already active; nothing changed
    AlreadyActive,
    /// Loading failed and the identity catalog is now active
    Fallback,
}

/// Resolves UI strings against the active locale catalog.
///
/// Loading never fails from the caller's point of view: a missing or
/// malformed catalog is logged and replaced by the identity catalog, so
/// every string shows up in its source language.
#[derive(Debug)]
pub struct Translator {
    resources: Mutex<ResourceManager>,
    active: ArcSwap<LocaleCatalog>,
}

impl Translator {
    /// Create a translator that starts out with the identity catalog for
    /// `source_locale`
    pub fn new(resources: ResourceManager, source_locale: LocaleTag) -> Self {
        Self {
            resources: Mutex::new(resources),
            active: ArcSwap::from_pointee(LocaleCatalog::identity(source_locale)),
        }
    }

    /// Activate `locale` unless a catalog for it is already loaded.
    ///
    /// An identity catalog for `locale` does not count, so a catalog file
    /// that appears after a fallback is picked up on the next install.
    pub fn install(&self, locale: &LocaleTag) -> InstallOutcome {
        let active = self.active.load();
        if active.locale() == locale && !active.is_identity() {
            debug!("Locale {} already active", locale);
            return InstallOutcome::AlreadyActive;
        }
        self.reinstall(locale)
    }

    /// Load `locale` from disk and activate it, even if it is already active
    pub fn reinstall(&self, locale: &LocaleTag) -> InstallOutcome {
        let loaded = match self.resources.lock() {
            Ok(mut resources) => resources.load(locale),
            Err(poisoned) => poisoned.into_inner().load(locale),
        };

        match loaded {
            Ok(catalog) => {
                self.active.store(Arc::new(catalog));
                info!("Installed translations for locale {}", locale);
                InstallOutcome::Loaded
            }
            Err(e) => {
                warn!(
                    "Could not load translations for locale {}: {}; showing source text",
                    locale, e
                );
                self.active
                    .store(Arc::new(LocaleCatalog::identity(locale.clone())));
                InstallOutcome::Fallback
            }
        }
    }

    /// Translate `source` in `context` using the active catalog
    pub fn translate(&self, context: &str, source: &str) -> String {
        self.active.load().resolve(context, source).to_string()
    }

    /// Translate with a disambiguation comment
    pub fn translate_disambiguated(&self, context: &str, source: &str, comment: &str) -> String {
        self.active
            .load()
            .resolve_disambiguated(context, source, comment)
            .to_string()
    }

    /// The catalog currently in use
    pub fn active(&self) -> Arc<LocaleCatalog> {
        self.active.load_full()
    }

    /// The locale currently in use
    pub fn active_locale(&self) -> LocaleTag {
        self.active.load().locale().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tscat_common::test_utils::ts_fixtures::{GERMAN_TS, MALFORMED_TS};
    use tscat_common::test_utils::write_fixture;

    fn tag(s: &str) -> LocaleTag {
        LocaleTag::parse(s).unwrap()
    }

    #[test]
    fn test_starts_with_identity() {
        let translator = Translator::new(ResourceManager::new("/nowhere"), tag("en_us"));
        assert!(translator.active().is_identity());
        assert_eq!(translator.translate("AboutBox", "OK"), "OK");
        assert_eq!(translator.active_locale(), tag("en_US"));
    }

    #[test]
    fn test_install_and_skip_when_active() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), "de_de.ts", GERMAN_TS);
        let translator = Translator::new(ResourceManager::new(dir.path()), tag("en_us"));

        assert_eq!(translator.install(&tag("de_de")), InstallOutcome::Loaded);
        assert_eq!(
            translator.translate("AboutBox", "About Papagayo-NG"),
            "Über Papagayo-NG"
        );
        assert_eq!(translator.install(&tag("de_DE")), InstallOutcome::AlreadyActive);
        assert_eq!(translator.reinstall(&tag("de_DE")), InstallOutcome::Loaded);
    }

    #[test]
    fn test_malformed_falls_back_to_identity() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), "de_de.ts", MALFORMED_TS);
        let translator = Translator::new(ResourceManager::new(dir.path()), tag("en_us"));

        assert_eq!(translator.install(&tag("de_de")), InstallOutcome::Fallback);
        assert!(translator.active().is_identity());
        assert_eq!(translator.active_locale(), tag("de_DE"));
        assert_eq!(
            translator.translate("AboutBox", "About Papagayo-NG"),
            "About Papagayo-NG"
        );
    }

    #[test]
    fn test_install_source_locale_reads_catalog() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), "de.ts", GERMAN_TS);
        let translator = Translator::new(ResourceManager::new(dir.path()), tag("de"));

        assert_eq!(translator.install(&tag("de")), InstallOutcome::Loaded);
        assert!(!translator.active().is_identity());
        assert_eq!(
            translator.translate("AboutBox", "About Papagayo-NG"),
            "Über Papagayo-NG"
        );
    }

    #[test]
    fn test_install_retries_after_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let translator = Translator::new(ResourceManager::new(dir.path()), tag("en_us"));

        assert_eq!(translator.install(&tag("de_DE")), InstallOutcome::Fallback);
        write_fixture(dir.path(), "de_de.ts", GERMAN_TS);

        assert_eq!(translator.install(&tag("de_DE")), InstallOutcome::Loaded);
        assert_eq!(
            translator.translate("AboutBox", "About Papagayo-NG"),
            "Über Papagayo-NG"
        );
        assert_eq!(translator.install(&tag("de_DE")), InstallOutcome::AlreadyActive);
    }
}
