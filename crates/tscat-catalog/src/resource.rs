//! Locating and loading `.ts` catalog files

use crate::catalog::LocaleCatalog;
use crate::error::{CatalogError, CatalogResult};
use crate::locale::LocaleTag;
use crate::parser;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File extension of translation sources
pub const CATALOG_EXTENSION: &str = "ts";

/// Finds and loads catalog files from a translations directory
#[derive(Debug)]
pub struct ResourceManager {
    /// Directory holding `<name>.ts` files
    base_dir: PathBuf,
    /// Locales that have been successfully loaded
    loaded_locales: HashSet<LocaleTag>,
}

impl ResourceManager {
    /// Create a new ResourceManager
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            loaded_locales: HashSet::new(),
        }
    }

    /// Candidate file names for a locale, in search order.
    ///
    /// For each spelling of the tag (as written, then lowercase) the full
    /// name is tried first, then the name with its last `_`/`-` segment
    /// removed, down to the bare language: `de_DE` yields `de_DE.ts`,
    /// `de.ts`, `de_de.ts`.
    pub fn candidates(&self, locale: &LocaleTag) -> Vec<String> {
        let raw = locale.raw().to_string();
        let lower = raw.to_lowercase();

        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for spelling in [raw, lower] {
            let mut name = spelling.as_str();
            loop {
                let file = format!("{name}.{CATALOG_EXTENSION}");
                if seen.insert(file.clone()) {
                    names.push(file);
                }
                match name.rfind(['_', '-']) {
                    Some(cut) => name = &name[..cut],
                    None => break,
                }
            }
        }
        names
    }

    /// Path of the first existing candidate file
    pub fn locate(&self, locale: &LocaleTag) -> CatalogResult<PathBuf> {
        let mut searched = Vec::new();

        for name in self.candidates(locale) {
            let path = self.base_dir.join(&name);
            if path.is_file() {
                debug!("Found catalog for {} at {:?}", locale, path);
                return Ok(path);
            }
            searched.push(path);
        }

        warn!("No catalog file for locale {} in {:?}", locale, self.base_dir);
        Err(CatalogError::MissingLocale {
            locale: locale.raw().to_string(),
            searched,
        })
    }

    /// Load the catalog for the given locale
    pub fn load(&mut self, locale: &LocaleTag) -> CatalogResult<LocaleCatalog> {
        let path = self.locate(locale)?;
        let document = parser::parse_file(&path)?;
        let catalog = LocaleCatalog::from_document(&document, locale);

        self.loaded_locales.insert(locale.clone());
        info!(
            "Loaded catalog for locale {} ({} entries) from {:?}",
            locale,
            catalog.len(),
            path
        );
        Ok(catalog)
    }

    /// File stems of all catalogs in the base directory, sorted
    pub fn available_locales(&self) -> CatalogResult<Vec<String>> {
        let entries = fs::read_dir(&self.base_dir).map_err(|source| CatalogError::Io {
            path: self.base_dir.clone(),
            source,
        })?;

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.extension().and_then(|e| e.to_str()) == Some(CATALOG_EXTENSION)
            })
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(String::from))
            .collect();
        names.sort();
        Ok(names)
    }

    /// Get all loaded locales
    pub fn loaded_locales(&self) -> Vec<&LocaleTag> {
        self.loaded_locales.iter().collect()
    }

    /// Check if a catalog has been loaded for the given locale
    pub fn is_loaded(&self, locale: &LocaleTag) -> bool {
        self.loaded_locales.contains(locale)
    }

    /// Forget which locales were loaded
    pub fn clear(&mut self) {
        self.loaded_locales.clear();
        info!("Cleared loaded locale records");
    }

    /// Get the base directory for catalogs
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl Default for ResourceManager {
    fn default() -> Self {
        Self::new("rsrc/i18n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> LocaleTag {
        LocaleTag::parse(s).unwrap()
    }

    #[test]
    fn test_candidates_order() {
        let manager = ResourceManager::new("rsrc/i18n");
        assert_eq!(
            manager.candidates(&tag("de_DE")),
            vec!["de_DE.ts", "de.ts", "de_de.ts"]
        );
        assert_eq!(manager.candidates(&tag("fr_fr")), vec!["fr_fr.ts", "fr.ts"]);
        assert_eq!(manager.candidates(&tag("en")), vec!["en.ts"]);
    }

    #[test]
    fn test_default_base_dir() {
        let manager = ResourceManager::default();
        assert_eq!(manager.base_dir(), Path::new("rsrc/i18n"));
        assert!(manager.loaded_locales().is_empty());
    }

    #[test]
    fn test_locate_missing_directory() {
        let manager = ResourceManager::new("/definitely/not/a/dir");
        match manager.locate(&tag("de_DE")) {
            Err(CatalogError::MissingLocale { locale, searched }) => {
                assert_eq!(locale, "de_DE");
                assert_eq!(searched.len(), 3);
            }
            other => panic!("expected MissingLocale, got {other:?}"),
        }
    }
}
