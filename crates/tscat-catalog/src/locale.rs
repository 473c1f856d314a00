//! Locale tags as they appear in settings files and `.ts` headers

use crate::error::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use unic_langid::LanguageIdentifier;

/// A locale tag such as `de_DE`, `de_de` or `fr-FR`.
///
/// The tag keeps its original spelling, because catalog files are looked up
/// by name, but compares by its parsed language identifier: `de_de` and
/// `de-DE` are the same locale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleTag {
    raw: String,
    id: LanguageIdentifier,
}

impl LocaleTag {
    /// Parse a locale tag, accepting both `_` and `-` as separators
    pub fn parse(tag: &str) -> CatalogResult<Self> {
        let raw = tag.trim();
        if raw.is_empty() {
            return Err(CatalogError::InvalidLocale(tag.to_string()));
        }

        let id = LanguageIdentifier::from_bytes(raw.as_bytes())
            .map_err(|_| CatalogError::InvalidLocale(tag.to_string()))?;

        Ok(Self {
            raw: raw.to_string(),
            id,
        })
    }

    /// The tag exactly as it was written
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The primary language subtag, e.g. `de`
    pub fn language(&self) -> &str {
        self.id.language.as_str()
    }

    /// The region subtag if present, e.g. `DE`
    pub fn region(&self) -> Option<&str> {
        self.id.region.as_ref().map(|r| r.as_str())
    }

    /// The Qt spelling of this locale, e.g. `de_DE`
    pub fn qt_name(&self) -> String {
        match self.region() {
            Some(region) => format!("{}_{}", self.language(), region),
            None => self.language().to_string(),
        }
    }

    /// The parsed BCP-47 identifier
    pub fn language_identifier(&self) -> &LanguageIdentifier {
        &self.id
    }
}

impl PartialEq for LocaleTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for LocaleTag {}

impl Hash for LocaleTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for LocaleTag {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LocaleTag {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LocaleTag> for String {
    fn from(tag: LocaleTag) -> Self {
        tag.raw
    }
}
