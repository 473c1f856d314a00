//! Per-locale lookup tables with source-text fallback.
//!
//! # Resolution
//!
//! | Entry state | `resolve` returns |
//! |-------------|-------------------|
//! | finished, non-empty | the stored translation |
//! | finished, empty | the source text |
//! | unfinished | the source text |
//! | vanished / obsolete | the source text |
//! | absent | the source text |
//!
//! Placeholders such as `{0}` or `%1` are returned verbatim; callers
//! substitute them after lookup.

use crate::locale::LocaleTag;
use crate::model::{Location, TranslationStatus, TsDocument};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Lookup key: context, source text and disambiguation comment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageKey {
    pub context: String,
    pub source: String,
    pub comment: String,
}

impl MessageKey {
    /// Key without a disambiguation comment
    pub fn new(context: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
            comment: String::new(),
        }
    }
}

/// An immutable catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    translation: String,
    status: TranslationStatus,
    location: Option<Location>,
}

impl TranslationEntry {
    /// Creates an entry
    pub fn new(
        translation: impl Into<String>,
        status: TranslationStatus,
        location: Option<Location>,
    ) -> Self {
        Self {
            translation: translation.into(),
            status,
            location,
        }
    }

    /// The stored translation text
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// The completion marker
    pub fn status(&self) -> TranslationStatus {
        self.status
    }

    /// Whether the entry is marked finished
    pub fn is_finished(&self) -> bool {
        self.status == TranslationStatus::Finished
    }

    /// Whether lookups return this entry's text
    pub fn is_usable(&self) -> bool {
        self.is_finished() && !self.translation.is_empty()
    }

    /// First location hint, for tracing a string back to its UI definition
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }
}

/// The string table for one locale
#[derive(Debug, Clone)]
pub struct LocaleCatalog {
    locale: LocaleTag,
    entries: HashMap<MessageKey, TranslationEntry>,
    identity: bool,
}

impl LocaleCatalog {
    /// A catalog with no entries: every lookup returns the source text
    pub fn identity(locale: LocaleTag) -> Self {
        Self {
            locale,
            entries: HashMap::new(),
            identity: true,
        }
    }

    /// Builds the lookup table for a parsed document.
    ///
    /// The document's `language` attribute names the catalog when it parses;
    /// otherwise `requested` does. When a key appears twice the first entry
    /// is kept.
    pub fn from_document(document: &TsDocument, requested: &LocaleTag) -> Self {
        let locale = document
            .language
            .as_deref()
            .and_then(|l| LocaleTag::parse(l).ok())
            .unwrap_or_else(|| requested.clone());

        let mut entries = HashMap::with_capacity(document.message_count());
        for (context, message) in document.messages() {
            let key = MessageKey {
                context: context.to_string(),
                source: message.source.clone(),
                comment: message.comment.clone().unwrap_or_default(),
            };

            if entries.contains_key(&key) {
                warn!(
                    "Duplicate message in context '{}' of locale {}: {:?}; keeping the first",
                    context, locale, message.source
                );
                continue;
            }

            let entry = TranslationEntry::new(
                message.translation.text.clone(),
                message.translation.status,
                message.locations.first().cloned(),
            );
            entries.insert(key, entry);
        }

        debug!("Built catalog {} with {} entries", locale, entries.len());
        Self {
            locale,
            entries,
            identity: false,
        }
    }

    /// The locale this catalog serves
    pub fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    /// Whether this catalog stands in for one that was never loaded
    pub fn is_identity(&self) -> bool {
        self.identity
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the raw entry for a key
    pub fn entry(&self, context: &str, source: &str, comment: &str) -> Option<&TranslationEntry> {
        // Owned key because HashMap<MessageKey, _> cannot be probed by a tuple of &str.
        let key = MessageKey {
            context: context.to_string(),
            source: source.to_string(),
            comment: comment.to_string(),
        };
        self.entries.get(&key)
    }

    /// Resolves `source` in `context`, falling back to `source` itself
    pub fn resolve<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.resolve_disambiguated(context, source, "")
    }

    /// Resolves with a disambiguation comment.
    ///
    /// A miss on `(context, source, comment)` retries without the comment.
    pub fn resolve_disambiguated<'a>(
        &'a self,
        context: &str,
        source: &'a str,
        comment: &str,
    ) -> &'a str {
        let exact = self.entry(context, source, comment);
        let entry = match exact {
            Some(entry) => Some(entry),
            None if !comment.is_empty() => self.entry(context, source, ""),
            None => None,
        };

        match entry {
            Some(entry) if entry.is_usable() => entry.translation(),
            _ => source,
        }
    }

    /// Iterates over all entries in unspecified order
    pub fn entries(&self) -> impl Iterator<Item = (&MessageKey, &TranslationEntry)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContextBlock, Message, Translation};
    use crate::parser::parse_str;
    use tscat_common::test_utils::ts_fixtures::{FRENCH_TS, GERMAN_TS};

    fn tag(s: &str) -> LocaleTag {
        LocaleTag::parse(s).unwrap()
    }

    #[test]
    fn test_resolve_finished_translation() {
        let doc = parse_str(GERMAN_TS).unwrap();
        let catalog = LocaleCatalog::from_document(&doc, &tag("de_de"));

        assert_eq!(catalog.locale().raw(), "de_DE");
        assert_eq!(catalog.resolve("AboutBox", "About Papagayo-NG"), "Über Papagayo-NG");
        assert_eq!(
            catalog.resolve("MouthView", "Missing Mouth: {0}"),
            "Fehlender Mund: {0}"
        );
    }

    #[test]
    fn test_resolve_unfinished_falls_back() {
        let doc = parse_str(FRENCH_TS).unwrap();
        let catalog = LocaleCatalog::from_document(&doc, &tag("fr_fr"));

        assert_eq!(catalog.resolve("AboutBox", "About Papagayo-NG"), "About Papagayo-NG");
        let entry = catalog.entry("AboutBox", "About Papagayo-NG", "").unwrap();
        assert_eq!(entry.translation(), "À propos de Papagayo-NG");
        assert!(!entry.is_finished());
    }

    #[test]
    fn test_resolve_empty_finished_falls_back() {
        let doc = parse_str(GERMAN_TS).unwrap();
        let catalog = LocaleCatalog::from_document(&doc, &tag("de_DE"));
        assert_eq!(catalog.resolve("AboutBox", "Papagayo-NG"), "Papagayo-NG");
    }

    #[test]
    fn test_resolve_is_context_scoped() {
        let doc = parse_str(GERMAN_TS).unwrap();
        let catalog = LocaleCatalog::from_document(&doc, &tag("de_DE"));
        assert_eq!(catalog.resolve("CLI", "About Papagayo-NG"), "About Papagayo-NG");
        assert_eq!(catalog.resolve("AboutBox", "Unknown"), "Unknown");
    }

    #[test]
    fn test_identity_catalog() {
        let catalog = LocaleCatalog::identity(tag("es_ES"));
        assert!(catalog.is_identity());
        assert_eq!(catalog.len(), 0);
        assert_eq!(catalog.resolve("AboutBox", "OK"), "OK");
    }

    #[test]
    fn test_empty_document_is_not_identity() {
        let catalog = LocaleCatalog::from_document(&TsDocument::new(None), &tag("de_DE"));
        assert!(catalog.is_empty());
        assert!(!catalog.is_identity());
    }

    #[test]
    fn test_disambiguation_and_duplicates() {
        let mut doc = TsDocument::new(None);
        let mut context = ContextBlock::new("LipsyncFrame");
        context
            .messages
            .push(Message::new("Open", Translation::finished("Öffnen")));
        context
            .messages
            .push(Message::new("Open", Translation::finished("Offen")).with_comment("state"));
        context
            .messages
            .push(Message::new("Open", Translation::finished("Zweites Öffnen")));
        doc.contexts.push(context);

        let catalog = LocaleCatalog::from_document(&doc, &tag("de_DE"));
        assert_eq!(catalog.locale().raw(), "de_DE");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.resolve("LipsyncFrame", "Open"), "Öffnen");
        assert_eq!(
            catalog.resolve_disambiguated("LipsyncFrame", "Open", "state"),
            "Offen"
        );
        assert_eq!(
            catalog.resolve_disambiguated("LipsyncFrame", "Open", "verb"),
            "Öffnen"
        );
    }

    #[test]
    fn test_vanished_entries_do_not_resolve() {
        let mut doc = TsDocument::new(Some("de_DE".to_string()));
        let mut context = ContextBlock::new("SettingsDialog");
        let mut message = Message::new("Old label", Translation::finished("Altes Label"));
        message.translation.status = TranslationStatus::Vanished;
        context.messages.push(message);
        doc.contexts.push(context);

        let catalog = LocaleCatalog::from_document(&doc, &tag("de_DE"));
        assert_eq!(catalog.resolve("SettingsDialog", "Old label"), "Old label");
    }

    #[test]
    fn test_location_hint_kept() {
        let doc = parse_str(GERMAN_TS).unwrap();
        let catalog = LocaleCatalog::from_document(&doc, &tag("de_DE"));
        let entry = catalog.entry("AboutBox", "About Papagayo-NG", "").unwrap();
        assert_eq!(entry.location().unwrap().filename, "rsrc/about_box.ui");
    }
}
