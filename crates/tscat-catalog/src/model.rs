//! In-memory model of a Qt Linguist `.ts` document.
//!
//! The model keeps everything needed to write the document back out in the
//! same order: contexts and messages stay in file order, location lines are
//! kept verbatim and the translation `type` marker survives untouched.

use serde::{Deserialize, Serialize};

/// A whole `<TS>` document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TsDocument {
    /// Format version from the `version` attribute, e.g. `2.1`
    pub version: String,
    /// Target language from the `language` attribute, e.g. `de_DE`
    pub language: Option<String>,
    /// Source language from the `sourcelanguage` attribute
    pub source_language: Option<String>,
    /// Whether the document carried `<!DOCTYPE TS>`
    pub doctype: bool,
    /// Contexts in file order
    pub contexts: Vec<ContextBlock>,
}

impl TsDocument {
    /// Creates an empty document for `language`
    pub fn new(language: Option<String>) -> Self {
        Self {
            version: "2.1".to_string(),
            language,
            source_language: None,
            doctype: true,
            contexts: Vec::new(),
        }
    }

    /// Finds a context by name
    pub fn context(&self, name: &str) -> Option<&ContextBlock> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Iterates over every message together with its context name
    pub fn messages(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.contexts
            .iter()
            .flat_map(|c| c.messages.iter().map(move |m| (c.name.as_str(), m)))
    }

    /// Total number of messages across all contexts
    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }
}

/// A `<context>` element: a named group of messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextBlock {
    /// Context name, usually a dialog or module
    pub name: String,
    /// Messages in file order
    pub messages: Vec<Message>,
}

impl ContextBlock {
    /// Creates an empty context
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }
}

/// A `<message>` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Where the source string appears in the UI definitions
    pub locations: Vec<Location>,
    /// The English source text
    pub source: String,
    /// Disambiguation comment, part of the lookup key
    pub comment: Option<String>,
    /// Note extracted from the source code for translators
    pub extra_comment: Option<String>,
    /// Note left by a translator
    pub translator_comment: Option<String>,
    /// The translation and its completion state
    pub translation: Translation,
}

impl Message {
    /// Creates a message with no location and no comments
    pub fn new(source: impl Into<String>, translation: Translation) -> Self {
        Self {
            locations: Vec::new(),
            source: source.into(),
            comment: None,
            extra_comment: None,
            translator_comment: None,
            translation,
        }
    }

    /// Adds a location hint
    #[must_use]
    pub fn with_location(mut self, filename: impl Into<String>, line: u32) -> Self {
        self.locations.push(Location {
            filename: filename.into(),
            line: Some(line.to_string()),
        });
        self
    }

    /// Sets the disambiguation comment
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A `<location filename=".." line=".."/>` hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Path of the UI definition or script, relative to the project
    pub filename: String,
    /// Line as written; newer `lupdate` versions emit relative lines like `+3`
    pub line: Option<String>,
}

impl Location {
    /// The line as an absolute number, if it is one
    pub fn line_number(&self) -> Option<u32> {
        self.line
            .as_deref()
            .filter(|l| !l.starts_with('+') && !l.starts_with('-'))
            .and_then(|l| l.parse().ok())
    }
}

/// A `<translation>` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Translated text; may be empty
    pub text: String,
    /// Completion marker from the `type` attribute
    pub status: TranslationStatus,
    /// Legacy `encoding` attribute
    pub encoding: Option<String>,
}

impl Translation {
    /// A finished translation
    pub fn finished(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: TranslationStatus::Finished,
            encoding: None,
        }
    }

    /// An unfinished translation
    pub fn unfinished(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: TranslationStatus::Unfinished,
            encoding: None,
        }
    }
}

/// Value of the `<translation type="..">` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStatus {
    /// No `type` attribute
    #[default]
    Finished,
    /// `type="unfinished"`
    Unfinished,
    /// `type="vanished"`: the source string no longer exists
    Vanished,
    /// `type="obsolete"`: pre-Qt 5 spelling of vanished
    Obsolete,
}

impl TranslationStatus {
    /// The attribute value, `None` for finished translations
    pub fn as_attribute(self) -> Option<&'static str> {
        match self {
            Self::Finished => None,
            Self::Unfinished => Some("unfinished"),
            Self::Vanished => Some("vanished"),
            Self::Obsolete => Some("obsolete"),
        }
    }

    /// Parses a `type` attribute value
    pub fn from_attribute(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(Self::Unfinished),
            "vanished" => Some(Self::Vanished),
            "obsolete" => Some(Self::Obsolete),
            _ => None,
        }
    }

    /// Whether the message still exists in the sources
    pub fn is_active(self) -> bool {
        matches!(self, Self::Finished | Self::Unfinished)
    }
}
