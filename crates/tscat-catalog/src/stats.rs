//! Translation completion statistics, as reported by `lrelease`

use crate::model::{Message, TranslationStatus, TsDocument};
use serde::Serialize;
use std::ops::AddAssign;

/// Message counts by completion state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    /// Finished with non-empty text
    pub finished: usize,
    /// Marked unfinished
    pub unfinished: usize,
    /// Finished but with empty text
    pub empty: usize,
    /// Marked vanished
    pub vanished: usize,
    /// Marked obsolete
    pub obsolete: usize,
    /// All messages
    pub total: usize,
}

impl CatalogStats {
    /// Counts one message
    pub fn record(&mut self, message: &Message) {
        self.total += 1;
        match message.translation.status {
            TranslationStatus::Finished if message.translation.text.is_empty() => self.empty += 1,
            TranslationStatus::Finished => self.finished += 1,
            TranslationStatus::Unfinished => self.unfinished += 1,
            TranslationStatus::Vanished => self.vanished += 1,
            TranslationStatus::Obsolete => self.obsolete += 1,
        }
    }

    /// Messages that still exist in the sources
    pub fn active(&self) -> usize {
        self.finished + self.unfinished + self.empty
    }

    /// Share of active messages that resolve to a translation.
    ///
    /// A catalog with no active messages counts as complete.
    pub fn completion_ratio(&self) -> f64 {
        let active = self.active();
        if active == 0 {
            1.0
        } else {
            self.finished as f64 / active as f64
        }
    }
}

impl AddAssign for CatalogStats {
    fn add_assign(&mut self, other: Self) {
        self.finished += other.finished;
        self.unfinished += other.unfinished;
        self.empty += other.empty;
        self.vanished += other.vanished;
        self.obsolete += other.obsolete;
        self.total += other.total;
    }
}

/// Counts for one context
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextStats {
    pub name: String,
    #[serde(flatten)]
    pub stats: CatalogStats,
}

/// Per-context and overall counts for a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub language: Option<String>,
    pub contexts: Vec<ContextStats>,
    pub overall: CatalogStats,
}

impl DocumentStats {
    /// Computes statistics, keeping contexts in file order
    pub fn from_document(document: &TsDocument) -> Self {
        let mut overall = CatalogStats::default();
        let contexts = document
            .contexts
            .iter()
            .map(|context| {
                let mut stats = CatalogStats::default();
                for message in &context.messages {
                    stats.record(message);
                }
                overall += stats;
                ContextStats {
                    name: context.name.clone(),
                    stats,
                }
            })
            .collect();

        Self {
            language: document.language.clone(),
            contexts,
            overall,
        }
    }
}
