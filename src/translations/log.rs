//! Translation history store
//!
//! Newest entries sit at the front. Ids come from a per-log counter and are
//! never reused, even after a delete.

use super::types::{local_time, NewTranslation, Translation, TranslationId, TranslationKind};
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use tracing::{debug, info};

/// Ordered translation history, most recent insertion first
///
/// Display order is insertion order. Timestamps are recorded as given and
/// never used for sorting.
#[derive(Clone, Debug)]
pub struct TranslationLog {
    entries: VecDeque<Translation>,
    next_id: u64,
}

impl Default for TranslationLog {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            next_id: 1,
        }
    }

    /// A log preloaded with the sample history shown on first launch
    pub fn seeded() -> Self {
        let mut log = Self::new();
        let samples = [
            (
                TranslationKind::SignToText,
                "Hand gestures",
                "Hello, how are you?",
                local_time(2025, 10, 28, 14, 30),
            ),
            (
                TranslationKind::TextToSign,
                "Thank you",
                "Sign animation played",
                local_time(2025, 10, 28, 15, 45),
            ),
            (
                TranslationKind::SignToText,
                "Hand gestures",
                "Good morning",
                local_time(2025, 10, 29, 9, 15),
            ),
        ];

        for (kind, input, output, created_at) in samples {
            let id = log.allocate_id();
            log.entries
                .push_back(Translation::new(id, NewTranslation::new(kind, input, output), created_at));
        }
        log
    }

    fn allocate_id(&mut self) -> TranslationId {
        let id = TranslationId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Insert a new entry at the head, stamped with the current time
    pub fn append(&mut self, entry: NewTranslation) -> TranslationId {
        self.append_at(entry, Local::now())
    }

    /// Insert a new entry at the head with an explicit timestamp
    pub fn append_at(&mut self, entry: NewTranslation, created_at: DateTime<Local>) -> TranslationId {
        let id = self.allocate_id();
        info!(
            "[LOG] Append #{} {}: {:?} -> {:?}",
            id, entry.kind, entry.input, entry.output
        );
        self.entries.push_front(Translation::new(id, entry, created_at));
        id
    }

    /// Remove an entry by id, returning it if it was present
    pub fn remove(&mut self, id: TranslationId) -> Option<Translation> {
        let Some(index) = self.entries.iter().position(|t| t.id == id) else {
            debug!("[LOG] Remove #{} found nothing", id);
            return None;
        };
        info!("[LOG] Removed #{}", id);
        self.entries.remove(index)
    }

    pub fn get(&self, id: TranslationId) -> Option<&Translation> {
        self.entries.iter().find(|t| t.id == id)
    }

    /// Newest entry
    pub fn head(&self) -> Option<&Translation> {
        self.entries.front()
    }

    /// Entries in display order
    pub fn iter(&self) -> impl Iterator<Item = &Translation> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<Translation> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
