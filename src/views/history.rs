//! History screen projection
//!
//! Rows follow log order exactly; the date label is for display only and
//! the entry's own timestamp stays on the row.

use crate::translations::{Translation, TranslationId, TranslationKind, TranslationLog};
use chrono::{DateTime, Local};

/// One rendered history entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRow {
    pub id: TranslationId,
    pub kind: TranslationKind,
    pub input: String,
    pub output: String,
    pub created_at: DateTime<Local>,
    pub date_label: String,
}

impl From<&Translation> for HistoryRow {
    fn from(t: &Translation) -> Self {
        Self {
            id: t.id,
            kind: t.kind,
            input: t.input.clone(),
            output: t.output.clone(),
            created_at: t.created_at,
            date_label: format_timestamp(&t.created_at),
        }
    }
}

/// "Oct 28, 2:30 PM"
pub fn format_timestamp(t: &DateTime<Local>) -> String {
    t.format("%b %-d, %-I:%M %p").to_string()
}

/// Shown in place of the list when the log is empty
pub const EMPTY_HISTORY_TEXT: &str = "Your translation history will appear here...";

pub fn rows(log: &TranslationLog) -> Vec<HistoryRow> {
    log.iter().map(HistoryRow::from).collect()
}
