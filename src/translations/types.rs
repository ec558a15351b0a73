use chrono::{DateTime, Local, NaiveDate};
use serde::Deserialize;
use std::fmt;

/// Direction of a translation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TranslationKind {
    SignToText,
    TextToSign,
}

impl TranslationKind {
    pub fn label(&self) -> &'static str {
        match self {
            TranslationKind::SignToText => "Sign to Text",
            TranslationKind::TextToSign => "Text to Sign",
        }
    }
}

impl fmt::Display for TranslationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationKind::SignToText => write!(f, "sign-to-text"),
            TranslationKind::TextToSign => write!(f, "text-to-sign"),
        }
    }
}

/// Log-assigned identity of a translation, unique for the process lifetime
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TranslationId(pub u64);

impl fmt::Display for TranslationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a producer hands to the log; id and timestamp are assigned there
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTranslation {
    pub kind: TranslationKind,
    pub input: String,
    pub output: String,
}

impl NewTranslation {
    pub fn new(kind: TranslationKind, input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
            output: output.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Translation {
    pub id: TranslationId,
    pub kind: TranslationKind,
    pub input: String,
    pub output: String,
    pub created_at: DateTime<Local>,
}

impl Translation {
    pub fn new(id: TranslationId, entry: NewTranslation, created_at: DateTime<Local>) -> Self {
        Self {
            id,
            kind: entry.kind,
            input: entry.input,
            output: entry.output,
            created_at,
        }
    }
}

/// Local wall-clock time for the sample history
pub(crate) fn local_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Local> {
    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default();
    naive
        .and_local_timezone(Local)
        .earliest()
        .unwrap_or_else(|| naive.and_utc().with_timezone(&Local))
}
