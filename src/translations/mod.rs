//! Translation history
//!
//! Records of past sign-to-text and text-to-sign conversions, newest first.

pub mod log;
pub mod types;

pub use log::TranslationLog;
pub use types::{NewTranslation, Translation, TranslationId, TranslationKind};
