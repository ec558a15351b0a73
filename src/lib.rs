//! SignSpeak: a sign language translation app shell
//!
//! Five screens (home, sign-to-text, text-to-sign, history, settings) over
//! a shared settings record and translation log. Recognition, playback and
//! voice capture are mocked with cancellable deferred tasks.

pub mod cli;
pub mod collab;
pub mod config;
pub mod error;
pub mod notify;
pub mod scenario;
pub mod settings;
pub mod state;
pub mod tasks;
pub mod translations;
pub mod ui;
pub mod views;

pub use config::AppConfig;
pub use error::{Result, SignSpeakError};
pub use settings::{FontSize, Language, Settings, SettingsStore, VoiceType};
pub use state::{AppCommand, AppState, AppStateSnapshot, Router, Screen};
pub use translations::{NewTranslation, Translation, TranslationId, TranslationKind, TranslationLog};
