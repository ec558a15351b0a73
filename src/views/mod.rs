//! Per-screen local state
//!
//! Each view owns only its UI-local state. Shared state (settings, history)
//! is borrowed from `AppState` for the duration of a single action.

pub mod history;
pub mod settings_menu;
pub mod sign_to_text;
pub mod text_to_sign;

pub use history::HistoryRow;
pub use settings_menu::{SettingsControl, SettingsMenuState, SettingsPage};
pub use sign_to_text::{RecordingState, SignToTextState};
pub use text_to_sign::TextToSignState;
