//! Settings screen sub-navigation and controls
//!
//! The settings screen has its own one-level menu. Back from a detail page
//! returns to the main page; back from the main page leaves for home.

use crate::notify::Notifier;
use crate::settings::{FontSize, Language, Settings, VoiceType};
use crate::state::Screen;
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsPage {
    #[default]
    Main,
    Language,
    Voice,
    Display,
    Accessibility,
    About,
}

impl SettingsPage {
    /// Detail pages in menu order
    pub const DETAILS: [SettingsPage; 5] = [
        SettingsPage::Language,
        SettingsPage::Voice,
        SettingsPage::Display,
        SettingsPage::Accessibility,
        SettingsPage::About,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SettingsPage::Main => "Settings",
            SettingsPage::Language => "Language",
            SettingsPage::Voice => "Voice",
            SettingsPage::Display => "Display",
            SettingsPage::Accessibility => "Accessibility",
            SettingsPage::About => "About",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            SettingsPage::Main => "Customize your experience",
            _ => "Customize settings",
        }
    }
}

/// One settings control changing exactly one field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum SettingsControl {
    Language(Language),
    VoiceType(VoiceType),
    FontSize(FontSize),
    HighContrast(bool),
    VibrationFeedback(bool),
}

impl SettingsControl {
    /// Copy `current` with this control's field changed
    pub fn apply(self, current: Settings) -> Settings {
        match self {
            SettingsControl::Language(language) => current.with_language(language),
            SettingsControl::VoiceType(voice) => current.with_voice_type(voice),
            SettingsControl::FontSize(size) => current.with_font_size(size),
            SettingsControl::HighContrast(on) => current.with_high_contrast(on),
            SettingsControl::VibrationFeedback(on) => current.with_vibration_feedback(on),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SettingsMenuState {
    page: SettingsPage,
    dark_mode: bool,
}

impl SettingsMenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> SettingsPage {
        self.page
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn open(&mut self, page: SettingsPage) {
        debug!("[SETTINGS] Page {:?} -> {:?}", self.page, page);
        self.page = page;
    }

    /// Go back one level; returns the screen to leave for, if any
    pub fn back(&mut self) -> Option<Screen> {
        match self.page {
            SettingsPage::Main => Some(Screen::Home),
            _ => {
                self.open(SettingsPage::Main);
                None
            }
        }
    }

    /// Local-only switch; it does not touch the settings store
    pub fn set_dark_mode(&mut self, enabled: bool, notifier: &Notifier) {
        self.dark_mode = enabled;
        notifier.success(if enabled {
            "Dark mode enabled"
        } else {
            "Dark mode disabled"
        });
    }

    pub fn change_password(&self, notifier: &Notifier) {
        notifier.success("Password change feature coming soon!");
    }

    pub fn logout(&self, notifier: &Notifier) {
        info!("[SETTINGS] Logout requested");
        notifier.success("Logged out successfully");
    }
}
