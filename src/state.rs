//! Unified application state for SignSpeak
//!
//! `AppState` is the single owner of everything shared between screens:
//! - **Router**: which screen is active
//! - **Settings**: the user's preferences, replaced wholesale
//! - **Translations**: the history log
//!
//! Screens never mutate shared state directly. The UI turns user input into
//! `AppCommand`s, and `dispatch` applies them on the UI thread. Deferred
//! tasks fire from `tick`, on the same thread, so there is a single writer.

use crate::collab::Collaborators;
use crate::config::AppConfig;
use crate::error::Result;
use crate::notify::{NotificationCenter, Notifier};
use crate::settings::{Settings, SettingsStore};
use crate::tasks::{DeferredTasks, TaskKind};
use crate::translations::{Translation, TranslationId, TranslationLog};
use crate::views::history::{self, HistoryRow};
use crate::views::{
    RecordingState, SettingsControl, SettingsMenuState, SettingsPage, SignToTextState,
    TextToSignState,
};
use serde::Deserialize;
use std::time::Instant;
use tracing::{debug, info};

/// Full-view screens of the app
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Home,
    SignToText,
    TextToSign,
    History,
    Settings,
    Dictionary,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Home,
        Screen::SignToText,
        Screen::TextToSign,
        Screen::History,
        Screen::Settings,
        Screen::Dictionary,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "SignSpeak",
            Screen::SignToText => "Sign to Text",
            Screen::TextToSign => "Text to Sign",
            Screen::History => "History",
            Screen::Settings => "Settings",
            Screen::Dictionary => "My Dictionary",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Screen::Home => write!(f, "home"),
            Screen::SignToText => write!(f, "sign-to-text"),
            Screen::TextToSign => write!(f, "text-to-sign"),
            Screen::History => write!(f, "history"),
            Screen::Settings => write!(f, "settings"),
            Screen::Dictionary => write!(f, "dictionary"),
        }
    }
}

/// Tracks the active screen
///
/// Every transition is legal; there is no history stack.
#[derive(Clone, Debug, Default)]
pub struct Router {
    current: Screen,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Switch screens unconditionally, returning the previous one
    pub fn navigate(&mut self, target: Screen) -> Screen {
        let previous = self.current;
        self.current = target;
        info!("[NAV] {} -> {}", previous, target);
        previous
    }
}

/// Requests from the presentation layer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppCommand {
    Navigate(Screen),
    /// Sign-to-text: start or stop recording
    ToggleRecording,
    /// Sign-to-text: copy the detected text
    CopyDetectedText,
    /// Sign-to-text: speak the detected text
    SpeakDetectedText,
    /// Text-to-sign: replace the input text
    SetInputText(String),
    /// Text-to-sign: log the input and play the animation
    PlayGesture,
    /// Text-to-sign: capture the input by voice
    VoiceInput,
    /// History: delete one entry
    DeleteTranslation(TranslationId),
    /// Settings: open a menu page
    OpenSettingsPage(SettingsPage),
    /// Settings: back one level, leaving for home from the main page
    SettingsBack,
    /// Settings: change one preference
    ChangeSetting(SettingsControl),
    SetDarkMode(bool),
    ChangePassword,
    Logout,
}

impl AppCommand {
    /// The screen a command belongs to; `None` for global commands
    pub fn screen(&self) -> Option<Screen> {
        match self {
            AppCommand::Navigate(_) => None,
            AppCommand::ToggleRecording
            | AppCommand::CopyDetectedText
            | AppCommand::SpeakDetectedText => Some(Screen::SignToText),
            AppCommand::SetInputText(_) | AppCommand::PlayGesture | AppCommand::VoiceInput => {
                Some(Screen::TextToSign)
            }
            AppCommand::DeleteTranslation(_) => Some(Screen::History),
            AppCommand::OpenSettingsPage(_)
            | AppCommand::SettingsBack
            | AppCommand::ChangeSetting(_)
            | AppCommand::SetDarkMode(_)
            | AppCommand::ChangePassword
            | AppCommand::Logout => Some(Screen::Settings),
        }
    }
}

/// Root application state
pub struct AppState {
    config: AppConfig,
    router: Router,
    settings: SettingsStore,
    translations: TranslationLog,
    sign_to_text: SignToTextState,
    text_to_sign: TextToSignState,
    settings_menu: SettingsMenuState,
    tasks: DeferredTasks,
    notifications: NotificationCenter,
    notifier: Notifier,
    collaborators: Collaborators,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    /// Create a state with headless collaborators
    pub fn new(config: AppConfig) -> Self {
        Self::with_collaborators(config, Collaborators::headless())
    }

    pub fn with_collaborators(config: AppConfig, collaborators: Collaborators) -> Self {
        let translations = if config.seed_history {
            TranslationLog::seeded()
        } else {
            TranslationLog::new()
        };
        let notifications = NotificationCenter::new(config.toast_duration());
        let notifier = notifications.notifier();

        Self {
            settings: SettingsStore::new(config.initial_settings),
            config,
            router: Router::new(),
            translations,
            sign_to_text: SignToTextState::new(),
            text_to_sign: TextToSignState::new(),
            settings_menu: SettingsMenuState::new(),
            tasks: DeferredTasks::new(),
            notifications,
            notifier,
            collaborators,
        }
    }

    // === Read access ===

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.router.current()
    }

    pub fn settings(&self) -> Settings {
        self.settings.get()
    }

    pub fn translations(&self) -> &TranslationLog {
        &self.translations
    }

    pub fn history_rows(&self) -> Vec<HistoryRow> {
        history::rows(&self.translations)
    }

    pub fn sign_to_text(&self) -> &SignToTextState {
        &self.sign_to_text
    }

    pub fn text_to_sign(&self) -> &TextToSignState {
        &self.text_to_sign
    }

    pub fn settings_menu(&self) -> &SettingsMenuState {
        &self.settings_menu
    }

    pub fn tasks(&self) -> &DeferredTasks {
        &self.tasks
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Earliest instant at which `tick` has something to do
    pub fn next_wakeup(&self) -> Option<Instant> {
        match (self.tasks.next_deadline(), self.notifications.next_expiry()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // === Mutation ===

    /// Switch screens, tearing down the local state of the screen left
    pub fn navigate(&mut self, target: Screen) {
        let leaving = self.router.current();
        if leaving != target {
            self.unmount(leaving);
        }
        self.router.navigate(target);
    }

    fn unmount(&mut self, screen: Screen) {
        match screen {
            Screen::SignToText => self.sign_to_text.teardown(&mut self.tasks),
            Screen::TextToSign => self.text_to_sign.teardown(&mut self.tasks),
            Screen::Settings => self.settings_menu = SettingsMenuState::new(),
            Screen::Home | Screen::History | Screen::Dictionary => {}
        }
    }

    /// Replace the settings record
    pub fn replace_settings(&mut self, next: Settings) {
        self.settings.replace(next);
    }

    /// Play the current text-to-sign input
    ///
    /// A blank input is reported as an error toast and also returned.
    pub fn play_gesture(&mut self, now: Instant) -> Result<TranslationId> {
        let delay = self.config.playback_delay();
        self.text_to_sign
            .play_gesture(&mut self.tasks, &mut self.translations, delay, now)
            .inspect_err(|e| self.notifier.report(e))
    }

    /// Fire due tasks and refresh toasts
    pub fn tick(&mut self, now: Instant) {
        for handle in self.tasks.poll(now) {
            match handle.kind {
                TaskKind::Recognition => {
                    self.sign_to_text
                        .complete_recognition(handle, &mut self.translations);
                }
                TaskKind::Playback => {
                    self.text_to_sign.finish_playback(handle);
                }
                TaskKind::VoiceCapture => {
                    self.text_to_sign.finish_voice_capture(
                        handle,
                        self.collaborators.speech_input.as_mut(),
                        &self.notifier,
                    );
                }
            }
        }
        self.notifications.drain(now);
    }

    /// Apply a command from the presentation layer
    ///
    /// Commands for a screen that is not active are dropped.
    pub fn dispatch(&mut self, command: AppCommand, now: Instant) {
        if let Some(owner) = command.screen() {
            if owner != self.router.current() {
                debug!(
                    "Dropping {:?}: belongs to {}, active is {}",
                    command,
                    owner,
                    self.router.current()
                );
                return;
            }
        }

        match command {
            AppCommand::Navigate(target) => self.navigate(target),
            AppCommand::ToggleRecording => {
                let delay = self.config.recognition_delay();
                self.sign_to_text
                    .toggle_recording(&mut self.tasks, delay, now);
            }
            AppCommand::CopyDetectedText => {
                self.sign_to_text
                    .request_copy(self.collaborators.clipboard.as_mut(), &self.notifier);
            }
            AppCommand::SpeakDetectedText => {
                let voice = self.settings.get().voice_type;
                self.sign_to_text.request_speak(
                    self.collaborators.speech_output.as_mut(),
                    voice,
                    &self.notifier,
                );
            }
            AppCommand::SetInputText(text) => self.text_to_sign.set_input_text(text),
            AppCommand::PlayGesture => {
                // Already reported as a toast
                let _ = self.play_gesture(now);
            }
            AppCommand::VoiceInput => {
                let delay = self.config.voice_capture_delay();
                self.text_to_sign.voice_input(&mut self.tasks, delay, now);
            }
            AppCommand::DeleteTranslation(id) => {
                self.translations.remove(id);
            }
            AppCommand::OpenSettingsPage(page) => self.settings_menu.open(page),
            AppCommand::SettingsBack => {
                if let Some(target) = self.settings_menu.back() {
                    self.navigate(target);
                }
            }
            AppCommand::ChangeSetting(control) => {
                let next = control.apply(self.settings.get());
                self.settings.replace(next);
            }
            AppCommand::SetDarkMode(enabled) => {
                self.settings_menu.set_dark_mode(enabled, &self.notifier)
            }
            AppCommand::ChangePassword => self.settings_menu.change_password(&self.notifier),
            AppCommand::Logout => self.settings_menu.logout(&self.notifier),
        }
    }

    /// Create an immutable snapshot of current state
    pub fn snapshot(&self) -> AppStateSnapshot {
        AppStateSnapshot {
            screen: self.router.current(),
            settings: self.settings.get(),
            history: self.translations.to_vec(),
            recording: self.sign_to_text.recording(),
            is_processing: self.sign_to_text.is_processing(),
            detected_text: self.sign_to_text.detected_text().to_string(),
            input_text: self.text_to_sign.input_text().to_string(),
            is_playing: self.text_to_sign.is_playing(),
            is_listening: self.text_to_sign.is_listening(),
            settings_page: self.settings_menu.page(),
            pending_tasks: self.tasks.len(),
            last_notification: self.notifications.last().map(|n| n.message.clone()),
        }
    }
}

/// Immutable snapshot of application state
///
/// Used for scenario assertions and for reads that outlive a borrow.
#[derive(Clone, Debug)]
pub struct AppStateSnapshot {
    pub screen: Screen,
    pub settings: Settings,
    pub history: Vec<Translation>,
    pub recording: RecordingState,
    pub is_processing: bool,
    pub detected_text: String,
    pub input_text: String,
    pub is_playing: bool,
    pub is_listening: bool,
    pub settings_page: SettingsPage,
    pub pending_tasks: usize,
    pub last_notification: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{FontSize, Language};
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_starts_at_home() {
        let state = AppState::default();
        assert_eq!(state.screen(), Screen::Home);
        assert_eq!(state.translations().len(), 3);
    }

    #[test]
    fn test_router_accepts_every_transition() {
        let mut router = Router::new();
        for from in Screen::ALL {
            for to in Screen::ALL {
                router.navigate(from);
                assert_eq!(router.navigate(to), from);
                assert_eq!(router.current(), to);
            }
        }
    }

    #[test]
    fn test_commands_for_inactive_screen_are_dropped() {
        let t0 = Instant::now();
        let mut state = AppState::default();

        state.dispatch(AppCommand::ToggleRecording, t0);
        state.dispatch(AppCommand::DeleteTranslation(TranslationId(1)), t0);

        assert!(!state.sign_to_text().is_recording());
        assert!(state.tasks().is_empty());
        assert_eq!(state.translations().len(), 3);
    }

    #[test]
    fn test_leaving_mid_recording_cancels_it() {
        let t0 = Instant::now();
        let mut state = AppState::default();
        state.navigate(Screen::SignToText);
        state.dispatch(AppCommand::ToggleRecording, t0);

        state.navigate(Screen::History);
        state.tick(t0 + ms(5000));

        assert_eq!(state.translations().len(), 3);
        assert!(!state.sign_to_text().is_recording());
    }

    #[test]
    fn test_leaving_text_to_sign_stops_playback_but_keeps_entry() {
        let t0 = Instant::now();
        let mut state = AppState::default();
        state.navigate(Screen::TextToSign);
        state.dispatch(AppCommand::SetInputText("Thank you".into()), t0);
        state.dispatch(AppCommand::PlayGesture, t0);
        assert_eq!(state.translations().len(), 4);

        state.navigate(Screen::Home);
        assert!(state.tasks().is_empty());
        assert!(!state.text_to_sign().is_playing());
        assert_eq!(state.translations().len(), 4);
    }

    #[test]
    fn test_settings_back_from_main_goes_home() {
        let t0 = Instant::now();
        let mut state = AppState::default();
        state.navigate(Screen::Settings);
        state.dispatch(AppCommand::OpenSettingsPage(SettingsPage::Display), t0);

        state.dispatch(AppCommand::SettingsBack, t0);
        assert_eq!(state.screen(), Screen::Settings);
        assert_eq!(state.settings_menu().page(), SettingsPage::Main);

        state.dispatch(AppCommand::SettingsBack, t0);
        assert_eq!(state.screen(), Screen::Home);
    }

    #[test]
    fn test_settings_page_resets_on_reentry() {
        let t0 = Instant::now();
        let mut state = AppState::default();
        state.navigate(Screen::Settings);
        state.dispatch(AppCommand::OpenSettingsPage(SettingsPage::About), t0);
        state.navigate(Screen::Home);
        state.navigate(Screen::Settings);
        assert_eq!(state.settings_menu().page(), SettingsPage::Main);
    }

    #[test]
    fn test_change_setting_copies_other_fields() {
        let t0 = Instant::now();
        let mut state = AppState::default();
        state.navigate(Screen::Settings);
        state.dispatch(
            AppCommand::ChangeSetting(SettingsControl::HighContrast(true)),
            t0,
        );
        state.dispatch(
            AppCommand::ChangeSetting(SettingsControl::Language(Language::British)),
            t0,
        );
        state.dispatch(
            AppCommand::ChangeSetting(SettingsControl::FontSize(FontSize::Small)),
            t0,
        );

        let settings = state.settings();
        assert!(settings.high_contrast);
        assert_eq!(settings.language, Language::British);
        assert_eq!(settings.font_size, FontSize::Small);
        assert!(settings.vibration_feedback);
    }

    #[test]
    fn test_blank_playback_reports_error() {
        let t0 = Instant::now();
        let mut state = AppState::default();
        state.navigate(Screen::TextToSign);
        state.dispatch(AppCommand::SetInputText("   ".into()), t0);

        assert!(state.play_gesture(t0).is_err());
        state.tick(t0);

        assert_eq!(state.translations().len(), 3);
        assert_eq!(
            state.snapshot().last_notification.as_deref(),
            Some("Please enter some text first")
        );
    }

    #[test]
    fn test_next_wakeup_tracks_tasks_and_toasts() {
        let t0 = Instant::now();
        let mut state = AppState::default();
        assert_eq!(state.next_wakeup(), None);

        state.navigate(Screen::TextToSign);
        state.dispatch(AppCommand::VoiceInput, t0);
        assert_eq!(state.next_wakeup(), Some(t0 + ms(2000)));

        state.tick(t0 + ms(2000));
        assert_eq!(state.next_wakeup(), Some(t0 + ms(2000) + ms(3000)));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let t0 = Instant::now();
        let mut state = AppState::default();
        let before = state.snapshot();

        state.navigate(Screen::SignToText);
        state.dispatch(AppCommand::ToggleRecording, t0);

        assert_eq!(before.screen, Screen::Home);
        assert_eq!(before.recording, RecordingState::Idle);
        let after = state.snapshot();
        assert_eq!(after.recording, RecordingState::Recording);
        assert!(after.is_processing);
        assert_eq!(after.pending_tasks, 1);
    }
}
