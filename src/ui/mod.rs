//! egui presentation layer
//!
//! `render` draws one frame from a read-only `AppState` and returns the
//! commands the user issued. `SignSpeakApp` owns the state and applies
//! those commands between frames.

mod app;
pub mod components;
mod theme;

pub use app::{EguiClipboard, SignSpeakApp};
pub use theme::Theme;

use crate::config::AppConfig;
use crate::scenario::Scenario;
use crate::state::{AppCommand, AppState, Screen};
use components::{
    DictionaryView, HistoryView, HomeView, SettingsView, SignToTextView, TextToSignView,
    ToastOverlay,
};
use egui::CentralPanel;

/// Draw the active screen and the toast overlay
pub fn render(ctx: &egui::Context, state: &AppState, theme: &Theme) -> Vec<AppCommand> {
    let mut commands = Vec::new();

    CentralPanel::default().show(ctx, |ui| match state.screen() {
        Screen::Home => HomeView::new(theme).show(ui, &mut commands),
        Screen::SignToText => {
            SignToTextView::new(state.sign_to_text(), theme).show(ui, &mut commands)
        }
        Screen::TextToSign => {
            TextToSignView::new(state.text_to_sign(), theme).show(ui, &mut commands)
        }
        Screen::History => {
            let rows = state.history_rows();
            HistoryView::new(&rows, theme).show(ui, &mut commands)
        }
        Screen::Settings => SettingsView::new(state.settings_menu(), state.settings(), theme)
            .show(ui, &mut commands),
        Screen::Dictionary => DictionaryView::new(theme).show(ui, &mut commands),
    });

    ToastOverlay::new(state.notifications().active(), theme).show(ctx);

    commands
}

/// Open the app window; blocks until it closes
pub fn run(config: AppConfig, scenario: Option<Scenario>) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([320.0, 560.0])
            .with_title("SignSpeak"),
        ..Default::default()
    };

    eframe::run_native(
        "SignSpeak",
        options,
        Box::new(move |cc| Ok(Box::new(SignSpeakApp::new(cc, config, scenario)))),
    )
}
