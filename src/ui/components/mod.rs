//! UI components
//!
//! One component per screen plus the shared header, record button and
//! toast overlay. Components read `AppState` and push `AppCommand`s; they
//! never mutate state themselves.

pub mod dictionary;
pub mod header;
pub mod history;
pub mod home;
pub mod record_button;
pub mod settings;
pub mod sign_to_text;
pub mod text_to_sign;
pub mod toasts;

pub use dictionary::DictionaryView;
pub use header::Header;
pub use history::HistoryView;
pub use home::HomeView;
pub use record_button::RecordButton;
pub use settings::SettingsView;
pub use sign_to_text::SignToTextView;
pub use text_to_sign::TextToSignView;
pub use toasts::ToastOverlay;

/// Set the accessibility label of a widget
///
/// Labels must be unique per frame so tests can find widgets by label.
pub(crate) fn accessible(response: &egui::Response, kind: egui::WidgetType, enabled: bool, label: &str) {
    response.widget_info(|| egui::WidgetInfo::labeled(kind, enabled, label));
}

/// Button with a visible caption and a separate accessibility label
pub(crate) fn labeled_button(
    ui: &mut egui::Ui,
    enabled: bool,
    button: egui::Button<'_>,
    label: &str,
) -> egui::Response {
    let response = ui.add_enabled(enabled, button);
    accessible(&response, egui::WidgetType::Button, enabled, label);
    response
}
