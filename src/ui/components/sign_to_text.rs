//! Sign-to-text screen: camera preview, record button, detected text

use crate::state::{AppCommand, Screen};
use crate::ui::components::{accessible, labeled_button, Header, RecordButton};
use crate::ui::theme::Theme;
use crate::views::SignToTextState;
use egui::RichText;

pub struct SignToTextView<'a> {
    state: &'a SignToTextState,
    theme: &'a Theme,
}

impl<'a> SignToTextView<'a> {
    pub fn new(state: &'a SignToTextState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui, commands: &mut Vec<AppCommand>) {
        Header::new(
            Screen::SignToText.title(),
            "Translate sign language",
            AppCommand::Navigate(Screen::Home),
            self.theme,
        )
        .show(ui, commands);

        self.show_camera(ui);
        ui.add_space(self.theme.spacing);

        ui.vertical_centered(|ui| {
            if RecordButton::new(self.state.is_recording(), self.theme)
                .show(ui)
                .clicked()
            {
                commands.push(AppCommand::ToggleRecording);
            }
        });
        ui.add_space(self.theme.spacing);

        self.show_detected_text(ui, commands);
    }

    fn show_camera(&self, ui: &mut egui::Ui) {
        let (headline, hint) = match (self.state.camera_on(), self.state.is_processing()) {
            (true, true) => ("Camera Active", "Recognizing signs..."),
            (true, false) => ("Camera Active", "Tap Record to translate again"),
            (false, _) => ("Camera Off", "Tap Record to start"),
        };

        ui.label(RichText::new("Camera").strong());
        egui::Frame::none()
            .fill(if self.state.camera_on() {
                self.theme.text_primary
            } else {
                self.theme.bg_tertiary
            })
            .rounding(self.theme.card_rounding)
            .inner_margin(egui::Margin::same(self.theme.spacing_lg))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.set_min_height(180.0);
                ui.vertical_centered(|ui| {
                    ui.add_space(48.0);
                    let color = if self.state.camera_on() {
                        self.theme.bg_secondary
                    } else {
                        self.theme.text_muted
                    };
                    let status = ui.label(RichText::new(headline).strong().color(color));
                    accessible(&status, egui::WidgetType::Label, true, "Camera status");
                    ui.label(RichText::new(hint).color(self.theme.text_muted));
                });
            });
    }

    fn show_detected_text(&self, ui: &mut egui::Ui, commands: &mut Vec<AppCommand>) {
        ui.label(RichText::new("Detected Text").strong());
        self.theme.card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(60.0);
            let detected = self.state.detected_text();
            let response = if detected.is_empty() {
                ui.label(
                    RichText::new("Detected text will appear here...").color(self.theme.text_muted),
                )
            } else {
                ui.label(RichText::new(detected).size(self.theme.body_size + 3.0))
            };
            let label = format!("Detected text: {}", detected);
            accessible(&response, egui::WidgetType::Label, true, &label);
        });
        ui.add_space(self.theme.spacing_sm);

        let has_text = !self.state.detected_text().is_empty();
        ui.columns(2, |columns| {
            let speak = egui::Button::new("Speak")
                .rounding(self.theme.button_rounding)
                .min_size(egui::vec2(columns[0].available_width(), 44.0));
            if labeled_button(&mut columns[0], has_text, speak, "Speak text").clicked() {
                commands.push(AppCommand::SpeakDetectedText);
            }

            let copy = egui::Button::new("Copy")
                .rounding(self.theme.button_rounding)
                .min_size(egui::vec2(columns[1].available_width(), 44.0));
            if labeled_button(&mut columns[1], has_text, copy, "Copy text").clicked() {
                commands.push(AppCommand::CopyDetectedText);
            }
        });
    }
}
