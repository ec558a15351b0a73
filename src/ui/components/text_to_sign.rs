//! Text-to-sign screen: text entry, voice input, animation preview

use crate::state::{AppCommand, Screen};
use crate::ui::components::{accessible, labeled_button, Header};
use crate::ui::theme::Theme;
use crate::views::TextToSignState;
use egui::{Color32, RichText};

pub struct TextToSignView<'a> {
    state: &'a TextToSignState,
    theme: &'a Theme,
}

impl<'a> TextToSignView<'a> {
    pub fn new(state: &'a TextToSignState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui, commands: &mut Vec<AppCommand>) {
        Header::new(
            Screen::TextToSign.title(),
            "Convert text to sign language",
            AppCommand::Navigate(Screen::Home),
            self.theme,
        )
        .show(ui, commands);

        self.show_input(ui, commands);
        ui.add_space(self.theme.spacing);
        self.show_preview(ui);
        ui.add_space(self.theme.spacing);

        let play = egui::Button::new(RichText::new("Play Sign Animation").color(Color32::WHITE))
            .fill(self.theme.secondary)
            .rounding(self.theme.card_rounding)
            .min_size(egui::vec2(ui.available_width(), 56.0));
        if labeled_button(ui, self.state.can_play(), play, "Play gesture").clicked() {
            commands.push(AppCommand::PlayGesture);
        }
    }

    fn show_input(&self, ui: &mut egui::Ui, commands: &mut Vec<AppCommand>) {
        ui.label(RichText::new("Enter Your Message").strong());

        // Edited on a copy; the change goes back through a command
        let mut text = self.state.input_text().to_string();
        let response = ui.add(
            egui::TextEdit::multiline(&mut text)
                .id(egui::Id::new("text_to_sign_input"))
                .hint_text("Type what you want to say...")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
        accessible(&response, egui::WidgetType::TextEdit, true, "Message input");
        if response.changed() {
            commands.push(AppCommand::SetInputText(text));
        }

        let listening = self.state.is_listening();
        let caption = if listening { "Listening..." } else { "Voice" };
        let voice = egui::Button::new(caption).rounding(self.theme.button_rounding);
        if labeled_button(ui, !listening, voice, "Voice input").clicked() {
            commands.push(AppCommand::VoiceInput);
        }
    }

    fn show_preview(&self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Sign Animation Preview").strong());
        self.theme.card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(160.0);
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                let status = if self.state.is_playing() {
                    ui.ctx().request_repaint();
                    ui.add(egui::Spinner::new().color(self.theme.secondary));
                    ui.label(
                        RichText::new(format!("Signing: {}", self.state.input_text().trim()))
                            .color(self.theme.secondary),
                    )
                } else {
                    ui.label(
                        RichText::new("Animation will appear here").color(self.theme.text_muted),
                    )
                };
                let label = if self.state.is_playing() {
                    "Animation playing"
                } else {
                    "Animation idle"
                };
                accessible(&status, egui::WidgetType::Label, true, label);
            });
        });
    }
}
