//! Dictionary placeholder screen

use crate::state::{AppCommand, Screen};
use crate::ui::components::Header;
use crate::ui::theme::Theme;
use egui::RichText;

pub struct DictionaryView<'a> {
    theme: &'a Theme,
}

impl<'a> DictionaryView<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn show(self, ui: &mut egui::Ui, commands: &mut Vec<AppCommand>) {
        Header::new(
            Screen::Dictionary.title(),
            "Your personal signs",
            AppCommand::Navigate(Screen::Home),
            self.theme,
        )
        .show(ui, commands);

        self.theme.card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("Coming soon").strong());
                ui.label(
                    RichText::new("Saved signs will be listed here")
                        .color(self.theme.text_muted),
                );
            });
        });
    }
}
