//! Screen header with back button, title and subtitle

use crate::state::AppCommand;
use crate::ui::components::labeled_button;
use crate::ui::theme::Theme;
use egui::RichText;

pub struct Header<'a> {
    title: &'a str,
    subtitle: &'a str,
    back: AppCommand,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    /// `back` is the command the back button sends
    pub fn new(title: &'a str, subtitle: &'a str, back: AppCommand, theme: &'a Theme) -> Self {
        Self {
            title,
            subtitle,
            back,
            theme,
        }
    }

    pub fn show(self, ui: &mut egui::Ui, commands: &mut Vec<AppCommand>) {
        ui.horizontal(|ui| {
            let back = egui::Button::new(RichText::new("<").size(self.theme.body_size + 4.0))
                .rounding(self.theme.button_rounding)
                .min_size(egui::vec2(40.0, 40.0));
            if labeled_button(ui, true, back, "Back").clicked() {
                commands.push(self.back.clone());
            }

            ui.vertical(|ui| {
                ui.heading(RichText::new(self.title).strong());
                ui.label(RichText::new(self.subtitle).color(self.theme.text_secondary));
            });
        });
        ui.add_space(self.theme.spacing);
    }
}
