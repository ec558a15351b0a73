//! History screen: every logged translation, newest first

use crate::state::{AppCommand, Screen};
use crate::translations::TranslationKind;
use crate::ui::components::{accessible, labeled_button, Header};
use crate::ui::theme::Theme;
use crate::views::history::EMPTY_HISTORY_TEXT;
use crate::views::HistoryRow;
use egui::RichText;

pub struct HistoryView<'a> {
    rows: &'a [HistoryRow],
    theme: &'a Theme,
}

impl<'a> HistoryView<'a> {
    pub fn new(rows: &'a [HistoryRow], theme: &'a Theme) -> Self {
        Self { rows, theme }
    }

    pub fn show(self, ui: &mut egui::Ui, commands: &mut Vec<AppCommand>) {
        Header::new(
            Screen::History.title(),
            "Your past translations",
            AppCommand::Navigate(Screen::Home),
            self.theme,
        )
        .show(ui, commands);

        if self.rows.is_empty() {
            self.theme.card().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("No Translations Yet").strong());
                    ui.label(RichText::new(EMPTY_HISTORY_TEXT).color(self.theme.text_muted));
                });
            });
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("history_rows")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for row in self.rows {
                    self.show_row(ui, row, commands);
                    ui.add_space(self.theme.spacing_sm);
                }
            });
    }

    fn show_row(&self, ui: &mut egui::Ui, row: &HistoryRow, commands: &mut Vec<AppCommand>) {
        let accent = match row.kind {
            TranslationKind::SignToText => self.theme.primary,
            TranslationKind::TextToSign => self.theme.secondary,
        };

        self.theme.card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(row.kind.label()).strong().color(accent));
                ui.label(RichText::new(&row.date_label).small().color(self.theme.text_muted));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let delete = egui::Button::new("Delete").rounding(self.theme.button_rounding);
                    let label = format!("Delete translation {}", row.id);
                    if labeled_button(ui, true, delete, &label).clicked() {
                        commands.push(AppCommand::DeleteTranslation(row.id));
                    }
                });
            });

            ui.label(RichText::new("Input").small().color(self.theme.text_muted));
            let input = ui.label(row.input.as_str());
            accessible(
                &input,
                egui::WidgetType::Label,
                true,
                &format!("Translation {} input: {}", row.id, row.input),
            );

            ui.label(RichText::new("Output").small().color(self.theme.text_muted));
            let output = ui.label(row.output.as_str());
            accessible(
                &output,
                egui::WidgetType::Label,
                true,
                &format!("Translation {} output: {}", row.id, row.output),
            );
        });
    }
}
