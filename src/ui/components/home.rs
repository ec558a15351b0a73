//! Home screen: feature tiles leading to every other screen

use crate::state::{AppCommand, Screen};
use crate::ui::components::labeled_button;
use crate::ui::theme::Theme;
use egui::{Color32, RichText};

struct Tile {
    screen: Screen,
    title: &'static str,
    description: &'static str,
}

const FEATURE_TILES: [Tile; 3] = [
    Tile {
        screen: Screen::SignToText,
        title: "Sign to Text",
        description: "Convert sign language to text and voice",
    },
    Tile {
        screen: Screen::TextToSign,
        title: "Text to Sign",
        description: "Convert text or voice to sign gestures",
    },
    Tile {
        screen: Screen::Dictionary,
        title: "My Dictionary",
        description: "Create and manage your personal sign dictionary",
    },
];

pub struct HomeView<'a> {
    theme: &'a Theme,
}

impl<'a> HomeView<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn show(self, ui: &mut egui::Ui, commands: &mut Vec<AppCommand>) {
        ui.vertical_centered(|ui| {
            ui.add_space(self.theme.spacing_lg);
            ui.label(
                RichText::new("COMMUNICATE NOW")
                    .size(self.theme.body_size + 13.0)
                    .strong()
                    .color(self.theme.primary),
            );
            ui.label(RichText::new("Add us & Chat us").color(self.theme.text_secondary));
        });
        ui.add_space(self.theme.spacing_lg);

        let width = ui.available_width();
        for (i, tile) in FEATURE_TILES.iter().enumerate() {
            let accent = if i % 2 == 0 {
                self.theme.primary
            } else {
                self.theme.secondary
            };
            let caption = RichText::new(format!("{}\n{}", tile.title, tile.description))
                .color(Color32::WHITE);
            let button = egui::Button::new(caption)
                .fill(accent)
                .rounding(self.theme.card_rounding)
                .min_size(egui::vec2(width, 88.0));
            let label = format!("Open {}", tile.title);
            if labeled_button(ui, true, button, &label).clicked() {
                commands.push(AppCommand::Navigate(tile.screen));
            }
            ui.add_space(self.theme.spacing_sm);
        }

        ui.add_space(self.theme.spacing);
        ui.columns(2, |columns| {
            for (column, screen) in columns.iter_mut().zip([Screen::History, Screen::Settings]) {
                let button = egui::Button::new(screen.title())
                    .rounding(self.theme.button_rounding)
                    .min_size(egui::vec2(column.available_width(), 56.0));
                let label = format!("Open {}", screen.title());
                if labeled_button(column, true, button, &label).clicked() {
                    commands.push(AppCommand::Navigate(screen));
                }
            }
        });
    }
}
