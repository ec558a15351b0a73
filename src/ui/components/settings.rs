//! Settings screen: main menu plus one page per preference group

use crate::settings::{FontSize, Language, Settings, VoiceType};
use crate::state::AppCommand;
use crate::ui::components::{accessible, labeled_button, Header};
use crate::ui::theme::Theme;
use crate::views::{SettingsControl, SettingsMenuState, SettingsPage};
use egui::RichText;

pub struct SettingsView<'a> {
    menu: &'a SettingsMenuState,
    settings: Settings,
    theme: &'a Theme,
}

impl<'a> SettingsView<'a> {
    pub fn new(menu: &'a SettingsMenuState, settings: Settings, theme: &'a Theme) -> Self {
        Self {
            menu,
            settings,
            theme,
        }
    }

    pub fn show(self, ui: &mut egui::Ui, commands: &mut Vec<AppCommand>) {
        let page = self.menu.page();
        Header::new(page.title(), page.subtitle(), AppCommand::SettingsBack, self.theme)
            .show(ui, commands);

        egui::ScrollArea::vertical()
            .id_salt("settings_page")
            .show(ui, |ui| match page {
                SettingsPage::Main => self.show_main(ui, commands),
                SettingsPage::Language => self.show_language(ui, commands),
                SettingsPage::Voice => self.show_voice(ui, commands),
                SettingsPage::Display => self.show_display(ui, commands),
                SettingsPage::Accessibility => self.show_accessibility(ui, commands),
                SettingsPage::About => self.show_about(ui),
            });
    }

    fn show_main(&self, ui: &mut egui::Ui, commands: &mut Vec<AppCommand>) {
        for page in SettingsPage::DETAILS {
            let description = match page {
                SettingsPage::Language => self.settings.language.label(),
                SettingsPage::Voice => self.settings.voice_type.label(),
                SettingsPage::Display => "Display settings",
                SettingsPage::Accessibility => "Accessibility options",
                SettingsPage::About | SettingsPage::Main => "App information",
            };
            let caption = format!("{}\n{}", page.title(), description);
            let button = egui::Button::new(caption)
                .rounding(self.theme.button_rounding)
                .min_size(egui::vec2(ui.available_width(), 52.0));
            let label = format!("Open {} settings", page.title());
            if labeled_button(ui, true, button, &label).clicked() {
                commands.push(AppCommand::OpenSettingsPage(page));
            }
        }

        ui.add_space(self.theme.spacing);

        let mut dark_mode = self.menu.dark_mode();
        let response = ui.checkbox(&mut dark_mode, "Dark Mode");
        accessible(&response, egui::WidgetType::Checkbox, true, "Dark mode");
        if response.changed() {
            commands.push(AppCommand::SetDarkMode(dark_mode));
        }

        let password = egui::Button::new("Change Password").rounding(self.theme.button_rounding);
        if labeled_button(ui, true, password, "Change password").clicked() {
            commands.push(AppCommand::ChangePassword);
        }

        let logout = egui::Button::new(RichText::new("Logout").color(self.theme.error))
            .rounding(self.theme.button_rounding);
        if labeled_button(ui, true, logout, "Log out").clicked() {
            commands.push(AppCommand::Logout);
        }
    }

    fn show_language(&self, ui: &mut egui::Ui, commands: &mut Vec<AppCommand>) {
        ui.label(RichText::new("Choose sign language").color(self.theme.text_secondary));
        for language in Language::ALL {
            let selected = self.settings.language == language;
            let response = ui.radio(selected, language.label());
            accessible(
                &response,
                egui::WidgetType::RadioButton,
                true,
                &format!("Sign language: {}", language.label()),
            );
            if response.clicked() && !selected {
                commands.push(AppCommand::ChangeSetting(SettingsControl::Language(language)));
            }
        }
    }

    fn show_voice(&self, ui: &mut egui::Ui, commands: &mut Vec<AppCommand>) {
        ui.label(RichText::new("Choose voice type").color(self.theme.text_secondary));
        for voice in VoiceType::ALL {
            let selected = self.settings.voice_type == voice;
            let response = ui.radio(selected, voice.label());
            accessible(
                &response,
                egui::WidgetType::RadioButton,
                true,
                &format!("{} voice", voice.label()),
            );
            if response.clicked() && !selected {
                commands.push(AppCommand::ChangeSetting(SettingsControl::VoiceType(voice)));
            }
        }
    }

    fn show_display(&self, ui: &mut egui::Ui, commands: &mut Vec<AppCommand>) {
        ui.label(RichText::new("Customize text appearance").color(self.theme.text_secondary));
        ui.label(RichText::new("Font Size").strong());
        for size in FontSize::ALL {
            let selected = self.settings.font_size == size;
            let response = ui.radio(selected, size.label());
            accessible(
                &response,
                egui::WidgetType::RadioButton,
                true,
                &format!("{} font", size.label()),
            );
            if response.clicked() && !selected {
                commands.push(AppCommand::ChangeSetting(SettingsControl::FontSize(size)));
            }
        }
    }

    fn show_accessibility(&self, ui: &mut egui::Ui, commands: &mut Vec<AppCommand>) {
        ui.label(
            RichText::new("Customize accessibility features").color(self.theme.text_secondary),
        );

        let mut high_contrast = self.settings.high_contrast;
        let response = ui.checkbox(&mut high_contrast, "High Contrast Mode");
        accessible(&response, egui::WidgetType::Checkbox, true, "High contrast");
        if response.changed() {
            commands.push(AppCommand::ChangeSetting(SettingsControl::HighContrast(
                high_contrast,
            )));
        }

        let mut vibration = self.settings.vibration_feedback;
        let response = ui.checkbox(&mut vibration, "Vibration Feedback");
        accessible(&response, egui::WidgetType::Checkbox, true, "Vibration feedback");
        if response.changed() {
            commands.push(AppCommand::ChangeSetting(SettingsControl::VibrationFeedback(
                vibration,
            )));
        }
    }

    fn show_about(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("SignSpeak").strong().size(self.theme.body_size + 6.0));
            ui.label(
                RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                    .color(self.theme.text_muted),
            );
            ui.add_space(self.theme.spacing);
            ui.label("Bridging communication between signers and non-signers.");
        });
    }
}
