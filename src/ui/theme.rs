//! Theme and styling for the SignSpeak UI
//!
//! Two palettes: the default pastel light theme and a black high-contrast
//! theme. Body text size follows the font-size setting.

use crate::settings::Settings;
use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Vec2, Visuals};

/// Application theme configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Sign-to-text accent (pink)
    pub primary: Color32,
    /// Text-to-sign accent (sky)
    pub secondary: Color32,
    pub success: Color32,
    pub error: Color32,

    /// Background colors
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,

    /// Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    /// Recording indicator color
    pub recording: Color32,

    pub button_rounding: Rounding,
    pub card_rounding: Rounding,

    pub spacing: f32,
    pub spacing_lg: f32,
    pub spacing_sm: f32,

    /// Body text size in points
    pub body_size: f32,
    pub high_contrast: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Pastel light theme
    pub fn light() -> Self {
        Self {
            primary: Color32::from_rgb(236, 72, 153),   // Pink
            secondary: Color32::from_rgb(56, 189, 248), // Sky
            success: Color32::from_rgb(22, 163, 74),
            error: Color32::from_rgb(220, 38, 38),

            bg_primary: Color32::from_rgb(253, 242, 248),   // Pink tint
            bg_secondary: Color32::from_rgb(255, 255, 255), // Cards
            bg_tertiary: Color32::from_rgb(243, 244, 246),

            text_primary: Color32::from_rgb(31, 41, 55),
            text_secondary: Color32::from_rgb(75, 85, 99),
            text_muted: Color32::from_rgb(156, 163, 175),

            recording: Color32::from_rgb(239, 68, 68),

            button_rounding: Rounding::same(16.0),
            card_rounding: Rounding::same(24.0),

            spacing: 16.0,
            spacing_lg: 24.0,
            spacing_sm: 8.0,

            body_size: 15.0,
            high_contrast: false,
        }
    }

    /// Black background, white text, saturated accents
    pub fn high_contrast() -> Self {
        Self {
            primary: Color32::from_rgb(250, 204, 21), // Yellow
            secondary: Color32::from_rgb(34, 211, 238),
            success: Color32::from_rgb(74, 222, 128),
            error: Color32::from_rgb(248, 113, 113),

            bg_primary: Color32::BLACK,
            bg_secondary: Color32::from_rgb(17, 24, 39),
            bg_tertiary: Color32::from_rgb(31, 41, 55),

            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgb(209, 213, 219),
            text_muted: Color32::from_rgb(156, 163, 175),

            recording: Color32::from_rgb(248, 113, 113),

            high_contrast: true,
            ..Self::light()
        }
    }

    /// Theme for the current settings record
    pub fn for_settings(settings: &Settings) -> Self {
        let base = if settings.high_contrast {
            Self::high_contrast()
        } else {
            Self::light()
        };
        Self {
            body_size: settings.font_size.points(),
            ..base
        }
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.high_contrast {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.bg_primary;
        visuals.window_fill = self.bg_secondary;
        visuals.extreme_bg_color = self.bg_secondary;
        visuals.override_text_color = Some(self.text_primary);

        visuals.widgets.noninteractive.bg_fill = self.bg_secondary;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.inactive.bg_fill = self.bg_tertiary;
        visuals.widgets.inactive.weak_bg_fill = self.bg_tertiary;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.hovered.bg_fill = self.primary.gamma_multiply(0.8);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.active.bg_fill = self.primary;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.selection.bg_fill = self.primary.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.primary);

        visuals.window_rounding = self.card_rounding;
        visuals.window_stroke = Stroke::new(1.0, self.bg_tertiary);

        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::splat(self.spacing_sm);
        style.spacing.window_margin = egui::Margin::same(self.spacing);
        style.spacing.button_padding = Vec2::new(self.spacing, self.spacing_sm);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            FontId::new(self.body_size + 9.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            FontId::new(self.body_size, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            FontId::new(self.body_size, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            FontId::new(self.body_size - 3.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Monospace,
            FontId::new(self.body_size - 2.0, FontFamily::Monospace),
        );

        ctx.set_style(style);
    }

    /// Card frame used by every screen
    pub fn card(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(self.bg_secondary)
            .rounding(self.card_rounding)
            .inner_margin(egui::Margin::same(self.spacing))
            .stroke(Stroke::new(1.0, self.bg_tertiary))
    }
}
