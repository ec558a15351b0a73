//! Toast overlay anchored to the bottom of the window

use crate::notify::{Severity, Toast};
use crate::ui::components::accessible;
use crate::ui::theme::Theme;
use egui::{Align2, Color32, RichText};

pub struct ToastOverlay<'a> {
    toasts: Vec<&'a Toast>,
    theme: &'a Theme,
}

impl<'a> ToastOverlay<'a> {
    pub fn new(toasts: impl Iterator<Item = &'a Toast>, theme: &'a Theme) -> Self {
        Self {
            toasts: toasts.collect(),
            theme,
        }
    }

    pub fn show(self, ctx: &egui::Context) {
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(Align2::CENTER_BOTTOM, egui::vec2(0.0, -self.theme.spacing_lg))
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                for (i, toast) in self.toasts.iter().enumerate() {
                    let fill = match toast.notification.severity {
                        Severity::Success => self.theme.success,
                        Severity::Error => self.theme.error,
                    };
                    egui::Frame::none()
                        .fill(fill)
                        .rounding(self.theme.button_rounding)
                        .inner_margin(egui::Margin::symmetric(self.theme.spacing, self.theme.spacing_sm))
                        .show(ui, |ui| {
                            let response = ui.label(
                                RichText::new(&toast.notification.message).color(Color32::WHITE),
                            );
                            accessible(
                                &response,
                                egui::WidgetType::Label,
                                true,
                                &format!("Notification {}: {}", i + 1, toast.notification.message),
                            );
                        });
                    ui.add_space(self.theme.spacing_sm);
                }
            });
    }
}
