//! Record button for the sign-to-text camera

use crate::ui::components::accessible;
use crate::ui::theme::Theme;
use egui::{Color32, Rect, Sense, Vec2};

/// Round record button: a dot while idle, a square while recording
pub struct RecordButton<'a> {
    recording: bool,
    theme: &'a Theme,
    size: f32,
}

impl<'a> RecordButton<'a> {
    pub fn new(recording: bool, theme: &'a Theme) -> Self {
        Self {
            recording,
            theme,
            size: 72.0,
        }
    }

    /// Show the button and return the response
    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(self.size), Sense::click());
        let label = if self.recording {
            "Stop recording"
        } else {
            "Start recording"
        };
        accessible(&response, egui::WidgetType::Button, true, label);

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect, &response);
        }

        response.on_hover_text(if self.recording {
            "Click to stop"
        } else {
            "Click to record"
        })
    }

    fn paint(&self, ui: &egui::Ui, rect: Rect, response: &egui::Response) {
        let painter = ui.painter();
        let center = rect.center();
        let radius = self.size / 2.0 - 4.0;

        let bg_color = if self.recording {
            self.theme.recording
        } else if response.hovered() {
            self.theme.primary.gamma_multiply(1.2)
        } else {
            self.theme.primary
        };
        painter.circle_filled(center, radius, bg_color);

        if self.recording {
            painter.rect_filled(
                Rect::from_center_size(center, Vec2::splat(radius * 0.6)),
                4.0,
                Color32::WHITE,
            );
            self.draw_pulsing_ring(ui, center, radius);
        } else {
            painter.circle_filled(center, radius * 0.35, Color32::WHITE);
        }
    }

    fn draw_pulsing_ring(&self, ui: &egui::Ui, center: egui::Pos2, radius: f32) {
        let t = ui.ctx().input(|i| i.time);
        let pulse = ((t * 3.0).sin() * 0.5 + 0.5) as f32;

        ui.painter().circle_stroke(
            center,
            radius + 2.0 + pulse * 6.0,
            egui::Stroke::new(2.0 + pulse * 2.0, self.theme.recording.gamma_multiply(1.0 - pulse)),
        );

        ui.ctx().request_repaint();
    }
}
