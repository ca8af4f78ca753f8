//! Custom widgets — black fill, green outline

use egui::{Response, Ui, Widget};
use crate::theme::PowerColors;

/// A keypad button: fixed size, 1px outline, inverted while held down.
pub struct KeyButton<'a> {
    text: &'a str,
    size: egui::Vec2,
    font: egui::FontId,
}

impl<'a> KeyButton<'a> {
    pub fn new(text: &'a str, size: egui::Vec2) -> Self {
        Self {
            text,
            size,
            font: egui::FontId::proportional(24.0),
        }
    }

    pub fn font(mut self, font: egui::FontId) -> Self {
        self.font = font;
        self
    }
}

impl<'a> Widget for KeyButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let pressed = response.is_pointer_button_down_on();
            let (fill, text_color) = if pressed {
                (PowerColors::LIME_GREEN, PowerColors::BLACK)
            } else {
                (PowerColors::BLACK, PowerColors::LIME_GREEN)
            };

            painter.rect_filled(rect, 0.0, fill);
            let width = if response.hovered() { 2.0 } else { 1.0 };
            painter.rect_stroke(rect, 0.0, egui::Stroke::new(width, PowerColors::LIME_GREEN));

            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.text,
                self.font,
                text_color,
            );
        }

        response
    }
}

/// Read-only display strip, text right aligned.
pub fn display_panel(ui: &mut Ui, text: &str, height: f32, font: egui::FontId) {
    egui::Frame::none()
        .fill(PowerColors::BLACK)
        .stroke(egui::Stroke::new(1.0, PowerColors::LIME_GREEN))
        .inner_margin(egui::Margin::symmetric(8.0, 4.0))
        .show(ui, |ui| {
            ui.set_min_height(height);
            ui.set_max_height(height);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(text)
                        .font(font)
                        .color(PowerColors::LIME_GREEN),
                );
            });
        });
}

/// Modal-style message box with a single "ok" button.
/// Returns true on the frame the user dismisses it.
pub fn notice_window(ctx: &egui::Context, title: &str, message: &str) -> bool {
    let mut dismissed = false;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(4.0);
            ui.vertical_centered(|ui| {
                if ui.button("ok").clicked() {
                    dismissed = true;
                }
            });
        });
    dismissed
}
