//! PowerCalc application

use egui::Context;
use powercore::theme::{menu_bar, PowerColors};
use powercore::widgets::{display_panel, notice_window, KeyButton};
use powercore::{CalcConfig, PowerTheme};

use crate::keypad::{self, Key};
use crate::tracker::Tracker;

const DISPLAY_HEIGHT: f32 = 50.0;
const FONT_NOTICE: &str = "Custom fonts not found. Using system defaults.";

pub struct PowerCalcApp {
    tracker: Tracker,
    theme: PowerTheme,
    /// Set once at startup when the custom fonts could not be loaded.
    show_font_notice: bool,
    show_about: bool,
}

impl PowerCalcApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &CalcConfig) -> Self {
        let theme = PowerTheme::default();
        let fonts = theme.apply(&cc.egui_ctx, config.font_dir.as_deref());

        Self {
            tracker: Tracker::new(config.zero_division),
            theme,
            show_font_notice: fonts.is_fallback(),
            show_about: false,
        }
    }

    fn press(&mut self, key: Key) {
        let display = self.tracker.handle(key.event()).to_owned();
        log::debug!(
            "pressed {} -> {:?} (pending {:?}, {:?})",
            key.label(),
            display,
            self.tracker.pending().symbol(),
            self.tracker.phase()
        );
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let origin = ui.next_widget_position();
        let font = self.theme.display_font();
        let mut pressed = None;

        for (row, col, key) in keypad::keys() {
            let rect = keypad::key_rect(origin, row, col);
            let button = KeyButton::new(key.label(), keypad::BUTTON_SIZE).font(font.clone());
            if ui.put(rect, button).clicked() {
                pressed = Some(key);
            }
        }

        if let Some(key) = pressed {
            self.press(key);
        }
    }
}

impl eframe::App for PowerCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(PowerColors::BLACK).inner_margin(egui::Margin::same(8.0)))
            .show(ctx, |ui| {
                display_panel(ui, self.tracker.display(), DISPLAY_HEIGHT, self.theme.display_font());
                self.render_keypad(ui);
            });

        if self.show_font_notice && notice_window(ctx, "PowerCalc", FONT_NOTICE) {
            self.show_font_notice = false;
        }

        if self.show_about {
            let about = format!(
                "PowerCalc {}\n\nfour-function calculator\nbuttons only: 0-9 + - * / = C",
                env!("CARGO_PKG_VERSION")
            );
            if notice_window(ctx, "about powercalc", &about) {
                self.show_about = false;
            }
        }
    }
}
