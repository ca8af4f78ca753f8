//! PowerCalc theme — green phosphor on black
//!
//! Two colors, square corners, 1px outlines.
//! VT323 for the display and keypad, Source Code Pro for monospace text.
//! Both are read from disk at startup; when either is missing egui's
//! built-in fonts are kept and the caller is told so.

use egui::{Color32, FontData, FontDefinitions, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SOURCE_CODE_FONT: &str = "SourceCodePro-Regular.ttf";
pub const VT323_FONT: &str = "VT323-Regular.ttf";

/// The palette.
pub struct PowerColors;

impl PowerColors {
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
    pub const LIME_GREEN: Color32 = Color32::from_rgb(50, 205, 50);
}

#[derive(Error, Debug)]
pub enum FontError {
    #[error("font not found: {0}")]
    NotFound(String),
    #[error("not a TrueType/OpenType font: {0}")]
    Invalid(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of font installation.
#[derive(Debug)]
pub enum FontStatus {
    Custom,
    Fallback(FontError),
}

impl FontStatus {
    pub fn is_fallback(&self) -> bool {
        matches!(self, FontStatus::Fallback(_))
    }
}

/// Raw bytes of both custom fonts.
pub struct CustomFonts {
    pub source_code: Vec<u8>,
    pub vt323: Vec<u8>,
}

/// Theme configuration
pub struct PowerTheme {
    pub font_size_body: f32,
    /// Source Code Pro size
    pub font_size_mono: f32,
    /// VT323 size, used by the display and keypad
    pub font_size_display: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for PowerTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_mono: 20.0,
            font_size_display: 24.0,
            window_padding: 8.0,
            item_spacing: 4.0,
        }
    }
}

/// Directories searched for `Fonts/`, in order.
pub fn font_search_dirs(extra: Option<&Path>) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(dir) = extra {
        dirs.push(dir.to_path_buf());
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            dirs.push(dir.join("Fonts"));
            // Cargo workspace: exe is in target/debug or target/release
            if let Some(grandparent) = dir.parent().and_then(Path::parent) {
                dirs.push(grandparent.join("Fonts"));
            }
        }
    }

    dirs.push(PathBuf::from("Fonts"));
    dirs.push(PathBuf::from("/usr/share/powercalc/fonts"));
    dirs
}

/// Read one font file from the first directory that has it.
pub fn read_font(name: &str, dirs: &[PathBuf]) -> Result<Vec<u8>, FontError> {
    let path = dirs
        .iter()
        .map(|dir| dir.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| FontError::NotFound(name.to_owned()))?;

    let data = std::fs::read(&path)?;
    if !has_font_magic(&data) {
        return Err(FontError::Invalid(path));
    }
    Ok(data)
}

/// Both fonts must load, otherwise neither is used.
pub fn load_custom_fonts(dirs: &[PathBuf]) -> Result<CustomFonts, FontError> {
    Ok(CustomFonts {
        source_code: read_font(SOURCE_CODE_FONT, dirs)?,
        vt323: read_font(VT323_FONT, dirs)?,
    })
}

// egui panics on unparsable font data, so reject anything without an sfnt tag.
fn has_font_magic(data: &[u8]) -> bool {
    matches!(
        data.get(..4),
        Some([0x00, 0x01, 0x00, 0x00]) | Some(b"OTTO") | Some(b"true") | Some(b"ttcf")
    )
}

impl PowerTheme {
    /// Font used by the display and keypad buttons.
    pub fn display_font(&self) -> FontId {
        FontId::new(self.font_size_display, FontFamily::Proportional)
    }

    /// Apply the theme to an egui context.
    ///
    /// `font_dir` is searched before the default locations.
    pub fn apply(&self, ctx: &egui::Context, font_dir: Option<&Path>) -> FontStatus {
        let status = match load_custom_fonts(&font_search_dirs(font_dir)) {
            Ok(custom) => {
                ctx.set_fonts(Self::font_definitions(custom));
                log::info!("loaded custom fonts");
                FontStatus::Custom
            }
            Err(e) => {
                log::warn!("custom fonts unavailable, using defaults: {}", e);
                FontStatus::Fallback(e)
            }
        };

        ctx.set_style(self.style());
        status
    }

    fn font_definitions(custom: CustomFonts) -> FontDefinitions {
        let mut fonts = FontDefinitions::default();
        fonts
            .font_data
            .insert("VT323".to_owned(), FontData::from_owned(custom.vt323));
        fonts.font_data.insert(
            "SourceCodePro".to_owned(),
            FontData::from_owned(custom.source_code),
        );
        fonts
            .families
            .entry(FontFamily::Proportional)
            .or_default()
            .insert(0, "VT323".to_owned());
        fonts
            .families
            .entry(FontFamily::Monospace)
            .or_default()
            .insert(0, "SourceCodePro".to_owned());
        fonts
    }

    /// egui's default style with the phosphor palette and our fonts.
    ///
    /// Only the text styles the calculator draws with are resized; the rest
    /// keep egui's defaults so window titles still resolve.
    pub fn style(&self) -> Style {
        let mut style = Style::default();

        style.text_styles.extend([
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, self.display_font()),
            (TextStyle::Monospace, FontId::new(self.font_size_mono, FontFamily::Monospace)),
        ]);

        let outline = Stroke::new(1.0, PowerColors::LIME_GREEN);
        let mut visuals = Visuals::dark();
        visuals.override_text_color = Some(PowerColors::LIME_GREEN);
        visuals.window_fill = PowerColors::BLACK;
        visuals.panel_fill = PowerColors::BLACK;
        visuals.extreme_bg_color = PowerColors::BLACK;
        visuals.window_stroke = outline;
        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        let widgets = &mut visuals.widgets;
        for ws in [
            &mut widgets.noninteractive,
            &mut widgets.inactive,
            &mut widgets.hovered,
            &mut widgets.active,
            &mut widgets.open,
        ] {
            ws.bg_fill = PowerColors::BLACK;
            ws.weak_bg_fill = PowerColors::BLACK;
            ws.bg_stroke = outline;
            ws.fg_stroke = outline;
            ws.rounding = Rounding::ZERO;
        }

        style.visuals = visuals;
        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style
    }
}

/// Outlined strip for the top menu.
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::none()
        .stroke(Stroke::new(1.0, PowerColors::LIME_GREEN))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner)
        .inner
}
