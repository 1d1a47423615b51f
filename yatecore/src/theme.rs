//! YATE theme
//!
//! Light paper background, dark ink, square corners. Uses egui's bundled
//! fonts so the editor runs without extra assets.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

pub struct YateColors;

impl YateColors {
    pub const PAPER: Color32 = Color32::from_rgb(253, 252, 247);
    pub const INK: Color32 = Color32::from_rgb(24, 24, 24);
    pub const RULE: Color32 = Color32::from_rgb(200, 198, 190);
}

/// Theme configuration for the editor window
pub struct YateTheme {
    pub font_size_body: f32,
    pub font_size_editor: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    /// Inner margin around the text area
    pub text_padding: f32,
    pub item_spacing: f32,
}

impl Default for YateTheme {
    fn default() -> Self {
        Self {
            font_size_body: 13.0,
            font_size_editor: 14.0,
            font_size_heading: 20.0,
            font_size_small: 11.0,
            text_padding: 10.0,
            item_spacing: 4.0,
        }
    }
}

impl YateTheme {
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_editor, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.window_fill = YateColors::PAPER;
        visuals.panel_fill = YateColors::PAPER;
        visuals.extreme_bg_color = YateColors::PAPER;
        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, YateColors::INK);
        visuals.override_text_color = Some(YateColors::INK);

        let flat = |ws: &mut egui::style::WidgetVisuals| {
            ws.rounding = Rounding::ZERO;
            ws.fg_stroke = Stroke::new(1.0, YateColors::INK);
        };
        flat(&mut visuals.widgets.noninteractive);
        flat(&mut visuals.widgets.inactive);
        flat(&mut visuals.widgets.hovered);
        flat(&mut visuals.widgets.active);
        flat(&mut visuals.widgets.open);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Font used by the main text area
    pub fn editor_font(&self) -> FontId {
        FontId::proportional(self.font_size_editor)
    }

    /// Frame around the main text area
    pub fn editor_frame(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(YateColors::PAPER)
            .inner_margin(egui::Margin::same(self.text_padding))
    }
}

/// Menu bar styling helper
pub fn menu_bar(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .fill(YateColors::PAPER)
        .stroke(Stroke::new(1.0, YateColors::RULE))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| {
            egui::menu::bar(ui, add_contents);
        });
}
