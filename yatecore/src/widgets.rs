//! Custom widgets

use crate::theme::YateColors;
use egui::Ui;

/// Text shown in the status line for a buffer.
pub fn status_text(char_count: usize, modified: bool) -> String {
    let noun = if char_count == 1 { "character" } else { "characters" };
    if modified {
        format!("{} {}  |  modified", char_count, noun)
    } else {
        format!("{} {}", char_count, noun)
    }
}

/// Status bar: paper bg, thin top rule
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(YateColors::PAPER)
        .stroke(egui::Stroke::new(1.0, YateColors::RULE))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(text);
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(0, false), "0 characters");
        assert_eq!(status_text(1, false), "1 character");
        assert_eq!(status_text(42, true), "42 characters  |  modified");
    }
}
