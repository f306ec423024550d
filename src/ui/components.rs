//! Reusable UI components

use crate::state::PanelState;
use crate::theme;
use crate::types::Sentiment;
use eframe::egui;

/// One sentiment card: title, score, proportional fill bar, note
pub fn sentiment_panel(ui: &mut egui::Ui, sentiment: Sentiment, panel: &PanelState, width: f32) {
    let color = theme::sentiment_color(sentiment);
    let stroke = if panel.selected { color } else { theme::BORDER_SUBTLE };

    theme::card_frame(theme::sentiment_panel_fill(sentiment, panel.selected), stroke).show(ui, |ui| {
        ui.set_width(width);
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(sentiment.title().to_uppercase())
                    .size(theme::FONT_SMALL)
                    .color(if panel.selected { color } else { theme::TEXT_MUTED }),
            );
            ui.label(
                egui::RichText::new(&panel.score)
                    .size(theme::FONT_SCORE)
                    .color(theme::TEXT_PRIMARY)
                    .monospace(),
            );
            fill_bar(ui, panel.fill_percent, color);
            ui.add_space(theme::SPACING_SM);
            ui.label(
                egui::RichText::new(panel.note)
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_DIM),
            );
        });
    });
}

/// Horizontal bar filled to `percent` of the available width
pub fn fill_bar(ui: &mut egui::Ui, percent: u8, color: egui::Color32) {
    let size = egui::vec2(ui.available_width(), theme::FILL_BAR_HEIGHT);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter();
    painter.rect_filled(rect, theme::RADIUS_SMALL, theme::BG_SURFACE);
    let fraction = f32::from(percent.min(100)) / 100.0;
    if fraction > 0.0 {
        let mut filled = rect;
        filled.set_width(rect.width() * fraction);
        painter.rect_filled(filled, theme::RADIUS_SMALL, color);
    }
}

/// Color for the status line; results take the selected panel's color
pub fn status_color(status: &str, selected: Option<Sentiment>) -> egui::Color32 {
    if status.starts_with("Error:") {
        theme::STATUS_ERROR
    } else if status.starts_with("Result:") {
        selected.map_or(theme::TEXT_SECONDARY, theme::sentiment_color)
    } else {
        theme::TEXT_MUTED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_color_follows_message_kind() {
        assert_eq!(status_color("Error: model unavailable", None), theme::STATUS_ERROR);
        assert_eq!(
            status_color("Result: POSITIVE", Some(Sentiment::Positive)),
            theme::STATUS_SUCCESS
        );
        assert_eq!(
            status_color("Result: NEGATIVE", Some(Sentiment::Negative)),
            theme::STATUS_ERROR
        );
        assert_eq!(status_color("Result: MIXED", None), theme::TEXT_SECONDARY);
        assert_eq!(status_color("Classifying…", None), theme::TEXT_MUTED);
        assert_eq!(status_color("", None), theme::TEXT_MUTED);
    }
}
