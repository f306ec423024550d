//! View rendering (input area, action row, result panels, status line)

use super::{is_submit_shortcut, App};
use crate::constants::{APP_NAME, SUPPORTED_LANGUAGES};
use crate::theme;
use crate::types::Sentiment;
use crate::ui::components::{sentiment_panel, status_color};
use eframe::egui;

const TEXT_INPUT_ID: &str = "classify_text";

impl App {
    pub(crate) fn render_main(&mut self, ctx: &egui::Context) {
        let text_id = egui::Id::new(TEXT_INPUT_ID);

        // Ctrl/Cmd+Enter in the text box submits; eat the key so no newline is inserted
        let text_focused = ctx.memory(|m| m.has_focus(text_id));
        if text_focused && self.take_submit_shortcut(ctx) {
            self.classify();
        }

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::SPACING_XL as i8)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(theme::CONTENT_MAX_WIDTH);
                    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                        ui.label(
                            egui::RichText::new(APP_NAME)
                                .size(theme::FONT_TITLE)
                                .color(theme::TEXT_PRIMARY),
                        );
                        ui.label(
                            egui::RichText::new(self.client.url())
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_DIM),
                        );
                        ui.add_space(theme::SPACING_LG);

                        self.render_input(ui, text_id);
                        ui.add_space(theme::SPACING_MD);
                        self.render_actions(ui);
                        ui.add_space(theme::SPACING_XL);
                        self.render_results(ui);
                        ui.add_space(theme::SPACING_LG);
                        self.render_status(ui);
                    });
                });
            });
    }

    fn take_submit_shortcut(&self, ctx: &egui::Context) -> bool {
        ctx.input_mut(|i| {
            let before = i.events.len();
            i.events.retain(|event| {
                !matches!(
                    event,
                    egui::Event::Key { key, pressed: true, modifiers, .. }
                        if is_submit_shortcut(*modifiers, *key)
                )
            });
            i.events.len() != before
        })
    }

    fn render_input(&mut self, ui: &mut egui::Ui, text_id: egui::Id) {
        theme::input_frame().show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut self.text)
                    .id(text_id)
                    .hint_text("Type or paste text to classify… (Ctrl+Enter to submit)")
                    .frame(false)
                    .font(egui::FontId::proportional(theme::FONT_BODY))
                    .desired_rows(theme::INPUT_ROWS)
                    .desired_width(ui.available_width()),
            );
        });
    }

    fn render_actions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Language")
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_MUTED),
            );
            egui::ComboBox::from_id_salt("lang_select")
                .width(theme::LANG_COMBO_WIDTH)
                .selected_text(language_label(&self.lang))
                .show_ui(ui, |ui| {
                    for code in language_options(&self.lang) {
                        let label = language_label(&code);
                        ui.selectable_value(&mut self.lang, code, label);
                    }
                });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let clear = ui.add(theme::button(format!("{} Clear", egui_phosphor::regular::X)));
                if clear.clicked() {
                    self.clear();
                }

                let label = if self.classifying {
                    format!("{} Classifying", egui_phosphor::regular::HOURGLASS)
                } else {
                    format!("{} Classify", egui_phosphor::regular::SPARKLE)
                };
                let go = ui.add_enabled(!self.classifying, theme::button_accent(label));
                if go.clicked() {
                    self.classify();
                }
            });
        });
    }

    fn render_results(&self, ui: &mut egui::Ui) {
        let spacing = theme::SPACING_LG;
        // Card inner margins on both sides
        let margins = 2.0 * theme::SPACING_LG;
        let card_width = ((ui.available_width() - 2.0 * spacing) / 3.0 - margins).max(80.0);

        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = spacing;
            for sentiment in Sentiment::ALL {
                sentiment_panel(ui, sentiment, self.ui_state.panel(sentiment), card_width);
            }
        });

        if let Some(lang) = &self.ui_state.model_lang {
            ui.add_space(theme::SPACING_SM);
            ui.label(
                egui::RichText::new(format!("Model language: {lang}"))
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_DIM),
            );
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new(&self.status)
                .size(theme::FONT_HEADING)
                .color(status_color(&self.status, self.ui_state.selected())),
        );
    }
}

/// Supported codes, plus the current one when it is something else
fn language_options(current: &str) -> Vec<String> {
    let mut options: Vec<String> = SUPPORTED_LANGUAGES
        .iter()
        .map(|(code, _)| code.to_string())
        .collect();
    let current = current.trim();
    if !current.is_empty() && !options.iter().any(|c| c == current) {
        options.push(current.to_string());
    }
    options
}

/// "English (en)" for known codes, the raw code otherwise
fn language_label(code: &str) -> String {
    let code = code.trim();
    match SUPPORTED_LANGUAGES.iter().find(|(c, _)| *c == code) {
        Some((c, name)) => format!("{name} ({c})"),
        None if code.is_empty() => "English (en)".to_string(),
        None => code.to_string(),
    }
}
