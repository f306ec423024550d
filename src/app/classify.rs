//! Classification request lifecycle
//!
//! Each accepted `classify()` bumps `generation`; only the outcome carrying
//! the current generation is applied. `clear()` bumps it too, so anything
//! still in flight is dropped on arrival.

use super::{App, Outcome};
use crate::api::ClassifyError;
use crate::constants::{DEFAULT_LANG, STATUS_CLASSIFYING, STATUS_EMPTY_INPUT};
use crate::state::UiState;
use crate::types::ClassificationRequest;
use eframe::egui;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Ctrl+Enter or Cmd+Enter
pub fn is_submit_shortcut(modifiers: egui::Modifiers, key: egui::Key) -> bool {
    key == egui::Key::Enter && (modifiers.ctrl || modifiers.mac_cmd)
}

/// Trimmed language code, `en` when blank
pub(crate) fn normalize_lang(lang: &str) -> String {
    let lang = lang.trim();
    if lang.is_empty() {
        DEFAULT_LANG.to_string()
    } else {
        lang.to_string()
    }
}

impl App {
    pub fn classify(&mut self) {
        let text = self.text.trim().to_string();
        if text.is_empty() {
            self.status = STATUS_EMPTY_INPUT.to_string();
            return;
        }
        let lang = normalize_lang(&self.lang);

        self.generation += 1;
        let generation = self.generation;
        let token = CancellationToken::new();
        self.cancel_token = Some(token.clone());
        self.classifying = true;
        self.status = STATUS_CLASSIFYING.to_string();

        info!(generation, lang = %lang, chars = text.chars().count(), "Classifying text");

        let request = ClassificationRequest { text, lang };
        let client = self.client.clone();
        let tx = self.outcome_tx.clone();
        let ctx = self.ctx.clone();
        self.runtime.spawn(async move {
            let result = tokio::select! {
                _ = token.cancelled() => Err(ClassifyError::Cancelled),
                result = client.classify(&request) => result,
            };
            // Receiver lives as long as the app
            let _ = tx.send(Outcome { generation, result });
            ctx.request_repaint();
        });
    }

    pub fn clear(&mut self) {
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }
        // Invalidate anything still in flight
        self.generation += 1;
        self.classifying = false;
        self.text.clear();
        self.ui_state = UiState::baseline();
        self.status.clear();
        debug!(generation = self.generation, "Cleared input and results");
    }

    /// Apply any finished requests. Called once per frame.
    pub fn poll_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: Outcome) {
        if outcome.generation != self.generation {
            debug!(
                stale = outcome.generation,
                current = self.generation,
                "Discarding stale classification result"
            );
            return;
        }

        match outcome.result {
            Ok(response) => {
                if let Some(raw) = &response.raw {
                    debug!(raw = %raw, "Raw model output");
                }
                info!(label = %response.label, "Classification succeeded");
                self.ui_state = UiState::from_response(&response);
                self.status = format!("Result: {}", response.label.to_uppercase());
            }
            Err(e) => {
                warn!(error = %e, "Classification failed");
                self.ui_state = UiState::baseline();
                self.status = format!("Error: {e}");
            }
        }

        self.classifying = false;
        self.cancel_token = None;
    }
}
