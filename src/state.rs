//! Display state for the three sentiment panels
//!
//! `UiState` is always replaced or reset as a whole; the renderer reads it
//! and nothing else writes panel content.

use crate::constants::{NOTE_NOT_SELECTED, NOTE_PLACEHOLDER, NOTE_SELECTED};
use crate::types::{ClassificationResponse, Sentiment};

#[derive(Clone, Debug, PartialEq)]
pub struct PanelState {
    pub selected: bool,
    /// Score formatted with two decimals
    pub score: String,
    /// Width of the fill bar, 0-100
    pub fill_percent: u8,
    pub note: &'static str,
}

impl PanelState {
    fn baseline() -> Self {
        Self {
            selected: false,
            score: "0.00".to_string(),
            fill_percent: 0,
            note: NOTE_PLACEHOLDER,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    panels: [PanelState; 3],
    /// Language reported back by the server for the last result
    pub model_lang: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::baseline()
    }
}

impl UiState {
    /// No selection, all scores zero, placeholder notes
    pub fn baseline() -> Self {
        Self {
            panels: [PanelState::baseline(), PanelState::baseline(), PanelState::baseline()],
            model_lang: None,
        }
    }

    /// Full display state for a successful classification
    pub fn from_response(response: &ClassificationResponse) -> Self {
        let mut state = Self::baseline();
        state.set_active(&response.label);
        state.set_scores(|s| response.score(s));
        state.model_lang = response
            .lang
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string);
        state
    }

    pub fn panel(&self, sentiment: Sentiment) -> &PanelState {
        &self.panels[sentiment.index()]
    }

    pub fn selected(&self) -> Option<Sentiment> {
        Sentiment::ALL.into_iter().find(|&s| self.panel(s).selected)
    }

    /// Select the panel matching `label`. An unknown label selects nothing
    /// but still marks every panel "Not selected".
    fn set_active(&mut self, label: &str) {
        let active = Sentiment::from_key(label);
        for s in Sentiment::ALL {
            let panel = &mut self.panels[s.index()];
            panel.selected = Some(s) == active;
            panel.note = if panel.selected { NOTE_SELECTED } else { NOTE_NOT_SELECTED };
        }
    }

    fn set_scores(&mut self, score_of: impl Fn(Sentiment) -> f64) {
        for s in Sentiment::ALL {
            let value = clamp_score(score_of(s));
            let panel = &mut self.panels[s.index()];
            panel.score = format!("{:.2}", value);
            panel.fill_percent = fill_percent(value);
        }
    }
}

/// Clamp to [0, 1]; NaN reads as 0
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn fill_percent(clamped: f64) -> u8 {
    (clamped * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> ClassificationResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn baseline_has_no_selection() {
        let state = UiState::baseline();
        assert_eq!(state.selected(), None);
        for s in Sentiment::ALL {
            let p = state.panel(s);
            assert!(!p.selected);
            assert_eq!(p.score, "0.00");
            assert_eq!(p.fill_percent, 0);
            assert_eq!(p.note, "—");
        }
        assert_eq!(state.model_lang, None);
    }

    #[test]
    fn positive_result_fills_all_panels() {
        let state = UiState::from_response(&response(
            r#"{"label":"positive","scores":{"positive":0.92,"neutral":0.06,"negative":0.02}}"#,
        ));
        assert_eq!(state.selected(), Some(Sentiment::Positive));
        assert_eq!(state.panel(Sentiment::Positive).score, "0.92");
        assert_eq!(state.panel(Sentiment::Neutral).score, "0.06");
        assert_eq!(state.panel(Sentiment::Negative).score, "0.02");
        assert_eq!(state.panel(Sentiment::Positive).fill_percent, 92);
        assert_eq!(state.panel(Sentiment::Neutral).fill_percent, 6);
        assert_eq!(state.panel(Sentiment::Negative).fill_percent, 2);
    }

    #[test]
    fn neutral_label_selects_only_neutral() {
        let state = UiState::from_response(&response(
            r#"{"label":"neutral","scores":{"positive":0.1,"neutral":0.8,"negative":0.1}}"#,
        ));
        assert_eq!(state.panel(Sentiment::Neutral).note, "Selected");
        assert!(state.panel(Sentiment::Neutral).selected);
        for s in [Sentiment::Positive, Sentiment::Negative] {
            assert_eq!(state.panel(s).note, "Not selected");
            assert!(!state.panel(s).selected);
        }
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        let state = UiState::from_response(&response(
            r#"{"label":"negative","scores":{"positive":-0.3,"neutral":1.7,"negative":0.5}}"#,
        ));
        let pos = state.panel(Sentiment::Positive);
        assert_eq!((pos.score.as_str(), pos.fill_percent), ("0.00", 0));
        let neu = state.panel(Sentiment::Neutral);
        assert_eq!((neu.score.as_str(), neu.fill_percent), ("1.00", 100));
        assert_eq!(state.panel(Sentiment::Negative).fill_percent, 50);
    }

    #[test]
    fn missing_scores_render_as_zero() {
        let state = UiState::from_response(&response(r#"{"label":"negative","scores":{"negative":0.7}}"#));
        assert_eq!(state.panel(Sentiment::Positive).score, "0.00");
        assert_eq!(state.panel(Sentiment::Neutral).score, "0.00");
        assert_eq!(state.panel(Sentiment::Negative).score, "0.70");
        assert_eq!(state.selected(), Some(Sentiment::Negative));
    }

    #[test]
    fn unknown_label_selects_nothing() {
        let state = UiState::from_response(&response(r#"{"label":"mixed","scores":{}}"#));
        assert_eq!(state.selected(), None);
        for s in Sentiment::ALL {
            assert_eq!(state.panel(s).note, "Not selected");
        }
    }

    #[test]
    fn model_language_is_captured() {
        let state = UiState::from_response(&response(r#"{"label":"neutral","lang":" es ","scores":{}}"#));
        assert_eq!(state.model_lang.as_deref(), Some("es"));
        let blank = UiState::from_response(&response(r#"{"label":"neutral","lang":"","scores":{}}"#));
        assert_eq!(blank.model_lang, None);
    }

    #[test]
    fn clamp_handles_nan_and_bounds() {
        assert_eq!(clamp_score(f64::NAN), 0.0);
        assert_eq!(clamp_score(-1.0), 0.0);
        assert_eq!(clamp_score(2.0), 1.0);
        assert_eq!(clamp_score(0.345), 0.345);
        assert_eq!(fill_percent(0.346), 35);
        assert_eq!(fill_percent(0.994), 99);
        assert_eq!(fill_percent(0.996), 100);
    }
}
