//! Common types and data structures

use serde::{Deserialize, Serialize};

/// One of the three mutually exclusive sentiment categories
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Display order of the panels
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Key used in the wire format (`label` value and `scores` keys)
    pub fn key(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    pub fn index(self) -> usize {
        match self {
            Sentiment::Positive => 0,
            Sentiment::Neutral => 1,
            Sentiment::Negative => 2,
        }
    }
}

/// Body of `POST /api/classify`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassificationRequest {
    pub text: String,
    pub lang: String,
}

/// Successful classification result from the server.
///
/// Scores are kept as a raw JSON value so that a missing, null or
/// non-object `scores`, and any non-numeric entry, read as zero instead of
/// failing the whole response.
#[derive(Clone, Debug, Deserialize)]
pub struct ClassificationResponse {
    pub label: String,
    #[serde(default)]
    pub scores: serde_json::Value,
    /// Language the server actually used after its own fallback
    #[serde(default)]
    pub lang: Option<String>,
    /// Unnormalized model output, only logged
    #[serde(default)]
    pub raw: Option<serde_json::Value>,
}

impl ClassificationResponse {
    /// Numeric score for a category; absent or non-numeric values read as 0
    pub fn score(&self, sentiment: Sentiment) -> f64 {
        match self.scores.get(sentiment.key()) {
            Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
            _ => 0.0,
        }
    }
}

/// Error payload the server sends with non-2xx responses
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_keys_round_trip() {
        for s in Sentiment::ALL {
            assert_eq!(Sentiment::from_key(s.key()), Some(s));
        }
        assert_eq!(Sentiment::from_key("mixed"), None);
        assert_eq!(Sentiment::from_key("Positive"), None);
    }

    #[test]
    fn request_serializes_text_and_lang() {
        let req = ClassificationRequest {
            text: "I love this product".into(),
            lang: "en".into(),
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"text":"I love this product","lang":"en"}"#
        );
    }

    #[test]
    fn missing_and_odd_scores_read_as_zero() {
        let resp: ClassificationResponse = serde_json::from_str(
            r#"{"label":"neutral","scores":{"positive":"0.25","neutral":null,"negative":[1]}}"#,
        )
        .unwrap();
        assert_eq!(resp.score(Sentiment::Positive), 0.25);
        assert_eq!(resp.score(Sentiment::Neutral), 0.0);
        assert_eq!(resp.score(Sentiment::Negative), 0.0);

        let bare: ClassificationResponse = serde_json::from_str(r#"{"label":"negative"}"#).unwrap();
        assert!(bare.scores.is_null());
        assert_eq!(bare.lang, None);
    }

    #[test]
    fn null_or_non_object_scores_read_as_zero() {
        for body in [
            r#"{"label":"positive","scores":null}"#,
            r#"{"label":"positive","scores":[0.9,0.1,0.0]}"#,
            r#"{"label":"positive","scores":"high"}"#,
        ] {
            let resp: ClassificationResponse = serde_json::from_str(body).unwrap();
            for s in Sentiment::ALL {
                assert_eq!(resp.score(s), 0.0, "{body}");
            }
        }
    }

    #[test]
    fn response_without_label_is_rejected() {
        let parsed = serde_json::from_str::<ClassificationResponse>(r#"{"scores":{}}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn reference_server_fields_are_accepted() {
        let resp: ClassificationResponse = serde_json::from_str(
            r#"{"lang":"de","label":"positive","scores":{"positive":0.9,"neutral":0.0,"negative":0.0},"raw":{"label":"LABEL_0","score":0.9}}"#,
        )
        .unwrap();
        assert_eq!(resp.lang.as_deref(), Some("de"));
        assert!(resp.raw.is_some());
        assert_eq!(resp.score(Sentiment::Positive), 0.9);
    }
}
