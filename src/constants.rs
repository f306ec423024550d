//! Application constants and configuration

pub const APP_NAME: &str = "Sentiment Classifier";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
pub const CLASSIFY_PATH: &str = "/api/classify";
pub const DEFAULT_LANG: &str = "en";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Languages the classification server ships models for: (code, display name)
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] =
    &[("de", "German"), ("en", "English"), ("es", "Spanish")];

// Status line messages
pub const STATUS_EMPTY_INPUT: &str = "Please enter some text first.";
pub const STATUS_CLASSIFYING: &str = "Classifying…";
pub const REQUEST_FAILED: &str = "Request failed";

// Panel notes
pub const NOTE_PLACEHOLDER: &str = "—";
pub const NOTE_SELECTED: &str = "Selected";
pub const NOTE_NOT_SELECTED: &str = "Not selected";
