//! App module - contains the main application state and logic

mod classify;
mod views;

pub use classify::is_submit_shortcut;

use crate::api::{ClassifyClient, ClassifyError};
use crate::settings::Settings;
use crate::state::UiState;
use crate::theme;
use eframe::egui;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Startup failures; both are fatal for the window
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] ClassifyError),
}

/// Result of one classification request, tagged with the generation that issued it
pub(crate) struct Outcome {
    pub(crate) generation: u64,
    pub(crate) result: Result<crate::types::ClassificationResponse, ClassifyError>,
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    // Inputs
    pub(crate) text: String,
    pub(crate) lang: String,
    // Display
    pub(crate) status: String,
    pub(crate) ui_state: UiState,
    /// Trigger control is disabled while true
    pub(crate) classifying: bool,
    // Request bookkeeping
    pub(crate) generation: u64,
    pub(crate) cancel_token: Option<CancellationToken>,
    pub(crate) outcome_tx: mpsc::UnboundedSender<Outcome>,
    pub(crate) outcome_rx: mpsc::UnboundedReceiver<Outcome>,
    pub(crate) client: ClassifyClient,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) ctx: egui::Context,
    // Settings
    pub(crate) server_url: String,
    pub(crate) request_timeout_secs: u64,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Result<Self, AppError> {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self::with_context(cc.egui_ctx.clone(), settings, data_dir)
    }

    /// Build the controller around an existing egui context
    pub fn with_context(
        ctx: egui::Context,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Result<Self, AppError> {
        let server_url = settings.server_url_or_default().to_string();
        let client = ClassifyClient::new(&server_url, settings.request_timeout())?;
        let runtime = tokio::runtime::Runtime::new()?;
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        info!(endpoint = client.url(), "Classification client ready");

        Ok(Self {
            text: String::new(),
            lang: settings.last_lang.clone(),
            status: String::new(),
            ui_state: UiState::baseline(),
            classifying: false,
            generation: 0,
            cancel_token: None,
            outcome_tx,
            outcome_rx,
            client,
            runtime,
            ctx,
            server_url,
            request_timeout_secs: settings.request_timeout_secs,
            window_pos: settings
                .window_x
                .zip(settings.window_y)
                .map(|(x, y)| egui::pos2(x, y)),
            window_size: settings
                .window_w
                .zip(settings.window_h)
                .map(|(w, h)| egui::vec2(w, h)),
            needs_center: false,
            data_dir,
        })
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            server_url: self.server_url.clone(),
            request_timeout_secs: self.request_timeout_secs,
            last_lang: self.lang.trim().to_string(),
        };
        settings.save(&self.data_dir);
    }
}
