//! Session replay and configuration.

use crate::renderer::LogRenderer;
use kurbo::Size;
use sketchboard_core::{Canvas, EditError, InputEvent, RenderContext, Renderer, Scene, ToolKind};
use std::path::Path;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read session: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid session or scene JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Editing failed: {0}")]
    Edit(#[from] EditError),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Canvas width in screen pixels.
    pub width: f64,
    /// Canvas height in screen pixels.
    pub height: f64,
    /// Tool selected before the first event.
    pub tool: ToolKind,
    /// Pretty-print the scene JSON.
    pub pretty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            tool: ToolKind::default(),
            pretty: true,
        }
    }
}

/// Parse a session: a JSON array of input events.
pub fn parse_session(json: &str) -> Result<Vec<InputEvent>, AppError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a session file.
pub fn load_session(path: &Path) -> Result<Vec<InputEvent>, AppError> {
    let json = std::fs::read_to_string(path)?;
    let events = parse_session(&json)?;
    log::info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// The application shell.
#[derive(Debug, Clone)]
pub struct App {
    config: AppConfig,
    canvas: Canvas,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let mut canvas = Canvas::new();
        canvas.set_canvas_size(Size::new(config.width, config.height));
        canvas.set_tool(config.tool);
        Self { config, canvas }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn scene(&self) -> &Scene {
        self.canvas.scene()
    }

    /// Feed every event to the canvas in order. Stops at the first failure.
    pub fn replay(&mut self, events: &[InputEvent]) -> Result<(), AppError> {
        for (index, event) in events.iter().enumerate() {
            if let Err(err) = self.canvas.handle_event(event) {
                log::warn!("Event {index} ({event:?}) failed: {err}");
                return Err(err.into());
            }
        }
        log::info!(
            "Replayed {} events: {} elements, mode {}",
            events.len(),
            self.scene().len(),
            self.canvas.mode()
        );
        Ok(())
    }

    /// Draw the current scene through a logging renderer.
    pub fn render(&self) -> LogRenderer {
        let mut renderer = LogRenderer::new();
        renderer.build_scene(&RenderContext::new(&self.canvas));
        renderer
    }

    /// The current scene as JSON.
    pub fn scene_json(&self) -> Result<String, AppError> {
        let json = if self.config.pretty {
            serde_json::to_string_pretty(self.scene())?
        } else {
            serde_json::to_string(self.scene())?
        };
        Ok(json)
    }

    /// One-line history summary.
    pub fn summary(&self) -> String {
        let history = self.canvas.history();
        format!(
            "{} elements, history {}/{}, zoom {}%",
            self.scene().len(),
            history.index() + 1,
            history.len(),
            self.canvas.viewport().zoom_percent()
        )
    }
}
