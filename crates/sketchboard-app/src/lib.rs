//! Sketchboard Application
//!
//! Headless shell around the editing engine: loads a recorded input
//! session, replays it and reports the resulting scene.

mod app;
mod renderer;

pub use app::{App, AppConfig, AppError, load_session, parse_session};
pub use renderer::{LogRenderer, RibbonOutliner};
