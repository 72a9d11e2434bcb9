//! Sketchboard command-line entry point.

use clap::Parser;
use sketchboard_app::{App, AppConfig, AppError, load_session};
use sketchboard_core::ToolKind;
use std::path::PathBuf;

/// Replay a recorded Sketchboard input session and print the resulting scene
#[derive(Parser)]
#[command(name = "sketchboard")]
#[command(about = "Replay a recorded Sketchboard input session")]
struct Cli {
    /// Session file: a JSON array of input events
    session: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Tool selected before the first event
    #[arg(long, default_value = "pencil")]
    tool: ToolKind,

    /// Print the scene on a single line
    #[arg(long)]
    compact: bool,
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = AppConfig {
        width: cli.width,
        height: cli.height,
        tool: cli.tool,
        pretty: !cli.compact,
    };
    let events = load_session(&cli.session)?;

    let mut app = App::new(config);
    app.replay(&events)?;
    let renderer = app.render();
    log::info!("Rendered {} elements", renderer.draw_calls().len());

    println!("{}", app.scene_json()?);
    println!("{}", app.summary());
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Starting Sketchboard");

    if let Err(err) = run(Cli::parse()) {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
    log::info!("Done");
}
