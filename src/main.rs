//! Leafscan - a terminal demo for plant disease diagnosis
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use leafscan_app::message::Message;
use leafscan_app::{config, AppState, StubAnalyzer};
use leafscan_core::prelude::*;
use leafscan_tui::IconSet;

/// Leafscan - diagnose plant diseases from leaf photographs
#[derive(Parser, Debug)]
#[command(name = "leafscan")]
#[command(about = "A terminal demo for plant disease diagnosis", long_about = None)]
struct Args {
    /// Directory the image picker opens in
    #[arg(value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Image file to load on startup
    #[arg(long, value_name = "FILE")]
    image: Option<PathBuf>,

    /// Use plain ASCII badges instead of unicode icons
    #[arg(long)]
    ascii: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    leafscan_core::logging::init()?;

    let settings = match config::load() {
        Ok(settings) => settings,
        Err(e) => {
            // The terminal is not taken over yet, so this can go to stderr.
            eprintln!("Ignoring invalid configuration: {e}");
            warn!("falling back to default settings: {e}");
            config::Settings::default()
        }
    };

    let pick_root = args
        .dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let state = AppState::new(pick_root);
    let analyzer = Arc::new(StubAnalyzer::new(Duration::from_millis(
        settings.analysis.latency_ms,
    )));
    let icons = IconSet::new(settings.ui.icons && !args.ascii);

    let initial = args.image.map(|path| Message::FileChosen { path });

    leafscan_tui::run(state, analyzer, icons, initial).await
}
