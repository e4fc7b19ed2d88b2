//! Browse the seed parameter set interactively (requires `--features egui`).
//!
//! Usage:
//!   cargo run --features egui --example egui_explorer -- [--config explorer.json] [--seed 42]

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use eframe::egui;

use paramscope::config::ExplorerConfig;
use paramscope::explorer::{Explorer, ExplorerApp};
use paramscope::logging::{Verbosity, init_subscriber};

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse the seed parameter set using egui", long_about = None)]
struct Args {
    /// JSON config describing the dataset and bucket threshold
    #[arg(long, value_name = "FILE")]
    config: Option<Utf8PathBuf>,

    /// RNG seed for parameter values
    #[arg(long)]
    seed: Option<u64>,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_subscriber(Verbosity::from_flags(args.verbose, false));

    let mut config = match &args.config {
        Some(path) => ExplorerConfig::load(path)?,
        None => ExplorerConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    let app = ExplorerApp::new(Explorer::from_config(&config));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "paramscope explorer",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}
