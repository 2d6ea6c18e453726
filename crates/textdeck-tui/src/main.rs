//! textdeck entry point.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use clap::Parser;
use textdeck_tui::Runtime;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// textdeck terminal client
#[derive(Parser, Debug)]
#[command(name = "textdeck")]
#[command(about = "Terminal client for the textdeck mock messaging app")]
#[command(version)]
struct Args {
    /// Skip the splash screen
    #[arg(long)]
    skip_splash: bool,

    /// Simulate incoming messages on a timer
    #[arg(long)]
    demo: bool,

    /// Write tracing output to this file
    ///
    /// Logging is file-only; writing to stderr would corrupt the raw-mode
    /// terminal.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let runtime = Runtime::with_options(args.demo, args.skip_splash)?;
    Ok(runtime.run().await?)
}

/// Install a file-backed tracing subscriber honoring `RUST_LOG`.
fn init_logging(path: &Path) -> Result<(), std::io::Error> {
    let file = Arc::new(std::fs::File::create(path)?);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(file).with_ansi(false))
        .with(filter)
        .init();

    Ok(())
}
