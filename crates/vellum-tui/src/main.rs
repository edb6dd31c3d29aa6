mod input;
mod render;
mod runtime;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use vellum_core::{constants, logging};

use crate::runtime::run_app;
use crate::ui::App;

/// Chat front end with an outline-style thread editor.
#[derive(Debug, Parser)]
#[command(name = "vellum", version)]
struct Cli {
    /// Log file path (falls back to VELLUM_LOG_FILE, then /tmp/vellum.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_path = cli
        .log_file
        .or_else(|| std::env::var_os("VELLUM_LOG_FILE").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_LOG_FILE));
    logging::init(&log_path)?;
    info!(log = %log_path.display(), "starting {}", constants::APP_NAME);

    // Restore the terminal before the panic message prints.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ui::restore_terminal();
        original_hook(panic_info);
    }));

    let mut app = App::new();
    let mut terminal = ui::init_terminal(!cli.no_mouse)?;
    let result = run_app(&mut terminal, &mut app).await;
    ui::restore_terminal()?;
    result
}
