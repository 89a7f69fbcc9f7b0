mod app;
mod catalog;
mod cli;
mod config;
mod controller;
mod gemini;
mod history;
mod state;
mod task;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging. `RUST_LOG` wins over the built-in default.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    if let Some(command) = cli.command {
        // Keep the terminal quiet unless asked
        init_tracing(if cli.output.verbose {
            "promptlab=debug,warn"
        } else {
            "promptlab=warn"
        });

        if let Err(e) = cli::run(command, &cli.output).await {
            cli::print_error(&format!("{:#}", e));
            std::process::exit(1);
        }
        return Ok(());
    }

    init_tracing("promptlab=debug,info");
    tracing::info!("Starting Prompt Lab");

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([820.0, 860.0])
        .with_min_inner_size([560.0, 520.0])
        .with_title("Suno v5 Prompt Lab");

    let native_options = eframe::NativeOptions {
        viewport,
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native(
        "PromptLab",
        native_options,
        Box::new(|cc| Ok(Box::new(app::PromptLabApp::new(cc)?))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}
