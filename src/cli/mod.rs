//! CLI module for Prompt Lab
//!
//! Generation, history, catalog and configuration from the terminal. Running
//! without a subcommand opens the desktop window instead.

mod commands;
mod output;
mod shell;

use clap::{Parser, Subcommand};

pub use output::{OutputFormat, print_error};

/// Prompt Lab - Suno v5 style and lyrics generator
#[derive(Parser, Debug)]
#[command(name = "promptlab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output formatting options
#[derive(Parser, Debug, Clone)]
pub struct OutputOptions {
    /// Output in JSON format (for machine parsing)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl OutputOptions {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a style prompt and lyrics from an idea
    Generate {
        /// The idea, e.g. "90s Korean Ballad"
        #[arg(required = true, num_args = 1..)]
        idea: Vec<String>,
    },

    /// Generate from a catalog example prompt
    Example {
        /// Genre id (see `genres list`)
        genre: String,

        /// 1-based example number (see `genres show <genre>`)
        index: usize,
    },

    /// Generation history
    History {
        #[command(subcommand)]
        command: commands::history::HistoryCommands,
    },

    /// Built-in genre catalog
    Genres {
        #[command(subcommand)]
        command: commands::genres::GenresCommands,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },

    /// Interactive shell
    Shell,
}

/// Run the CLI with parsed arguments
pub async fn run(command: Commands, options: &OutputOptions) -> anyhow::Result<()> {
    match command {
        Commands::Shell => shell::run().await,
        command => dispatch(command, options.format(), options.quiet).await,
    }
}

/// Run a single non-interactive command
async fn dispatch(command: Commands, format: OutputFormat, quiet: bool) -> anyhow::Result<()> {
    match command {
        Commands::Generate { idea } => commands::generate::run(&idea.join(" "), format, quiet).await,
        Commands::Example { genre, index } => {
            commands::generate::run_example(&genre, index, format, quiet).await
        }
        Commands::History { command } => commands::history::run(command, format, quiet).await,
        Commands::Genres { command } => commands::genres::run(command, format, quiet).await,
        Commands::Config { command } => commands::config::run(command, format, quiet).await,
        Commands::Shell => anyhow::bail!("Already in shell mode"),
    }
}
