//! Genre catalog commands

use anyhow::Result;
use clap::Subcommand;

use crate::catalog;
use crate::cli::output::{OutputFormat, print_formatted};

#[derive(Subcommand, Debug)]
pub enum GenresCommands {
    /// List genres
    List,

    /// Show a genre's example prompts
    Show {
        /// Genre id (e.g. "hiphop")
        id: String,
    },
}

pub async fn run(command: GenresCommands, format: OutputFormat, _quiet: bool) -> Result<()> {
    match command {
        GenresCommands::List => {
            print_formatted(catalog::all(), format, |genres| {
                genres
                    .iter()
                    .map(|g| format!("{:<12} {} {} ({} examples)", g.id, g.icon, g.name, g.prompts.len()))
                    .collect::<Vec<_>>()
                    .join("\n")
            });
            Ok(())
        }
        GenresCommands::Show { id } => {
            let genre = catalog::by_id(&id)
                .ok_or_else(|| anyhow::anyhow!("Unknown genre: {}", id))?;
            print_formatted(genre, format, |g| {
                let mut lines = vec![format!("{} {}", g.icon, g.name)];
                lines.extend(
                    g.prompts
                        .iter()
                        .enumerate()
                        .map(|(i, p)| format!("{:>3}. {}", i + 1, p)),
                );
                lines.join("\n")
            });
            Ok(())
        }
    }
}
