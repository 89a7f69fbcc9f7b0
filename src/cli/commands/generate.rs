//! Prompt generation commands

use anyhow::Result;

use crate::catalog;
use crate::cli::output::{OutputFormat, format_result, print_formatted, print_success};
use crate::config::Config;
use crate::gemini::{GeminiClient, PromptService};
use crate::history::{HistoryItem, HistoryStore};
use crate::state::failure_message;

/// Generate from free text and record the result in history
pub async fn run(idea: &str, format: OutputFormat, quiet: bool) -> Result<()> {
    let idea = idea.trim();
    if idea.is_empty() {
        anyhow::bail!("Idea must not be empty");
    }

    let config = Config::load()?;
    let client = GeminiClient::new(&config.api)?;

    let quiet = quiet || format == OutputFormat::Json;
    print_success(&format!("Generating with {}...", client.model()), quiet);

    let result = match client.generate(idea).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Generation failed: {}", e);
            anyhow::bail!("{}", failure_message(&config.ui.locale));
        }
    };

    let item = HistoryItem::new(result);
    record(&item);

    print_formatted(&item, format, |item| format_result(&item.result));
    Ok(())
}

/// Generate from the `index`th (1-based) example of a genre
pub async fn run_example(genre_id: &str, index: usize, format: OutputFormat, quiet: bool) -> Result<()> {
    let prompt = example_prompt(genre_id, index)?;
    print_success(&format!("Example: {}", prompt), quiet || format == OutputFormat::Json);
    run(prompt, format, quiet).await
}

fn example_prompt(genre_id: &str, index: usize) -> Result<&'static str> {
    let genre = catalog::by_id(genre_id).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown genre: {} (expected one of: {})",
            genre_id,
            catalog::ids().collect::<Vec<_>>().join(", ")
        )
    })?;

    index
        .checked_sub(1)
        .and_then(|i| genre.prompts.get(i))
        .copied()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Example {} out of range for {} (1-{})",
                index,
                genre.name,
                genre.prompts.len()
            )
        })
}

/// Prepend to the stored history. Failures are logged, not fatal.
fn record(item: &HistoryItem) {
    let store = match HistoryStore::open() {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!("History not saved: {}", e);
            return;
        }
    };

    let mut history = store.load();
    history.push(item.clone());
    if let Err(e) = store.save(&history) {
        tracing::warn!("Failed to save history: {}", e);
    }
}
