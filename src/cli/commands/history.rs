//! History commands

use anyhow::Result;
use clap::Subcommand;

use crate::cli::output::{OutputFormat, format_result, print_formatted, print_success, truncate};
use crate::history::{History, HistoryItem, HistoryStore};

#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// List recent generations, newest first
    List,

    /// Show a stored generation
    Show {
        /// Item id (a unique prefix is enough)
        id: String,
    },

    /// Delete all stored generations
    Clear,
}

pub async fn run(command: HistoryCommands, format: OutputFormat, quiet: bool) -> Result<()> {
    let store = HistoryStore::open()?;

    match command {
        HistoryCommands::List => list(&store, format),
        HistoryCommands::Show { id } => show(&store, &id, format),
        HistoryCommands::Clear => {
            store.remove()?;
            print_success("History cleared", quiet);
            Ok(())
        }
    }
}

fn list(store: &HistoryStore, format: OutputFormat) -> Result<()> {
    let history = store.load();
    print_formatted(history.items(), format, format_list);
    Ok(())
}

fn format_list(items: &[HistoryItem]) -> String {
    if items.is_empty() {
        return "No history yet".to_string();
    }
    items
        .iter()
        .map(|item| {
            format!(
                "{:<8}  {}  {:<28}  {}",
                short_id(&item.id),
                item.time_display(),
                truncate(&item.result.title, 28),
                truncate(&item.result.style, 48)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// First eight characters of an id (ids from disk are arbitrary strings)
fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

fn show(store: &HistoryStore, id: &str, format: OutputFormat) -> Result<()> {
    let history = store.load();
    let item = find_by_prefix(&history, id)?;
    print_formatted(item, format, |item| format_result(&item.result));
    Ok(())
}

/// Find an item by exact id or unique id prefix
fn find_by_prefix<'a>(history: &'a History, id: &str) -> Result<&'a HistoryItem> {
    if let Some(item) = history.find(id) {
        return Ok(item);
    }

    let matches: Vec<&HistoryItem> = history
        .items()
        .iter()
        .filter(|item| item.id.starts_with(id))
        .collect();

    match matches.as_slice() {
        [item] => Ok(*item),
        [] => anyhow::bail!("No history item with id {}", id),
        _ => anyhow::bail!("Ambiguous id prefix {} ({} matches)", id, matches.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::tests::sample_result;

    fn item_with_id(id: &str) -> HistoryItem {
        HistoryItem {
            id: id.to_string(),
            ..HistoryItem::new(sample_result(id))
        }
    }

    #[test]
    fn test_find_by_prefix() {
        let history = History::from_items(vec![
            item_with_id("abc123"),
            item_with_id("abd456"),
            item_with_id("ab"),
        ]);

        assert_eq!(find_by_prefix(&history, "abc").unwrap().id, "abc123");
        // Exact match wins over prefix ambiguity
        assert_eq!(find_by_prefix(&history, "ab").unwrap().id, "ab");
        assert!(find_by_prefix(&history, "abx").is_err());

        let ambiguous = History::from_items(vec![item_with_id("abc1"), item_with_id("abc2")]);
        assert!(find_by_prefix(&ambiguous, "abc").is_err());
    }

    #[test]
    fn test_list_handles_multibyte_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::at(dir.path().join("history.json"));
        store
            .save(&History::from_items(vec![item_with_id("가나다라마바사아자")]))
            .unwrap();

        let listing = format_list(store.load().items());
        assert!(listing.starts_with("가나다라마바사아  "));
        assert!(list(&store, OutputFormat::Text).is_ok());

        assert_eq!(short_id("abc"), "abc");
        assert_eq!(short_id("0123456789abcdef"), "01234567");
    }
}
