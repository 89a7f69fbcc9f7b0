//! Interactive shell mode for Prompt Lab CLI
//!
//! A REPL with command history and tab completion. Any line that is not a
//! known command is treated as an idea and generated directly.

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Config, Editor, Helper};

use super::{Cli, Commands, dispatch};
use crate::catalog;

/// Command completer for the shell
struct ShellCompleter {
    commands: Vec<(&'static str, Vec<&'static str>)>,
}

impl ShellCompleter {
    fn new() -> Self {
        Self {
            commands: vec![
                ("generate", vec![]),
                ("example", catalog::ids().collect()),
                ("history", vec!["list", "show", "clear"]),
                ("genres", vec!["list", "show"]),
                ("config", vec!["show", "get", "set", "path"]),
                ("help", vec![]),
                ("exit", vec![]),
                ("quit", vec![]),
            ],
        }
    }

    fn pairs<'a>(words: impl Iterator<Item = &'a str>) -> Vec<Pair> {
        words
            .map(|w| Pair {
                display: w.to_string(),
                replacement: w.to_string(),
            })
            .collect()
    }

    fn candidates(&self, line: &str) -> (usize, Vec<Pair>) {
        let words: Vec<&str> = line.split_whitespace().collect();
        let start = line.rfind(' ').map(|i| i + 1).unwrap_or(0);
        let typing_word = !line.is_empty() && !line.ends_with(' ');

        match (words.as_slice(), typing_word) {
            ([], _) => (0, Self::pairs(self.commands.iter().map(|(c, _)| *c))),
            ([prefix], true) => (
                start,
                Self::pairs(
                    self.commands
                        .iter()
                        .map(|(c, _)| *c)
                        .filter(|c| c.starts_with(prefix)),
                ),
            ),
            ([cmd], false) => (start, Self::pairs(self.subcommands(cmd).iter().copied())),
            ([cmd, prefix], true) => (
                start,
                Self::pairs(
                    self.subcommands(cmd)
                        .iter()
                        .copied()
                        .filter(|s| s.starts_with(prefix)),
                ),
            ),
            _ => (start, Vec::new()),
        }
    }

    fn subcommands(&self, cmd: &str) -> &[&'static str] {
        self.commands
            .iter()
            .find(|(c, _)| *c == cmd)
            .map(|(_, subs)| subs.as_slice())
            .unwrap_or(&[])
    }
}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(&line[..pos]))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for ShellCompleter {}
impl Validator for ShellCompleter {}
impl Helper for ShellCompleter {}

/// Split a command line into arguments, honoring single and double quotes
fn parse_args(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match (c, quote) {
            ('"' | '\'', None) => quote = Some(c),
            (c, Some(q)) if c == q => quote = None,
            (c, None) if c.is_whitespace() => {
                if !current.is_empty() {
                    args.push(std::mem::take(&mut current));
                }
            }
            (c, _) => current.push(c),
        }
    }

    if !current.is_empty() {
        args.push(current);
    }
    args
}

const BUILTIN_COMMANDS: &[&str] = &["generate", "example", "history", "genres", "config", "shell"];

fn generate_argv(line: &str) -> Vec<String> {
    vec!["promptlab".to_string(), "generate".to_string(), line.to_string()]
}

/// Parse a shell line. Bare text is an idea; so is text that merely starts
/// with a command word ("history of jazz") and doesn't parse as that command.
fn parse_line(line: &str, args: Vec<String>) -> Result<Cli, clap::Error> {
    let Some(first) = args.first().cloned() else {
        return Cli::try_parse_from(["promptlab"]);
    };

    if !BUILTIN_COMMANDS.contains(&first.as_str()) && !first.starts_with('-') {
        return Cli::try_parse_from(generate_argv(line));
    }

    let argv = std::iter::once("promptlab".to_string()).chain(args);
    match Cli::try_parse_from(argv) {
        Err(e) if first != "generate" && is_unknown_usage(e.kind()) => {
            Cli::try_parse_from(generate_argv(line))
        }
        parsed => parsed,
    }
}

fn is_unknown_usage(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::InvalidSubcommand
            | ErrorKind::UnknownArgument
            | ErrorKind::InvalidValue
            | ErrorKind::ValueValidation
    )
}

/// Run a single shell line.
/// Returns Ok(true) to continue, Ok(false) to exit.
async fn run_command(line: &str) -> Result<bool> {
    let args = parse_args(line);
    let Some(first) = args.first() else {
        return Ok(true);
    };

    match first.as_str() {
        "help" => {
            print_help();
            return Ok(true);
        }
        "exit" | "quit" => return Ok(false),
        _ => {}
    }

    let cli = match parse_line(line, args) {
        Ok(cli) => cli,
        Err(e) => {
            println!("{}", e);
            return Ok(true);
        }
    };

    match cli.command {
        None => println!("Type 'help' for available commands."),
        Some(Commands::Shell) => println!("Already in shell mode."),
        Some(command) => dispatch(command, cli.output.format(), cli.output.quiet).await?,
    }
    Ok(true)
}

fn print_help() {
    let genres = catalog::ids().collect::<Vec<_>>().join(", ");
    println!(
        r#"Prompt Lab Interactive Shell

Commands:
  <any text>                 Generate a prompt for that idea
  generate <idea...>         Same as above
  example <genre> <n>        Generate catalog example n of a genre

  history list               List recent generations
  history show <id>          Show a stored generation
  history clear              Delete all stored generations

  genres list                List genres ({genres})
  genres show <genre>        Show a genre's example prompts

  config show                Show current configuration
  config get <key>           Get a specific setting
  config set <key> <value>   Set a configuration value
  config path                Show config file path

  help                       Show this help
  exit, quit                 Exit the shell

Flags (can be added to any command):
  --json                     Output in JSON format
  --quiet, -q                Suppress non-essential output
"#
    );
}

/// Get the history file path
fn history_path() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("com", "promptlab", "PromptLab")
        .map(|dirs| dirs.data_dir().join("shell_history"))
}

/// Run the interactive shell
pub async fn run() -> Result<()> {
    println!("Prompt Lab Interactive Shell v{}", env!("CARGO_PKG_VERSION"));
    println!("Type an idea to generate, 'help' for commands, 'exit' to quit.\n");

    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(ShellCompleter::new()));

    if let Some(path) = history_path() {
        let _ = rl.load_history(&path);
    }

    loop {
        match rl.readline("promptlab> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                rl.add_history_entry(line)?;

                match run_command(line).await {
                    Ok(true) => continue,
                    Ok(false) => break,
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("exit");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    if let Some(path) = history_path() {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = rl.save_history(&path);
    }

    Ok(())
}
