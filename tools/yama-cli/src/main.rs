mod commands;
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::{load_config, AppConfig};

#[derive(Parser)]
#[command(author, version, about = "Japanese segmentation and vocabulary tracking")]
struct Cli {
    /// Configuration file (defaults to ./yama.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Merge analyzer tokens into learner-facing segments
    Segment {
        /// Token JSON (`-` for stdin)
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// The analyzed text; switches `--input` to analyzer tokens with byte offsets
        #[arg(short, long, value_name = "FILE")]
        text: Option<PathBuf>,

        /// Emit the tokens one to one without merging
        #[arg(long)]
        no_merge: bool,
    },

    /// Split raw text into script runs
    Split {
        #[arg(short, long, value_name = "FILE")]
        text: PathBuf,
    },

    /// Segment tokens and attach word book statuses
    Annotate {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        text: Option<PathBuf>,

        #[arg(short, long, value_name = "FILE")]
        book: PathBuf,
    },

    /// Manage word books
    #[command(subcommand)]
    Vocab(VocabCommand),

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Subcommand)]
enum VocabCommand {
    /// Set the status of a word (by base form)
    Mark {
        #[arg(short, long, value_name = "FILE")]
        book: PathBuf,

        spelling: String,

        /// Ignored, UnSeen, Searched, Tracking or Never_Forget
        status: String,

        #[arg(short, long)]
        sentence: Option<String>,
    },

    /// Count words per status
    Stats {
        #[arg(short, long, value_name = "FILE")]
        book: PathBuf,
    },

    /// Compile a JSON word book into an rkyv archive
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
}

fn init_logging(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    init_logging(&config);

    match cli.command {
        Command::Segment { input, text, no_merge } => {
            let tokens = commands::load_tokens(&config, &input, text.as_deref())?;
            commands::print_json(&commands::segment(&config, &tokens, no_merge))
        }
        Command::Split { text } => {
            let text = commands::read_input(&text)?;
            commands::print_json(&commands::split(&config, &text))
        }
        Command::Annotate { input, text, book } => {
            let tokens = commands::load_tokens(&config, &input, text.as_deref())?;
            let book = commands::load_book(&book)?;
            commands::print_json(&commands::annotate_tokens(&config, &tokens, &book))
        }
        Command::Vocab(VocabCommand::Mark { book, spelling, status, sentence }) => {
            let event = commands::mark(&book, &spelling, &status, sentence.as_deref())?;
            commands::print_json(&event)
        }
        Command::Vocab(VocabCommand::Stats { book }) => {
            let book = commands::load_book(&book)?;
            let counts: std::collections::BTreeMap<String, usize> = book
                .counting()
                .into_iter()
                .map(|(status, n)| (status.to_string(), n))
                .collect();
            commands::print_json(&counts)
        }
        Command::Vocab(VocabCommand::Compile { input, output }) => {
            let bytes = commands::compile(&input, &output)?;
            eprintln!("wrote {bytes} bytes to {}", output.display());
            Ok(())
        }
        Command::Config => {
            print!("{}", toml::to_string(&config)?);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_vocab_mark() {
        let cli = Cli::parse_from(["yama", "vocab", "mark", "-b", "book.json", "食べる", "Tracking"]);
        match cli.command {
            Command::Vocab(VocabCommand::Mark { spelling, status, sentence, .. }) => {
                assert_eq!(spelling, "食べる");
                assert_eq!(status, "Tracking");
                assert!(sentence.is_none());
            }
            _ => panic!("expected vocab mark"),
        }
    }
}
