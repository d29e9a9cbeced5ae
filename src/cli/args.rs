// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Target deck name (overrides config)
    #[arg(short, long, value_name = "DECK", global = true)]
    pub deck: Option<String>,

    /// Card template name (overrides config)
    #[arg(short, long, value_name = "TEMPLATE", global = true)]
    pub template: Option<String>,

    /// AnkiConnect URL (overrides config)
    #[arg(long, value_name = "URL", global = true)]
    pub url: Option<String>,

    /// Skip pronunciation audio generation
    #[arg(long, global = true)]
    pub no_audio: bool,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (add or import)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a single vocabulary word as a flashcard
    Add {
        /// Word to put on the front of the card
        #[arg(value_name = "WORD")]
        word: String,

        /// Pre-translated back text (skips the translator)
        #[arg(short, long, value_name = "TEXT")]
        back: Option<String>,

        /// Example sentence using the word
        #[arg(long, value_name = "TEXT")]
        sentence: Option<String>,

        /// Translation of the example sentence
        #[arg(long, value_name = "TEXT")]
        sentence_translation: Option<String>,
    },

    /// Import words from a newline-delimited text file
    Import {
        /// Word file, one word per line (defaults to the bundled example)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}
