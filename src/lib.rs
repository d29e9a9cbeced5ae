// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod util;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::application::{BatchBuilder, BuilderConfig, Submitter};
use crate::cli::args::{Args, Command};
use crate::domain::Outcome;
use crate::infrastructure::{
    Config, ConnectClient, GoogleSpeech, GoogleTranslator, ScriptDetector,
};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting vocanki with arguments");

    let config = match &args.config {
        Some(path) => {
            debug!(?path, "Using provided config path");
            Config::load(path)?
        }
        None => Config::load_or_default()?,
    };

    // CLI flags win over config values
    let url = args.url.clone().unwrap_or_else(|| config.connect.url.clone());
    let audio = !args.no_audio && config.defaults.audio;
    let builder_config = BuilderConfig {
        deck: args.deck.clone().unwrap_or_else(|| config.defaults.deck.clone()),
        template: args
            .template
            .clone()
            .unwrap_or_else(|| config.defaults.template.clone()),
        source_language: config.defaults.source_language.clone(),
        target_language: config.defaults.target_language.clone(),
    };

    let translator = GoogleTranslator::new()?;
    let builder = BatchBuilder::new(translator, ScriptDetector::new(), builder_config);

    let batch = match &args.command {
        Command::Add {
            word,
            back,
            sentence,
            sentence_translation,
        } => builder.from_word(
            word,
            back.as_deref(),
            sentence.as_deref(),
            sentence_translation.as_deref(),
        )?,
        Command::Import { file } => {
            let path = file.clone().unwrap_or_else(default_word_file);
            builder
                .from_file(&path)
                .with_context(|| format!("Failed to build notes from {}", path.display()))?
        }
    };
    info!(notes = batch.len(), "Built note batch");

    let gateway = ConnectClient::new(&url)?;
    let speech = GoogleSpeech::new()?;
    let submitter = Submitter::new(gateway, speech).with_audio(audio);

    let records = submitter
        .send_notes(batch.notes())
        .context("Failed to submit notes. Is Anki running with AnkiConnect?")?;

    let failures = records
        .iter()
        .filter(|r| r.outcome() != Outcome::Created)
        .count();
    debug!(submitted = records.len(), failures, "Submission finished");

    Ok(())
}

/// Bundled example word list, used when `import` is given no file.
pub fn default_word_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/example.txt")
}
