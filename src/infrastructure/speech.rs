// src/infrastructure/speech.rs
use std::path::PathBuf;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tempfile::{Builder, TempDir};
use tracing::{debug, instrument};

use crate::application::SpeechSynthesizer;
use crate::domain::DomainError;

/// Default endpoint of the free (unkeyed) Google text-to-speech API.
const SPEECH_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// Text-to-speech adapter backed by the free Google endpoint.
///
/// Clips are written into a temporary directory that lives as long as the
/// synthesizer, so the flashcard service can read them during upload.
#[derive(Debug)]
pub struct GoogleSpeech {
    http: Client,
    endpoint: String,
    clip_dir: TempDir,
}

impl GoogleSpeech {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(SPEECH_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .build()
            .context("Failed to build speech HTTP client")?;

        let clip_dir = Builder::new()
            .prefix("vocanki-")
            .rand_bytes(5)
            .tempdir()
            .context("Failed to create clip directory")?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            clip_dir,
        })
    }

    /// File name for a clip: the spoken text with whitespace collapsed to
    /// underscores, plus the mp3 extension.
    pub fn clip_filename(text: &str) -> String {
        let stem: String = text
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
        format!("{stem}.mp3")
    }
}

impl SpeechSynthesizer for GoogleSpeech {
    #[instrument(level = "debug", skip(self))]
    fn synthesize(&self, text: &str, language: &str) -> Result<PathBuf, DomainError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language),
                ("q", text),
            ])
            .send()
            .map_err(|e| DomainError::Speech(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DomainError::Speech(format!(
                "speech endpoint returned HTTP {}",
                response.status().as_u16()
            )));
        }

        let audio = response
            .bytes()
            .map_err(|e| DomainError::Speech(format!("failed to read clip body: {e}")))?;

        let path = self.clip_dir.path().join(Self::clip_filename(text));
        std::fs::write(&path, &audio)?;

        debug!(text, path = %path.display(), bytes = audio.len(), "Synthesized clip");
        Ok(path)
    }
}
