// src/infrastructure/translator.rs
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::{debug, instrument};

use crate::application::Translator;
use crate::domain::DomainError;

/// Default endpoint of the free (unkeyed) Google translation API.
const TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Translation adapter backed by the free Google endpoint.
///
/// The reply is a nested array; the translated text is the first element
/// of each segment under the first top-level entry.
#[derive(Debug)]
pub struct GoogleTranslator {
    http: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(TRANSLATE_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .build()
            .context("Failed to build translation HTTP client")?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }
}

/// Concatenate the translated pieces out of the endpoint's nested-array
/// reply. Returns None when the shape is not the expected one.
fn collect_segments(body: &serde_json::Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(piece) = segment.get(0).and_then(serde_json::Value::as_str) {
            translated.push_str(piece);
        }
    }

    if translated.is_empty() {
        None
    } else {
        Some(translated)
    }
}

impl Translator for GoogleTranslator {
    #[instrument(level = "debug", skip(self))]
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, DomainError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .map_err(|e| DomainError::Translation(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DomainError::Translation(format!(
                "translation endpoint returned HTTP {}",
                response.status().as_u16()
            )));
        }

        let body: serde_json::Value = response
            .json()
            .map_err(|e| DomainError::Translation(format!("invalid reply: {e}")))?;

        let translated = collect_segments(&body).ok_or_else(|| {
            DomainError::Translation(format!("no translation in reply for '{text}'"))
        })?;

        debug!(text, translated, "Translated word");
        Ok(translated)
    }
}
