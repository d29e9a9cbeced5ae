// src/application/batch_builder.rs
use std::path::Path;

use tracing::debug;

use crate::constants::{
    DEFAULT_DECK, DEFAULT_SOURCE_LANGUAGE, DEFAULT_TARGET_LANGUAGE, DEFAULT_TEMPLATE,
};
use crate::domain::{DomainError, Note, NoteBatch};

/// External translation collaborator.
pub trait Translator {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, DomainError>;
}

/// External language-identification collaborator.
pub trait LanguageDetector {
    fn detect(&self, text: &str) -> Result<String, DomainError>;
}

/// Deck/template defaults and the language pair for one builder instance.
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    pub deck: String,
    pub template: String,
    pub source_language: String,
    pub target_language: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            deck: DEFAULT_DECK.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
            source_language: DEFAULT_SOURCE_LANGUAGE.to_string(),
            target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
        }
    }
}

/// Builds ordered note batches from a single word or a word-per-line file.
pub struct BatchBuilder<T: Translator, D: LanguageDetector> {
    translator: T,
    detector: D,
    config: BuilderConfig,
}

impl<T: Translator, D: LanguageDetector> BatchBuilder<T, D> {
    pub fn new(translator: T, detector: D, config: BuilderConfig) -> Self {
        Self {
            translator,
            detector,
            config,
        }
    }

    /// Validate and construct one note.
    ///
    /// The detected language of `front` must agree with the configured
    /// source language; on disagreement the note is never constructed.
    pub fn validated_note(&self, front: &str, back: &str) -> Result<Note, DomainError> {
        let detected = self.detector.detect(front)?;
        if detected != self.config.source_language {
            return Err(DomainError::LanguageMismatch {
                expected: self.config.source_language.clone(),
                detected,
            });
        }

        Ok(Note::new(front, back)
            .with_deck(self.config.deck.as_str())
            .with_template(self.config.template.as_str())
            .with_front_language(self.config.source_language.as_str()))
    }

    /// Build a batch of exactly one note from a single input word.
    ///
    /// The word is translated unless a pre-translated back is supplied.
    /// An optional example sentence and its translation are attached as-is.
    pub fn from_word(
        &self,
        word: &str,
        pre_translated: Option<&str>,
        sentence: Option<&str>,
        translated_sentence: Option<&str>,
    ) -> Result<NoteBatch, DomainError> {
        let back = match pre_translated {
            Some(back) => back.to_string(),
            None => self.translate(word)?,
        };

        let mut note = self.validated_note(word, &back)?;
        if let Some(sentence) = sentence {
            note = note.with_sentence(sentence);
        }
        if let Some(translated) = translated_sentence {
            note = note.with_translated_sentence(translated);
        }

        Ok(NoteBatch::new(vec![note]))
    }

    /// Build a batch from a newline-delimited word file, in file order.
    ///
    /// Blank lines (including a trailing newline) are skipped. Any
    /// translation or validation failure aborts the whole batch; no
    /// partial batch is returned.
    pub fn from_file(&self, path: impl AsRef<Path>) -> Result<NoteBatch, DomainError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!(?path, "Read word list");

        let mut notes = Vec::new();
        for word in content.lines().map(str::trim).filter(|w| !w.is_empty()) {
            let back = self.translate(word)?;
            notes.push(self.validated_note(word, &back)?);
        }

        debug!(notes = notes.len(), "Built note batch from file");
        Ok(NoteBatch::new(notes))
    }

    fn translate(&self, word: &str) -> Result<String, DomainError> {
        self.translator.translate(
            word,
            &self.config.source_language,
            &self.config.target_language,
        )
    }
}
