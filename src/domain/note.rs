// src/domain/note.rs
use serde::Serialize;

use crate::constants::{DEFAULT_DECK, DEFAULT_SOURCE_LANGUAGE, DEFAULT_TEMPLATE};

/// One flashcard's content prior to submission.
///
/// Construction is infallible; language validation happens in the batch
/// builder's factory step before a `Note` is handed out. There are no
/// setters: once built, a note is read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    deck_name: String,
    template_name: String,
    front: String,
    back: String,
    sentence: Option<String>,
    translated_sentence: Option<String>,
    audio_reference: Option<String>,
    front_language: String,
}

impl Note {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            deck_name: DEFAULT_DECK.to_string(),
            template_name: DEFAULT_TEMPLATE.to_string(),
            front: front.into(),
            back: back.into(),
            sentence: None,
            translated_sentence: None,
            audio_reference: None,
            front_language: DEFAULT_SOURCE_LANGUAGE.to_string(),
        }
    }

    pub fn with_deck(mut self, deck: impl Into<String>) -> Self {
        self.deck_name = deck.into();
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template_name = template.into();
        self
    }

    pub fn with_sentence(mut self, sentence: impl Into<String>) -> Self {
        self.sentence = Some(sentence.into());
        self
    }

    pub fn with_translated_sentence(mut self, translated: impl Into<String>) -> Self {
        self.translated_sentence = Some(translated.into());
        self
    }

    pub fn with_audio_reference(mut self, reference: impl Into<String>) -> Self {
        self.audio_reference = Some(reference.into());
        self
    }

    pub fn with_front_language(mut self, language: impl Into<String>) -> Self {
        self.front_language = language.into();
        self
    }

    pub fn deck_name(&self) -> &str {
        &self.deck_name
    }

    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }

    pub fn sentence(&self) -> Option<&str> {
        self.sentence.as_deref()
    }

    pub fn translated_sentence(&self) -> Option<&str> {
        self.translated_sentence.as_deref()
    }

    pub fn audio_reference(&self) -> Option<&str> {
        self.audio_reference.as_deref()
    }

    pub fn front_language(&self) -> &str {
        &self.front_language
    }
}

/// Ordered collection of notes produced by one builder invocation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NoteBatch {
    notes: Vec<Note>,
}

impl NoteBatch {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn into_notes(self) -> Vec<Note> {
        self.notes
    }
}

/// Classification of one submission attempt, derived from the AnkiConnect
/// reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Created,
    DeckMissing,
    Failed,
}

/// The outcome of attempting to submit one note: a copy of the note plus
/// the HTTP status and the reply's `result`/`error` fields. Never mutated
/// after creation.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRecord {
    note: Note,
    status_code: u16,
    result: Option<i64>,
    error: Option<String>,
}

impl SubmissionRecord {
    pub fn new(note: Note, status_code: u16, result: Option<i64>, error: Option<String>) -> Self {
        Self {
            note,
            status_code,
            result,
            error,
        }
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn result(&self) -> Option<i64> {
        self.result
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn outcome(&self) -> Outcome {
        match &self.error {
            None if self.status_code == 200 => Outcome::Created,
            Some(message) if message.contains("deck was not found") => Outcome::DeckMissing,
            _ => Outcome::Failed,
        }
    }

    /// One human-readable line describing the outcome, printed per note.
    pub fn summary(&self) -> String {
        let pair = format!("{} -> {}", self.note.front(), self.note.back());
        match self.outcome() {
            Outcome::Created => format!("added '{}' to deck '{}'", pair, self.note.deck_name()),
            Outcome::DeckMissing => format!(
                "deck '{}' not found, card '{}' was not added",
                self.note.deck_name(),
                pair
            ),
            Outcome::Failed => match &self.error {
                Some(message) => format!("failed to add '{}': {}", pair, message),
                None => format!("failed to add '{}': HTTP {}", pair, self.status_code),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_front_and_back_when_creating_note_then_stores_fields_with_defaults() {
        let note = Note::new("죄송합니다", "ごめん");

        assert_eq!(note.front(), "죄송합니다");
        assert_eq!(note.back(), "ごめん");
        assert_eq!(note.deck_name(), DEFAULT_DECK);
        assert_eq!(note.template_name(), DEFAULT_TEMPLATE);
        assert_eq!(note.front_language(), "ko");
        assert_eq!(note.sentence(), None);
        assert_eq!(note.audio_reference(), None);
    }

    #[test]
    fn given_note_when_setting_deck_and_template_then_updates() {
        let note = Note::new("물", "水")
            .with_deck("test")
            .with_template("Basic");

        assert_eq!(note.deck_name(), "test");
        assert_eq!(note.template_name(), "Basic");
    }

    #[test]
    fn given_note_when_setting_sentence_pair_then_stores_both() {
        let note = Note::new("물", "水")
            .with_sentence("물 주세요")
            .with_translated_sentence("水をください");

        assert_eq!(note.sentence(), Some("물 주세요"));
        assert_eq!(note.translated_sentence(), Some("水をください"));
    }

    #[test]
    fn given_notes_when_building_batch_then_preserves_order() {
        let batch = NoteBatch::new(vec![Note::new("하나", "一"), Note::new("둘", "二")]);

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.notes()[0].front(), "하나");
        assert_eq!(batch.notes()[1].front(), "둘");
    }

    #[test]
    fn given_ok_reply_when_classifying_then_outcome_is_created() {
        let record =
            SubmissionRecord::new(Note::new("물", "水"), 200, Some(1496198395707), None);

        assert_eq!(record.outcome(), Outcome::Created);
        assert!(record.summary().contains("물 -> 水"));
    }

    #[test]
    fn given_missing_deck_error_when_classifying_then_outcome_is_deck_missing() {
        let record = SubmissionRecord::new(
            Note::new("물", "水").with_deck("nope"),
            200,
            None,
            Some("deck was not found: nope".to_string()),
        );

        assert_eq!(record.outcome(), Outcome::DeckMissing);
        assert!(record.summary().contains("deck 'nope' not found"));
    }

    #[test]
    fn given_error_reply_when_classifying_then_outcome_is_failed() {
        let record = SubmissionRecord::new(
            Note::new("물", "水"),
            200,
            None,
            Some("cannot create note because it is a duplicate".to_string()),
        );

        assert_eq!(record.outcome(), Outcome::Failed);
        assert!(record.summary().contains("duplicate"));
    }

    #[test]
    fn given_non_200_status_without_error_when_classifying_then_outcome_is_failed() {
        let record = SubmissionRecord::new(Note::new("물", "水"), 500, None, None);

        assert_eq!(record.outcome(), Outcome::Failed);
        assert!(record.summary().contains("HTTP 500"));
    }
}
