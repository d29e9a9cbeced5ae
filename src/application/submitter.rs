// src/application/submitter.rs
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::{DomainError, Note, SubmissionRecord};

/// External text-to-speech collaborator. Returns the path of a generated
/// clip on local storage.
pub trait SpeechSynthesizer {
    fn synthesize(&self, text: &str, language: &str) -> Result<PathBuf, DomainError>;
}

/// One AnkiConnect reply: HTTP status plus the body's `result`/`error` pair.
#[derive(Debug, Clone, Default)]
pub struct ConnectReply {
    pub status_code: u16,
    pub result: Option<serde_json::Value>,
    pub error: Option<String>,
}

/// Gateway to the flashcard service's HTTP API.
pub trait ConnectGateway {
    fn store_media_file(&self, filename: &str, path: &Path) -> Result<ConnectReply, DomainError>;

    fn add_note(&self, note: &Note) -> Result<ConnectReply, DomainError>;
}

/// Submits a batch of notes one at a time, in order.
pub struct Submitter<G: ConnectGateway, S: SpeechSynthesizer> {
    gateway: G,
    speech: S,
    audio: bool,
}

impl<G: ConnectGateway, S: SpeechSynthesizer> Submitter<G, S> {
    pub fn new(gateway: G, speech: S) -> Self {
        Self {
            gateway,
            speech,
            audio: true,
        }
    }

    pub fn with_audio(mut self, audio: bool) -> Self {
        self.audio = audio;
        self
    }

    /// Submit every note and return one record per note, positionally
    /// aligned with the input.
    ///
    /// A rejected note (non-200 status or an `error` in the reply body) is
    /// recorded and the batch continues; a transport failure aborts the
    /// remaining batch.
    pub fn send_notes(&self, notes: &[Note]) -> Result<Vec<SubmissionRecord>, DomainError> {
        let mut records = Vec::with_capacity(notes.len());

        for note in notes {
            let audio_reference = if self.audio {
                Some(self.attach_audio(note)?)
            } else {
                None
            };

            let reply = self.gateway.add_note(note)?;
            debug!(
                front = note.front(),
                status = reply.status_code,
                "Sent addNote request"
            );

            let recorded = match &audio_reference {
                Some(filename) => note.clone().with_audio_reference(filename.as_str()),
                None => note.clone(),
            };
            let record = SubmissionRecord::new(
                recorded,
                reply.status_code,
                reply.result.as_ref().and_then(serde_json::Value::as_i64),
                reply.error,
            );

            println!("{}", record.summary());
            records.push(record);
        }

        Ok(records)
    }

    /// Synthesize a clip for the note's front and upload it to the media
    /// folder. A failed upload is a warning, not a failure: the card is
    /// still created, just without guaranteed audio attachment.
    fn attach_audio(&self, note: &Note) -> Result<String, DomainError> {
        let clip_path = self
            .speech
            .synthesize(note.front(), note.front_language())?;

        let filename = clip_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                DomainError::Speech(format!(
                    "clip path has no usable file name: {}",
                    clip_path.display()
                ))
            })?
            .to_string();

        let reply = self.gateway.store_media_file(&filename, &clip_path)?;
        if reply.status_code != 200 {
            warn!(
                status = reply.status_code,
                filename, "Media upload rejected; card will be created without audio"
            );
        } else if let Some(error) = &reply.error {
            warn!(
                error,
                filename, "Media upload reported an error; card will be created without audio"
            );
        }

        Ok(filename)
    }
}
