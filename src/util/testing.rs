// src/util/testing.rs

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{
    ConnectGateway, ConnectReply, LanguageDetector, SpeechSynthesizer, Translator,
};
use crate::domain::{DomainError, Note};

/// Stub translator with a fixed word table.
///
/// Unstubbed words fail, so a test that supplies no table also proves the
/// translator was never consulted.
#[derive(Debug, Default)]
pub struct MockTranslator {
    translations: HashMap<String, String>,
    failure: Option<String>,
}

impl MockTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_translation(mut self, word: impl Into<String>, back: impl Into<String>) -> Self {
        self.translations.insert(word.into(), back.into());
        self
    }

    /// Make every call fail, as if the service were unreachable.
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }
}

impl Translator for MockTranslator {
    fn translate(&self, text: &str, _source: &str, _target: &str) -> Result<String, DomainError> {
        if let Some(message) = &self.failure {
            return Err(DomainError::Translation(message.clone()));
        }

        self.translations.get(text).cloned().ok_or_else(|| {
            DomainError::Translation(format!("no translation stubbed for '{text}'"))
        })
    }
}

/// Stub detector returning a fixed code, with optional per-text overrides.
#[derive(Debug)]
pub struct MockDetector {
    default_code: String,
    overrides: HashMap<String, String>,
}

impl MockDetector {
    pub fn returning(code: impl Into<String>) -> Self {
        Self {
            default_code: code.into(),
            overrides: HashMap::new(),
        }
    }

    pub fn with_detection(mut self, text: impl Into<String>, code: impl Into<String>) -> Self {
        self.overrides.insert(text.into(), code.into());
        self
    }
}

impl LanguageDetector for MockDetector {
    fn detect(&self, text: &str) -> Result<String, DomainError> {
        Ok(self
            .overrides
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.default_code.clone()))
    }
}

/// Stub synthesizer writing placeholder clips into a temp directory, named
/// the same way the real adapter names them.
#[derive(Debug)]
pub struct MockSpeech {
    clip_dir: TempDir,
    failure: Option<String>,
}

impl MockSpeech {
    pub fn new() -> Result<Self> {
        Ok(Self {
            clip_dir: tempfile::tempdir()?,
            failure: None,
        })
    }

    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }
}

impl SpeechSynthesizer for MockSpeech {
    fn synthesize(&self, text: &str, _language: &str) -> Result<PathBuf, DomainError> {
        if let Some(message) = &self.failure {
            return Err(DomainError::Speech(message.clone()));
        }

        let stem: String = text
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
        let path = self.clip_dir.path().join(format!("{stem}.mp3"));
        std::fs::write(&path, b"mock mp3 data")?;
        Ok(path)
    }
}

/// Stub AnkiConnect gateway with scripted replies and call recording.
///
/// `add_note` replies are consumed in order; once the queue is empty every
/// further call succeeds with a fresh note id. Calls are recorded for
/// assertions.
#[derive(Debug)]
pub struct MockGateway {
    add_note_replies: RefCell<VecDeque<ConnectReply>>,
    store_reply: ConnectReply,
    transport_failure: Option<String>,
    stored: RefCell<Vec<(String, PathBuf)>>,
    added: RefCell<Vec<Note>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            add_note_replies: RefCell::new(VecDeque::new()),
            store_reply: Self::ok_reply(),
            transport_failure: None,
            stored: RefCell::new(Vec::new()),
            added: RefCell::new(Vec::new()),
        }
    }

    pub fn with_add_note_replies(self, replies: Vec<ConnectReply>) -> Self {
        *self.add_note_replies.borrow_mut() = replies.into();
        self
    }

    pub fn with_store_reply(mut self, reply: ConnectReply) -> Self {
        self.store_reply = reply;
        self
    }

    /// Make `add_note` fail at the transport level, as if the flashcard
    /// application were not running.
    pub fn with_transport_failure(mut self, message: impl Into<String>) -> Self {
        self.transport_failure = Some(message.into());
        self
    }

    pub fn stored_media(&self) -> Vec<(String, PathBuf)> {
        self.stored.borrow().clone()
    }

    pub fn added_notes(&self) -> Vec<Note> {
        self.added.borrow().clone()
    }

    fn ok_reply() -> ConnectReply {
        ConnectReply {
            status_code: 200,
            result: Some(serde_json::json!(1496198395707_i64)),
            error: None,
        }
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectGateway for MockGateway {
    fn store_media_file(&self, filename: &str, path: &Path) -> Result<ConnectReply, DomainError> {
        self.stored
            .borrow_mut()
            .push((filename.to_string(), path.to_path_buf()));
        Ok(self.store_reply.clone())
    }

    fn add_note(&self, note: &Note) -> Result<ConnectReply, DomainError> {
        if let Some(message) = &self.transport_failure {
            return Err(DomainError::Transport(message.clone()));
        }

        self.added.borrow_mut().push(note.clone());
        Ok(self
            .add_note_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(Self::ok_reply))
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["reqwest", "hyper", "mio", "rustls"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
