// src/infrastructure/connect.rs
use std::path::Path;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ConnectGateway, ConnectReply};
use crate::constants::{ACTION_ADD_NOTE, ACTION_STORE_MEDIA_FILE, BACK_FIELD, CONNECT_VERSION, FRONT_FIELD};
use crate::domain::{DomainError, Note};

/// HTTP client for a locally running AnkiConnect service.
#[derive(Debug)]
pub struct ConnectClient {
    url: String,
    http: Client,
}

#[derive(Serialize)]
struct RequestEnvelope<P: Serialize> {
    action: &'static str,
    version: u8,
    params: P,
}

#[derive(Serialize)]
struct MediaParams<'a> {
    filename: &'a str,
    path: String,
}

#[derive(Serialize)]
struct NoteParams {
    note: NotePayload,
}

#[derive(Serialize)]
struct NotePayload {
    #[serde(rename = "deckName")]
    deck_name: String,
    #[serde(rename = "modelName")]
    model_name: String,
    fields: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ReplyEnvelope {
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

impl ConnectClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .build()
            .context("Failed to build AnkiConnect HTTP client")?;

        Ok(Self {
            url: url.into(),
            http,
        })
    }

    fn post<P: Serialize>(
        &self,
        action: &'static str,
        params: P,
    ) -> Result<ConnectReply, DomainError> {
        let request = RequestEnvelope {
            action,
            version: CONNECT_VERSION,
            params,
        };

        let response = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .map_err(|e| DomainError::Transport(e.to_string()))?;
        let status_code = response.status().as_u16();

        // AnkiConnect always answers with a {result, error} body; anything
        // else is recorded on the reply rather than aborting the batch.
        match response.json::<ReplyEnvelope>() {
            Ok(envelope) => Ok(ConnectReply {
                status_code,
                result: envelope.result,
                error: envelope.error,
            }),
            Err(e) => Ok(ConnectReply {
                status_code,
                result: None,
                error: Some(format!("unparseable reply: {e}")),
            }),
        }
    }
}

impl ConnectGateway for ConnectClient {
    #[instrument(level = "debug", skip(self))]
    fn store_media_file(&self, filename: &str, path: &Path) -> Result<ConnectReply, DomainError> {
        let params = MediaParams {
            filename,
            path: path.display().to_string(),
        };

        let reply = self.post(ACTION_STORE_MEDIA_FILE, params)?;
        debug!(filename, status = reply.status_code, "Stored media file");
        Ok(reply)
    }

    #[instrument(level = "debug", skip(self, note), fields(front = note.front()))]
    fn add_note(&self, note: &Note) -> Result<ConnectReply, DomainError> {
        let mut fields = serde_json::Map::new();
        fields.insert(
            FRONT_FIELD.to_string(),
            serde_json::Value::String(note.front().to_string()),
        );
        fields.insert(
            BACK_FIELD.to_string(),
            serde_json::Value::String(note.back().to_string()),
        );

        let params = NoteParams {
            note: NotePayload {
                deck_name: note.deck_name().to_string(),
                model_name: note.template_name().to_string(),
                fields,
            },
        };

        self.post(ACTION_ADD_NOTE, params)
    }
}
