// src/constants.rs
//
// Wire-level and default values shared across the crate. Each constant is
// documented with its purpose and usage context.

/// AnkiConnect API version sent with every request.
///
/// Used in: `infrastructure/connect.rs`
pub const CONNECT_VERSION: u8 = 6;

/// AnkiConnect action that creates one note.
///
/// Used in: `infrastructure/connect.rs`
pub const ACTION_ADD_NOTE: &str = "addNote";

/// AnkiConnect action that stores a media file in the collection's media folder.
///
/// Used in: `infrastructure/connect.rs`
pub const ACTION_STORE_MEDIA_FILE: &str = "storeMediaFile";

/// Field label for the prompt side of the target card template.
///
/// The template ships with Japanese field names; they are part of the card
/// layout inside Anki and deliberately not configurable here.
///
/// Used in: `infrastructure/connect.rs`
pub const FRONT_FIELD: &str = "表面";

/// Field label for the answer side of the target card template.
///
/// Used in: `infrastructure/connect.rs`
pub const BACK_FIELD: &str = "裏面";

/// Deck notes land in when neither the CLI nor the config names one.
///
/// Used in: `domain/note.rs`, `infrastructure/config.rs`
pub const DEFAULT_DECK: &str = "Korean-Vocabulary";

/// Card template ("model" on the wire) used when none is named.
///
/// Used in: `domain/note.rs`, `infrastructure/config.rs`
pub const DEFAULT_TEMPLATE: &str = "Basic (裏表反転カード付き)+sentense";

/// Language the front of every note is expected to be written in.
///
/// Used in: `domain/note.rs`, `infrastructure/config.rs`
pub const DEFAULT_SOURCE_LANGUAGE: &str = "ko";

/// Language the back of every note is translated into.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_TARGET_LANGUAGE: &str = "ja";

/// AnkiConnect endpoint when neither the CLI nor the config names one.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_CONNECT_URL: &str = "http://localhost:8765";
