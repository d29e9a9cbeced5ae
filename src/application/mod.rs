// src/application/mod.rs
pub mod batch_builder;
pub mod submitter;

pub use batch_builder::{BatchBuilder, BuilderConfig, LanguageDetector, Translator};
pub use submitter::{ConnectGateway, ConnectReply, SpeechSynthesizer, Submitter};
