//! OpenAI speech API SDK for Rust.
//!
//! This crate provides a client for the OpenAI text-to-speech endpoint
//! (`/v1/audio/speech`).

mod client;
mod error;
pub mod http;
mod speech;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{Error, Result};
pub use speech::{
    ResponseFormat, SpeechRequest, SpeechService, MODEL_TTS_1, MODEL_TTS_1_HD, VOICE_CEDAR,
};
