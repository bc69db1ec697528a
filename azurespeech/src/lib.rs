//! Azure Cognitive Services Speech SDK for Rust.
//!
//! Text-to-speech against Azure is a two-step exchange: a short-lived access
//! token is issued for the subscription key, then the token authorizes an
//! SSML synthesis request. [`TtsService::synthesize`] performs both steps.

mod client;
mod error;
pub mod http;
mod ssml;
mod tts;
mod types;
mod voice;

pub use client::{Client, ClientBuilder, DEFAULT_TIMEOUT};
pub use error::{Error, Result, Stage};
pub use ssml::{Ssml, escape_xml};
pub use tts::{SynthesisResult, TtsRequest, TtsService};
pub use types::{DEFAULT_LANGUAGE, OutputFormat};
pub use voice::{DEFAULT_VOICE, VOICES, resolve_voice};
