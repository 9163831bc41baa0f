//! Typed request model for the external speech recognizer.
//!
//! The host uploads audio to Google Cloud Speech (`speech:recognize`); this
//! module only builds the JSON request body, wiring the domain bias phrases
//! into `speechContexts` so curated song/stock names are favored during
//! decoding. Transport (HTTP, auth, retries) stays with the host.

use serde::Serialize;

use crate::config::RecognizerConfig;
use crate::domain::DomainIndex;

// ---------------------------------------------------------------------------
// Wire types (camelCase on the wire)
// ---------------------------------------------------------------------------

/// Body of a `speech:recognize` request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizeRequest {
    pub config: RecognitionConfig,
    pub audio: RecognitionAudio,
}

/// The recognizer configuration portion of the request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionConfig {
    pub encoding: String,
    pub sample_rate_hertz: u32,
    pub language_code: String,
    pub model: String,
    pub use_enhanced: bool,
    pub speech_contexts: Vec<SpeechContext>,
}

/// One contextual-biasing hint block: phrases plus a boost weight.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechContext {
    pub phrases: Vec<String>,
    pub boost: f32,
}

/// The audio payload: base64-encoded bytes, already encoded by the host.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionAudio {
    pub content: String,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Build a recognize request from the recognizer settings, the domain
/// index's bias phrases, and a base64 audio payload.
pub fn build_recognize_request(
    config: &RecognizerConfig,
    index: &DomainIndex,
    base64_audio: String,
) -> RecognizeRequest {
    let phrases = index
        .bias_phrases()
        .iter()
        .map(|p| p.to_string())
        .collect();

    RecognizeRequest {
        config: RecognitionConfig {
            encoding: config.encoding.clone(),
            sample_rate_hertz: config.sample_rate_hertz,
            language_code: config.language_code.clone(),
            model: config.model.clone(),
            use_enhanced: config.use_enhanced,
            speech_contexts: vec![SpeechContext {
                phrases,
                boost: config.phrase_boost,
            }],
        },
        audio: RecognitionAudio {
            content: base64_audio,
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
