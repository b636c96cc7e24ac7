use super::dto::{Engine, OutputFormat, TtsRequest};
use super::language::Backend;
use crate::domain::cache::Fingerprint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prosody {
    pub pitch: f32,
    pub pace: f32,
    pub loudness: f32,
}

impl Default for Prosody {
    fn default() -> Self {
        Self {
            pitch: 0.0,
            pace: 1.0,
            loudness: 1.0,
        }
    }
}

/// Everything a speech backend needs to voice one piece of text
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    pub language: String,
    pub speaker: String,
    pub prosody: Prosody,
    pub sample_rate: u32,
    pub enable_preprocessing: bool,
    pub engine: Engine,
    pub output_format: OutputFormat,
}

impl SynthesisRequest {
    /// Build the backend request for already-translated `text`
    pub fn from_request(text: String, request: &TtsRequest) -> Self {
        Self {
            text,
            language: request.target_lang.clone(),
            speaker: request.speaker.clone(),
            prosody: Prosody {
                pitch: request.pitch,
                pace: request.pace,
                loudness: request.loudness,
            },
            sample_rate: request.speech_sample_rate,
            enable_preprocessing: request.enable_preprocessing,
            engine: request.engine,
            output_format: request.output_format,
        }
    }

    /// Same parameters, different text
    pub fn with_text(&self, text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..self.clone()
        }
    }
}

/// Audio cache key. Covers every field that can change the produced audio.
pub fn request_fingerprint(request: &TtsRequest) -> String {
    Fingerprint::new()
        .field("input_text", &request.input_text)
        .field("source_lang", &request.source_lang)
        .field("target_lang", &request.target_lang)
        .field("speaker", &request.speaker)
        .field("pitch", request.pitch)
        .field("pace", request.pace)
        .field("loudness", request.loudness)
        .field("speech_sample_rate", request.speech_sample_rate)
        .field("enable_preprocessing", request.enable_preprocessing)
        .field("engine", request.engine.as_str())
        .field("output_format", request.output_format.as_str())
        .finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioContainer {
    Wav,
    Mp3,
}

impl AudioContainer {
    pub fn content_type(&self) -> &'static str {
        match self {
            AudioContainer::Wav => "audio/wav",
            AudioContainer::Mp3 => "audio/mpeg",
        }
    }
}

/// Final audio for one request
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedAudio {
    pub bytes: Vec<u8>,
    pub container: AudioContainer,
    pub backend: Backend,
    pub chunk_count: usize,
    /// Chunks whose synthesis failed and were replaced by silence
    pub silenced_chunks: usize,
}
