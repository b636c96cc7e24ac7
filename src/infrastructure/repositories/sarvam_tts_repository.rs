use super::tts_repository::TtsRepository;
use crate::domain::audio::DecodeAttempt;
use crate::domain::tts::{AudioContainer, Backend, SynthesisRequest};
use crate::infrastructure::sarvam::SarvamClient;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Sarvam accepts at most this many characters per request
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 250;
const TTS_MODEL: &str = "bulbul:v2";

#[derive(Debug, Serialize)]
struct SarvamTtsRequest<'a> {
    text: &'a str,
    target_language_code: &'a str,
    speaker: String,
    pitch: f32,
    pace: f32,
    loudness: f32,
    speech_sample_rate: u32,
    enable_preprocessing: bool,
    model: &'static str,
}

#[derive(Debug, Deserialize)]
struct SarvamTtsResponse {
    #[serde(default)]
    request_id: Option<String>,
    audios: Vec<String>,
}

/// Sarvam implementation of TTS repository, used for Indian languages
pub struct SarvamTtsRepository {
    client: Arc<SarvamClient>,
    max_chunk_chars: usize,
}

impl SarvamTtsRepository {
    pub fn new(client: Arc<SarvamClient>, max_chunk_chars: usize) -> Self {
        Self {
            client,
            max_chunk_chars,
        }
    }
}

#[async_trait]
impl TtsRepository for SarvamTtsRepository {
    fn backend(&self) -> Backend {
        Backend::Regional
    }

    fn max_chunk_chars(&self) -> usize {
        self.max_chunk_chars
    }

    async fn synthesize_chunk(&self, request: &SynthesisRequest) -> Result<Vec<u8>, String> {
        let body = SarvamTtsRequest {
            text: &request.text,
            target_language_code: &request.language,
            speaker: request.speaker.to_lowercase(),
            pitch: request.prosody.pitch,
            pace: request.prosody.pace,
            loudness: request.prosody.loudness,
            speech_sample_rate: request.sample_rate,
            enable_preprocessing: request.enable_preprocessing,
            model: TTS_MODEL,
        };

        tracing::info!(
            language = %request.language,
            speaker = %body.speaker,
            sample_rate = request.sample_rate,
            text_length = request.text.chars().count(),
            "Calling Sarvam text-to-speech"
        );

        let response: SarvamTtsResponse = self.client.post("text-to-speech", &body).await?;

        // Long inputs can come back split across several base64 strings
        let audio_bytes = STANDARD
            .decode(response.audios.concat())
            .map_err(|e| format!("Invalid base64 audio from Sarvam: {}", e))?;

        if audio_bytes.is_empty() {
            return Err("Sarvam returned no audio".to_string());
        }

        tracing::debug!(
            request_id = ?response.request_id,
            audio_size = audio_bytes.len(),
            "Sarvam audio received"
        );

        Ok(audio_bytes)
    }

    fn decode_plan(&self, request: &SynthesisRequest) -> Vec<DecodeAttempt> {
        vec![
            DecodeAttempt::Wav,
            DecodeAttempt::Mp3,
            DecodeAttempt::RawPcm {
                sample_rate: request.sample_rate,
                channels: 1,
            },
        ]
    }

    fn silence_format(&self, request: &SynthesisRequest) -> (u32, u16) {
        (request.sample_rate, 1)
    }

    fn passthrough_container(&self, _request: &SynthesisRequest) -> Option<AudioContainer> {
        Some(AudioContainer::Wav)
    }
}
