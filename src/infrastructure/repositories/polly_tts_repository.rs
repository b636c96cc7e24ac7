use super::tts_repository::TtsRepository;
use crate::domain::audio::DecodeAttempt;
use crate::domain::tts::{
    resolve_polly_voice, AudioContainer, Backend, Engine, OutputFormat, SynthesisRequest,
};
use async_trait::async_trait;
use aws_sdk_polly::{
    types::{Engine as PollyEngine, OutputFormat as PollyOutputFormat, VoiceId},
    Client as PollyClient,
};
use std::sync::Arc;

/// AWS Polly has a limit of 3000 characters per request
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 3000;

/// Sample rate requested from Polly. Pinning it keeps raw-PCM decoding and
/// substituted silence at a known rate.
pub fn polly_sample_rate(engine: Engine, format: OutputFormat) -> u32 {
    match (format, engine) {
        (OutputFormat::Pcm, _) => 16000,
        (_, Engine::Standard) => 22050,
        _ => 24000,
    }
}

fn polly_engine(engine: Engine) -> PollyEngine {
    match engine {
        Engine::Standard => PollyEngine::Standard,
        Engine::Neural => PollyEngine::Neural,
        Engine::LongForm => PollyEngine::LongForm,
        Engine::Generative => PollyEngine::Generative,
    }
}

fn polly_output_format(format: OutputFormat) -> PollyOutputFormat {
    match format {
        OutputFormat::Mp3 => PollyOutputFormat::Mp3,
        OutputFormat::Ogg => PollyOutputFormat::OggVorbis,
        OutputFormat::Pcm => PollyOutputFormat::Pcm,
    }
}

/// AWS Polly implementation of TTS repository, used for non-Indian languages.
/// Prosody settings are not applied.
pub struct PollyTtsRepository {
    polly_client: Arc<PollyClient>,
    max_chunk_chars: usize,
}

impl PollyTtsRepository {
    pub fn new(polly_client: Arc<PollyClient>, max_chunk_chars: usize) -> Self {
        Self {
            polly_client,
            max_chunk_chars,
        }
    }
}

#[async_trait]
impl TtsRepository for PollyTtsRepository {
    fn backend(&self) -> Backend {
        Backend::International
    }

    fn max_chunk_chars(&self) -> usize {
        self.max_chunk_chars
    }

    /// Call AWS Polly to synthesize a single chunk
    async fn synthesize_chunk(&self, request: &SynthesisRequest) -> Result<Vec<u8>, String> {
        let selection = resolve_polly_voice(&request.language, &request.speaker);
        if selection.language_fallback {
            tracing::warn!(
                requested_language = %request.language,
                language = selection.language_code,
                "Language not supported by Polly, using default language"
            );
        }
        if selection.voice_fallback {
            tracing::warn!(
                requested_voice = %request.speaker,
                voice = selection.voice,
                language = selection.language_code,
                "Voice not available for language, using default voice"
            );
        }

        let voice_id = VoiceId::from(selection.voice);
        let engine = polly_engine(request.engine);
        let output_format = polly_output_format(request.output_format);
        let sample_rate = polly_sample_rate(request.engine, request.output_format);

        tracing::info!(
            language = selection.language_code,
            voice = selection.voice,
            engine = ?engine,
            output_format = ?output_format,
            sample_rate = sample_rate,
            text_length = request.text.chars().count(),
            text_preview = %request.text.chars().take(200).collect::<String>(),
            "Calling AWS Polly synthesize_speech"
        );

        let result = self
            .polly_client
            .synthesize_speech()
            .text(&request.text)
            .voice_id(voice_id.clone())
            .language_code(selection.language_code.into())
            .output_format(output_format)
            .sample_rate(sample_rate.to_string())
            .engine(engine.clone())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    error_display = %e,
                    voice_id = ?voice_id,
                    engine = ?engine,
                    text_length = request.text.chars().count(),
                    "AWS Polly synthesize_speech failed"
                );
                format!("AWS Polly error: {:?}", e)
            })?;

        let audio_stream = result.audio_stream.collect().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to collect audio stream from Polly response");
            format!("Failed to read audio stream: {}", e)
        })?;

        let audio_bytes = audio_stream.into_bytes().to_vec();
        tracing::debug!(
            audio_size = audio_bytes.len(),
            "Audio stream collected successfully"
        );

        Ok(audio_bytes)
    }

    fn decode_plan(&self, request: &SynthesisRequest) -> Vec<DecodeAttempt> {
        let raw = DecodeAttempt::RawPcm {
            sample_rate: polly_sample_rate(request.engine, request.output_format),
            channels: 1,
        };
        match request.output_format {
            OutputFormat::Mp3 => vec![DecodeAttempt::Mp3, DecodeAttempt::Wav, raw],
            OutputFormat::Ogg => vec![DecodeAttempt::OggVorbis, DecodeAttempt::Mp3, raw],
            OutputFormat::Pcm => vec![raw],
        }
    }

    fn silence_format(&self, request: &SynthesisRequest) -> (u32, u16) {
        (polly_sample_rate(request.engine, request.output_format), 1)
    }

    fn passthrough_container(&self, request: &SynthesisRequest) -> Option<AudioContainer> {
        match request.output_format {
            OutputFormat::Mp3 => Some(AudioContainer::Mp3),
            OutputFormat::Ogg | OutputFormat::Pcm => None,
        }
    }
}
