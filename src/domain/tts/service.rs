use super::dto::{TtsRequest, REGIONAL_SAMPLE_RATES};
use super::error::TtsServiceError;
use super::language::{needs_translation, select_backend, Backend};
use super::model::{request_fingerprint, SynthesisRequest, SynthesizedAudio};
use super::synthesis::synthesize_with;
use crate::domain::cache::{CacheStats, ResultCache};
use crate::domain::translation::TranslationServiceApi;
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct TtsSynthesisResult {
    pub audio: SynthesizedAudio,
    pub cache_hit: bool,
}

pub struct TtsService {
    translation_service: Arc<dyn TranslationServiceApi>,
    regional_repo: Arc<dyn TtsRepository>,
    international_repo: Arc<dyn TtsRepository>,
    cache: ResultCache<SynthesizedAudio>,
}

impl TtsService {
    pub fn new(
        translation_service: Arc<dyn TranslationServiceApi>,
        regional_repo: Arc<dyn TtsRepository>,
        international_repo: Arc<dyn TtsRepository>,
        cache: ResultCache<SynthesizedAudio>,
    ) -> Self {
        Self {
            translation_service,
            regional_repo,
            international_repo,
            cache,
        }
    }

    pub async fn clear_cache(&self) -> u64 {
        self.cache.clear().await
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    pub async fn cache_len(&self) -> u64 {
        self.cache.len().await
    }

    fn repository_for(&self, backend: Backend) -> &Arc<dyn TtsRepository> {
        match backend {
            Backend::Regional => &self.regional_repo,
            Backend::International => &self.international_repo,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Turn a request into one continuous audio track
    ///
    /// This operation:
    /// - Serves repeated requests from the audio cache
    /// - Translates the text when source and target languages differ
    /// - Routes synthesis to the backend for the target language
    async fn synthesize(&self, request: TtsRequest) -> Result<TtsSynthesisResult, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(&self, request: TtsRequest) -> Result<TtsSynthesisResult, TtsServiceError> {
        if request.input_text.trim().is_empty() {
            return Err(TtsServiceError::Invalid(
                "input_text cannot be empty".to_string(),
            ));
        }

        let backend = select_backend(&request.target_lang);
        if backend == Backend::Regional
            && !REGIONAL_SAMPLE_RATES.contains(&request.speech_sample_rate)
        {
            return Err(TtsServiceError::Invalid(format!(
                "speech_sample_rate must be one of {:?}, got {}",
                REGIONAL_SAMPLE_RATES, request.speech_sample_rate
            )));
        }

        tracing::info!(
            source_lang = %request.source_lang,
            target_lang = %request.target_lang,
            backend = %backend,
            text_length = request.input_text.chars().count(),
            "TTS synthesis request"
        );

        let fingerprint = request_fingerprint(&request);
        if let Some(audio) = self.cache.get(&fingerprint).await {
            tracing::info!(
                fingerprint = %fingerprint,
                cached_audio_size = audio.bytes.len(),
                "TTS cache hit - returning cached audio"
            );
            return Ok(TtsSynthesisResult {
                audio,
                cache_hit: true,
            });
        }

        let text = if needs_translation(&request.source_lang, &request.target_lang) {
            self.translation_service
                .translate(&request.input_text, &request.source_lang, &request.target_lang)
                .await
        } else {
            tracing::debug!("Source and target share a language, skipping translation");
            request.input_text.clone()
        };

        let synthesis_request = SynthesisRequest::from_request(text, &request);
        let audio = synthesize_with(self.repository_for(backend).as_ref(), &synthesis_request).await?;

        self.cache.put(fingerprint.clone(), audio.clone()).await;
        tracing::info!(
            fingerprint = %fingerprint,
            audio_size = audio.bytes.len(),
            "TTS result cached"
        );

        Ok(TtsSynthesisResult {
            audio,
            cache_hit: false,
        })
    }
}
