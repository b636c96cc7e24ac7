use crate::domain::cache::{CacheStats, Fingerprint, ResultCache};
use crate::domain::text::chunk_text;
use crate::infrastructure::repositories::TranslationRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct TranslationService {
    translators: Vec<Arc<dyn TranslationRepository>>,
    max_chunk_chars: usize,
    cache: ResultCache<String>,
}

impl TranslationService {
    /// `translators` are tried in order for every chunk
    pub fn new(
        translators: Vec<Arc<dyn TranslationRepository>>,
        max_chunk_chars: usize,
        cache: ResultCache<String>,
    ) -> Self {
        Self {
            translators,
            max_chunk_chars,
            cache,
        }
    }

    pub fn translator_names(&self) -> Vec<&'static str> {
        self.translators.iter().map(|t| t.name()).collect()
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
}

#[async_trait]
pub trait TranslationServiceApi: Send + Sync {
    /// Translate text of any length.
    ///
    /// Never fails: a chunk no translator can handle is kept as-is.
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> String;
}

#[async_trait]
impl TranslationServiceApi for TranslationService {
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> String {
        let fingerprint = Fingerprint::new()
            .field("text", text)
            .field("source_lang", source_lang)
            .field("target_lang", target_lang)
            .finish();

        if let Some(cached) = self.cache.get(&fingerprint).await {
            tracing::info!(
                source_lang = source_lang,
                target_lang = target_lang,
                "Translation cache hit"
            );
            return cached;
        }

        let chunks = chunk_text(text, self.max_chunk_chars);
        tracing::info!(
            source_lang = source_lang,
            target_lang = target_lang,
            chunk_count = chunks.len(),
            text_length = text.chars().count(),
            "Translating text"
        );

        let mut translated = Vec::with_capacity(chunks.len());
        for (index, chunk) in chunks.iter().enumerate() {
            translated.push(
                self.translate_chunk(index, chunk, source_lang, target_lang)
                    .await,
            );
        }

        let result = translated.join(" ");
        self.cache.put(fingerprint, result.clone()).await;
        result
    }
}

impl TranslationService {
    async fn translate_chunk(
        &self,
        index: usize,
        chunk: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> String {
        for translator in &self.translators {
            match translator.translate(chunk, source_lang, target_lang).await {
                Ok(text) if !text.trim().is_empty() => {
                    tracing::debug!(
                        translator = translator.name(),
                        chunk_index = index,
                        "Chunk translated"
                    );
                    return text;
                }
                Ok(_) => {
                    tracing::warn!(
                        translator = translator.name(),
                        chunk_index = index,
                        "Translator returned empty text, trying next"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        translator = translator.name(),
                        chunk_index = index,
                        error = %e,
                        "Translation failed, trying next"
                    );
                }
            }
        }

        tracing::warn!(
            chunk_index = index,
            "All translators failed, using original text"
        );
        chunk.to_string()
    }
}
