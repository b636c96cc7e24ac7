use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::{cache::CacheStats, translation::TranslationService, tts::TtsService};

#[derive(Debug, Serialize, Deserialize)]
pub struct CacheClearResponse {
    pub audio_cleared: u64,
    pub translation_cleared: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CacheStatsResponse {
    pub audio: CacheStats,
    pub translation: CacheStats,
}

pub struct CacheController {
    tts_service: Arc<TtsService>,
    translation_service: Arc<TranslationService>,
}

impl CacheController {
    pub fn new(tts_service: Arc<TtsService>, translation_service: Arc<TranslationService>) -> Self {
        Self {
            tts_service,
            translation_service,
        }
    }

    /// POST /cache/clear - Drop every cached translation and audio result
    pub async fn clear(State(controller): State<Arc<CacheController>>) -> Json<CacheClearResponse> {
        let response = CacheClearResponse {
            audio_cleared: controller.tts_service.clear_cache().await,
            translation_cleared: controller.translation_service.clear_cache().await,
        };
        tracing::info!(
            audio_cleared = response.audio_cleared,
            translation_cleared = response.translation_cleared,
            "Caches cleared"
        );
        Json(response)
    }

    /// GET /cache/stats - Entry counts and a sample of keys per cache
    pub async fn stats(State(controller): State<Arc<CacheController>>) -> Json<CacheStatsResponse> {
        Json(CacheStatsResponse {
            audio: controller.tts_service.cache_stats().await,
            translation: controller.translation_service.cache_stats().await,
        })
    }
}
