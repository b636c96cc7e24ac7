use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::{translation::TranslationService, tts::TtsService};

/// Which vendor credentials were found at startup
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CredentialStatus {
    pub sarvam: bool,
    pub gemini: bool,
    pub aws: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub sarvam_configured: bool,
    pub gemini_configured: bool,
    pub aws_configured: bool,
    pub cache: CacheSizes,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CacheSizes {
    pub audio_entries: u64,
    pub translation_entries: u64,
}

pub struct HealthController {
    credentials: CredentialStatus,
    tts_service: Arc<TtsService>,
    translation_service: Arc<TranslationService>,
}

impl HealthController {
    pub fn new(
        credentials: CredentialStatus,
        tts_service: Arc<TtsService>,
        translation_service: Arc<TranslationService>,
    ) -> Self {
        Self {
            credentials,
            tts_service,
            translation_service,
        }
    }

    /// GET /health - Configured credentials and cache sizes
    pub async fn health(State(controller): State<Arc<HealthController>>) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "healthy".to_string(),
            sarvam_configured: controller.credentials.sarvam,
            gemini_configured: controller.credentials.gemini,
            aws_configured: controller.credentials.aws,
            cache: CacheSizes {
                audio_entries: controller.tts_service.cache_len().await,
                translation_entries: controller.translation_service.cache_len().await,
            },
        })
    }
}
