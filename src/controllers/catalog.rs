use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::tts::{
    dto::{
        BackendLanguages, LanguageEntry, LanguagesResponse, PollyVoices, SarvamSpeakers,
        SpeakersResponse,
    },
    language::REGIONAL_LANGUAGES,
    voices::{
        DEFAULT_SARVAM_SPEAKER, POLLY_LANGUAGES, SARVAM_FEMALE_SPEAKERS, SARVAM_MALE_SPEAKERS,
    },
    Backend,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub status: String,
    pub version: String,
}

/// GET / - Service identity
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Multilingual TTS API".to_string(),
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// GET /speakers - Voices available on each backend
pub async fn speakers() -> Json<SpeakersResponse> {
    Json(SpeakersResponse {
        sarvam: SarvamSpeakers {
            female: owned(SARVAM_FEMALE_SPEAKERS),
            male: owned(SARVAM_MALE_SPEAKERS),
            default: DEFAULT_SARVAM_SPEAKER.to_string(),
        },
        polly: POLLY_LANGUAGES.iter().map(PollyVoices::from).collect(),
    })
}

/// GET /languages - Supported language codes, grouped by the backend that voices them
pub async fn languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        regional: BackendLanguages::new(
            Backend::Regional,
            REGIONAL_LANGUAGES.iter().map(LanguageEntry::from).collect(),
        ),
        international: BackendLanguages::new(
            Backend::International,
            POLLY_LANGUAGES.iter().map(LanguageEntry::from).collect(),
        ),
    })
}
