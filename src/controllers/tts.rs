use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::tts::{TtsRequest, TtsService, TtsServiceApi},
    error::{AppError, AppResult},
};

pub const X_BACKEND: &str = "x-backend";
pub const X_CHUNK_COUNT: &str = "x-chunk-count";
pub const X_SILENCED_CHUNKS: &str = "x-silenced-chunks";
pub const X_CACHE: &str = "x-cache";

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /tts - Convert text to speech, translating first when needed
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<TtsRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        if request.input_text.trim().is_empty() {
            return Err(AppError::BadRequest("input_text cannot be empty".to_string()));
        }

        let result = controller.tts_service.synthesize(request).await?;
        let audio = result.audio;

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(audio.container.content_type()),
        );
        headers.insert(X_BACKEND, HeaderValue::from_static(audio.backend.provider()));
        headers.insert(X_CHUNK_COUNT, HeaderValue::from(audio.chunk_count));
        headers.insert(X_SILENCED_CHUNKS, HeaderValue::from(audio.silenced_chunks));
        headers.insert(
            X_CACHE,
            HeaderValue::from_static(if result.cache_hit { "hit" } else { "miss" }),
        );

        Ok((StatusCode::OK, headers, Body::from(audio.bytes)))
    }
}
