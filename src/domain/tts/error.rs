use crate::domain::audio::AudioError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("{backend} synthesis failed: {reason}")]
    Synthesis { backend: &'static str, reason: String },
    #[error("{backend} produced no usable audio for {chunk_count} chunk(s)")]
    NoUsableAudio {
        backend: &'static str,
        chunk_count: usize,
    },
    #[error(transparent)]
    Audio(#[from] AudioError),
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TtsServiceError::Synthesis { .. } | TtsServiceError::NoUsableAudio { .. } => {
                AppError::ExternalService(err.to_string())
            }
            TtsServiceError::Audio(e) => AppError::Internal(e.to_string()),
        }
    }
}
