#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("invalid {format} audio: {reason}")]
    InvalidFormat { format: &'static str, reason: String },
    #[error("audio could not be decoded ({0})")]
    Undecodable(String),
    #[error("no audio segments to stitch")]
    NoSegments,
    #[error("wav encoding failed: {0}")]
    Encode(String),
}

impl AudioError {
    pub(crate) fn invalid(format: &'static str, reason: impl ToString) -> Self {
        AudioError::InvalidFormat {
            format,
            reason: reason.to_string(),
        }
    }
}
