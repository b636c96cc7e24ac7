use crate::domain::audio::DecodeAttempt;
use crate::domain::tts::{AudioContainer, Backend, SynthesisRequest};
use async_trait::async_trait;

/// Repository for one speech synthesis provider.
/// Abstracts the vendor (Sarvam, AWS Polly) behind a per-chunk call.
///
/// Implementations only voice a single chunk and describe how their output
/// should be decoded; chunking, silence substitution and stitching are shared
/// by every backend.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    fn backend(&self) -> Backend;

    /// Maximum characters the provider accepts per call
    fn max_chunk_chars(&self) -> usize;

    /// Synthesize `request.text`, returning the provider's raw audio bytes
    ///
    /// # Errors
    /// Returns error if the provider call fails or its payload is unusable
    async fn synthesize_chunk(&self, request: &SynthesisRequest) -> Result<Vec<u8>, String>;

    /// Ordered ways to interpret a chunk's bytes
    fn decode_plan(&self, request: &SynthesisRequest) -> Vec<DecodeAttempt>;

    /// Sample rate and channel count for substituted silence
    fn silence_format(&self, request: &SynthesisRequest) -> (u32, u16);

    /// Container a single-chunk payload can be returned in without re-encoding
    fn passthrough_container(&self, request: &SynthesisRequest) -> Option<AudioContainer>;
}
