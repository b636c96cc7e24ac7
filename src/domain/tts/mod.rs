pub mod dto;
pub mod error;
pub mod language;
pub mod model;
pub mod service;
pub mod synthesis;
pub mod voices;

pub use dto::{Engine, OutputFormat, TtsRequest, REGIONAL_SAMPLE_RATES};
pub use error::TtsServiceError;
pub use language::{language_name, needs_translation, select_backend, Backend};
pub use model::{AudioContainer, Prosody, SynthesisRequest, SynthesizedAudio};
pub use service::{TtsService, TtsServiceApi, TtsSynthesisResult};
pub use synthesis::synthesize_with;
pub use voices::{resolve_polly_voice, validate_voice_tables, VoiceSelection};
