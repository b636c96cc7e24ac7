pub mod gemini_translation_repository;
pub mod polly_tts_repository;
pub mod sarvam_translation_repository;
pub mod sarvam_tts_repository;
pub mod translation_repository;
pub mod tts_repository;

pub use gemini_translation_repository::GeminiTranslationRepository;
pub use polly_tts_repository::PollyTtsRepository;
pub use sarvam_translation_repository::SarvamTranslationRepository;
pub use sarvam_tts_repository::SarvamTtsRepository;
pub use translation_repository::TranslationRepository;
pub use tts_repository::TtsRepository;
