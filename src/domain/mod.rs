pub mod audio;
pub mod cache;
pub mod text;
pub mod translation;
pub mod tts;
