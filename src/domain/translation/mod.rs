pub mod service;

pub use service::{TranslationService, TranslationServiceApi};
