use super::translation_repository::TranslationRepository;
use crate::infrastructure::sarvam::SarvamClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const TRANSLATE_MODEL: &str = "mayura:v1";
const TRANSLATE_MODE: &str = "modern-colloquial";

#[derive(Debug, Serialize)]
struct SarvamTranslateRequest<'a> {
    input: &'a str,
    source_language_code: &'a str,
    target_language_code: &'a str,
    model: &'static str,
    mode: &'static str,
    enable_preprocessing: bool,
}

#[derive(Debug, Deserialize)]
struct SarvamTranslateResponse {
    translated_text: String,
}

/// Primary translator
pub struct SarvamTranslationRepository {
    client: Arc<SarvamClient>,
}

impl SarvamTranslationRepository {
    pub fn new(client: Arc<SarvamClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TranslationRepository for SarvamTranslationRepository {
    fn name(&self) -> &'static str {
        "sarvam"
    }

    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, String> {
        let body = SarvamTranslateRequest {
            input: text,
            source_language_code: source_lang,
            target_language_code: target_lang,
            model: TRANSLATE_MODEL,
            mode: TRANSLATE_MODE,
            enable_preprocessing: true,
        };

        let response: SarvamTranslateResponse = self.client.post("translate", &body).await?;
        Ok(response.translated_text)
    }
}
