use super::translation_repository::TranslationRepository;
use crate::domain::tts::language_name;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Build the instruction sent to the language model for one chunk
pub fn translation_prompt(text: &str, source_lang: &str, target_lang: &str) -> String {
    format!(
        "Translate this text from {} to {}. Just the translated output:\n{}",
        language_name(source_lang),
        language_name(target_lang),
        text
    )
}

/// Fallback translator backed by Gemini through its OpenAI-compatible API
pub struct GeminiTranslationRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl GeminiTranslationRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self { client, model }
    }

    /// Client making a single attempt per call, bounded by `timeout`
    pub fn client_for(
        api_key: &str,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Client<OpenAIConfig>, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        let single_attempt = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        Ok(Client::with_config(
            OpenAIConfig::new()
                .with_api_key(api_key)
                .with_api_base(base_url.trim_end_matches('/')),
        )
        .with_http_client(http_client)
        .with_backoff(single_attempt))
    }
}

#[async_trait]
impl TranslationRepository for GeminiTranslationRepository {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, String> {
        let prompt = translation_prompt(text, source_lang, target_lang);

        tracing::info!(
            model = %self.model,
            source_lang = source_lang,
            target_lang = target_lang,
            text_length = text.chars().count(),
            "Calling Gemini for translation"
        );

        let message: ChatCompletionRequestMessage = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| format!("Failed to build Gemini request: {}", e))?
            .into();
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![message])
            .build()
            .map_err(|e| format!("Failed to build Gemini request: {}", e))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            tracing::error!(error = %e, model = %self.model, "Gemini chat completion failed");
            format!("Gemini error: {}", e)
        })?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| "Gemini returned no content".to_string())?;

        Ok(content.trim().to_string())
    }
}
