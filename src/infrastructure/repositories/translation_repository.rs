use async_trait::async_trait;

/// Repository for one text translation provider
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Provider name, used in logs
    fn name(&self) -> &'static str;

    /// Translate a single chunk of text
    ///
    /// # Errors
    /// Returns error if the provider is unavailable or returns no translation
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, String>;
}
