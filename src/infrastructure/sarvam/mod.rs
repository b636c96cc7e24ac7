use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

pub const DEFAULT_SARVAM_BASE_URL: &str = "https://api.sarvam.ai";
const API_KEY_HEADER: &str = "api-subscription-key";

/// Thin JSON client for the Sarvam REST API, shared by the speech and
/// translation repositories
pub struct SarvamClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl SarvamClient {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// POST `body` as JSON to `path` and decode the JSON response
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, String>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| "Sarvam API key not configured".to_string())?;
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        let response = self
            .http_client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, url = %url, "Sarvam request failed");
                format!("Sarvam request failed: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = status.as_u16(),
                url = %url,
                body = %error_text,
                "Sarvam returned an error"
            );
            return Err(format!("Sarvam error {}: {}", status.as_u16(), error_text));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| format!("Failed to parse Sarvam response: {}", e))
    }
}
