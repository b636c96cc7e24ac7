use crate::infrastructure::repositories::{
    gemini_translation_repository::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL},
    polly_tts_repository, sarvam_tts_repository,
};
use crate::infrastructure::sarvam::DEFAULT_SARVAM_BASE_URL;
use serde::Deserialize;
use std::env;

/// Translation requests are cut into chunks of at most this many characters
pub const DEFAULT_TRANSLATE_MAX_CHARS: usize = 1000;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    // Sarvam
    pub sarvam_api_key: Option<String>,
    pub sarvam_base_url: String,
    // Gemini fallback translator
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub gemini_model: String,
    // AWS Polly
    pub aws_region: String,
    // Result caches
    pub cache_enabled: bool,
    pub cache_max_entries: Option<u64>,
    // Chunk limits
    pub regional_max_chars: usize,
    pub international_max_chars: usize,
    pub translate_max_chars: usize,
    pub http_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_format: LogFormat::Pretty,
            sarvam_api_key: None,
            sarvam_base_url: DEFAULT_SARVAM_BASE_URL.to_string(),
            gemini_api_key: None,
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            aws_region: "us-east-1".to_string(),
            cache_enabled: true,
            cache_max_entries: None,
            regional_max_chars: sarvam_tts_repository::DEFAULT_MAX_CHUNK_CHARS,
            international_max_chars: polly_tts_repository::DEFAULT_MAX_CHUNK_CHARS,
            translate_max_chars: DEFAULT_TRANSLATE_MAX_CHARS,
            http_timeout_secs: 60,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        // Blank values count as unset
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let config = Config {
            host: var("HOST").unwrap_or(defaults.host),
            port: parse_or(var("PORT"), defaults.port, "PORT")?,
            log_format: var("LOG_FORMAT")
                .map(|s| match s.to_lowercase().as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .unwrap_or(defaults.log_format),
            sarvam_api_key: var("SARVAM_API_KEY"),
            sarvam_base_url: var("SARVAM_BASE_URL").unwrap_or(defaults.sarvam_base_url),
            gemini_api_key: var("GEMINI_API_KEY"),
            gemini_base_url: var("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            gemini_model: var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            aws_region: var("AWS_REGION").unwrap_or(defaults.aws_region),
            cache_enabled: var("CACHE_ENABLED")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(defaults.cache_enabled),
            cache_max_entries: var("CACHE_MAX_ENTRIES")
                .map(|s| s.parse::<u64>())
                .transpose()
                .map_err(|e| format!("CACHE_MAX_ENTRIES: {}", e))?,
            regional_max_chars: parse_or(
                var("REGIONAL_MAX_CHARS"),
                defaults.regional_max_chars,
                "REGIONAL_MAX_CHARS",
            )?,
            international_max_chars: parse_or(
                var("INTERNATIONAL_MAX_CHARS"),
                defaults.international_max_chars,
                "INTERNATIONAL_MAX_CHARS",
            )?,
            translate_max_chars: parse_or(
                var("TRANSLATE_MAX_CHARS"),
                defaults.translate_max_chars,
                "TRANSLATE_MAX_CHARS",
            )?,
            http_timeout_secs: parse_or(
                var("HTTP_TIMEOUT_SECS"),
                defaults.http_timeout_secs,
                "HTTP_TIMEOUT_SECS",
            )?,
        };

        Ok(config)
    }

    pub fn sarvam_configured(&self) -> bool {
        self.sarvam_api_key.is_some()
    }

    pub fn gemini_configured(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

fn parse_or<T>(value: Option<String>, default: T, key: &str) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| format!("{}: invalid value {:?}: {}", key, raw, e)),
        None => Ok(default),
    }
}
