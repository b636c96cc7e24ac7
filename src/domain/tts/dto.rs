use super::language::{Backend, RegionalLanguage};
use super::voices::PollyLanguage;
use serde::{Deserialize, Serialize};

/// Polly synthesis engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Engine {
    #[default]
    Standard,
    Neural,
    LongForm,
    Generative,
}

impl Engine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Standard => "standard",
            Engine::Neural => "neural",
            Engine::LongForm => "long-form",
            Engine::Generative => "generative",
        }
    }
}

/// Container requested from Polly
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Mp3,
    Ogg,
    Pcm,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Mp3 => "mp3",
            OutputFormat::Ogg => "ogg",
            OutputFormat::Pcm => "pcm",
        }
    }
}

fn default_source_lang() -> String {
    "auto".to_string()
}

fn default_target_lang() -> String {
    "hi-IN".to_string()
}

fn default_speaker() -> String {
    super::voices::DEFAULT_SARVAM_SPEAKER.to_string()
}

fn default_pitch() -> f32 {
    0.0
}

fn default_pace() -> f32 {
    1.0
}

fn default_loudness() -> f32 {
    1.0
}

/// Output rates the regional backend can produce
pub const REGIONAL_SAMPLE_RATES: [u32; 4] = [8000, 16000, 22050, 24000];

fn default_sample_rate() -> u32 {
    24000
}

/// Request for POST /tts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsRequest {
    pub input_text: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    #[serde(default = "default_speaker")]
    pub speaker: String,
    #[serde(default = "default_pitch")]
    pub pitch: f32,
    #[serde(default = "default_pace")]
    pub pace: f32,
    #[serde(default = "default_loudness")]
    pub loudness: f32,
    /// Regional backend only
    #[serde(default = "default_sample_rate")]
    pub speech_sample_rate: u32,
    /// Regional backend only
    #[serde(default)]
    pub enable_preprocessing: bool,
    /// International backend only
    #[serde(default)]
    pub engine: Engine,
    /// International backend only
    #[serde(default)]
    pub output_format: OutputFormat,
}

/// Response for GET /speakers
#[derive(Debug, Serialize, Deserialize)]
pub struct SpeakersResponse {
    pub sarvam: SarvamSpeakers,
    pub polly: Vec<PollyVoices>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SarvamSpeakers {
    pub female: Vec<String>,
    pub male: Vec<String>,
    pub default: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PollyVoices {
    pub language_code: String,
    pub language_name: String,
    pub voices: Vec<String>,
    pub default_voice: String,
}

impl From<&PollyLanguage> for PollyVoices {
    fn from(language: &PollyLanguage) -> Self {
        Self {
            language_code: language.code.to_string(),
            language_name: language.name.to_string(),
            voices: language.voices.iter().map(|v| v.to_string()).collect(),
            default_voice: language.default_voice().to_string(),
        }
    }
}

/// Response for GET /languages
#[derive(Debug, Serialize, Deserialize)]
pub struct LanguagesResponse {
    pub regional: BackendLanguages,
    pub international: BackendLanguages,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BackendLanguages {
    pub provider: String,
    pub languages: Vec<LanguageEntry>,
}

impl BackendLanguages {
    pub fn new(backend: Backend, languages: Vec<LanguageEntry>) -> Self {
        Self {
            provider: backend.provider().to_string(),
            languages,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub code: String,
    pub name: String,
}

impl From<&RegionalLanguage> for LanguageEntry {
    fn from(language: &RegionalLanguage) -> Self {
        Self {
            code: language.code.to_string(),
            name: language.name.to_string(),
        }
    }
}

impl From<&PollyLanguage> for LanguageEntry {
    fn from(language: &PollyLanguage) -> Self {
        Self {
            code: language.code.to_string(),
            name: language.name.to_string(),
        }
    }
}
