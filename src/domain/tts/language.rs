use super::voices::polly_language;
use serde::{Deserialize, Serialize};

/// The two speech backends a request can be routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Sarvam, for Indian languages
    Regional,
    /// AWS Polly, for everything else
    International,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Regional => "regional",
            Backend::International => "international",
        }
    }

    pub fn provider(&self) -> &'static str {
        match self {
            Backend::Regional => "sarvam",
            Backend::International => "polly",
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RegionalLanguage {
    pub code: &'static str,
    pub name: &'static str,
}

/// Language codes routed to the regional backend
#[rustfmt::skip]
pub const REGIONAL_LANGUAGES: &[RegionalLanguage] = &[
    RegionalLanguage { code: "bn-IN", name: "Bengali" },
    RegionalLanguage { code: "en-IN", name: "English" },
    RegionalLanguage { code: "gu-IN", name: "Gujarati" },
    RegionalLanguage { code: "hi-IN", name: "Hindi" },
    RegionalLanguage { code: "kn-IN", name: "Kannada" },
    RegionalLanguage { code: "ml-IN", name: "Malayalam" },
    RegionalLanguage { code: "mr-IN", name: "Marathi" },
    RegionalLanguage { code: "od-IN", name: "Odia" },
    RegionalLanguage { code: "pa-IN", name: "Punjabi" },
    RegionalLanguage { code: "ta-IN", name: "Tamil" },
    RegionalLanguage { code: "te-IN", name: "Telugu" },
    RegionalLanguage { code: "as-IN", name: "Assamese" },
    RegionalLanguage { code: "brx-IN", name: "Bodo" },
    RegionalLanguage { code: "doi-IN", name: "Dogri" },
    RegionalLanguage { code: "kok-IN", name: "Konkani" },
    RegionalLanguage { code: "ks-IN", name: "Kashmiri" },
    RegionalLanguage { code: "mai-IN", name: "Maithili" },
    RegionalLanguage { code: "mni-IN", name: "Manipuri (Meiteilon)" },
    RegionalLanguage { code: "ne-IN", name: "Nepali" },
    RegionalLanguage { code: "sa-IN", name: "Sanskrit" },
    RegionalLanguage { code: "sat-IN", name: "Santali" },
    RegionalLanguage { code: "sd-IN", name: "Sindhi" },
    RegionalLanguage { code: "ur-IN", name: "Urdu" },
];

pub const AUTO_DETECT: &str = "auto";

pub fn regional_language(code: &str) -> Option<&'static RegionalLanguage> {
    REGIONAL_LANGUAGES
        .iter()
        .find(|language| language.code.eq_ignore_ascii_case(code))
}

pub fn is_regional(code: &str) -> bool {
    regional_language(code).is_some()
}

/// Pick the backend for a target language. Total: every code maps to exactly one backend.
pub fn select_backend(target_lang: &str) -> Backend {
    if is_regional(target_lang) {
        Backend::Regional
    } else {
        Backend::International
    }
}

/// Human-readable language name, or the code itself when unknown
pub fn language_name(code: &str) -> &str {
    if let Some(language) = regional_language(code) {
        return language.name;
    }
    match polly_language(code) {
        Some(language) => language.name,
        None => code,
    }
}

fn primary_subtag(code: &str) -> &str {
    code.split('-').next().unwrap_or(code)
}

/// Translation is skipped only when the source is known and shares the
/// target's primary language subtag (`hi` and `hi-IN` are the same language).
pub fn needs_translation(source_lang: &str, target_lang: &str) -> bool {
    if source_lang.eq_ignore_ascii_case(AUTO_DETECT) {
        return true;
    }
    !primary_subtag(source_lang).eq_ignore_ascii_case(primary_subtag(target_lang))
}
