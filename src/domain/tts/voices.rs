use super::language::is_regional;
use serde::Serialize;
use std::collections::HashSet;

pub const SARVAM_FEMALE_SPEAKERS: &[&str] = &["anushka", "manisha", "vidya", "arya"];
pub const SARVAM_MALE_SPEAKERS: &[&str] = &["abhilash", "karun", "hitesh"];
pub const DEFAULT_SARVAM_SPEAKER: &str = "abhilash";

/// A language supported by Polly and the voices that speak it.
/// The first voice is the language's default.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PollyLanguage {
    pub code: &'static str,
    pub name: &'static str,
    pub voices: &'static [&'static str],
}

impl PollyLanguage {
    pub fn default_voice(&self) -> &'static str {
        self.voices[0]
    }

    fn voice(&self, requested: &str) -> Option<&'static str> {
        self.voices
            .iter()
            .copied()
            .find(|voice| voice.eq_ignore_ascii_case(requested))
    }
}

pub const DEFAULT_POLLY_LANGUAGE: &str = "en-US";

#[rustfmt::skip]
pub const POLLY_LANGUAGES: &[PollyLanguage] = &[
    PollyLanguage {
        code: "en-US",
        name: "English",
        voices: &[
            "Joanna", "Matthew", "Ivy", "Justin", "Kendra", "Kimberly", "Salli", "Joey", "Kevin",
            "Ruth", "Stephen", "Danielle", "Gregory",
        ],
    },
    PollyLanguage { code: "en-GB", name: "British English", voices: &["Amy", "Emma", "Brian", "Arthur"] },
    PollyLanguage { code: "en-AU", name: "Australian English", voices: &["Nicole", "Olivia", "Russell"] },
    PollyLanguage { code: "es-ES", name: "Spanish", voices: &["Lucia", "Conchita", "Enrique", "Sergio"] },
    PollyLanguage { code: "es-US", name: "US Spanish", voices: &["Lupe", "Penelope", "Miguel", "Pedro"] },
    PollyLanguage { code: "es-MX", name: "Mexican Spanish", voices: &["Mia", "Andres"] },
    PollyLanguage { code: "fr-FR", name: "French", voices: &["Lea", "Celine", "Mathieu", "Remi"] },
    PollyLanguage { code: "fr-CA", name: "Canadian French", voices: &["Chantal", "Gabrielle", "Liam"] },
    PollyLanguage { code: "de-DE", name: "German", voices: &["Vicki", "Marlene", "Hans", "Daniel"] },
    PollyLanguage { code: "it-IT", name: "Italian", voices: &["Bianca", "Carla", "Giorgio", "Adriano"] },
    PollyLanguage { code: "pt-BR", name: "Brazilian Portuguese", voices: &["Camila", "Vitoria", "Ricardo", "Thiago"] },
    PollyLanguage { code: "pt-PT", name: "Portuguese", voices: &["Ines", "Cristiano"] },
    PollyLanguage { code: "nl-NL", name: "Dutch", voices: &["Lotte", "Ruben", "Laura"] },
    PollyLanguage { code: "ru-RU", name: "Russian", voices: &["Tatyana", "Maxim"] },
    PollyLanguage { code: "pl-PL", name: "Polish", voices: &["Ewa", "Maja", "Jacek", "Jan", "Ola"] },
    PollyLanguage { code: "sv-SE", name: "Swedish", voices: &["Astrid", "Elin"] },
    PollyLanguage { code: "tr-TR", name: "Turkish", voices: &["Filiz", "Burcu"] },
    PollyLanguage { code: "ja-JP", name: "Japanese", voices: &["Mizuki", "Takumi", "Kazuha", "Tomoko"] },
    PollyLanguage { code: "ko-KR", name: "Korean", voices: &["Seoyeon"] },
    PollyLanguage { code: "cmn-CN", name: "Mandarin Chinese", voices: &["Zhiyu"] },
    PollyLanguage { code: "arb", name: "Arabic", voices: &["Zeina"] },
    PollyLanguage { code: "ar-AE", name: "Gulf Arabic", voices: &["Hala", "Zayd"] },
];

pub fn polly_language(code: &str) -> Option<&'static PollyLanguage> {
    POLLY_LANGUAGES
        .iter()
        .find(|language| language.code.eq_ignore_ascii_case(code))
}

/// The Polly language and voice a request ends up using
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceSelection {
    pub language_code: &'static str,
    pub voice: &'static str,
    pub language_fallback: bool,
    pub voice_fallback: bool,
}

/// Resolve a requested language/voice pair against the Polly table.
///
/// An unsupported language falls back to [`DEFAULT_POLLY_LANGUAGE`]; a voice
/// that does not speak the resolved language falls back to its first voice.
pub fn resolve_polly_voice(language: &str, voice: &str) -> VoiceSelection {
    let (resolved, language_fallback) = match polly_language(language) {
        Some(found) => (found, false),
        None => (default_polly_language(), true),
    };

    let (voice, voice_fallback) = match resolved.voice(voice) {
        Some(found) => (found, false),
        None => (resolved.default_voice(), true),
    };

    VoiceSelection {
        language_code: resolved.code,
        voice,
        language_fallback,
        voice_fallback,
    }
}

fn default_polly_language() -> &'static PollyLanguage {
    polly_language(DEFAULT_POLLY_LANGUAGE).unwrap_or(&POLLY_LANGUAGES[0])
}

pub fn is_sarvam_speaker(speaker: &str) -> bool {
    SARVAM_FEMALE_SPEAKERS
        .iter()
        .chain(SARVAM_MALE_SPEAKERS)
        .any(|known| known.eq_ignore_ascii_case(speaker))
}

/// Check the static tables once at startup
pub fn validate_voice_tables() -> Result<(), String> {
    if polly_language(DEFAULT_POLLY_LANGUAGE).is_none() {
        return Err(format!(
            "default Polly language {} missing from voice table",
            DEFAULT_POLLY_LANGUAGE
        ));
    }

    if !is_sarvam_speaker(DEFAULT_SARVAM_SPEAKER) {
        return Err(format!(
            "default Sarvam speaker {} is not a known speaker",
            DEFAULT_SARVAM_SPEAKER
        ));
    }

    let mut codes = HashSet::new();
    for language in POLLY_LANGUAGES {
        if language.voices.is_empty() {
            return Err(format!("Polly language {} has no voices", language.code));
        }
        if !codes.insert(language.code.to_ascii_lowercase()) {
            return Err(format!("Polly language {} listed twice", language.code));
        }
        if is_regional(language.code) {
            return Err(format!(
                "Polly language {} is routed to the regional backend",
                language.code
            ));
        }
        let unique: HashSet<_> = language.voices.iter().collect();
        if unique.len() != language.voices.len() {
            return Err(format!("Polly language {} repeats a voice", language.code));
        }
    }

    Ok(())
}
