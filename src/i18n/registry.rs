//! Language registry: the languages the Google Translate web endpoint accepts.
//!
//! The free endpoint has no discovery call, so the list ships with the binary.
//! It uses a singleton pattern with `OnceLock`, sorted by display name on first
//! access.

use crate::i18n::LanguageMap;
use std::sync::OnceLock;

/// A language supported by the translation service.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Code the service expects (mostly ISO 639-1, e.g. "fr", "zh-CN", "haw")
    pub code: &'static str,

    /// English display name (e.g., "French", "Chinese (Simplified)")
    pub name: &'static str,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| {
            let mut languages = google_languages();
            languages.sort_by(|a, b| a.name.cmp(b.name));
            LanguageRegistry { languages }
        })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get a language configuration by its display name.
    pub fn get_by_name(&self, name: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.name == name)
    }

    /// All languages, sorted by display name.
    pub fn list_all(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// Build the dropdown mapping, keeping the registry's order.
    pub fn to_language_map(&self) -> LanguageMap {
        self.languages
            .iter()
            .map(|lang| (lang.name, lang.code))
            .collect()
    }
}

macro_rules! languages {
    ($($name:literal => $code:literal),* $(,)?) => {
        vec![$(LanguageConfig { code: $code, name: $name }),*]
    };
}

fn google_languages() -> Vec<LanguageConfig> {
    languages![
        "Afrikaans" => "af",
        "Albanian" => "sq",
        "Amharic" => "am",
        "Arabic" => "ar",
        "Armenian" => "hy",
        "Assamese" => "as",
        "Aymara" => "ay",
        "Azerbaijani" => "az",
        "Bambara" => "bm",
        "Basque" => "eu",
        "Belarusian" => "be",
        "Bengali" => "bn",
        "Bhojpuri" => "bho",
        "Bosnian" => "bs",
        "Bulgarian" => "bg",
        "Catalan" => "ca",
        "Cebuano" => "ceb",
        "Chichewa" => "ny",
        "Chinese (Simplified)" => "zh-CN",
        "Chinese (Traditional)" => "zh-TW",
        "Corsican" => "co",
        "Croatian" => "hr",
        "Czech" => "cs",
        "Danish" => "da",
        "Dhivehi" => "dv",
        "Dogri" => "doi",
        "Dutch" => "nl",
        "English" => "en",
        "Esperanto" => "eo",
        "Estonian" => "et",
        "Ewe" => "ee",
        "Filipino" => "tl",
        "Finnish" => "fi",
        "French" => "fr",
        "Frisian" => "fy",
        "Galician" => "gl",
        "Georgian" => "ka",
        "German" => "de",
        "Greek" => "el",
        "Guarani" => "gn",
        "Gujarati" => "gu",
        "Haitian Creole" => "ht",
        "Hausa" => "ha",
        "Hawaiian" => "haw",
        "Hebrew" => "iw",
        "Hindi" => "hi",
        "Hmong" => "hmn",
        "Hungarian" => "hu",
        "Icelandic" => "is",
        "Igbo" => "ig",
        "Ilocano" => "ilo",
        "Indonesian" => "id",
        "Irish" => "ga",
        "Italian" => "it",
        "Japanese" => "ja",
        "Javanese" => "jw",
        "Kannada" => "kn",
        "Kazakh" => "kk",
        "Khmer" => "km",
        "Kinyarwanda" => "rw",
        "Konkani" => "gom",
        "Korean" => "ko",
        "Krio" => "kri",
        "Kurdish (Kurmanji)" => "ku",
        "Kurdish (Sorani)" => "ckb",
        "Kyrgyz" => "ky",
        "Lao" => "lo",
        "Latin" => "la",
        "Latvian" => "lv",
        "Lingala" => "ln",
        "Lithuanian" => "lt",
        "Luganda" => "lg",
        "Luxembourgish" => "lb",
        "Macedonian" => "mk",
        "Maithili" => "mai",
        "Malagasy" => "mg",
        "Malay" => "ms",
        "Malayalam" => "ml",
        "Maltese" => "mt",
        "Maori" => "mi",
        "Marathi" => "mr",
        "Meiteilon (Manipuri)" => "mni-Mtei",
        "Mizo" => "lus",
        "Mongolian" => "mn",
        "Myanmar" => "my",
        "Nepali" => "ne",
        "Norwegian" => "no",
        "Odia (Oriya)" => "or",
        "Oromo" => "om",
        "Pashto" => "ps",
        "Persian" => "fa",
        "Polish" => "pl",
        "Portuguese" => "pt",
        "Punjabi" => "pa",
        "Quechua" => "qu",
        "Romanian" => "ro",
        "Russian" => "ru",
        "Samoan" => "sm",
        "Sanskrit" => "sa",
        "Scots Gaelic" => "gd",
        "Sepedi" => "nso",
        "Serbian" => "sr",
        "Sesotho" => "st",
        "Shona" => "sn",
        "Sindhi" => "sd",
        "Sinhala" => "si",
        "Slovak" => "sk",
        "Slovenian" => "sl",
        "Somali" => "so",
        "Spanish" => "es",
        "Sundanese" => "su",
        "Swahili" => "sw",
        "Swedish" => "sv",
        "Tajik" => "tg",
        "Tamil" => "ta",
        "Tatar" => "tt",
        "Telugu" => "te",
        "Thai" => "th",
        "Tigrinya" => "ti",
        "Tsonga" => "ts",
        "Turkish" => "tr",
        "Turkmen" => "tk",
        "Twi" => "ak",
        "Ukrainian" => "uk",
        "Urdu" => "ur",
        "Uyghur" => "ug",
        "Uzbek" => "uz",
        "Vietnamese" => "vi",
        "Welsh" => "cy",
        "Xhosa" => "xh",
        "Yiddish" => "yi",
        "Yoruba" => "yo",
        "Zulu" => "zu",
    ]
}
