use anyhow::{bail, Context, Result};
use std::time::Duration;

/// Default endpoint of the public Google Translate web API
pub const DEFAULT_API_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Largest payload the Google web endpoint accepts in one request
pub const DEFAULT_MAX_TEXT_CHARS: usize = 5000;

/// Visual theme of the translator window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => bail!("Unknown theme '{}' (expected 'light' or 'dark')", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Translation service
    pub api_url: String,
    pub request_timeout: Option<Duration>,
    pub max_text_chars: usize,

    // Window
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: None,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
            theme: Theme::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Translation service
            api_url: std::env::var("TRANSLATOR_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            request_timeout: match std::env::var("TRANSLATOR_TIMEOUT_SECS") {
                Ok(v) => Some(Duration::from_secs(
                    v.parse()
                        .with_context(|| format!("TRANSLATOR_TIMEOUT_SECS is not a number: '{}'", v))?,
                )),
                Err(_) => None,
            },
            max_text_chars: std::env::var("TRANSLATOR_MAX_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_TEXT_CHARS),

            // Window
            theme: match std::env::var("TRANSLATOR_THEME") {
                Ok(v) => Theme::parse(&v).context("TRANSLATOR_THEME is invalid")?,
                Err(_) => Theme::default(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "TRANSLATOR_API_URL",
        "TRANSLATOR_TIMEOUT_SECS",
        "TRANSLATOR_MAX_CHARS",
        "TRANSLATOR_THEME",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().expect("defaults should load");

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.max_text_chars, 5000);
        assert_eq!(config.theme, Theme::Light);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("TRANSLATOR_API_URL", "http://localhost:9999/translate");
        std::env::set_var("TRANSLATOR_TIMEOUT_SECS", "15");
        std::env::set_var("TRANSLATOR_MAX_CHARS", "200");
        std::env::set_var("TRANSLATOR_THEME", "Dark");

        let config = Config::from_env().expect("overrides should load");
        clear_env();

        assert_eq!(config.api_url, "http://localhost:9999/translate");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.max_text_chars, 200);
        assert_eq!(config.theme, Theme::Dark);
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout() {
        clear_env();
        std::env::set_var("TRANSLATOR_TIMEOUT_SECS", "soon");

        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("TRANSLATOR_TIMEOUT_SECS"));
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_max_chars_falls_back() {
        clear_env();
        std::env::set_var("TRANSLATOR_MAX_CHARS", "lots");

        let config = Config::from_env().expect("should fall back to default");
        clear_env();

        assert_eq!(config.max_text_chars, DEFAULT_MAX_TEXT_CHARS);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!(Theme::parse("light").unwrap(), Theme::Light);
        assert_eq!(Theme::parse(" DARK ").unwrap(), Theme::Dark);
        assert!(Theme::parse("journal").is_err());
    }
}
