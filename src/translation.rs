use crate::config::Config;
use crate::i18n::{LanguageMap, LanguageRegistry};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

/// The translation service the form delegates to.
///
/// Implementations own transport, language-code validation and rate limiting.
/// The form only ever sees display names, codes and strings.
#[async_trait]
pub trait TranslationClient: Send + Sync {
    /// Ordered display name → code mapping for both dropdowns
    async fn supported_languages(&self) -> Result<LanguageMap>;

    /// Translate `text` from the `source` language code to the `target` one
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;
}

/// Query string of the Google Translate web endpoint
#[derive(Debug, Serialize)]
struct TranslateQuery<'a> {
    client: &'static str,
    sl: &'a str,
    tl: &'a str,
    dt: &'static str,
    q: &'a str,
}

/// Client for the public Google Translate web endpoint (`client=gtx`).
pub struct GoogleTranslateClient {
    http: reqwest::Client,
    api_url: String,
    max_text_chars: usize,
}

impl GoogleTranslateClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36");

        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            max_text_chars: config.max_text_chars,
        })
    }
}

#[async_trait]
impl TranslationClient for GoogleTranslateClient {
    async fn supported_languages(&self) -> Result<LanguageMap> {
        Ok(LanguageRegistry::get().to_language_map())
    }

    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let length = text.chars().count();
        if length > self.max_text_chars {
            bail!(
                "Text is too long to translate ({} characters, limit is {})",
                length,
                self.max_text_chars
            );
        }

        // Nothing to send
        if text.trim().is_empty() || source == target {
            return Ok(text.to_string());
        }

        debug!("Translating {} characters from {} to {}", length, source, target);

        let query = TranslateQuery {
            client: "gtx",
            sl: source,
            tl: target,
            dt: "t",
            q: text,
        };

        let response = self
            .http
            .get(&self.api_url)
            .query(&query)
            .send()
            .await
            .context("Failed to send request to the translation service")?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("Translation service is rate limiting requests");
            bail!("Too many requests to the translation service ({}), try again later", status);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            bail!("Translation service error ({}): {}", status, body);
        }

        let json: serde_json::Value = response
            .json()
            .await
            .context("Failed to parse translation service response")?;

        let translated = extract_translation(&json);
        if translated.is_empty() {
            bail!("No translation found for the given text");
        }

        Ok(translated)
    }
}

/// Join the translated segments of a `translate_a/single` response.
///
/// The body is a nested array; `json[0]` holds one `[translated, original, ..]`
/// entry per sentence.
fn extract_translation(json: &serde_json::Value) -> String {
    json.get(0)
        .and_then(|v| v.as_array())
        .map(|segments| {
            segments
                .iter()
                .filter_map(|segment| segment.get(0).and_then(|v| v.as_str()))
                .collect()
        })
        .unwrap_or_default()
}

/// Scriptable stand-in for the translation service.
#[cfg(test)]
pub(crate) mod mock {
    use super::TranslationClient;
    use crate::i18n::LanguageMap;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use std::sync::Mutex;

    pub(crate) struct MockTranslationClient {
        languages: std::result::Result<Vec<(String, String)>, String>,
        reply: std::result::Result<String, String>,
        calls: Mutex<Vec<(String, String, String)>>,
    }

    impl MockTranslationClient {
        pub(crate) fn new(languages: &[(&str, &str)]) -> Self {
            Self {
                languages: Ok(languages
                    .iter()
                    .map(|(name, code)| (name.to_string(), code.to_string()))
                    .collect()),
                reply: Ok(String::new()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn failing_languages(message: &str) -> Self {
            Self {
                languages: Err(message.to_string()),
                ..Self::new(&[])
            }
        }

        pub(crate) fn replying(mut self, text: &str) -> Self {
            self.reply = Ok(text.to_string());
            self
        }

        pub(crate) fn failing(mut self, message: &str) -> Self {
            self.reply = Err(message.to_string());
            self
        }

        pub(crate) fn translate_calls(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub(crate) fn last_call(&self) -> Option<(String, String, String)> {
            self.calls.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl TranslationClient for MockTranslationClient {
        async fn supported_languages(&self) -> Result<LanguageMap> {
            match &self.languages {
                Ok(pairs) => Ok(pairs.iter().cloned().collect()),
                Err(message) => Err(anyhow!(message.clone())),
            }
        }

        async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push((text.to_string(), source.to_string(), target.to_string()));

            self.reply.clone().map_err(|message| anyhow!(message))
        }
    }
}
