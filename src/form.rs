//! Translator form controller.
//!
//! Holds everything the window shows: the language list, both selections, the
//! input and output buffers and the pending error dialog. The GUI only renders
//! this state and forwards user actions to it, so the whole flow can be driven
//! from tests with a mocked client.

use crate::error::{ErrorDialog, FormError};
use crate::i18n::LanguageMap;
use crate::translation::TranslationClient;
use std::sync::Arc;
use tracing::{error, info};

/// A validated translate request, ready to be sent to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationJob {
    pub text: String,
    pub source: String,
    pub target: String,
}

pub struct TranslatorForm {
    client: Arc<dyn TranslationClient>,
    languages: LanguageMap,
    source: Option<String>,
    target: Option<String>,
    input: String,
    output: String,
    dialog: Option<ErrorDialog>,
    in_flight: bool,
}

impl TranslatorForm {
    /// Build the form and populate both dropdowns from the client.
    ///
    /// Source defaults to the first language and destination to the second.
    /// With a single language both default to it; with none both stay unset.
    /// A failed fetch leaves the dropdowns empty and queues an error dialog.
    pub async fn initialize(client: Arc<dyn TranslationClient>) -> Self {
        let mut form = Self {
            client,
            languages: LanguageMap::new(),
            source: None,
            target: None,
            input: String::new(),
            output: String::new(),
            dialog: None,
            in_flight: false,
        };

        match form.client.supported_languages().await {
            Ok(languages) => {
                info!("Loaded {} supported languages", languages.len());

                let first = languages.get(0).map(|entry| entry.name.clone());
                let second = languages.get(1).map(|entry| entry.name.clone());

                form.target = second.or_else(|| first.clone());
                form.source = first;
                form.languages = languages;
            }
            Err(e) => {
                let _ = form.report(FormError::language_list(&e));
            }
        }

        form
    }

    /// Shared handle to the client, for dispatching off the UI thread
    pub fn client(&self) -> Arc<dyn TranslationClient> {
        Arc::clone(&self.client)
    }

    pub fn languages(&self) -> &LanguageMap {
        &self.languages
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Output only changes through a completed translation
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn dialog(&self) -> Option<&ErrorDialog> {
        self.dialog.as_ref()
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    pub fn select_source(&mut self, name: impl Into<String>) {
        self.source = Some(name.into());
    }

    pub fn select_target(&mut self, name: impl Into<String>) {
        self.target = Some(name.into());
    }

    pub fn swap_languages(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
    }

    /// The language list together with both selections, for the dropdowns
    pub fn selections_mut(&mut self) -> (&LanguageMap, &mut Option<String>, &mut Option<String>) {
        (&self.languages, &mut self.source, &mut self.target)
    }

    /// Validate the current selections and mark the form busy.
    ///
    /// Names that do not resolve produce an error dialog and no job, so the
    /// client is never called.
    pub fn begin_translation(&mut self) -> Result<TranslationJob, FormError> {
        if self.in_flight {
            return Err(FormError::Busy);
        }

        let source = self.resolve(self.source.as_deref());
        let target = self.resolve(self.target.as_deref());

        let (source, target) = match (source, target) {
            (Some(source), Some(target)) => (source, target),
            _ => return Err(self.report(FormError::InvalidSelection)),
        };

        self.in_flight = true;

        Ok(TranslationJob {
            text: self.input.trim().to_string(),
            source,
            target,
        })
    }

    /// Apply the client's answer: replace the output on success, keep it and
    /// queue a dialog on failure.
    pub fn finish_translation(&mut self, result: anyhow::Result<String>) -> Result<(), FormError> {
        self.in_flight = false;

        match result {
            Ok(translated) => {
                self.output = translated;
                Ok(())
            }
            Err(e) => Err(self.report(FormError::translation(&e))),
        }
    }

    /// Translate the input synchronously with respect to the form: validate,
    /// await the client, apply the result.
    pub async fn translate(&mut self) -> Result<(), FormError> {
        let job = self.begin_translation()?;
        let result = self
            .client
            .translate(&job.text, &job.source, &job.target)
            .await;
        self.finish_translation(result)
    }

    fn resolve(&self, name: Option<&str>) -> Option<String> {
        name.and_then(|name| self.languages.code_for(name))
            .map(str::to_string)
    }

    fn report(&mut self, err: FormError) -> FormError {
        error!("{}", err);
        self.dialog = Some(ErrorDialog::from(&err));
        err
    }
}
