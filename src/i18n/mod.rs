//! Language lists for the translator form.
//!
//! # Architecture
//!
//! - `registry`: Built-in table of the languages Google Translate accepts
//! - `language`: Ordered display name → language code mapping handed to the form
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{LanguageMap, LanguageRegistry};
//!
//! let languages: LanguageMap = LanguageRegistry::get().to_language_map();
//! assert_eq!(languages.code_for("French"), Some("fr"));
//! ```

mod language;
mod registry;

pub use language::{LanguageEntry, LanguageMap};
pub use registry::{LanguageConfig, LanguageRegistry};
