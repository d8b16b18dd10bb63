//! Language mapping: the ordered display name → code table behind both dropdowns.
//!
//! Order is whatever the provider returned. Nothing here sorts.

/// One selectable language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Human-readable name shown in the dropdown (e.g., "French")
    pub name: String,

    /// Code sent to the translation service (e.g., "fr")
    pub code: String,
}

/// Ordered mapping from display name to language code.
///
/// Inserting a name that is already present replaces its code but keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageMap {
    entries: Vec<LanguageEntry>,
}

impl LanguageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a language, or update the code of an existing display name.
    pub fn insert(&mut self, name: impl Into<String>, code: impl Into<String>) {
        let name = name.into();
        let code = code.into();

        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.code = code,
            None => self.entries.push(LanguageEntry { name, code }),
        }
    }

    /// Resolve a display name to its language code (exact match).
    pub fn code_for(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.code.as_str())
    }

    /// Resolve a language code back to its display name.
    pub fn name_for(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.name.as_str())
    }

    /// Check whether a display name is part of the mapping
    pub fn contains(&self, name: &str) -> bool {
        self.code_for(name).is_some()
    }

    pub fn get(&self, index: usize) -> Option<&LanguageEntry> {
        self.entries.get(index)
    }

    /// Display names in provider order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N, C> FromIterator<(N, C)> for LanguageMap
where
    N: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, C)>>(iter: I) -> Self {
        let mut map = LanguageMap::new();
        for (name, code) in iter {
            map.insert(name, code);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LanguageMap {
        [("English", "en"), ("French", "fr"), ("Spanish", "es")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_preserves_insertion_order() {
        let languages: LanguageMap = [("Zulu", "zu"), ("Afrikaans", "af"), ("Malay", "ms")]
            .into_iter()
            .collect();

        let names: Vec<&str> = languages.names().collect();
        assert_eq!(names, vec!["Zulu", "Afrikaans", "Malay"]);
    }

    #[test]
    fn test_code_for_known_name() {
        let languages = sample();
        assert_eq!(languages.code_for("French"), Some("fr"));
        assert_eq!(languages.code_for("Spanish"), Some("es"));
    }

    #[test]
    fn test_code_for_is_exact_match() {
        let languages = sample();
        assert_eq!(languages.code_for("french"), None);
        assert_eq!(languages.code_for("French "), None);
        assert_eq!(languages.code_for(""), None);
    }

    #[test]
    fn test_name_for_code() {
        let languages = sample();
        assert_eq!(languages.name_for("en"), Some("English"));
        assert_eq!(languages.name_for("de"), None);
    }

    #[test]
    fn test_insert_existing_name_keeps_position() {
        let mut languages = sample();
        languages.insert("English", "en-GB");

        assert_eq!(languages.len(), 3);
        assert_eq!(languages.get(0).map(|e| e.code.as_str()), Some("en-GB"));
    }

    #[test]
    fn test_empty_map() {
        let languages = LanguageMap::new();
        assert!(languages.is_empty());
        assert_eq!(languages.len(), 0);
        assert!(languages.get(0).is_none());
        assert!(!languages.contains("English"));
    }
}
