//! Localization table with fallback lookup

use ahash::AHashMap;

/// `(language, key) -> string` dictionary; keys are stored lower-cased
#[derive(Debug, Clone, Default)]
pub struct LocalizationTable {
    languages: AHashMap<String, AHashMap<String, String>>,
}

impl LocalizationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token; an existing key for the same language wins
    ///
    /// Returns `false` when the key was already present.
    pub fn insert(&mut self, language: &str, key: &str, value: &str) -> bool {
        let tokens = self
            .languages
            .entry(language.to_ascii_lowercase())
            .or_default();
        let key = key.to_lowercase();
        if tokens.contains_key(&key) {
            return false;
        }
        tokens.insert(key, value.to_string());
        true
    }

    /// Exact lookup without fallback
    #[inline]
    pub fn lookup(&self, language: &str, key: &str) -> Option<&str> {
        self.languages
            .get(&language.to_ascii_lowercase())
            .and_then(|tokens| tokens.get(&key.to_lowercase()))
            .map(String::as_str)
    }

    /// Lookup in `language`, then `fallback_language`
    pub fn find(&self, language: &str, key: &str, fallback_language: &str) -> Option<&str> {
        self.lookup(language, key)
            .or_else(|| self.lookup(fallback_language, key))
    }

    /// Lookup with fallback; a miss resolves to the empty string
    pub fn get(&self, language: &str, key: &str, fallback_language: &str) -> String {
        self.find(language, key, fallback_language)
            .map(str::to_string)
            .unwrap_or_default()
    }

    /// Number of tokens loaded for a language
    pub fn len(&self, language: &str) -> usize {
        self.languages
            .get(&language.to_ascii_lowercase())
            .map(|tokens| tokens.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.languages.values().all(|tokens| tokens.is_empty())
    }
}
