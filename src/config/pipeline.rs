//! Pipeline configuration structures

use super::TalentLayout;
use crate::error::{ResolveError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Run-wide configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Language every token lookup falls back to
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Source language -> presentation locales, e.g. "brazilian" -> ["pt-BR", "pt"]
    #[serde(default = "default_languages")]
    pub languages: BTreeMap<String, Vec<String>>,
    /// Languages formatting decimals with a comma
    #[serde(default = "default_decimal_comma_languages")]
    pub decimal_comma_languages: Vec<String>,
    #[serde(default)]
    pub talent_layout: TalentLayout,
    #[serde(default = "default_expected_talent_count")]
    pub expected_talent_count: usize,
}

fn default_language() -> String {
    "english".to_string()
}

fn default_languages() -> BTreeMap<String, Vec<String>> {
    let mut map = BTreeMap::new();
    map.insert("english".to_string(), vec!["en-US".to_string()]);
    map
}

fn default_decimal_comma_languages() -> Vec<String> {
    [
        "brazilian",
        "czech",
        "danish",
        "dutch",
        "finnish",
        "french",
        "german",
        "hungarian",
        "italian",
        "polish",
        "portuguese",
        "romanian",
        "russian",
        "spanish",
        "latam",
        "swedish",
        "turkish",
        "ukrainian",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_expected_talent_count() -> usize {
    8
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            languages: default_languages(),
            decimal_comma_languages: default_decimal_comma_languages(),
            talent_layout: TalentLayout::default(),
            expected_talent_count: default_expected_talent_count(),
        }
    }
}

impl PipelineConfig {
    /// Load and validate a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.default_language.trim().is_empty() {
            return Err(ResolveError::InvalidConfig(
                "default_language is empty".to_string(),
            ));
        }
        if let Some((language, _)) = self.languages.iter().find(|(_, locales)| locales.is_empty()) {
            return Err(ResolveError::InvalidConfig(format!(
                "language {} has no locales",
                language
            )));
        }
        if !self.languages.contains_key(&self.default_language) {
            return Err(ResolveError::InvalidConfig(format!(
                "default language {} is not configured",
                self.default_language
            )));
        }
        if self.talent_layout.per_row == 0 {
            return Err(ResolveError::InvalidConfig(
                "talent_layout.per_row must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Presentation locales for a source language
    pub fn locales(&self, language: &str) -> &[String] {
        self.languages
            .get(language)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    #[inline]
    pub fn uses_decimal_comma(&self, language: &str) -> bool {
        self.decimal_comma_languages
            .iter()
            .any(|l| l.eq_ignore_ascii_case(language))
    }
}
