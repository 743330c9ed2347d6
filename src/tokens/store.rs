//! Token store: the four per-language dictionaries used by the pipeline

use super::LocalizationTable;
use crate::error::{ResolveError, Result};
use crate::kv::Node;
use serde::Deserialize;

/// Which dictionary a token file feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `abilities_<language>.txt`: ability, talent and item tooltips
    Ability,
    /// `dota_<language>.txt`: hero names, hype and other general tokens
    General,
    /// `hero_lore_<language>.txt`
    Lore,
    /// `patchnotes_<language>.txt`
    Patch,
}

/// Raw token trees for one language; any file may be missing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageTokens {
    #[serde(default)]
    pub abilities: Option<Node>,
    #[serde(default)]
    pub general: Option<Node>,
    #[serde(default)]
    pub lore: Option<Node>,
    #[serde(default)]
    pub patch: Option<Node>,
}

/// Marker of source-language echo keys in translated files
const ENGLISH_ECHO_PREFIX: &str = "[english]";

/// Header scalar naming the file language, not a token
const LANGUAGE_KEY: &str = "Language";

/// Token dictionaries with default-language fallback
///
/// Built once per run, read-only afterwards.
#[derive(Debug, Clone)]
pub struct TokenStore {
    default_language: String,
    abilities: LocalizationTable,
    general: LocalizationTable,
    lore: LocalizationTable,
    patch: LocalizationTable,
}

impl TokenStore {
    pub fn new(default_language: impl Into<String>) -> Self {
        Self {
            default_language: default_language.into(),
            abilities: LocalizationTable::new(),
            general: LocalizationTable::new(),
            lore: LocalizationTable::new(),
            patch: LocalizationTable::new(),
        }
    }

    #[inline]
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Load every token file present for a language
    pub fn load(&mut self, language: &str, tokens: &LanguageTokens) -> Result<()> {
        let sources = [
            (TokenKind::Ability, tokens.abilities.as_ref()),
            (TokenKind::General, tokens.general.as_ref()),
            (TokenKind::Lore, tokens.lore.as_ref()),
            (TokenKind::Patch, tokens.patch.as_ref()),
        ];
        for (kind, tree) in sources {
            if let Some(tree) = tree {
                self.load_kind(kind, language, tree)?;
            }
        }
        Ok(())
    }

    /// Load one token tree into the dictionary for `kind`
    ///
    /// Returns the number of newly inserted tokens. Duplicates are ignored.
    pub fn load_kind(&mut self, kind: TokenKind, language: &str, tree: &Node) -> Result<usize> {
        let mut leaves = Vec::new();
        match tree.get("Tokens") {
            Some(tokens) => collect_leaves(tokens, &mut leaves),
            None => {
                collect_leaves(tree, &mut leaves);
                leaves.retain(|(key, _)| !key.eq_ignore_ascii_case(LANGUAGE_KEY));
            }
        }
        if leaves.is_empty() {
            return Err(ResolveError::InvalidTokenTree(format!(
                "{} holds no tokens for {}",
                tree.name, language
            )));
        }

        let table = self.table_mut(kind);
        let mut inserted = 0;
        let mut duplicates = 0;
        for (key, value) in leaves {
            if key.starts_with(ENGLISH_ECHO_PREFIX) {
                continue;
            }
            if table.insert(language, key, value) {
                inserted += 1;
            } else {
                duplicates += 1;
            }
        }

        tracing::debug!(?kind, language, inserted, duplicates, "Loaded token tree");
        Ok(inserted)
    }

    fn table(&self, kind: TokenKind) -> &LocalizationTable {
        match kind {
            TokenKind::Ability => &self.abilities,
            TokenKind::General => &self.general,
            TokenKind::Lore => &self.lore,
            TokenKind::Patch => &self.patch,
        }
    }

    fn table_mut(&mut self, kind: TokenKind) -> &mut LocalizationTable {
        match kind {
            TokenKind::Ability => &mut self.abilities,
            TokenKind::General => &mut self.general,
            TokenKind::Lore => &mut self.lore,
            TokenKind::Patch => &mut self.patch,
        }
    }

    /// Lookup with default-language fallback
    pub fn try_get(&self, kind: TokenKind, language: &str, key: &str) -> Result<&str> {
        self.table(kind)
            .find(language, key, &self.default_language)
            .ok_or_else(|| ResolveError::MissingLocalizationKey(key.to_string()))
    }

    /// Lookup with default-language fallback; a miss is the empty string
    pub fn get(&self, kind: TokenKind, language: &str, key: &str) -> String {
        self.try_get(kind, language, key)
            .map(str::to_string)
            .unwrap_or_default()
    }

    /// First key of `keys` that resolves
    pub fn first_of<'a, I>(&self, kind: TokenKind, language: &str, keys: I) -> Option<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        keys.into_iter()
            .find_map(|key| self.try_get(kind, language, key).ok())
            .map(str::to_string)
    }

    #[inline]
    pub fn ability(&self, language: &str, key: &str) -> String {
        self.get(TokenKind::Ability, language, key)
    }

    #[inline]
    pub fn general(&self, language: &str, key: &str) -> String {
        self.get(TokenKind::General, language, key)
    }

    #[inline]
    pub fn lore(&self, language: &str, key: &str) -> String {
        self.get(TokenKind::Lore, language, key)
    }

    #[inline]
    pub fn patch(&self, language: &str, key: &str) -> String {
        self.get(TokenKind::Patch, language, key)
    }
}

fn collect_leaves<'a>(node: &'a Node, out: &mut Vec<(&'a str, &'a str)>) {
    for child in node.children() {
        match child.as_str() {
            Some(value) => out.push((child.name.as_str(), value)),
            None => collect_leaves(child, out),
        }
    }
}
