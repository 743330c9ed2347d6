//! Pipeline input and output records

use crate::kv::Node;
use crate::model::{Ability, BuildFailure, Hero, Item, Localized, PatchNote, Talent};
use crate::tokens::LanguageTokens;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lookup sources built once per run
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSources {
    /// Token trees per source language
    #[serde(default)]
    pub tokens: BTreeMap<String, LanguageTokens>,
    /// `npc_ability_ids.txt` tree
    pub ids: Node,
}

/// Raw definition trees for one run
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineInput {
    /// `npc_abilities.txt`: hero abilities and talents
    pub abilities: Node,
    /// `npc_heroes.txt`
    pub heroes: Node,
    /// `items.txt`
    pub items: Node,
    /// `neutral_items.txt`
    #[serde(default)]
    pub neutral_items: Option<Node>,
    /// Patch manifest entries
    #[serde(default)]
    pub patches: Vec<Node>,
}

/// Records of one source language, before locale fan-out
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageOutput {
    pub abilities: Vec<Ability>,
    pub talents: Vec<Talent>,
    pub heroes: Vec<Hero>,
    pub items: Vec<Item>,
    pub patch_notes: Vec<PatchNote>,
    pub failures: Vec<BuildFailure>,
}

/// Id-stamped records for every presentation locale
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PipelineOutput {
    pub abilities: Vec<Localized<Ability>>,
    pub talents: Vec<Localized<Talent>>,
    pub heroes: Vec<Localized<Hero>>,
    pub items: Vec<Localized<Item>>,
    pub patch_notes: Vec<Localized<PatchNote>>,
    pub failures: Vec<BuildFailure>,
}

impl PipelineOutput {
    /// Total number of stamped records
    pub fn record_count(&self) -> usize {
        self.abilities.len()
            + self.talents.len()
            + self.heroes.len()
            + self.items.len()
            + self.patch_notes.len()
    }
}
