//! Patch note records

use serde::Serialize;

/// One resolved note line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub indent: u32,
    pub value: String,
    pub info: Option<String>,
}

/// Notes about one item, ability or creep
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityNote {
    pub internal_name: String,
    pub title: Option<String>,
    pub notes: Vec<Note>,
}

/// Notes about one hero, its abilities and its talents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroNote {
    pub internal_name: String,
    pub title: Option<String>,
    pub notes: Vec<Note>,
    pub ability_notes: Vec<EntityNote>,
    pub talent_notes: Vec<Note>,
}

/// A patch in one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchNote {
    pub patch_number: String,
    pub language: String,
    pub timestamp: i64,
    pub website: Option<String>,
    pub generic_notes: Vec<Note>,
    pub hero_notes: Vec<HeroNote>,
    pub item_notes: Vec<EntityNote>,
    pub neutral_item_notes: Vec<EntityNote>,
    pub neutral_creep_notes: Vec<EntityNote>,
}

impl PatchNote {
    pub fn is_empty(&self) -> bool {
        self.generic_notes.is_empty()
            && self.hero_notes.is_empty()
            && self.item_notes.is_empty()
            && self.neutral_item_notes.is_empty()
            && self.neutral_creep_notes.is_empty()
    }
}
