//! Patch manifest -> `PatchNote`

use super::{hero_internal_name, NameIndex};
use crate::builder::first_number;
use crate::error::ResolveError;
use crate::kv::Node;
use crate::model::{EntityNote, HeroNote, Note, PatchNote};
use crate::patterns::{ITEM_NAME, ITEM_SECTION, NEUTRAL_ITEM_SECTION};
use crate::tokens::{TokenKind, TokenStore};
use ahash::AHashMap;

/// One-character marker in front of note references
const REFERENCE_MARKER: char = '#';

/// Hero child sections that are not notes themselves
const HERO_SECTIONS: [&str; 3] = ["hero_notes", "talent_notes", "abilities"];

fn anomaly(patch: &str, detail: String) {
    tracing::warn!(patch, error = %ResolveError::StructuralAnomaly(detail), "Patch manifest anomaly");
}

/// Entity notes keyed by internal name, in first-seen order
#[derive(Default)]
struct MergedNotes {
    notes: Vec<EntityNote>,
    index: AHashMap<String, usize>,
}

impl MergedNotes {
    fn push(&mut self, note: EntityNote) {
        let key = note.internal_name.to_ascii_lowercase();
        match self.index.get(&key) {
            Some(&i) => self.notes[i].notes.extend(note.notes),
            None => {
                self.index.insert(key, self.notes.len());
                self.notes.push(note);
            }
        }
    }

    fn into_vec(self) -> Vec<EntityNote> {
        self.notes
    }
}

/// Composes patch notes for one language
#[derive(Debug, Clone, Copy)]
pub struct PatchComposer<'a> {
    tokens: &'a TokenStore,
    names: &'a NameIndex,
    language: &'a str,
}

impl<'a> PatchComposer<'a> {
    pub fn new(tokens: &'a TokenStore, names: &'a NameIndex, language: &'a str) -> Self {
        Self {
            tokens,
            names,
            language,
        }
    }

    /// Resolve a note reference through the patch dictionary
    fn text(&self, reference: &str) -> String {
        let key = reference.trim();
        let key = key.strip_prefix(REFERENCE_MARKER).unwrap_or(key);
        self.tokens.get(TokenKind::Patch, self.language, key)
    }

    /// A scalar reference or a `{ note|text, indent_level|indent, info }` block
    fn note(&self, node: &Node) -> Option<Note> {
        let (reference, indent, info) = match node.as_str() {
            Some(reference) => (reference, 0, None),
            None => {
                let reference = node.get_str("note").or_else(|| node.get_str("text"))?;
                let indent = first_number(node, "indent_level")
                    .or_else(|| first_number(node, "indent"))
                    .unwrap_or(0);
                (reference, indent, node.get_str("info"))
            }
        };

        let value = self.text(reference);
        if value.trim().is_empty() {
            tracing::debug!(language = self.language, reference, "Note reference did not resolve");
            return None;
        }
        Some(Note {
            indent,
            value,
            info: info.map(|i| self.text(i)).filter(|i| !i.trim().is_empty()),
        })
    }

    fn notes<'n>(&self, nodes: impl IntoIterator<Item = &'n Node>) -> Vec<Note> {
        nodes.into_iter().filter_map(|n| self.note(n)).collect()
    }

    fn entity_note(&self, node: &Node) -> EntityNote {
        let notes = if node.is_collection() && node.get("note").is_none() && node.get("text").is_none() {
            self.notes(node.children())
        } else {
            self.notes(std::iter::once(node))
        };
        EntityNote {
            title: self.names.title(&node.name),
            internal_name: node.name.clone(),
            notes,
        }
    }

    fn hero_note(&self, node: &Node) -> HeroNote {
        let internal_name = hero_internal_name(&node.name);
        let notes = match node.get("hero_notes") {
            Some(section) => self.notes(section.children()),
            None => self.notes(node.children().iter().filter(|child| {
                !HERO_SECTIONS
                    .iter()
                    .any(|s| child.name.eq_ignore_ascii_case(s))
            })),
        };
        let talent_notes = node
            .get("talent_notes")
            .map(|section| self.notes(section.children()))
            .unwrap_or_default();
        let ability_notes = node
            .get("abilities")
            .map(|section| section.children().iter().map(|a| self.entity_note(a)).collect())
            .unwrap_or_default();

        HeroNote {
            title: self.names.title(&internal_name),
            internal_name,
            notes,
            ability_notes,
            talent_notes,
        }
    }

    fn empty_hero_note(&self, internal_name: &str) -> HeroNote {
        HeroNote {
            internal_name: internal_name.to_string(),
            title: self.names.title(internal_name),
            notes: Vec::new(),
            ability_notes: Vec::new(),
            talent_notes: Vec::new(),
        }
    }

    /// Compose one manifest entry
    pub fn compose(&self, manifest: &Node) -> PatchNote {
        let patch_number = manifest
            .get_str("patch_name")
            .or_else(|| manifest.get_str("patch_number"))
            .unwrap_or(manifest.name.as_str())
            .trim()
            .to_string();

        let timestamp = match manifest
            .get("patch_timestamp")
            .or_else(|| manifest.get("timestamp"))
            .map(|n| n.parse_scalar::<i64>())
        {
            Some(Ok(timestamp)) => timestamp,
            Some(Err(e)) => {
                anomaly(&patch_number, e.to_string());
                0
            }
            None => {
                anomaly(&patch_number, "missing patch timestamp".to_string());
                0
            }
        };

        let generic_notes = manifest
            .get("generic")
            .map(|section| self.notes(section.children()))
            .unwrap_or_default();

        let mut items = MergedNotes::default();
        let mut neutral_items = MergedNotes::default();
        let mut neutral_creep_notes = Vec::new();
        let mut hero_notes: Vec<HeroNote> = Vec::new();
        let mut flat_abilities = Vec::new();

        for section in manifest.children().iter().filter(|n| n.is_collection()) {
            let name = section.name.as_str();
            if NEUTRAL_ITEM_SECTION.is_match(name) || ITEM_SECTION.is_match(name) {
                let target = if NEUTRAL_ITEM_SECTION.is_match(name) {
                    &mut neutral_items
                } else {
                    &mut items
                };
                for entry in section.children() {
                    if !ITEM_NAME.is_match(&entry.name) {
                        anomaly(
                            &patch_number,
                            format!("{} in section {} is not an item name", entry.name, name),
                        );
                    }
                    target.push(self.entity_note(entry));
                }
            } else if name.eq_ignore_ascii_case("neutral_creeps") {
                neutral_creep_notes.extend(section.children().iter().map(|c| self.entity_note(c)));
            } else if name.eq_ignore_ascii_case("heroes") {
                hero_notes.extend(
                    section
                        .children()
                        .iter()
                        .filter(|n| n.is_collection())
                        .map(|n| self.hero_note(n)),
                );
            } else if name.eq_ignore_ascii_case("abilities") {
                flat_abilities.extend(section.children().iter());
            }
        }

        for ability in flat_abilities {
            let Some(hero) = self.names.hero_for_ability(&ability.name) else {
                anomaly(
                    &patch_number,
                    format!("ability {} matches no hero", ability.name),
                );
                continue;
            };
            let position = match hero_notes
                .iter()
                .position(|h| h.internal_name.eq_ignore_ascii_case(hero))
            {
                Some(position) => position,
                None => {
                    hero_notes.push(self.empty_hero_note(hero));
                    hero_notes.len() - 1
                }
            };
            hero_notes[position].ability_notes.push(self.entity_note(ability));
        }

        let note = PatchNote {
            patch_number,
            language: self.language.to_string(),
            timestamp,
            website: manifest
                .get_str("website")
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_string),
            generic_notes,
            hero_notes,
            item_notes: items.into_vec(),
            neutral_item_notes: neutral_items.into_vec(),
            neutral_creep_notes,
        };
        tracing::debug!(
            patch = %note.patch_number,
            language = self.language,
            heroes = note.hero_notes.len(),
            items = note.item_notes.len(),
            "Composed patch"
        );
        note
    }
}
