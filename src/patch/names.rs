//! Resolved entity names used as patch note titles

use crate::builder::HERO_PREFIX;
use crate::model::{Ability, Hero, Item};
use ahash::AHashMap;

/// Internal name -> localized display name for one language
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    titles: AHashMap<String, String>,
    /// `(short name, internal name)`, longest short name first
    heroes: Vec<(String, String)>,
}

impl NameIndex {
    pub fn new(abilities: &[Ability], heroes: &[Hero], items: &[Item]) -> Self {
        let mut titles = AHashMap::new();
        let named = abilities
            .iter()
            .map(|a| (&a.internal_name, &a.name))
            .chain(heroes.iter().map(|h| (&h.internal_name, &h.name)))
            .chain(items.iter().map(|i| (&i.internal_name, &i.name)));
        for (internal_name, name) in named {
            if !name.trim().is_empty() {
                titles
                    .entry(internal_name.to_ascii_lowercase())
                    .or_insert_with(|| name.clone());
            }
        }

        let mut hero_names: Vec<(String, String)> = heroes
            .iter()
            .map(|h| (h.short_name.to_ascii_lowercase(), h.internal_name.clone()))
            .collect();
        hero_names.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

        Self {
            titles,
            heroes: hero_names,
        }
    }

    /// Display name, absent when the entity was not built or has no name
    pub fn title(&self, internal_name: &str) -> Option<String> {
        self.titles.get(&internal_name.to_ascii_lowercase()).cloned()
    }

    /// Hero owning an ability, by `<short name>_` prefix
    pub fn hero_for_ability(&self, ability: &str) -> Option<&str> {
        let ability = ability.to_ascii_lowercase();
        self.heroes
            .iter()
            .find(|(short, _)| {
                ability
                    .strip_prefix(short.as_str())
                    .is_some_and(|rest| rest.starts_with('_'))
            })
            .map(|(_, internal_name)| internal_name.as_str())
    }
}

/// Full hero internal name for a manifest key that may omit the prefix
pub fn hero_internal_name(name: &str) -> String {
    if name.to_ascii_lowercase().starts_with(HERO_PREFIX) {
        name.to_string()
    } else {
        format!("{HERO_PREFIX}{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_internal_name() {
        assert_eq!(hero_internal_name("axe"), "npc_dota_hero_axe");
        assert_eq!(hero_internal_name("npc_dota_hero_axe"), "npc_dota_hero_axe");
    }

    #[test]
    fn test_empty_index() {
        let index = NameIndex::default();
        assert!(index.title("item_blink").is_none());
        assert!(index.hero_for_ability("axe_berserkers_call").is_none());
    }
}
