//! Field helpers shared by the entity builders

use crate::kv::Node;
use crate::model::AbilityStats;
use crate::patterns::TALENT_NUMERIC_SUFFIX;
use crate::tokens::{TokenKind, TokenStore};
use std::str::FromStr;

/// Token key prefix for ability, talent and item tooltips
pub const ABILITY_TOKEN_PREFIX: &str = "dota_tooltip_ability_";

/// Root entries of ability/item files that are templates, not entities
pub const TEMPLATE_ENTRIES: [&str; 3] = ["ability_base", "dota_base_ability", "item_base"];

/// Upper bound on `_noteN` tokens probed per entity
const MAX_NOTES: usize = 16;

/// True for root children that should be built as entities
pub fn is_entity(node: &Node) -> bool {
    node.is_collection()
        && !TEMPLATE_ENTRIES
            .iter()
            .any(|t| node.name.eq_ignore_ascii_case(t))
}

/// Lenient numeric list; malformed input logs at debug and yields an empty list
pub fn number_list(node: &Node, key: &str) -> Vec<f64> {
    let Some(child) = node.get(key) else {
        return Vec::new();
    };
    match child.parse_list(true) {
        Ok(values) => values,
        Err(e) => {
            tracing::debug!(entity = %node.name, error = %e, "Malformed value list, using empty");
            Vec::new()
        }
    }
}

/// First number of a lenient list
pub fn first_number<T: FromStr>(node: &Node, key: &str) -> Option<T> {
    node.get(key)
        .and_then(|child| child.parse_list::<T>(true).ok())
        .and_then(|values| values.into_iter().next())
}

/// Non-empty trimmed string value
pub fn string_field(node: &Node, key: &str) -> Option<String> {
    node.get_str(key)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Split a value on `sep`, trimming and dropping empty parts
pub fn split_field(node: &Node, key: &str, sep: char) -> Vec<String> {
    node.get_str(key)
        .map(|raw| {
            raw.split(sep)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Built-in numeric fields of an ability or item
pub fn parse_stats(node: &Node) -> AbilityStats {
    let mut stats = AbilityStats::default();
    for field in AbilityStats::FIELDS {
        let values = number_list(node, field);
        if let Some(slot) = stats.field_mut(field) {
            *slot = values;
        }
    }
    stats
}

/// Tooltip text of an ability, talent or item, before value substitution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipText {
    pub name: String,
    pub description: String,
    pub lore: String,
    pub notes: Vec<String>,
    pub scepter_description: String,
    pub shard_description: String,
}

/// Candidate token stems for an entity: exact name, then without a numeric suffix
fn token_stems(internal_name: &str) -> Vec<String> {
    let exact = format!("{}{}", ABILITY_TOKEN_PREFIX, internal_name);
    let trimmed = TALENT_NUMERIC_SUFFIX.replace(internal_name, "");
    if trimmed == internal_name {
        vec![exact]
    } else {
        vec![exact, format!("{}{}", ABILITY_TOKEN_PREFIX, trimmed)]
    }
}

impl TooltipText {
    /// Resolve `dota_tooltip_ability_<name>[_<suffix>]` tokens
    pub fn resolve(tokens: &TokenStore, language: &str, internal_name: &str) -> Self {
        let stems = token_stems(internal_name);
        let lookup = |suffix: &str| -> String {
            let keys: Vec<String> = stems.iter().map(|stem| format!("{stem}{suffix}")).collect();
            tokens
                .first_of(TokenKind::Ability, language, keys.iter().map(String::as_str))
                .unwrap_or_default()
        };

        let mut notes = Vec::new();
        for i in 0..MAX_NOTES {
            let note = lookup(&format!("_note{i}"));
            if note.is_empty() {
                break;
            }
            notes.push(note);
        }

        Self {
            name: lookup(""),
            description: lookup("_description"),
            lore: lookup("_lore"),
            notes,
            scepter_description: lookup("_scepter_description"),
            shard_description: lookup("_shard_description"),
        }
    }
}

/// Raw label token of a special value
pub fn value_label(tokens: &TokenStore, language: &str, internal_name: &str, value: &str) -> Option<String> {
    let key = format!("{}{}_{}", ABILITY_TOKEN_PREFIX, internal_name, value);
    tokens
        .try_get(TokenKind::Ability, language, &key)
        .ok()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> TokenStore {
        let mut store = TokenStore::new("english");
        let tree = Node::collection(
            "lang",
            vec![Node::collection(
                "Tokens",
                vec![
                    Node::scalar("DOTA_Tooltip_ability_axe_berserkers_call", "Berserker's Call"),
                    Node::scalar(
                        "DOTA_Tooltip_ability_axe_berserkers_call_Description",
                        "Taunts nearby enemies.",
                    ),
                    Node::scalar("DOTA_Tooltip_ability_axe_berserkers_call_Note0", "First."),
                    Node::scalar("DOTA_Tooltip_ability_axe_berserkers_call_Note1", "Second."),
                    Node::scalar("DOTA_Tooltip_ability_axe_berserkers_call_radius", "RADIUS:"),
                    Node::scalar("DOTA_Tooltip_ability_special_bonus_armor", "+{s:value} Armor"),
                ],
            )],
        );
        store.load_kind(TokenKind::Ability, "english", &tree).unwrap();
        store
    }

    #[test]
    fn test_tooltip_text() {
        let text = TooltipText::resolve(&tokens(), "english", "axe_berserkers_call");
        assert_eq!(text.name, "Berserker's Call");
        assert_eq!(text.description, "Taunts nearby enemies.");
        assert_eq!(text.notes, vec!["First.".to_string(), "Second.".to_string()]);
        assert!(text.lore.is_empty());
        assert!(text.scepter_description.is_empty());
    }

    #[test]
    fn test_generic_talent_falls_back_to_stem() {
        let text = TooltipText::resolve(&tokens(), "english", "special_bonus_armor_5");
        assert_eq!(text.name, "+{s:value} Armor");
    }

    #[test]
    fn test_value_label() {
        let store = tokens();
        assert_eq!(
            value_label(&store, "english", "axe_berserkers_call", "radius").as_deref(),
            Some("RADIUS:")
        );
        assert!(value_label(&store, "english", "axe_berserkers_call", "duration").is_none());
    }

    #[test]
    fn test_field_helpers() {
        let node = Node::collection(
            "item_blink",
            vec![
                Node::scalar("ItemCost", "2250"),
                Node::scalar("AbilityCooldown", "15.0"),
                Node::scalar("AbilityCastRange", "1200x"),
                Node::scalar("AbilityManaCost", "1.2.3"),
                Node::scalar("ItemShopTags", "teleport;mobility;"),
                Node::scalar("AbilityBehavior", "DOTA_ABILITY_BEHAVIOR_POINT | DOTA_ABILITY_BEHAVIOR_ROOT_DISABLES"),
            ],
        );
        assert_eq!(first_number::<u32>(&node, "ItemCost"), Some(2250));
        assert_eq!(first_number::<u32>(&node, "ItemStockMax"), None);
        assert_eq!(split_field(&node, "ItemShopTags", ';'), vec!["teleport", "mobility"]);
        assert_eq!(split_field(&node, "AbilityBehavior", '|').len(), 2);

        let stats = parse_stats(&node);
        assert_eq!(stats.cooldown, vec![15.0]);
        assert_eq!(stats.cast_range, vec![1200.0]);
        assert!(stats.mana_cost.is_empty());
        assert!(is_entity(&node));
        assert!(!is_entity(&Node::collection("ability_base", vec![])));
        assert!(!is_entity(&Node::scalar("Version", "1")));
    }
}
