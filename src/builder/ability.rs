//! Ability and talent construction

use super::common::{
    is_entity, parse_stats, split_field, string_field, value_label, TooltipText,
};
use super::{Batch, EntityBuilder};
use crate::error::Result;
use crate::kv::Node;
use crate::model::{Ability, SpecialValue, Talent};
use crate::patterns::{ATTRIBUTE_BONUS, TALENT_NAME};
use crate::values::{attach_labels, extract_special_values, resolve_ability};

/// True for `special_bonus_*` entries other than the generic attribute bonus
pub fn is_talent(name: &str) -> bool {
    TALENT_NAME.is_match(name) && !ATTRIBUTE_BONUS.is_match(name)
}

impl<'a> EntityBuilder<'a> {
    /// Build every ability and talent of an ability file for one language
    pub fn build_abilities(&self, language: &str, tree: &Node) -> (Batch<Ability>, Batch<Talent>) {
        let mut abilities = Batch::new();
        let mut talents = Batch::new();

        for node in tree.children().iter().filter(|n| is_entity(n)) {
            if is_talent(&node.name) {
                talents.collect(&node.name, language, self.build_talent(language, node));
            } else {
                abilities.collect(&node.name, language, self.build_ability(language, node));
            }
        }

        tracing::debug!(
            language,
            abilities = abilities.records.len(),
            talents = talents.records.len(),
            failures = abilities.failures.len() + talents.failures.len(),
            "Built abilities"
        );
        (abilities, talents)
    }

    /// Build one ability with resolved text
    pub fn build_ability(&self, language: &str, node: &Node) -> Result<Ability> {
        let name = node.name.as_str();
        let id = self.ids.ability_id(name)?;
        let max_level = node.parse_child::<u32>("MaxLevel")?;
        let required_level = node.parse_child::<i32>("RequiredLevel")?;
        let levels_between_upgrades = node.parse_child::<u32>("LevelsBetweenUpgrades")?;

        let text = TooltipText::resolve(self.tokens, language, name);
        let mut special_values = extract_special_values(node);
        attach_labels(&mut special_values, |value| {
            value_label(self.tokens, language, name, value)
        });

        let mut ability = Ability {
            id,
            internal_name: name.to_string(),
            language: language.to_string(),
            name: text.name,
            description: text.description,
            lore: text.lore,
            notes: text.notes,
            scepter_description: text.scepter_description,
            shard_description: text.shard_description,
            has_scepter: node.flag("HasScepterUpgrade"),
            has_shard: node.flag("HasShardUpgrade"),
            is_granted_by_scepter: node.flag("IsGrantedByScepter"),
            is_granted_by_shard: node.flag("IsGrantedByShard"),
            behavior: split_field(node, "AbilityBehavior", '|'),
            target_team: string_field(node, "AbilityUnitTargetTeam"),
            target_type: split_field(node, "AbilityUnitTargetType", '|'),
            damage_type: string_field(node, "AbilityUnitDamageType"),
            spell_immunity: string_field(node, "SpellImmunityType"),
            dispellable: string_field(node, "SpellDispellableType"),
            max_level,
            required_level,
            levels_between_upgrades,
            stats: parse_stats(node),
            special_values,
            displayed_values: Default::default(),
        };
        resolve_ability(&mut ability, self.number_format(language));
        Ok(ability)
    }

    /// Build one talent; its text is resolved later by the linker
    pub fn build_talent(&self, language: &str, node: &Node) -> Result<Talent> {
        let id = self.ids.ability_id(&node.name)?;
        let text = TooltipText::resolve(self.tokens, language, &node.name);
        let values = extract_special_values(node)
            .into_iter()
            .filter_map(|value| match value {
                SpecialValue::Base(entry) => Some(entry),
                _ => None,
            })
            .collect();

        Ok(Talent {
            id,
            internal_name: node.name.clone(),
            language: language.to_string(),
            name: text.name,
            description: text.description,
            values,
            linked_ability: None,
            position: None,
        })
    }
}
