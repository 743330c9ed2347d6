//! Hero construction with base-hero inheritance

use super::common::{first_number, number_list, split_field, string_field};
use super::{Batch, EntityBuilder};
use crate::error::Result;
use crate::kv::Node;
use crate::model::{Hero, HeroAttribute, HeroAttributes, HeroStats};
use crate::patterns::{ABILITY_SLOT, GENDER_MARKER};
use crate::tokens::TokenKind;

/// Template entry every hero inherits unset fields from
pub const BASE_HERO: &str = "npc_dota_hero_base";

/// Prefix of hero internal names
pub const HERO_PREFIX: &str = "npc_dota_hero_";

fn inherit(node: &Node, key: &str, fallback: f64) -> f64 {
    first_number(node, key).unwrap_or(fallback)
}

/// Read combat stats, taking any missing field from `fallback`
pub fn read_hero_stats(node: &Node, fallback: &HeroStats) -> HeroStats {
    HeroStats {
        armor: inherit(node, "ArmorPhysical", fallback.armor),
        magic_resistance: inherit(node, "MagicalResistance", fallback.magic_resistance),
        attack_rate: inherit(node, "AttackRate", fallback.attack_rate),
        attack_animation_point: inherit(node, "AttackAnimationPoint", fallback.attack_animation_point),
        attack_acquisition_range: inherit(
            node,
            "AttackAcquisitionRange",
            fallback.attack_acquisition_range,
        ),
        attack_range: inherit(node, "AttackRange", fallback.attack_range),
        projectile_speed: inherit(node, "ProjectileSpeed", fallback.projectile_speed),
        attack_damage_min: inherit(node, "AttackDamageMin", fallback.attack_damage_min),
        attack_damage_max: inherit(node, "AttackDamageMax", fallback.attack_damage_max),
        movement_speed: inherit(node, "MovementSpeed", fallback.movement_speed),
        turn_rate: inherit(node, "MovementTurnRate", fallback.turn_rate),
        vision_day: inherit(node, "VisionDaytimeRange", fallback.vision_day),
        vision_night: inherit(node, "VisionNighttimeRange", fallback.vision_night),
        base_health: inherit(node, "StatusHealth", fallback.base_health),
        health_regen: inherit(node, "StatusHealthRegen", fallback.health_regen),
        base_mana: inherit(node, "StatusMana", fallback.base_mana),
        mana_regen: inherit(node, "StatusManaRegen", fallback.mana_regen),
    }
}

fn read_attributes(node: &Node) -> HeroAttributes {
    HeroAttributes {
        primary: node.get_str("AttributePrimary").and_then(HeroAttribute::from_kv),
        strength_base: inherit(node, "AttributeBaseStrength", 0.0),
        strength_gain: inherit(node, "AttributeStrengthGain", 0.0),
        agility_base: inherit(node, "AttributeBaseAgility", 0.0),
        agility_gain: inherit(node, "AttributeAgilityGain", 0.0),
        intelligence_base: inherit(node, "AttributeBaseIntelligence", 0.0),
        intelligence_gain: inherit(node, "AttributeIntelligenceGain", 0.0),
    }
}

/// `AbilityN` values in slot order
fn ability_slots(node: &Node) -> Vec<String> {
    let mut slots: Vec<(u32, String)> = node
        .children()
        .iter()
        .filter_map(|child| {
            let index = ABILITY_SLOT.captures(&child.name)?[1].parse().ok()?;
            let value = child.as_str()?.trim();
            Some((index, value.to_string()))
        })
        .collect();
    slots.sort_by_key(|(index, _)| *index);
    slots.into_iter().map(|(_, name)| name).collect()
}

impl<'a> EntityBuilder<'a> {
    /// Build every hero of a hero file for one language
    ///
    /// Abilities and talents are attached later by the linker.
    pub fn build_heroes(&self, language: &str, tree: &Node) -> Batch<Hero> {
        let base = tree
            .get(BASE_HERO)
            .map(|node| read_hero_stats(node, &HeroStats::default()))
            .unwrap_or_default();

        let mut heroes = Batch::new();
        for node in tree.children() {
            if !node.is_collection()
                || !node.name.starts_with(HERO_PREFIX)
                || node.name.eq_ignore_ascii_case(BASE_HERO)
            {
                continue;
            }
            heroes.collect(&node.name, language, self.build_hero(language, node, &base));
        }

        tracing::debug!(
            language,
            heroes = heroes.records.len(),
            failures = heroes.failures.len(),
            "Built heroes"
        );
        heroes
    }

    /// Build one hero, inheriting unset stats from `base`
    pub fn build_hero(&self, language: &str, node: &Node, base: &HeroStats) -> Result<Hero> {
        let id: i64 = node.require("HeroID")?.parse_scalar()?;
        let internal_name = node.name.clone();

        let raw_name = self.tokens.get(TokenKind::General, language, &internal_name);
        let name = GENDER_MARKER.replace_all(&raw_name, "").trim().to_string();

        Ok(Hero {
            id,
            short_name: internal_name
                .strip_prefix(HERO_PREFIX)
                .unwrap_or(&internal_name)
                .to_string(),
            language: language.to_string(),
            name,
            hype: self
                .tokens
                .get(TokenKind::General, language, &format!("{internal_name}_hype")),
            lore: self
                .tokens
                .get(TokenKind::Lore, language, &format!("{internal_name}_bio")),
            complexity: first_number(node, "Complexity"),
            roles: split_field(node, "Role", ','),
            role_levels: number_list(node, "Rolelevels"),
            attack_capabilities: string_field(node, "AttackCapabilities"),
            attributes: read_attributes(node),
            stats: read_hero_stats(node, base),
            abilities: Vec::new(),
            talents: Vec::new(),
            secondary_abilities: Vec::new(),
            ability_slots: ability_slots(node),
            internal_name,
        })
    }
}
