//! Ability and talent records

use super::{SpecialValue, ValueEntry};
use serde::Serialize;
use std::collections::BTreeMap;

/// Built-in per-rank numbers shared by abilities and items
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AbilityStats {
    pub cast_range: Vec<f64>,
    pub cast_point: Vec<f64>,
    pub channel_time: Vec<f64>,
    pub cooldown: Vec<f64>,
    pub duration: Vec<f64>,
    pub damage: Vec<f64>,
    pub mana_cost: Vec<f64>,
    pub health_cost: Vec<f64>,
    pub charges: Vec<f64>,
    pub charge_restore_time: Vec<f64>,
}

impl AbilityStats {
    /// KV field names of the built-in stats, in display order
    pub const FIELDS: [&'static str; 10] = [
        "AbilityCastRange",
        "AbilityCastPoint",
        "AbilityChannelTime",
        "AbilityCooldown",
        "AbilityDuration",
        "AbilityDamage",
        "AbilityManaCost",
        "AbilityHealthCost",
        "AbilityCharges",
        "AbilityChargeRestoreTime",
    ];

    /// Values of a built-in field by KV name (case-insensitive)
    pub fn field(&self, name: &str) -> Option<&[f64]> {
        let values = match name.to_ascii_lowercase().as_str() {
            "abilitycastrange" => &self.cast_range,
            "abilitycastpoint" => &self.cast_point,
            "abilitychanneltime" => &self.channel_time,
            "abilitycooldown" => &self.cooldown,
            "abilityduration" => &self.duration,
            "abilitydamage" => &self.damage,
            "abilitymanacost" => &self.mana_cost,
            "abilityhealthcost" => &self.health_cost,
            "abilitycharges" => &self.charges,
            "abilitychargerestoretime" => &self.charge_restore_time,
            _ => return None,
        };
        Some(values.as_slice())
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Vec<f64>> {
        let values = match name.to_ascii_lowercase().as_str() {
            "abilitycastrange" => &mut self.cast_range,
            "abilitycastpoint" => &mut self.cast_point,
            "abilitychanneltime" => &mut self.channel_time,
            "abilitycooldown" => &mut self.cooldown,
            "abilityduration" => &mut self.duration,
            "abilitydamage" => &mut self.damage,
            "abilitymanacost" => &mut self.mana_cost,
            "abilityhealthcost" => &mut self.health_cost,
            "abilitycharges" => &mut self.charges,
            "abilitychargerestoretime" => &mut self.charge_restore_time,
            _ => return None,
        };
        Some(values)
    }

    /// Present (non-empty) built-in fields
    pub fn present(&self) -> impl Iterator<Item = (&'static str, &[f64])> + '_ {
        Self::FIELDS
            .iter()
            .filter_map(move |name| self.field(name).map(|v| (*name, v)))
            .filter(|(_, v)| !v.is_empty())
    }
}

/// A hero or neutral ability in one language
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ability {
    pub id: i64,
    pub internal_name: String,
    pub language: String,
    pub name: String,
    pub description: String,
    pub lore: String,
    pub notes: Vec<String>,
    pub scepter_description: String,
    pub shard_description: String,
    pub has_scepter: bool,
    pub has_shard: bool,
    pub is_granted_by_scepter: bool,
    pub is_granted_by_shard: bool,
    pub behavior: Vec<String>,
    pub target_team: Option<String>,
    pub target_type: Vec<String>,
    pub damage_type: Option<String>,
    pub spell_immunity: Option<String>,
    pub dispellable: Option<String>,
    pub max_level: Option<u32>,
    pub required_level: Option<i32>,
    pub levels_between_upgrades: Option<u32>,
    pub stats: AbilityStats,
    pub special_values: Vec<SpecialValue>,
    /// Formatted built-in fields and base values, keyed by KV name
    pub displayed_values: BTreeMap<String, String>,
}

impl Ability {
    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.has_behavior("DOTA_ABILITY_BEHAVIOR_HIDDEN")
    }

    #[inline]
    pub fn is_not_learnable(&self) -> bool {
        self.has_behavior("DOTA_ABILITY_BEHAVIOR_NOT_LEARNABLE")
    }

    pub fn has_behavior(&self, behavior: &str) -> bool {
        self.behavior.iter().any(|b| b.eq_ignore_ascii_case(behavior))
    }
}

/// Talent position in the hero talent tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TalentPosition {
    pub level: u32,
    pub side: u32,
}

/// A talent in one language
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Talent {
    pub id: i64,
    pub internal_name: String,
    pub language: String,
    pub name: String,
    pub description: String,
    pub values: Vec<ValueEntry>,
    /// Ability whose value this talent augments
    pub linked_ability: Option<String>,
    /// Set only on a hero's own talent list
    pub position: Option<TalentPosition>,
}
