//! Hero records

use super::{Ability, Talent};
use serde::Serialize;

/// Base attribute values and per-level gains
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HeroAttributes {
    pub primary: Option<HeroAttribute>,
    pub strength_base: f64,
    pub strength_gain: f64,
    pub agility_base: f64,
    pub agility_gain: f64,
    pub intelligence_base: f64,
    pub intelligence_gain: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroAttribute {
    Strength,
    Agility,
    Intelligence,
    Universal,
}

impl HeroAttribute {
    /// Parse `DOTA_ATTRIBUTE_*`
    pub fn from_kv(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "DOTA_ATTRIBUTE_STRENGTH" => Some(Self::Strength),
            "DOTA_ATTRIBUTE_AGILITY" => Some(Self::Agility),
            "DOTA_ATTRIBUTE_INTELLECT" => Some(Self::Intelligence),
            "DOTA_ATTRIBUTE_ALL" => Some(Self::Universal),
            _ => None,
        }
    }
}

/// Combat and movement stats; every field can be inherited from the base hero
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HeroStats {
    pub armor: f64,
    pub magic_resistance: f64,
    pub attack_rate: f64,
    pub attack_animation_point: f64,
    pub attack_acquisition_range: f64,
    pub attack_range: f64,
    pub projectile_speed: f64,
    pub attack_damage_min: f64,
    pub attack_damage_max: f64,
    pub movement_speed: f64,
    pub turn_rate: f64,
    pub vision_day: f64,
    pub vision_night: f64,
    pub base_health: f64,
    pub health_regen: f64,
    pub base_mana: f64,
    pub mana_regen: f64,
}

/// A hero in one language
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hero {
    pub id: i64,
    pub internal_name: String,
    pub language: String,
    pub name: String,
    /// Internal name without `npc_dota_hero_`
    pub short_name: String,
    pub hype: String,
    pub lore: String,
    pub complexity: Option<u32>,
    pub roles: Vec<String>,
    pub role_levels: Vec<f64>,
    pub attack_capabilities: Option<String>,
    pub attributes: HeroAttributes,
    pub stats: HeroStats,
    pub abilities: Vec<Ability>,
    pub talents: Vec<Talent>,
    /// Hidden sub-abilities tied to a visible ability (toggles, follow-ups)
    pub secondary_abilities: Vec<String>,
    /// Raw `AbilityN` slot names in slot order, consumed by the linker
    #[serde(skip)]
    pub ability_slots: Vec<String>,
}
