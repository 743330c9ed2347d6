//! Hero ability and talent linking

use crate::builder::is_talent;
use crate::config::{PipelineConfig, TalentLayout};
use crate::model::{Ability, Hero, Talent, TalentPosition};
use crate::patterns::{ATTRIBUTE_BONUS, HIDDEN_ABILITY};
use ahash::AHashMap;

/// Hidden, not learnable and without a description: a sub-ability of another one
pub fn is_secondary(ability: &Ability) -> bool {
    ability.is_hidden() && ability.is_not_learnable() && ability.description.trim().is_empty()
}

/// Slot names that never reach a hero's lists
fn is_placeholder_slot(name: &str) -> bool {
    name.is_empty() || ATTRIBUTE_BONUS.is_match(name) || HIDDEN_ABILITY.is_match(name)
}

/// Resolves hero slots against one language's built abilities and talents
#[derive(Debug)]
pub struct Linker<'a> {
    abilities: AHashMap<&'a str, &'a Ability>,
    talents: AHashMap<&'a str, &'a Talent>,
    layout: TalentLayout,
    expected_talents: usize,
}

impl<'a> Linker<'a> {
    pub fn new(abilities: &'a [Ability], talents: &'a [Talent], config: &PipelineConfig) -> Self {
        Self {
            abilities: abilities
                .iter()
                .map(|a| (a.internal_name.as_str(), a))
                .collect(),
            talents: talents
                .iter()
                .map(|t| (t.internal_name.as_str(), t))
                .collect(),
            layout: config.talent_layout,
            expected_talents: config.expected_talent_count,
        }
    }

    /// Fill a hero's abilities, talents and secondary abilities from its slots
    pub fn link_hero(&self, hero: &mut Hero) {
        let mut abilities = Vec::new();
        let mut talents = Vec::new();
        let mut secondary = Vec::new();
        // Positions follow the slot order, so a talent that failed to build keeps its place
        let mut talent_index = 0;

        for slot in &hero.ability_slots {
            let slot = slot.as_str();
            if is_placeholder_slot(slot) {
                continue;
            }

            if is_talent(slot) {
                let (level, side) = self.layout.position(talent_index);
                talent_index += 1;
                match self.talents.get(slot) {
                    Some(talent) => {
                        let mut talent = (*talent).clone();
                        talent.position = Some(TalentPosition { level, side });
                        talents.push(talent);
                    }
                    None => tracing::debug!(hero = %hero.internal_name, talent = slot, "Talent not built"),
                }
                continue;
            }

            match self.abilities.get(slot) {
                Some(ability) if is_secondary(ability) => secondary.push(slot.to_string()),
                Some(ability) => abilities.push((*ability).clone()),
                None => tracing::debug!(hero = %hero.internal_name, ability = slot, "Ability not built"),
            }
        }

        if talents.len() != self.expected_talents {
            tracing::warn!(
                hero = %hero.internal_name,
                language = %hero.language,
                talents = talents.len(),
                expected = self.expected_talents,
                "Unexpected talent count"
            );
        }

        hero.abilities = abilities;
        hero.talents = talents;
        hero.secondary_abilities = secondary;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AbilityStats, HeroAttributes, HeroStats};

    fn ability(name: &str, behavior: &[&str], description: &str) -> Ability {
        Ability {
            id: 1,
            internal_name: name.to_string(),
            language: "english".to_string(),
            name: name.to_string(),
            description: description.to_string(),
            lore: String::new(),
            notes: Vec::new(),
            scepter_description: String::new(),
            shard_description: String::new(),
            has_scepter: false,
            has_shard: false,
            is_granted_by_scepter: false,
            is_granted_by_shard: false,
            behavior: behavior.iter().map(|b| b.to_string()).collect(),
            target_team: None,
            target_type: Vec::new(),
            damage_type: None,
            spell_immunity: None,
            dispellable: None,
            max_level: None,
            required_level: None,
            levels_between_upgrades: None,
            stats: AbilityStats::default(),
            special_values: Vec::new(),
            displayed_values: Default::default(),
        }
    }

    fn talent(name: &str) -> Talent {
        Talent {
            id: 2,
            internal_name: name.to_string(),
            language: "english".to_string(),
            name: name.to_string(),
            description: String::new(),
            values: Vec::new(),
            linked_ability: None,
            position: None,
        }
    }

    fn hero(slots: &[&str]) -> Hero {
        Hero {
            id: 2,
            internal_name: "npc_dota_hero_axe".to_string(),
            language: "english".to_string(),
            name: "Axe".to_string(),
            short_name: "axe".to_string(),
            hype: String::new(),
            lore: String::new(),
            complexity: None,
            roles: Vec::new(),
            role_levels: Vec::new(),
            attack_capabilities: None,
            attributes: HeroAttributes::default(),
            stats: HeroStats::default(),
            abilities: Vec::new(),
            talents: Vec::new(),
            secondary_abilities: Vec::new(),
            ability_slots: slots.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn talent_names(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("special_bonus_unique_axe_{i}")).collect()
    }

    #[test]
    fn test_link_hero() {
        let abilities = vec![
            ability("axe_berserkers_call", &["DOTA_ABILITY_BEHAVIOR_NO_TARGET"], "Taunts."),
            ability("axe_culling_blade", &["DOTA_ABILITY_BEHAVIOR_UNIT_TARGET"], "Kills."),
            ability(
                "axe_culling_blade_toggle",
                &["DOTA_ABILITY_BEHAVIOR_HIDDEN", "DOTA_ABILITY_BEHAVIOR_NOT_LEARNABLE"],
                "",
            ),
            ability("special_bonus_attributes", &[], ""),
        ];
        let names = talent_names(8);
        let talents: Vec<Talent> = names.iter().map(|n| talent(n)).collect();
        let linker = Linker::new(&abilities, &talents, &PipelineConfig::default());

        let mut slots = vec![
            "axe_berserkers_call",
            "generic_hidden",
            "",
            "axe_culling_blade_toggle",
            "axe_culling_blade",
            "special_bonus_attributes",
        ];
        slots.extend(names.iter().map(String::as_str));
        let mut axe = hero(&slots);
        linker.link_hero(&mut axe);

        let linked: Vec<_> = axe.abilities.iter().map(|a| a.internal_name.as_str()).collect();
        assert_eq!(linked, vec!["axe_berserkers_call", "axe_culling_blade"]);
        assert_eq!(axe.secondary_abilities, vec!["axe_culling_blade_toggle"]);
        assert_eq!(axe.talents.len(), 8);

        let positions: Vec<_> = axe
            .talents
            .iter()
            .map(|t| t.position.map(|p| (p.level, p.side)).unwrap())
            .collect();
        assert_eq!(
            positions,
            vec![(10, 0), (10, 1), (15, 0), (15, 1), (20, 0), (20, 1), (25, 0), (25, 1)]
        );
    }

    #[test]
    fn test_hero_with_seven_talents_still_links() {
        let names = talent_names(7);
        let talents: Vec<Talent> = names.iter().map(|n| talent(n)).collect();
        let linker = Linker::new(&[], &talents, &PipelineConfig::default());

        let slots: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut axe = hero(&slots);
        linker.link_hero(&mut axe);
        assert_eq!(axe.talents.len(), 7);
        assert_eq!(
            axe.talents[6].position,
            Some(TalentPosition { level: 25, side: 0 })
        );
    }

    #[test]
    fn test_missing_talent_keeps_sibling_positions() {
        let names = talent_names(8);
        let talents: Vec<Talent> = names.iter().skip(1).map(|n| talent(n)).collect();
        let linker = Linker::new(&[], &talents, &PipelineConfig::default());

        let slots: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut axe = hero(&slots);
        linker.link_hero(&mut axe);

        assert_eq!(axe.talents.len(), 7);
        assert_eq!(axe.talents[0].internal_name, "special_bonus_unique_axe_1");
        assert_eq!(
            axe.talents[0].position,
            Some(TalentPosition { level: 10, side: 1 })
        );
        assert_eq!(
            axe.talents[6].position,
            Some(TalentPosition { level: 25, side: 1 })
        );
    }

    #[test]
    fn test_missing_abilities_are_skipped() {
        let linker = Linker::new(&[], &[], &PipelineConfig::default());
        let mut axe = hero(&["axe_unknown", "special_bonus_unknown"]);
        linker.link_hero(&mut axe);
        assert!(axe.abilities.is_empty());
        assert!(axe.talents.is_empty());
    }
}
