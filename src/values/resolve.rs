//! Text resolution for built abilities and items

use super::{displayed_values, NumberFormat, TemplateContext};
use crate::model::{Ability, Item, ValueKind};

/// Substitute values into every text field of an ability
///
/// `has_scepter`/`has_shard` stay true only when the matching upgrade
/// description resolved to non-empty text.
pub fn resolve_ability(ability: &mut Ability, format: NumberFormat) {
    let base = TemplateContext::base(&ability.special_values, &ability.stats, format);
    let description = base.resolve(&ability.description);
    let lore = base.resolve(&ability.lore);
    let notes: Vec<String> = ability.notes.iter().map(|n| base.resolve(n)).collect();

    let scepter = TemplateContext::upgrade(
        &ability.special_values,
        ValueKind::Scepter,
        &ability.stats,
        format,
    )
    .resolve(&ability.scepter_description);
    let shard = TemplateContext::upgrade(
        &ability.special_values,
        ValueKind::Shard,
        &ability.stats,
        format,
    )
    .resolve(&ability.shard_description);

    let displayed = displayed_values(&ability.stats, &ability.special_values, format);

    ability.description = description;
    ability.lore = lore;
    ability.notes = notes;
    ability.has_scepter = ability.has_scepter && !scepter.trim().is_empty();
    ability.has_shard = ability.has_shard && !shard.trim().is_empty();
    ability.scepter_description = scepter;
    ability.shard_description = shard;
    ability.displayed_values = displayed;
}

/// Substitute values into every text field of an item
pub fn resolve_item(item: &mut Item, format: NumberFormat) {
    let base = TemplateContext::base(&item.special_values, &item.stats, format);
    let description = base.resolve(&item.description);
    let lore = base.resolve(&item.lore);
    let notes: Vec<String> = item.notes.iter().map(|n| base.resolve(n)).collect();
    let displayed = displayed_values(&item.stats, &item.special_values, format);

    item.description = description;
    item.lore = lore;
    item.notes = notes;
    item.displayed_values = displayed;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AbilityStats, SpecialValue, ValueEntry};
    use std::collections::BTreeMap;

    fn ability() -> Ability {
        Ability {
            id: 5007,
            internal_name: "axe_berserkers_call".to_string(),
            language: "english".to_string(),
            name: "Berserker's Call".to_string(),
            description: "Taunts... deals %hero_total_damage% damage".to_string(),
            lore: String::new(),
            notes: vec!["Radius %radius%.".to_string()],
            scepter_description: String::new(),
            shard_description: "Armor becomes %bonus_armor%.".to_string(),
            has_scepter: true,
            has_shard: true,
            is_granted_by_scepter: false,
            is_granted_by_shard: false,
            behavior: vec!["DOTA_ABILITY_BEHAVIOR_NO_TARGET".to_string()],
            target_team: None,
            target_type: Vec::new(),
            damage_type: None,
            spell_immunity: None,
            dispellable: None,
            max_level: Some(4),
            required_level: None,
            levels_between_upgrades: None,
            stats: AbilityStats {
                cooldown: vec![16.0, 15.0, 14.0, 13.0],
                ..Default::default()
            },
            special_values: vec![
                SpecialValue::Base(ValueEntry::new(
                    "hero_total_damage",
                    vec![40.0, 60.0, 80.0, 100.0],
                )),
                SpecialValue::Base(ValueEntry::new("radius", vec![315.0])),
                SpecialValue::Base(ValueEntry::new("bonus_armor", vec![8.0, 10.0, 12.0])),
                SpecialValue::ShardUpgrade(ValueEntry::new("bonus_armor", vec![9.6, 12.0, 14.4])),
            ],
            displayed_values: BTreeMap::new(),
        }
    }

    #[test]
    fn test_resolve_ability() {
        let mut ability = ability();
        resolve_ability(&mut ability, NumberFormat::default());

        assert_eq!(
            ability.description,
            "Taunts... deals **40\u{a0}/\u{a0}60\u{a0}/\u{a0}80\u{a0}/\u{a0}100** damage"
        );
        assert_eq!(ability.notes, vec!["Radius **315**.".to_string()]);
        assert_eq!(
            ability.shard_description,
            "Armor becomes **9.6\u{a0}/\u{a0}12\u{a0}/\u{a0}14.4**."
        );
        assert_eq!(
            ability.displayed_values["AbilityCooldown"],
            "**16\u{a0}/\u{a0}15\u{a0}/\u{a0}14\u{a0}/\u{a0}13**"
        );
    }

    #[test]
    fn test_upgrade_flags_require_description() {
        let mut ability = ability();
        resolve_ability(&mut ability, NumberFormat::default());
        assert!(!ability.has_scepter);
        assert!(ability.has_shard);
    }

    #[test]
    fn test_resolve_ability_is_idempotent() {
        let mut once = ability();
        resolve_ability(&mut once, NumberFormat::default());
        let mut twice = once.clone();
        resolve_ability(&mut twice, NumberFormat::default());
        assert_eq!(once.description, twice.description);
        assert_eq!(once.shard_description, twice.shard_description);
        assert_eq!(once.notes, twice.notes);
    }
}
