//! Talent text resolution against the abilities that reference each talent

use crate::model::{talent_links, Ability, Talent, TalentLink, ValueKind};
use crate::values::{BonusValue, NumberFormat, TemplateContext, ValueSource};
use ahash::AHashMap;

/// Name of the talent's own bonus entry
const OWN_VALUE: &str = "value";

/// Talent name -> abilities linking to it, with the link
fn index_links(abilities: &[Ability]) -> AHashMap<String, Vec<(&Ability, &TalentLink)>> {
    let mut index: AHashMap<String, Vec<(&Ability, &TalentLink)>> = AHashMap::new();
    for ability in abilities {
        for link in talent_links(&ability.special_values) {
            index
                .entry(link.talent.to_ascii_lowercase())
                .or_default()
                .push((ability, link));
        }
    }
    index
}

/// Own bonus numbers of a talent: `value`, else its first entry
fn own_values(talent: &Talent) -> Vec<f64> {
    talent
        .values
        .iter()
        .find(|e| e.name.eq_ignore_ascii_case(OWN_VALUE))
        .or_else(|| talent.values.first())
        .map(|e| e.values.clone())
        .unwrap_or_default()
}

/// Resolve `{s:...}` placeholders in every talent and record its linked ability
pub fn link_talents(talents: &mut [Talent], abilities: &[Ability], format: NumberFormat) {
    let index = index_links(abilities);

    for talent in talents.iter_mut() {
        let links = index
            .get(&talent.internal_name.to_ascii_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default();

        let bonuses: Vec<BonusValue> = links
            .iter()
            .map(|(_, link)| match &link.bonus_value {
                Some(raw) => BonusValue::parse(link.value_name.clone(), raw),
                None => BonusValue {
                    value_name: link.value_name.clone(),
                    values: own_values(talent),
                },
            })
            .collect();

        let linked = links.first().map(|(ability, _)| *ability);
        let mut context = TemplateContext::new(format)
            .with_source(ValueSource::Entries(&talent.values))
            .with_bonuses(bonuses);
        if let Some(ability) = linked {
            context = context.with_source(ValueSource::Special {
                values: &ability.special_values,
                kind: ValueKind::Base,
            });
        }

        let name = context.resolve(&talent.name);
        let description = context.resolve(&talent.description);
        talent.name = name;
        talent.description = description;
        talent.linked_ability = linked.map(|ability| ability.internal_name.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AbilityStats, SpecialValue, ValueEntry};

    fn ability(name: &str, special_values: Vec<SpecialValue>) -> Ability {
        Ability {
            id: 1,
            internal_name: name.to_string(),
            language: "english".to_string(),
            name: String::new(),
            description: String::new(),
            lore: String::new(),
            notes: Vec::new(),
            scepter_description: String::new(),
            shard_description: String::new(),
            has_scepter: false,
            has_shard: false,
            is_granted_by_scepter: false,
            is_granted_by_shard: false,
            behavior: Vec::new(),
            target_team: None,
            target_type: Vec::new(),
            damage_type: None,
            spell_immunity: None,
            dispellable: None,
            max_level: None,
            required_level: None,
            levels_between_upgrades: None,
            stats: AbilityStats::default(),
            special_values,
            displayed_values: Default::default(),
        }
    }

    fn talent(name: &str, text: &str, values: Vec<ValueEntry>) -> Talent {
        Talent {
            id: 2,
            internal_name: name.to_string(),
            language: "english".to_string(),
            name: text.to_string(),
            description: String::new(),
            values,
            linked_ability: None,
            position: None,
        }
    }

    #[test]
    fn test_inline_bonus() {
        let abilities = vec![ability(
            "sniper_take_aim",
            vec![
                SpecialValue::Base(ValueEntry::new("attack_range", vec![100.0, 200.0])),
                SpecialValue::TalentBonus(TalentLink {
                    value_name: "attack_range".to_string(),
                    talent: "special_bonus_unique_sniper_3".to_string(),
                    bonus_value: Some("+120".to_string()),
                }),
            ],
        )];
        let mut talents = vec![talent(
            "special_bonus_unique_sniper_3",
            "+{s:bonus_attack_range} Take Aim Range",
            Vec::new(),
        )];

        link_talents(&mut talents, &abilities, NumberFormat::default());
        assert_eq!(talents[0].name, "+**120** Take Aim Range");
        assert!(!talents[0].name.contains("{s:"));
        assert_eq!(talents[0].linked_ability.as_deref(), Some("sniper_take_aim"));
    }

    #[test]
    fn test_legacy_link_uses_own_value() {
        let abilities = vec![ability(
            "axe_counter_helix",
            vec![
                SpecialValue::Base(ValueEntry::new("damage", vec![70.0, 100.0])),
                SpecialValue::TalentBonus(TalentLink {
                    value_name: "damage".to_string(),
                    talent: "special_bonus_unique_axe_4".to_string(),
                    bonus_value: None,
                }),
            ],
        )];
        let mut talents = vec![talent(
            "special_bonus_unique_axe_4",
            "+{s:bonus_damage} Counter Helix Damage ({s:value})",
            vec![ValueEntry::new("value", vec![40.0])],
        )];

        link_talents(&mut talents, &abilities, NumberFormat::default());
        assert_eq!(talents[0].name, "+**40** Counter Helix Damage (**40**)");
    }

    #[test]
    fn test_unlinked_talent_uses_own_values() {
        let mut talents = vec![talent(
            "special_bonus_armor_5",
            "+{s:value} Armor",
            vec![ValueEntry::new("value", vec![5.0])],
        )];
        link_talents(&mut talents, &[], NumberFormat::default());
        assert_eq!(talents[0].name, "+**5** Armor");
        assert!(talents[0].linked_ability.is_none());
    }
}
