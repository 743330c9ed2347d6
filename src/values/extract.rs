//! Special value extraction and classification

use super::apply_upgrade;
use crate::kv::Node;
use crate::model::{SpecialValue, TalentLink, ValueEntry};
use crate::patterns::{
    NON_VALUE_KEY, SCEPTER_BONUS_KEY, SCEPTER_NAME, SHARD_BONUS_KEY, SHARD_NAME, TALENT_LINK_KEY,
    TALENT_NAME,
};

/// Blocks holding special values: current format first, then the legacy one
const VALUE_BLOCKS: [&str; 2] = ["AbilityValues", "AbilitySpecial"];

/// Extract every special value of an ability or item node, in source order
pub fn extract_special_values(entity: &Node) -> Vec<SpecialValue> {
    let mut out = Vec::new();
    for block in VALUE_BLOCKS {
        if let Some(block) = entity.get(block) {
            for node in block.children() {
                extract_node(&entity.name, node, &mut out);
            }
        }
    }
    out
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Target {
    Base,
    Scepter,
    Shard,
}

fn classify(name: &str, requires_scepter: bool, requires_shard: bool) -> Target {
    if requires_scepter || SCEPTER_NAME.is_match(name) {
        Target::Scepter
    } else if requires_shard || SHARD_NAME.is_match(name) {
        Target::Shard
    } else {
        Target::Base
    }
}

fn wrap(target: Target, entry: ValueEntry) -> SpecialValue {
    match target {
        Target::Base => SpecialValue::Base(entry),
        Target::Scepter => SpecialValue::ScepterUpgrade(entry),
        Target::Shard => SpecialValue::ShardUpgrade(entry),
    }
}

/// Lenient numeric parse; a malformed list becomes empty
fn parse_values(entity: &str, node: &Node) -> Vec<f64> {
    match node.parse_list(true) {
        Ok(values) => values,
        Err(e) => {
            tracing::debug!(entity, error = %e, "Malformed value list, using empty");
            Vec::new()
        }
    }
}

fn extract_node(entity: &str, node: &Node, out: &mut Vec<SpecialValue>) {
    if !node.is_collection() {
        let entry = ValueEntry::new(node.name.clone(), parse_values(entity, node));
        out.push(wrap(classify(&node.name, false, false), entry));
        return;
    }

    let payload = node
        .children()
        .iter()
        .find(|child| !child.is_collection() && !NON_VALUE_KEY.is_match(&child.name));

    // AbilitySpecial children are numbered ("01"); the payload key carries the name
    let is_legacy = node.name.chars().all(|c| c.is_ascii_digit());
    let name = match (is_legacy, payload) {
        (true, Some(payload)) => payload.name.clone(),
        (true, None) => {
            tracing::debug!(entity, node = %node.name, "Legacy special value without payload");
            return;
        }
        (false, _) => node.name.clone(),
    };

    let target = classify(
        &name,
        node.flag("RequiresScepter"),
        node.flag("RequiresShard"),
    );

    let base_values = match payload {
        Some(payload) => {
            let values = parse_values(entity, payload);
            out.push(wrap(target, ValueEntry::new(name.clone(), values.clone())));
            values
        }
        None => {
            tracing::debug!(entity, value = %name, "Upgrade-only special value, skipped for base set");
            Vec::new()
        }
    };

    for child in node.children() {
        let Some(raw) = child.as_str() else {
            continue;
        };

        if SCEPTER_BONUS_KEY.is_match(&child.name) {
            let entry = ValueEntry::new(name.clone(), apply_upgrade(&base_values, raw));
            out.push(SpecialValue::ScepterUpgrade(entry));
        } else if SHARD_BONUS_KEY.is_match(&child.name) {
            let entry = ValueEntry::new(name.clone(), apply_upgrade(&base_values, raw));
            out.push(SpecialValue::ShardUpgrade(entry));
        } else if TALENT_LINK_KEY.is_match(&child.name) {
            let talent = raw.trim();
            if TALENT_NAME.is_match(talent) {
                out.push(SpecialValue::TalentBonus(TalentLink {
                    value_name: name.clone(),
                    talent: talent.to_string(),
                    bonus_value: None,
                }));
            }
        } else if TALENT_NAME.is_match(&child.name) {
            out.push(SpecialValue::TalentBonus(TalentLink {
                value_name: name.clone(),
                talent: child.name.clone(),
                bonus_value: Some(raw.trim().to_string()),
            }));
        }
    }
}

/// Attach tooltip labels to value entries
///
/// `label` returns the raw label token for a value name. A leading `%` marks
/// a percentage value and is stripped from the stored label.
pub fn attach_labels<F>(values: &mut [SpecialValue], label: F)
where
    F: Fn(&str) -> Option<String>,
{
    for value in values.iter_mut() {
        let Some(entry) = value.entry_mut() else {
            continue;
        };
        let Some(raw) = label(&entry.name) else {
            continue;
        };
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        match raw.strip_prefix('%') {
            Some(rest) => {
                entry.is_percentage = true;
                entry.description = Some(rest.trim().to_string());
            }
            None => entry.description = Some(raw.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{find_entry, talent_links, ValueKind};

    fn ability(values: Vec<Node>) -> Node {
        Node::collection(
            "axe_berserkers_call",
            vec![
                Node::scalar("AbilityCooldown", "16 15 14 13"),
                Node::collection("AbilityValues", values),
            ],
        )
    }

    #[test]
    fn test_scalar_values() {
        let node = ability(vec![
            Node::scalar("radius", "315"),
            Node::scalar("duration", "2.0 2.4 2.8 3.2"),
            Node::scalar("scepter_cooldown", "10"),
            Node::scalar("shard_radius", "400"),
        ]);
        let values = extract_special_values(&node);

        assert_eq!(find_entry(&values, ValueKind::Base, "radius").unwrap().values, vec![315.0]);
        assert_eq!(
            find_entry(&values, ValueKind::Base, "duration").unwrap().values,
            vec![2.0, 2.4, 2.8, 3.2]
        );
        assert!(find_entry(&values, ValueKind::Base, "scepter_cooldown").is_none());
        assert_eq!(
            find_entry(&values, ValueKind::Scepter, "scepter_cooldown").unwrap().values,
            vec![10.0]
        );
        assert_eq!(
            find_entry(&values, ValueKind::Shard, "shard_radius").unwrap().values,
            vec![400.0]
        );
    }

    #[test]
    fn test_collection_values_with_upgrades_and_talents() {
        let node = ability(vec![
            Node::collection(
                "bonus_armor",
                vec![
                    Node::scalar("value", "8 10 12"),
                    Node::scalar("special_bonus_shard", "20%"),
                    Node::scalar("special_bonus_scepter", "+5"),
                    Node::scalar("special_bonus_unique_axe_8", "+2"),
                ],
            ),
            Node::collection(
                "scepter_only_damage",
                vec![
                    Node::scalar("value", "200"),
                    Node::scalar("RequiresScepter", "1"),
                ],
            ),
            Node::collection(
                "upgrade_only",
                vec![Node::scalar("special_bonus_scepter", "+50")],
            ),
        ]);
        let values = extract_special_values(&node);

        assert_eq!(
            find_entry(&values, ValueKind::Base, "bonus_armor").unwrap().values,
            vec![8.0, 10.0, 12.0]
        );
        assert_eq!(
            find_entry(&values, ValueKind::Shard, "bonus_armor").unwrap().values,
            vec![9.6, 12.0, 14.4]
        );
        assert_eq!(
            find_entry(&values, ValueKind::Scepter, "bonus_armor").unwrap().values,
            vec![13.0, 15.0, 17.0]
        );
        assert!(find_entry(&values, ValueKind::Base, "scepter_only_damage").is_none());
        assert_eq!(
            find_entry(&values, ValueKind::Scepter, "scepter_only_damage").unwrap().values,
            vec![200.0]
        );
        assert!(find_entry(&values, ValueKind::Base, "upgrade_only").is_none());
        assert_eq!(
            find_entry(&values, ValueKind::Scepter, "upgrade_only").unwrap().values,
            vec![50.0]
        );

        let links: Vec<_> = talent_links(&values).collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].value_name, "bonus_armor");
        assert_eq!(links[0].talent, "special_bonus_unique_axe_8");
        assert_eq!(links[0].bonus_value.as_deref(), Some("+2"));
    }

    #[test]
    fn test_legacy_ability_special() {
        let node = Node::collection(
            "axe_counter_helix",
            vec![Node::collection(
                "AbilitySpecial",
                vec![
                    Node::collection(
                        "01",
                        vec![
                            Node::scalar("var_type", "FIELD_INTEGER"),
                            Node::scalar("damage", "70 100 130 160"),
                            Node::scalar("LinkedSpecialBonus", "special_bonus_unique_axe_4"),
                        ],
                    ),
                    Node::collection("02", vec![Node::scalar("var_type", "FIELD_FLOAT")]),
                ],
            )],
        );
        let values = extract_special_values(&node);

        assert_eq!(
            find_entry(&values, ValueKind::Base, "damage").unwrap().values,
            vec![70.0, 100.0, 130.0, 160.0]
        );
        let links: Vec<_> = talent_links(&values).collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].talent, "special_bonus_unique_axe_4");
        assert!(links[0].bonus_value.is_none());
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_malformed_list_defaults_to_empty() {
        let node = ability(vec![Node::scalar("radius", "3.1.5")]);
        let values = extract_special_values(&node);
        assert!(find_entry(&values, ValueKind::Base, "radius").unwrap().values.is_empty());
    }

    #[test]
    fn test_attach_labels() {
        let mut values = vec![
            SpecialValue::Base(ValueEntry::new("radius", vec![315.0])),
            SpecialValue::Base(ValueEntry::new("bonus_damage", vec![20.0])),
        ];
        attach_labels(&mut values, |name| match name {
            "radius" => Some("RADIUS:".to_string()),
            "bonus_damage" => Some("%BONUS DAMAGE:".to_string()),
            _ => None,
        });

        let radius = find_entry(&values, ValueKind::Base, "radius").unwrap();
        assert_eq!(radius.description.as_deref(), Some("RADIUS:"));
        assert!(!radius.is_percentage);
        let damage = find_entry(&values, ValueKind::Base, "bonus_damage").unwrap();
        assert_eq!(damage.description.as_deref(), Some("BONUS DAMAGE:"));
        assert!(damage.is_percentage);
    }
}
