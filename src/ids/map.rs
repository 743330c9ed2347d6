//! Internal name -> numeric id tables

use crate::error::{ResolveError, Result};
use crate::kv::Node;
use ahash::AHashMap;

/// Which id table a name belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    UnitAbility,
    ItemAbility,
}

/// Immutable id tables built once per run from `npc_ability_ids.txt`
#[derive(Debug, Clone, Default)]
pub struct IdentifierMap {
    unit_abilities: AHashMap<String, i64>,
    item_abilities: AHashMap<String, i64>,
}

impl IdentifierMap {
    pub fn new(
        unit_abilities: impl IntoIterator<Item = (String, i64)>,
        item_abilities: impl IntoIterator<Item = (String, i64)>,
    ) -> Self {
        Self {
            unit_abilities: unit_abilities.into_iter().collect(),
            item_abilities: item_abilities.into_iter().collect(),
        }
    }

    /// Build from the `DOTAAbilityIDs` tree
    ///
    /// Both sections may nest (`Locked { ... }`); every scalar leaf is an entry.
    pub fn from_tree(tree: &Node) -> Result<Self> {
        let unit_section = tree.get("UnitAbilities");
        let item_section = tree.get("ItemAbilities");
        if unit_section.is_none() && item_section.is_none() {
            return Err(ResolveError::InvalidIdentifierTable(format!(
                "{} has neither UnitAbilities nor ItemAbilities",
                tree.name
            )));
        }

        let mut map = Self::default();
        if let Some(section) = unit_section {
            collect_ids(section, &mut map.unit_abilities)?;
        }
        if let Some(section) = item_section {
            collect_ids(section, &mut map.item_abilities)?;
        }

        tracing::info!(
            unit_abilities = map.unit_abilities.len(),
            item_abilities = map.item_abilities.len(),
            "Built identifier map"
        );
        Ok(map)
    }

    pub fn get(&self, kind: IdKind, name: &str) -> Result<i64> {
        let table = match kind {
            IdKind::UnitAbility => &self.unit_abilities,
            IdKind::ItemAbility => &self.item_abilities,
        };
        table
            .get(name)
            .copied()
            .ok_or_else(|| ResolveError::MissingIdentifier(name.to_string()))
    }

    #[inline]
    pub fn ability_id(&self, name: &str) -> Result<i64> {
        self.get(IdKind::UnitAbility, name)
    }

    #[inline]
    pub fn item_id(&self, name: &str) -> Result<i64> {
        self.get(IdKind::ItemAbility, name)
    }

    pub fn len(&self) -> usize {
        self.unit_abilities.len() + self.item_abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn collect_ids(section: &Node, out: &mut AHashMap<String, i64>) -> Result<()> {
    for child in section.children() {
        if child.is_collection() {
            collect_ids(child, out)?;
            continue;
        }
        let id: i64 = child
            .parse_scalar()
            .map_err(|e| ResolveError::InvalidIdentifierTable(e.to_string()))?;
        out.entry(child.name.clone()).or_insert(id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_tree() -> Node {
        Node::collection(
            "DOTAAbilityIDs",
            vec![
                Node::collection(
                    "UnitAbilities",
                    vec![
                        Node::collection(
                            "Locked",
                            vec![Node::scalar("axe_berserkers_call", "5007")],
                        ),
                        Node::scalar("special_bonus_unique_axe_2", "6543"),
                    ],
                ),
                Node::collection(
                    "ItemAbilities",
                    vec![Node::collection("Locked", vec![Node::scalar("item_blink", "1")])],
                ),
            ],
        )
    }

    #[test]
    fn test_from_tree() {
        let ids = IdentifierMap::from_tree(&id_tree()).unwrap();
        assert_eq!(ids.ability_id("axe_berserkers_call").unwrap(), 5007);
        assert_eq!(ids.ability_id("special_bonus_unique_axe_2").unwrap(), 6543);
        assert_eq!(ids.item_id("item_blink").unwrap(), 1);
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_missing_identifier() {
        let ids = IdentifierMap::from_tree(&id_tree()).unwrap();
        assert_eq!(
            ids.item_id("axe_berserkers_call"),
            Err(ResolveError::MissingIdentifier("axe_berserkers_call".to_string()))
        );
    }

    #[test]
    fn test_invalid_tables() {
        let empty = Node::collection("DOTAAbilityIDs", vec![]);
        assert!(matches!(
            IdentifierMap::from_tree(&empty),
            Err(ResolveError::InvalidIdentifierTable(_))
        ));

        let bad = Node::collection(
            "DOTAAbilityIDs",
            vec![Node::collection(
                "UnitAbilities",
                vec![Node::scalar("axe_berserkers_call", "abc")],
            )],
        );
        assert!(matches!(
            IdentifierMap::from_tree(&bad),
            Err(ResolveError::InvalidIdentifierTable(_))
        ));
    }
}
