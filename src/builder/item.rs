//! Item construction and neutral item tiers

use super::common::{
    first_number, is_entity, parse_stats, split_field, string_field, value_label, TooltipText,
};
use super::{Batch, EntityBuilder};
use crate::error::Result;
use crate::kv::Node;
use crate::model::Item;
use crate::values::{attach_labels, extract_special_values, resolve_item};
use ahash::AHashMap;

/// Neutral item name -> tier, from `neutral_items.txt`
#[derive(Debug, Clone, Default)]
pub struct NeutralTiers {
    tiers: AHashMap<String, u32>,
}

impl NeutralTiers {
    /// Read `"<tier>" { "items" { "<item>" "1" } }` blocks
    pub fn from_tree(tree: &Node) -> Self {
        let mut tiers = AHashMap::new();
        for tier_node in tree.children().iter().filter(|n| n.is_collection()) {
            let Ok(tier) = tier_node.name.trim().parse::<u32>() else {
                tracing::debug!(node = %tier_node.name, "Skipping non-tier neutral item block");
                continue;
            };
            if let Some(items) = tier_node.get("items") {
                for item in items.children() {
                    tiers.entry(item.name.clone()).or_insert(tier);
                }
            }
        }
        Self { tiers }
    }

    #[inline]
    pub fn tier(&self, item: &str) -> Option<u32> {
        self.tiers.get(item).copied()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

fn is_neutral_drop(node: &Node) -> bool {
    node.flag("ItemIsNeutralDrop") || node.flag("ItemIsNeutralActiveDrop")
}

/// Obsolete items and neutral drops outside the tier table never reach the output
fn is_excluded(node: &Node, tiers: &NeutralTiers) -> bool {
    node.flag("IsObsolete") || (is_neutral_drop(node) && tiers.tier(&node.name).is_none())
}

/// `ItemRequirements` alternatives: `"item_a;item_b*"` per entry
fn requirements(node: &Node) -> Vec<Vec<String>> {
    let Some(block) = node.get("ItemRequirements") else {
        return Vec::new();
    };
    block
        .children()
        .iter()
        .filter_map(Node::as_str)
        .map(|raw| {
            raw.split(';')
                .map(|part| part.trim().trim_end_matches('*').trim())
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|parts| !parts.is_empty())
        .collect()
}

impl<'a> EntityBuilder<'a> {
    /// Build every item of an item file for one language
    pub fn build_items(&self, language: &str, tree: &Node, tiers: &NeutralTiers) -> Batch<Item> {
        let mut items = Batch::new();
        let mut excluded = 0usize;

        for node in tree.children().iter().filter(|n| is_entity(n)) {
            if is_excluded(node, tiers) {
                excluded += 1;
                continue;
            }
            items.collect(&node.name, language, self.build_item(language, node, tiers));
        }

        tracing::debug!(
            language,
            items = items.records.len(),
            excluded,
            failures = items.failures.len(),
            "Built items"
        );
        items
    }

    /// Build one item with resolved text
    pub fn build_item(&self, language: &str, node: &Node, tiers: &NeutralTiers) -> Result<Item> {
        let name = node.name.as_str();
        let id = self.ids.item_id(name)?;

        let text = TooltipText::resolve(self.tokens, language, name);
        let mut special_values = extract_special_values(node);
        attach_labels(&mut special_values, |value| {
            value_label(self.tokens, language, name, value)
        });

        let mut item = Item {
            id,
            internal_name: name.to_string(),
            language: language.to_string(),
            name: text.name,
            description: text.description,
            lore: text.lore,
            notes: text.notes,
            cost: first_number(node, "ItemCost"),
            initial_charges: first_number(node, "ItemInitialCharges"),
            stock_max: first_number(node, "ItemStockMax"),
            stock_initial: first_number(node, "ItemStockInitial"),
            stock_time: first_number(node, "ItemStockTime"),
            quality: string_field(node, "ItemQuality"),
            shop_tags: split_field(node, "ItemShopTags", ';'),
            requirements: requirements(node),
            is_recipe: node.flag("ItemRecipe"),
            is_purchasable: node
                .get_str("ItemPurchasable")
                .map(|v| v.trim() != "0")
                .unwrap_or(true),
            neutral_tier: tiers.tier(name),
            behavior: split_field(node, "AbilityBehavior", '|'),
            stats: parse_stats(node),
            special_values,
            displayed_values: Default::default(),
        };
        resolve_item(&mut item, self.number_format(language));
        Ok(item)
    }
}
