//! Item records

use super::{AbilityStats, SpecialValue};
use serde::Serialize;
use std::collections::BTreeMap;

/// An item in one language
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: i64,
    pub internal_name: String,
    pub language: String,
    pub name: String,
    pub description: String,
    pub lore: String,
    pub notes: Vec<String>,
    pub cost: Option<u32>,
    pub initial_charges: Option<u32>,
    pub stock_max: Option<u32>,
    pub stock_initial: Option<u32>,
    pub stock_time: Option<f64>,
    pub quality: Option<String>,
    pub shop_tags: Vec<String>,
    /// Alternative component lists; each inner list is one recipe
    pub requirements: Vec<Vec<String>>,
    pub is_recipe: bool,
    pub is_purchasable: bool,
    pub neutral_tier: Option<u32>,
    pub behavior: Vec<String>,
    pub stats: AbilityStats,
    pub special_values: Vec<SpecialValue>,
    pub displayed_values: BTreeMap<String, String>,
}
