//! Special value variants

use serde::Serialize;

/// Resolved numbers behind one placeholder name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueEntry {
    pub name: String,
    pub values: Vec<f64>,
    /// Tooltip label, e.g. "RADIUS:"
    pub description: Option<String>,
    /// Label was marked with a leading `%`
    pub is_percentage: bool,
}

impl ValueEntry {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            description: None,
            is_percentage: false,
        }
    }
}

/// Link from an ability value to the talent that augments it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TalentLink {
    /// Ability value the talent modifies
    pub value_name: String,
    /// Talent internal name
    pub talent: String,
    /// Raw bonus string when the ability carries it inline ("+120")
    pub bonus_value: Option<String>,
}

/// A classified special value of an ability or item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpecialValue {
    Base(ValueEntry),
    ScepterUpgrade(ValueEntry),
    ShardUpgrade(ValueEntry),
    TalentBonus(TalentLink),
}

/// Value lists a placeholder can be looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Base,
    Scepter,
    Shard,
}

impl SpecialValue {
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            SpecialValue::Base(_) => Some(ValueKind::Base),
            SpecialValue::ScepterUpgrade(_) => Some(ValueKind::Scepter),
            SpecialValue::ShardUpgrade(_) => Some(ValueKind::Shard),
            SpecialValue::TalentBonus(_) => None,
        }
    }

    pub fn entry(&self) -> Option<&ValueEntry> {
        match self {
            SpecialValue::Base(e) | SpecialValue::ScepterUpgrade(e) | SpecialValue::ShardUpgrade(e) => {
                Some(e)
            }
            SpecialValue::TalentBonus(_) => None,
        }
    }

    pub fn entry_mut(&mut self) -> Option<&mut ValueEntry> {
        match self {
            SpecialValue::Base(e) | SpecialValue::ScepterUpgrade(e) | SpecialValue::ShardUpgrade(e) => {
                Some(e)
            }
            SpecialValue::TalentBonus(_) => None,
        }
    }
}

/// Entries of one kind, in source order
pub fn entries_of(values: &[SpecialValue], kind: ValueKind) -> impl Iterator<Item = &ValueEntry> + '_ {
    values
        .iter()
        .filter(move |v| v.kind() == Some(kind))
        .filter_map(SpecialValue::entry)
}

/// Case-insensitive lookup of an entry by name
pub fn find_entry<'a>(values: &'a [SpecialValue], kind: ValueKind, name: &str) -> Option<&'a ValueEntry> {
    entries_of(values, kind).find(|e| e.name.eq_ignore_ascii_case(name))
}

/// Talent links declared by an ability
pub fn talent_links(values: &[SpecialValue]) -> impl Iterator<Item = &TalentLink> + '_ {
    values.iter().filter_map(|v| match v {
        SpecialValue::TalentBonus(link) => Some(link),
        _ => None,
    })
}
