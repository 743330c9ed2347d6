//! Placeholder substitution
//!
//! Supported syntaxes:
//! - `%name%` and `%name%%%` (the latter appends `%` to every number)
//! - `{s:name}` and `{s:bonus_name}` (talent text)
//!
//! Lookups walk an ordered list of value sources and take the first hit.
//! Unresolved placeholders stay verbatim. Leftover `%%` escapes are dropped.

use super::{format_values, NumberFormat};
use crate::error::ResolveError;
use crate::kv::parse_list;
use crate::model::{entries_of, AbilityStats, SpecialValue, ValueEntry, ValueKind};
use crate::patterns::{ESCAPED_PERCENT, PERCENT_PLACEHOLDER, TALENT_PLACEHOLDER};
use regex::Captures;

/// One place a placeholder name can be resolved from
#[derive(Debug, Clone, Copy)]
pub enum ValueSource<'a> {
    /// Special values of one kind
    Special {
        values: &'a [SpecialValue],
        kind: ValueKind,
    },
    /// Plain entry list (talent values)
    Entries(&'a [ValueEntry]),
    /// Built-in ability fields (`AbilityCooldown`, ...)
    Builtin(&'a AbilityStats),
}

impl<'a> ValueSource<'a> {
    fn lookup(&self, name: &str) -> Option<&'a [f64]> {
        let found = match *self {
            ValueSource::Special { values, kind } => entries_of(values, kind)
                .find(|e| e.name.eq_ignore_ascii_case(name))
                .map(|e| e.values.as_slice()),
            ValueSource::Entries(entries) => entries
                .iter()
                .find(|e| e.name.eq_ignore_ascii_case(name))
                .map(|e| e.values.as_slice()),
            ValueSource::Builtin(stats) => stats.field(name),
        };
        found.filter(|values| !values.is_empty())
    }
}

/// Talent bonus numbers keyed by the ability value they augment
#[derive(Debug, Clone, PartialEq)]
pub struct BonusValue {
    pub value_name: String,
    pub values: Vec<f64>,
}

impl BonusValue {
    /// Parse a raw bonus string such as "+120" or "15%"
    pub fn parse(value_name: impl Into<String>, raw: &str) -> Self {
        Self {
            value_name: value_name.into(),
            values: parse_list(raw, true).unwrap_or_default(),
        }
    }
}

/// Ordered lookup strategies plus number formatting for one text field
#[derive(Debug, Clone)]
pub struct TemplateContext<'a> {
    sources: Vec<ValueSource<'a>>,
    bonuses: Vec<BonusValue>,
    format: NumberFormat,
}

impl<'a> TemplateContext<'a> {
    pub fn new(format: NumberFormat) -> Self {
        Self {
            sources: Vec::new(),
            bonuses: Vec::new(),
            format,
        }
    }

    /// Append a lookup source; earlier sources win
    pub fn with_source(mut self, source: ValueSource<'a>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_bonuses(mut self, bonuses: Vec<BonusValue>) -> Self {
        self.bonuses = bonuses;
        self
    }

    /// Context for base text: own values, then built-in fields
    pub fn base(values: &'a [SpecialValue], stats: &'a AbilityStats, format: NumberFormat) -> Self {
        Self::new(format)
            .with_source(ValueSource::Special {
                values,
                kind: ValueKind::Base,
            })
            .with_source(ValueSource::Builtin(stats))
    }

    /// Context for upgrade text: upgrade values, then base values, then built-ins
    pub fn upgrade(
        values: &'a [SpecialValue],
        kind: ValueKind,
        stats: &'a AbilityStats,
        format: NumberFormat,
    ) -> Self {
        Self::new(format)
            .with_source(ValueSource::Special { values, kind })
            .with_source(ValueSource::Special {
                values,
                kind: ValueKind::Base,
            })
            .with_source(ValueSource::Builtin(stats))
    }

    fn lookup(&self, name: &str) -> Option<&[f64]> {
        self.sources.iter().find_map(|source| source.lookup(name))
    }

    fn lookup_bonus(&self, name: &str) -> Option<&[f64]> {
        self.bonuses
            .iter()
            .find(|b| b.value_name.eq_ignore_ascii_case(name) && !b.values.is_empty())
            .map(|b| b.values.as_slice())
    }

    /// Substitute every resolvable placeholder in `text`
    ///
    /// Dropping a `%%` escape can join the halves of a new placeholder
    /// (`{s:a%%}`), so passes repeat until the text is stable. Every changing
    /// pass consumes at least one `%` or `{` of the input, which bounds the loop.
    pub fn resolve(&self, text: &str) -> String {
        if !text.contains('%') && !text.contains("{s:") {
            return text.to_string();
        }

        let max_passes = text.chars().filter(|c| matches!(c, '%' | '{')).count();
        let mut current = self.resolve_pass(text);
        for _ in 0..max_passes {
            let next = self.resolve_pass(&current);
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    fn resolve_pass(&self, text: &str) -> String {
        let text = PERCENT_PLACEHOLDER.replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            let percent = caps.get(2).is_some();
            self.lookup(name)
                .and_then(|values| format_values(values, percent, self.format))
                .unwrap_or_else(|| unresolved(&caps[0]))
        });

        let text = TALENT_PLACEHOLDER.replace_all(&text, |caps: &Captures| {
            let name = &caps[2];
            let values = match caps.get(1) {
                Some(prefix) => self
                    .lookup_bonus(name)
                    .or_else(|| self.lookup(&format!("{}{}", prefix.as_str(), name))),
                None => self.lookup(name),
            };
            values
                .and_then(|values| format_values(values, false, self.format))
                .unwrap_or_else(|| unresolved(&caps[0]))
        });

        ESCAPED_PERCENT.replace_all(&text, "").into_owned()
    }
}

fn unresolved(placeholder: &str) -> String {
    tracing::debug!(
        error = %ResolveError::UnresolvedPlaceholder(placeholder.to_string()),
        "Leaving placeholder as-is"
    );
    placeholder.to_string()
}
