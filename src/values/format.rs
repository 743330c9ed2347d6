//! Locale-aware number formatting for substituted values

use crate::config::PipelineConfig;
use crate::model::{entries_of, AbilityStats, SpecialValue, ValueKind};
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// Separator between per-rank values: non-breaking space, slash, non-breaking space
pub const VALUE_SEPARATOR: &str = "\u{a0}/\u{a0}";

/// Bold markup wrapped around substituted values
pub const BOLD: &str = "**";

/// Number formatting rules for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
        }
    }
}

impl NumberFormat {
    pub fn for_language(config: &PipelineConfig, language: &str) -> Self {
        Self {
            decimal_separator: if config.uses_decimal_comma(language) {
                ','
            } else {
                '.'
            },
        }
    }

    /// Format a number with at most two decimals and no trailing zeros
    pub fn format(&self, value: f64) -> String {
        let rounded = (value * 100.0).round() / 100.0;
        if rounded == 0.0 {
            return "0".to_string();
        }
        if rounded.fract() == 0.0 {
            return format!("{}", rounded as i64);
        }
        let mut text = format!("{:.2}", rounded);
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
        if self.decimal_separator != '.' {
            text = text.replace('.', &self.decimal_separator.to_string());
        }
        text
    }
}

/// Bold, de-duplicated, separator-joined rendering of a value list
///
/// Returns `None` for an empty list. With `percent`, every number gets a `%`.
pub fn format_values(values: &[f64], percent: bool, format: NumberFormat) -> Option<String> {
    if values.is_empty() {
        return None;
    }

    let mut distinct: SmallVec<[String; 4]> = SmallVec::new();
    for value in values {
        let mut text = format.format(*value);
        if percent {
            text.push('%');
        }
        if !distinct.contains(&text) {
            distinct.push(text);
        }
    }

    Some(format!("{BOLD}{}{BOLD}", distinct.join(VALUE_SEPARATOR)))
}

/// Formatted built-in fields and base values, keyed by KV name
pub fn displayed_values(
    stats: &AbilityStats,
    values: &[SpecialValue],
    format: NumberFormat,
) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    for (name, field) in stats.present() {
        if let Some(text) = format_values(field, false, format) {
            out.insert(name.to_string(), text);
        }
    }
    for entry in entries_of(values, ValueKind::Base) {
        if let Some(text) = format_values(&entry.values, entry.is_percentage, format) {
            out.entry(entry.name.clone()).or_insert(text);
        }
    }
    out
}
