//! Scepter and shard upgrade arithmetic

use crate::kv::parse_list;
use crate::patterns::PERCENT_UPGRADE;

/// How an upgrade string modifies the base values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeMode {
    /// "20%": scale every base value by +20%
    Percentage,
    /// "+50" / "-2": add to every base value
    Additive,
    /// "300": replace the base values
    Replace,
}

impl UpgradeMode {
    /// Classify a raw upgrade string
    ///
    /// The `%` suffix heuristic follows the source formatting convention; it is
    /// not an explicit schema flag.
    pub fn detect(raw: &str) -> Self {
        let raw = raw.trim();
        if PERCENT_UPGRADE.is_match(raw) {
            UpgradeMode::Percentage
        } else if raw.starts_with('+') || raw.starts_with('-') {
            UpgradeMode::Additive
        } else {
            UpgradeMode::Replace
        }
    }
}

/// Round away float noise from upgrade arithmetic (8 * 1.2 = 9.600000000000001)
#[inline]
pub fn round_value(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Resolve an upgrade string against the base values, element-wise
///
/// A shorter upgrade list repeats its last element. Without base values, the
/// upgrade's own numbers are used.
pub fn apply_upgrade(base: &[f64], raw: &str) -> Vec<f64> {
    let numbers: Vec<f64> = parse_list(raw, true).unwrap_or_default();
    if base.is_empty() || numbers.is_empty() {
        return numbers;
    }

    let mode = UpgradeMode::detect(raw);
    if mode == UpgradeMode::Replace {
        return numbers;
    }

    let modifier = |i: usize| numbers.get(i).or(numbers.last()).copied().unwrap_or(0.0);
    base.iter()
        .enumerate()
        .map(|(i, b)| match mode {
            UpgradeMode::Percentage => round_value(b * (1.0 + modifier(i) / 100.0)),
            _ => round_value(b + modifier(i)),
        })
        .collect()
}
