//! Property tests for the value resolver
//!
//! Covers de-duplication, idempotent substitution (including mixed `%` and
//! talent syntax) and percentage upgrades.

use proptest::prelude::*;

use crate::model::{AbilityStats, SpecialValue, ValueEntry};
use crate::values::{apply_upgrade, format_values, NumberFormat, TemplateContext, VALUE_SEPARATOR};

proptest! {
    /// Identical per-rank values render as a single bold number
    #[test]
    fn prop_identical_values_render_once(
        value in 0u32..10_000,
        ranks in 1usize..8,
    ) {
        let values = vec![value as f64; ranks];
        let text = format_values(&values, false, NumberFormat::default()).unwrap();
        prop_assert_eq!(text.clone(), format!("**{}**", value));
        prop_assert!(!text.contains(VALUE_SEPARATOR));
    }

    /// Rendering keeps one entry per distinct value
    #[test]
    fn prop_distinct_count_matches(
        values in prop::collection::vec(0u32..50, 1..8),
    ) {
        let floats: Vec<f64> = values.iter().map(|v| *v as f64).collect();
        let text = format_values(&floats, false, NumberFormat::default()).unwrap();
        let mut distinct = values.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(text.matches(VALUE_SEPARATOR).count(), distinct.len() - 1);
    }

    /// Feeding resolved text back through the resolver changes nothing
    #[test]
    fn prop_resolution_is_idempotent(
        damage in prop::collection::vec(1u32..500, 1..5),
        pct in prop::collection::vec(1u32..100, 1..5),
        prefix in "[A-Za-z ,.]{0,20}",
        use_percent in any::<bool>(),
        include_unknown in any::<bool>(),
    ) {
        let values = vec![
            SpecialValue::Base(ValueEntry::new(
                "damage",
                damage.iter().map(|v| *v as f64).collect(),
            )),
            SpecialValue::Base(ValueEntry::new(
                "chance",
                pct.iter().map(|v| *v as f64).collect(),
            )),
        ];
        let stats = AbilityStats::default();
        let ctx = TemplateContext::base(&values, &stats, NumberFormat::default());

        let mut source = format!("{prefix} deals %damage% damage");
        if use_percent {
            source.push_str(" with %chance%%% chance");
        }
        if include_unknown {
            source.push_str(" and %unknown% extra");
        }

        let once = ctx.resolve(&source);
        let twice = ctx.resolve(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert!(!once.contains("%damage%"));
        prop_assert!(!once.contains("****"));
    }

    /// Arbitrary mixes of `%`, `%%` and `{s:..}` fragments are stable after one call
    #[test]
    fn prop_mixed_syntax_resolution_is_idempotent(source in "[%ab_ {}s:x]{0,24}") {
        let values = vec![
            SpecialValue::Base(ValueEntry::new("a", vec![1.0, 2.0])),
            SpecialValue::Base(ValueEntry::new("b", vec![5.0])),
        ];
        let stats = AbilityStats::default();
        let ctx = TemplateContext::base(&values, &stats, NumberFormat::default());

        let once = ctx.resolve(&source);
        let twice = ctx.resolve(&once);
        prop_assert_eq!(once, twice);
    }

    /// A percentage upgrade scales every base element by the same factor
    #[test]
    fn prop_percentage_upgrade_scales(
        base in prop::collection::vec(1u32..1000, 1..6),
        pct in 1u32..200,
    ) {
        let base: Vec<f64> = base.iter().map(|v| *v as f64).collect();
        let upgraded = apply_upgrade(&base, &format!("{pct}%"));
        prop_assert_eq!(upgraded.len(), base.len());
        for (b, u) in base.iter().zip(upgraded.iter()) {
            let expected = b * (1.0 + pct as f64 / 100.0);
            prop_assert!((u - expected).abs() < 1e-3, "{} vs {}", u, expected);
        }
    }
}

#[test]
fn test_shard_percentage_example() {
    assert_eq!(apply_upgrade(&[8.0, 10.0, 12.0], "20%"), vec![9.6, 12.0, 14.4]);
}
