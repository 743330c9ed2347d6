//! Named pattern registry
//!
//! Every regular expression used by the pipeline lives here, one constant per
//! pattern, so overlapping string rules can be audited and tested in one place.

use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

/// Separators inside a KV list value: "16 15 14 13", "1,2;3"
pub static LIST_SEPARATOR: Lazy<Regex> = Lazy::new(|| compile(r"[,;\s]+"));

/// Characters removed before a lenient numeric parse
pub static NON_NUMERIC: Lazy<Regex> = Lazy::new(|| compile(r"[^0-9.\-]"));

/// Grammatical gender marker embedded in localized names: "#|m|#Axe"
pub static GENDER_MARKER: Lazy<Regex> = Lazy::new(|| compile(r"#\|\w+\|#"));

/// Value names that belong to the scepter upgrade
pub static SCEPTER_NAME: Lazy<Regex> = Lazy::new(|| compile(r"(?i)scepter"));

/// Value names that belong to the shard upgrade
pub static SHARD_NAME: Lazy<Regex> = Lazy::new(|| compile(r"(?i)shard"));

/// Inline scepter upgrade key inside an `AbilityValues` entry
pub static SCEPTER_BONUS_KEY: Lazy<Regex> = Lazy::new(|| compile(r"(?i)^special_bonus_scepter$"));

/// Inline shard upgrade key inside an `AbilityValues` entry
pub static SHARD_BONUS_KEY: Lazy<Regex> = Lazy::new(|| compile(r"(?i)^special_bonus_shard$"));

/// Keys inside a special value collection that never carry the numeric payload
pub static NON_VALUE_KEY: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)^(var_type|ad_linked_abilities|linkedspecialbonus(operation|field)?|requires\w*|calculatespelldamagetooltip|dynamicvalue|levelkey|affectedbyaoeincrease|special_bonus_\w+|\w*tooltip\w*)$",
    )
});

/// Keys that link a special value to a talent by name
pub static TALENT_LINK_KEY: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^(linkedspecialbonus|ad_linked_abilities)$"));

/// `%name%` and `%name%%%` placeholders in ability text
pub static PERCENT_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| compile(r"%([A-Za-z_][A-Za-z0-9_]*)%(%%)?"));

/// `{s:name}` and `{s:bonus_name}` placeholders in talent text
pub static TALENT_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| compile(r"\{s:(bonus_)?([A-Za-z0-9_]+)\}"));

/// Escaped percent left over after substitution
pub static ESCAPED_PERCENT: Lazy<Regex> = Lazy::new(|| compile(r"%%"));

/// Upgrade strings that scale the base value instead of replacing it
pub static PERCENT_UPGRADE: Lazy<Regex> = Lazy::new(|| compile(r"%\s*$"));

/// Hero ability slot keys: `Ability1` .. `Ability25`
pub static ABILITY_SLOT: Lazy<Regex> = Lazy::new(|| compile(r"^(?i:ability)(\d+)$"));

/// Placeholder ability names that never reach a hero's ability list
pub static HIDDEN_ABILITY: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^(generic_hidden|dota_empty_ability\w*|\w+_empty\d*)$"));

/// Generic attribute bonus slot
pub static ATTRIBUTE_BONUS: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^(attribute_bonus|special_bonus_attributes)$"));

/// Talent internal names
pub static TALENT_NAME: Lazy<Regex> = Lazy::new(|| compile(r"(?i)^special_bonus_"));

/// Numeric suffix of generic talents: `special_bonus_armor_5`
pub static TALENT_NUMERIC_SUFFIX: Lazy<Regex> = Lazy::new(|| compile(r"_\d+$"));

/// Item internal names
pub static ITEM_NAME: Lazy<Regex> = Lazy::new(|| compile(r"(?i)^item_"));

/// Patch manifest sections holding regular item notes
pub static ITEM_SECTION: Lazy<Regex> = Lazy::new(|| compile(r"(?i)^items(_\w+)?$"));

/// Patch manifest sections holding neutral item notes
pub static NEUTRAL_ITEM_SECTION: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^neutral_items(_\w+)?$"));
