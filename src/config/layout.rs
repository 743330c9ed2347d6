//! Talent tree layout

use serde::Deserialize;

/// Position rule for talents in a hero's talent tree
///
/// The n-th surviving talent slot sits at
/// `level = first_level + level_step * (n / per_row)` and `side = n % per_row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TalentLayout {
    #[serde(default = "default_first_level")]
    pub first_level: u32,
    #[serde(default = "default_level_step")]
    pub level_step: u32,
    #[serde(default = "default_per_row")]
    pub per_row: u32,
}

fn default_first_level() -> u32 {
    10
}

fn default_level_step() -> u32 {
    5
}

fn default_per_row() -> u32 {
    2
}

impl Default for TalentLayout {
    fn default() -> Self {
        Self {
            first_level: default_first_level(),
            level_step: default_level_step(),
            per_row: default_per_row(),
        }
    }
}

impl TalentLayout {
    /// `(level, side)` for the talent at `index`
    ///
    /// Levels saturate at `u32::MAX` for oversized configured steps.
    #[inline]
    pub fn position(&self, index: usize) -> (u32, u32) {
        let per_row = self.per_row.max(1);
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        let row = index / per_row;
        (
            self.first_level
                .saturating_add(self.level_step.saturating_mul(row)),
            index % per_row,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = TalentLayout::default();
        let positions: Vec<(u32, u32)> = (0..8).map(|i| layout.position(i)).collect();
        assert_eq!(
            positions,
            vec![
                (10, 0),
                (10, 1),
                (15, 0),
                (15, 1),
                (20, 0),
                (20, 1),
                (25, 0),
                (25, 1)
            ]
        );
    }

    #[test]
    fn test_custom_layout() {
        let layout = TalentLayout {
            first_level: 5,
            level_step: 10,
            per_row: 3,
        };
        assert_eq!(layout.position(0), (5, 0));
        assert_eq!(layout.position(2), (5, 2));
        assert_eq!(layout.position(3), (15, 0));
    }

    #[test]
    fn test_oversized_step_saturates() {
        let layout: TalentLayout =
            serde_json::from_str(r#"{"first_level": 10, "level_step": 4294967295}"#).unwrap();
        assert_eq!(layout.position(1), (10, 1));
        assert_eq!(layout.position(2), (u32::MAX, 0));
        assert_eq!(layout.position(7), (u32::MAX, 1));
    }
}
