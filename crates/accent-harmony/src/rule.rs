// SPDX-License-Identifier: MIT

//! Harmony rules — the closed set of palette recipes.
//!
//! Every rule except [`HarmonyRule::Custom`] derives four accent colors from
//! one base color. Custom leaves whatever the four slots currently hold.

use std::fmt;
use std::str::FromStr;

use crate::error::HarmonyError;

/// The kind of harmony used to derive the four accent slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum HarmonyRule {
    /// Neighbours ±15° and ±30° on the artist's wheel.
    #[default]
    Analogous,
    /// Base hue only, varied in saturation and value.
    Monochromatic,
    /// Three hues 120° apart.
    Triad,
    /// Base plus its 180° opposite.
    Complementary,
    /// The two neighbours of the complement (±150°).
    SplitComplementary,
    /// ±30° and ±150°.
    DoubleSplitComplementary,
    /// Four hues 90° apart.
    Square,
    /// +30°, +150° and +165°.
    Compound,
    /// Base hue and saturation, value only.
    Shades,
    /// No derivation; the slots keep their current colors.
    Custom,
}

impl HarmonyRule {
    /// Kebab-case identifier of this rule.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Monochromatic => "monochromatic",
            Self::Triad => "triad",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split-complementary",
            Self::DoubleSplitComplementary => "double-split-complementary",
            Self::Square => "square",
            Self::Compound => "compound",
            Self::Shades => "shades",
            Self::Custom => "custom",
        }
    }

    /// Parse a rule from its name.
    ///
    /// Case-insensitive; `-`, `_` and spaces are ignored, so
    /// `"split-complementary"`, `"SplitComplementary"` and
    /// `"split_complementary"` all match.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = fold(name);
        Self::all().iter().find(|r| fold(r.name()) == wanted).copied()
    }

    /// All rules, in menu order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Analogous,
            Self::Monochromatic,
            Self::Triad,
            Self::Complementary,
            Self::SplitComplementary,
            Self::DoubleSplitComplementary,
            Self::Square,
            Self::Compound,
            Self::Shades,
            Self::Custom,
        ]
    }

    /// True for the passthrough rule.
    #[must_use]
    pub const fn is_custom(self) -> bool {
        matches!(self, Self::Custom)
    }
}

fn fold(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for HarmonyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyRule {
    type Err = HarmonyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.trim()).ok_or_else(|| HarmonyError::UnknownRule(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ten_rules() {
        assert_eq!(HarmonyRule::all().len(), 10);
    }

    #[test]
    fn names_round_trip() {
        for &rule in HarmonyRule::all() {
            assert_eq!(HarmonyRule::from_name(rule.name()), Some(rule));
            assert_eq!(rule.to_string().parse::<HarmonyRule>(), Ok(rule));
        }
    }

    #[test]
    fn loose_spellings() {
        assert_eq!(
            HarmonyRule::from_name("DoubleSplitComplementary"),
            Some(HarmonyRule::DoubleSplitComplementary)
        );
        assert_eq!(
            HarmonyRule::from_name("split_complementary"),
            Some(HarmonyRule::SplitComplementary)
        );
        assert_eq!(
            HarmonyRule::from_name("Double Split Complementary"),
            Some(HarmonyRule::DoubleSplitComplementary)
        );
        assert_eq!(HarmonyRule::from_name("triads"), None);
        assert_eq!("  TRIAD ".parse::<HarmonyRule>(), Ok(HarmonyRule::Triad));
    }

    #[test]
    fn unknown_name() {
        assert_eq!(
            "tetrad".parse::<HarmonyRule>(),
            Err(HarmonyError::UnknownRule("tetrad".to_string()))
        );
    }

    #[test]
    fn only_custom_is_custom() {
        let custom: Vec<_> = HarmonyRule::all().iter().filter(|r| r.is_custom()).collect();
        assert_eq!(custom, [&HarmonyRule::Custom]);
    }

    #[test]
    fn default_is_analogous() {
        assert_eq!(HarmonyRule::default(), HarmonyRule::Analogous);
    }
}
