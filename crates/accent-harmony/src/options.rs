// SPDX-License-Identifier: MIT

//! Engine options — the knobs around the harmony formulas.
//!
//! Options are plain data on [`EngineOptions`]. This module also parses
//! the short directive syntax a caller can hand over from a settings line
//! or config file.
//!
//! # Directive syntax
//!
//! | Syntax            | Effect                          |
//! |-------------------|---------------------------------|
//! | `clamp`           | Enable a boolean option         |
//! | `noclamp`         | Disable a boolean option        |
//! | `threshold=0.02`  | Assign a value                  |
//!
//! Several directives may be separated by whitespace.
//!
//! # Options
//!
//! | Name        | Abbrev | Type          | Default |
//! |-------------|--------|---------------|---------|
//! | `clamp`     | `cl`   | bool / policy | clamp   |
//! | `threshold` | `th`   | float [0, 1)  | 0.01    |

use crate::error::HarmonyError;

/// Saturation or value (normalized) below this makes the base hue unreliable.
pub const DEFAULT_DEGENERATE_THRESHOLD: f32 = 0.01;

/// What happens to derived saturation/value that leave [0, 100].
///
/// A handful of rule branches (Triad `S+10` just under 91, Complementary
/// `V±30`, Shades `V+30` just under 71, ...) can step outside the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ClampPolicy {
    /// Clamp every derived S and V into [0, 100].
    #[default]
    Clamp,
    /// Keep the raw formula output; HSV → RGB may leave the sRGB gamut.
    Preserve,
}

/// Configuration for [`HarmonyEngine`](crate::engine::HarmonyEngine).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EngineOptions {
    /// Normalized S or V under which the previous base HSV is kept.
    pub degenerate_threshold: f32,
    pub clamp: ClampPolicy,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            degenerate_threshold: DEFAULT_DEGENERATE_THRESHOLD,
            clamp: ClampPolicy::Clamp,
        }
    }
}

/// A parsed option directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionDirective {
    /// `name` — enable a boolean option.
    On(String),
    /// `noname` — disable a boolean option.
    Off(String),
    /// `name=value` — assign a value.
    Assign(String, String),
}

/// Parse a whitespace-separated directive string.
#[must_use]
pub fn parse_directives(args: &str) -> Vec<OptionDirective> {
    args.split_whitespace().map(parse_directive).collect()
}

fn parse_directive(arg: &str) -> OptionDirective {
    if let Some((name, value)) = arg.split_once('=') {
        return OptionDirective::Assign(name.to_string(), value.to_string());
    }
    if let Some(name) = arg.strip_prefix("no").filter(|n| is_bool_option(n)) {
        return OptionDirective::Off(name.to_string());
    }
    OptionDirective::On(arg.to_string())
}

fn is_bool_option(name: &str) -> bool {
    matches!(name, "clamp" | "cl")
}

fn is_threshold_option(name: &str) -> bool {
    matches!(name, "threshold" | "th")
}

impl EngineOptions {
    /// Apply every directive in `args`, stopping at the first error.
    ///
    /// Directives before the failing one stay applied.
    ///
    /// # Errors
    ///
    /// [`HarmonyError::UnknownOption`] for names not in the table above,
    /// [`HarmonyError::InvalidValue`] for missing or malformed values.
    pub fn apply(&mut self, args: &str) -> Result<(), HarmonyError> {
        parse_directives(args)
            .iter()
            .try_for_each(|d| self.apply_directive(d))
    }

    /// Apply a single directive.
    ///
    /// # Errors
    ///
    /// See [`EngineOptions::apply`].
    pub fn apply_directive(&mut self, directive: &OptionDirective) -> Result<(), HarmonyError> {
        match directive {
            OptionDirective::On(name) if is_bool_option(name) => {
                self.clamp = ClampPolicy::Clamp;
            }
            OptionDirective::Off(name) if is_bool_option(name) => {
                self.clamp = ClampPolicy::Preserve;
            }
            OptionDirective::Assign(name, value) if is_bool_option(name) => {
                self.clamp = match value.to_ascii_lowercase().as_str() {
                    "on" | "true" | "clamp" => ClampPolicy::Clamp,
                    "off" | "false" | "preserve" => ClampPolicy::Preserve,
                    _ => return Err(HarmonyError::invalid_value(name, value)),
                };
            }
            OptionDirective::Assign(name, value) if is_threshold_option(name) => {
                let threshold: f32 = value
                    .parse()
                    .map_err(|_| HarmonyError::invalid_value(name, value))?;
                if !(0.0..1.0).contains(&threshold) {
                    return Err(HarmonyError::invalid_value(name, value));
                }
                self.degenerate_threshold = threshold;
            }
            OptionDirective::On(name) if is_threshold_option(name) => {
                return Err(HarmonyError::invalid_value(name, ""));
            }
            OptionDirective::On(name)
            | OptionDirective::Off(name)
            | OptionDirective::Assign(name, _) => {
                return Err(HarmonyError::UnknownOption(name.clone()));
            }
        }
        Ok(())
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
    fn defaults() {
        let o = EngineOptions::default();
        assert_eq!(o.clamp, ClampPolicy::Clamp);
        assert_eq!(o.degenerate_threshold, 0.01);
    }

    #[test]
    fn parse_forms() {
        assert_eq!(
            parse_directives("noclamp th=0.5 clamp nothing"),
            vec![
                OptionDirective::Off("clamp".into()),
                OptionDirective::Assign("th".into(), "0.5".into()),
                OptionDirective::On("clamp".into()),
                OptionDirective::On("nothing".into()),
            ]
        );
        assert!(parse_directives("   ").is_empty());
    }

    #[test]
    fn toggle_clamp() {
        let mut o = EngineOptions::default();
        o.apply("noclamp").unwrap();
        assert_eq!(o.clamp, ClampPolicy::Preserve);
        o.apply("cl").unwrap();
        assert_eq!(o.clamp, ClampPolicy::Clamp);
        o.apply("clamp=preserve").unwrap();
        assert_eq!(o.clamp, ClampPolicy::Preserve);
    }

    #[test]
    fn assign_threshold() {
        let mut o = EngineOptions::default();
        o.apply("threshold=0.05").unwrap();
        assert_eq!(o.degenerate_threshold, 0.05);
    }

    #[test]
    fn threshold_errors() {
        let mut o = EngineOptions::default();
        assert_eq!(
            o.apply("threshold=1.5"),
            Err(HarmonyError::invalid_value("threshold", "1.5"))
        );
        assert_eq!(
            o.apply("th=abc"),
            Err(HarmonyError::invalid_value("th", "abc"))
        );
        assert_eq!(o.apply("th"), Err(HarmonyError::invalid_value("th", "")));
        assert_eq!(o.degenerate_threshold, DEFAULT_DEGENERATE_THRESHOLD);
    }

    #[test]
    fn unknown_option() {
        let mut o = EngineOptions::default();
        assert_eq!(
            o.apply("wrap"),
            Err(HarmonyError::UnknownOption("wrap".into()))
        );
        assert_eq!(
            o.apply("clamp=maybe"),
            Err(HarmonyError::invalid_value("clamp", "maybe"))
        );
    }

    #[test]
    fn earlier_directives_stick_on_error() {
        let mut o = EngineOptions::default();
        assert!(o.apply("noclamp bogus").is_err());
        assert_eq!(o.clamp, ClampPolicy::Preserve);
    }
}
