// SPDX-License-Identifier: MIT

//! Session — the caller-held palette state.
//!
//! Owns the base color, the rule, the last good base HSV and the four
//! accent slots. Every setter that actually changes the base or the rule
//! recalculates once; the slots stay editable in between.

use accent_color::{Hsv, Rgb};

use crate::engine::{HarmonyEngine, SLOTS};
use crate::error::HarmonyError;
use crate::options::EngineOptions;
use crate::rule::HarmonyRule;

/// Palette state for one base color and one harmony rule.
///
/// ```
/// use accent_color::Rgb;
/// use accent_harmony::{HarmonyRule, Session};
///
/// let mut session = Session::new(Rgb::new(1.0, 0.0, 0.0), HarmonyRule::Complementary);
/// let before = session.colors();
/// session.set_rule(HarmonyRule::Square);
/// assert_ne!(session.colors(), before);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// The base exactly as the caller last sent it.
    input: Rgb,
    base: Rgb,
    base_hsv: Hsv,
    rule: HarmonyRule,
    colors: [Rgb; SLOTS],
    engine: HarmonyEngine,
}

impl Session {
    /// Start a session with default engine options.
    #[must_use]
    pub fn new(base: Rgb, rule: HarmonyRule) -> Self {
        Self::with_options(base, rule, EngineOptions::default())
    }

    /// Start a session. The initial base seeds the remembered HSV; under
    /// Custom every slot starts as the base color.
    #[must_use]
    pub fn with_options(base: Rgb, rule: HarmonyRule, options: EngineOptions) -> Self {
        let mut session = Self {
            input: base,
            base,
            base_hsv: base.to_hsv(),
            rule,
            colors: [base; SLOTS],
            engine: HarmonyEngine::new(options),
        };
        session.recalculate();
        session
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// The base color as last corrected by the degeneracy guard.
    #[must_use]
    pub const fn base(&self) -> Rgb {
        self.base
    }

    /// The base color as the caller last sent it, before correction.
    #[must_use]
    pub const fn input(&self) -> Rgb {
        self.input
    }

    /// The remembered base HSV.
    #[must_use]
    pub const fn base_hsv(&self) -> Hsv {
        self.base_hsv
    }

    #[must_use]
    pub const fn rule(&self) -> HarmonyRule {
        self.rule
    }

    #[must_use]
    pub const fn colors(&self) -> [Rgb; SLOTS] {
        self.colors
    }

    /// One slot, or `None` past the fourth.
    #[must_use]
    pub fn color(&self, slot: usize) -> Option<Rgb> {
        self.colors.get(slot).copied()
    }

    #[must_use]
    pub const fn options(&self) -> &EngineOptions {
        self.engine.options()
    }

    // ── Mutation ─────────────────────────────────────────────────────────

    /// Change the base color. Returns `true` if it differed from the last
    /// color sent and the palette was recalculated.
    ///
    /// The comparison is against the caller's input, not the corrected
    /// [`base`](Self::base), which has been through a float round trip.
    pub fn set_base(&mut self, base: Rgb) -> bool {
        if base == self.input {
            return false;
        }
        self.input = base;
        self.recalculate();
        true
    }

    /// Parse and set the base color.
    ///
    /// # Errors
    ///
    /// [`HarmonyError::Color`] if `text` is not a recognized color.
    pub fn set_base_str(&mut self, text: &str) -> Result<bool, HarmonyError> {
        let base: Rgb = text.parse()?;
        Ok(self.set_base(base))
    }

    /// Change the rule. Returns `true` if it differed and the palette was
    /// recalculated.
    pub fn set_rule(&mut self, rule: HarmonyRule) -> bool {
        if rule == self.rule {
            return false;
        }
        self.rule = rule;
        self.recalculate();
        true
    }

    /// Replace the engine options and recalculate.
    pub fn set_options(&mut self, options: EngineOptions) {
        self.engine = HarmonyEngine::new(options);
        self.recalculate();
    }

    /// Overwrite one accent slot by hand. The edit lasts until the next
    /// base or rule change (forever under Custom).
    ///
    /// # Errors
    ///
    /// [`HarmonyError::SlotOutOfRange`] for `slot >= 4`.
    pub fn set_color(&mut self, slot: usize, color: Rgb) -> Result<(), HarmonyError> {
        let target = self
            .colors
            .get_mut(slot)
            .ok_or(HarmonyError::SlotOutOfRange(slot))?;
        *target = color;
        Ok(())
    }

    fn recalculate(&mut self) {
        let r = self
            .engine
            .recalculate(self.input, self.base_hsv, self.rule, self.colors);
        self.base = r.base;
        self.base_hsv = r.base_hsv;
        self.colors = r.colors;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    const TEAL: Rgb = Rgb::new(0.0, 0.5, 0.5);

    #[test]
    fn new_session_is_calculated() {
        let s = Session::new(RED, HarmonyRule::Shades);
        let v: Vec<f32> = s.colors().iter().map(|c| c.to_hsv().v).collect();
        // Shades at V=100: 75, 50, 25, 90 percent.
        for (got, want) in v.iter().zip([0.75, 0.5, 0.25, 0.9]) {
            assert!((got - want).abs() < 1e-4, "{v:?}");
        }
    }

    #[test]
    fn custom_session_starts_with_base() {
        let s = Session::new(TEAL, HarmonyRule::Custom);
        for c in s.colors() {
            assert!(c.approx_eq(TEAL, 1e-6), "{c:?}");
        }
    }

    #[test]
    fn unchanged_setters_do_not_recalculate() {
        let mut s = Session::new(RED, HarmonyRule::Triad);
        s.set_color(0, TEAL).unwrap();
        assert!(!s.set_rule(HarmonyRule::Triad));
        assert!(!s.set_base(RED));
        assert_eq!(s.color(0), Some(TEAL));
    }

    #[test]
    fn resending_the_same_base_keeps_edits() {
        // 8-bit blue that does not survive RGB → HSV → RGB bit for bit.
        let blue = Rgb::rgb8(5, 3, 254);
        let mut s = Session::new(RED, HarmonyRule::Complementary);
        assert!(s.set_base(blue));
        s.set_color(0, TEAL).unwrap();

        assert!(!s.set_base(blue));
        assert_eq!(s.color(0), Some(TEAL));
        assert_eq!(s.input(), blue);
    }

    #[test]
    fn resending_black_keeps_edits() {
        let mut s = Session::new(RED, HarmonyRule::Triad);
        assert!(s.set_base(Rgb::BLACK));
        s.set_color(3, TEAL).unwrap();

        assert!(!s.set_base(Rgb::BLACK));
        assert_eq!(s.color(3), Some(TEAL));
        assert_ne!(s.base(), Rgb::BLACK);
    }

    #[test]
    fn rule_change_overwrites_edits() {
        let mut s = Session::new(RED, HarmonyRule::Triad);
        s.set_color(0, TEAL).unwrap();
        assert!(s.set_rule(HarmonyRule::Square));
        assert_ne!(s.color(0), Some(TEAL));
    }

    #[test]
    fn custom_keeps_edits_across_base_changes() {
        let mut s = Session::new(RED, HarmonyRule::Analogous);
        s.set_rule(HarmonyRule::Custom);
        s.set_color(2, TEAL).unwrap();
        let held = s.colors();
        assert!(s.set_base(Rgb::new(0.2, 0.3, 0.9)));
        assert_eq!(s.colors(), held);
        assert!(s.set_base(Rgb::new(0.9, 0.9, 0.1)));
        assert_eq!(s.colors(), held);
    }

    #[test]
    fn black_base_falls_back_to_previous() {
        let mut s = Session::new(RED, HarmonyRule::Complementary);
        let remembered = s.base_hsv();
        s.set_base(Rgb::BLACK);
        assert_eq!(s.base_hsv(), remembered);
        assert_eq!(s.base(), remembered.to_rgb());
    }

    #[test]
    fn slot_out_of_range() {
        let mut s = Session::new(RED, HarmonyRule::Triad);
        assert_eq!(s.set_color(4, TEAL), Err(HarmonyError::SlotOutOfRange(4)));
        assert_eq!(s.color(4), None);
    }

    #[test]
    fn base_from_text() {
        let mut s = Session::new(RED, HarmonyRule::Triad);
        assert_eq!(s.set_base_str("#00ff00"), Ok(true));
        assert!(s.base().approx_eq(Rgb::new(0.0, 1.0, 0.0), 1e-6));
        assert!(matches!(s.set_base_str("nope"), Err(HarmonyError::Color(_))));
    }

    #[test]
    fn options_take_effect() {
        use crate::options::ClampPolicy;

        // S just under 91: Triad slot 0 steps to 100.5 without the clamp.
        let base = Hsv::from_degrees(10.0, 90.5, 80.0).to_rgb();
        let mut s = Session::new(base, HarmonyRule::Triad);
        assert!(s.colors()[0].is_in_gamut());

        let mut options = *s.options();
        options.clamp = ClampPolicy::Preserve;
        s.set_options(options);
        assert!(!s.colors()[0].is_in_gamut());
    }
}
