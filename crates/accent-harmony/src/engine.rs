// SPDX-License-Identifier: MIT

//! Harmony engine — one base color in, four accent colors out.
//!
//! ```text
//! base Rgb ──► Hsv ──► degeneracy guard ──► working units (°, %, %)
//!                          │                        │
//!                          ▼                        ▼
//!                   corrected base         rule formula per slot
//!                                          (hue via the CMY wheel)
//!                                                   │
//!                                                   ▼
//!                                    clamp policy ──► 4 × Rgb
//! ```
//!
//! The engine holds no state between calls. The previous base HSV needed by
//! the degeneracy guard is passed in and handed back in [`Recalculation`];
//! [`Session`](crate::session::Session) does that bookkeeping for callers
//! that want it.

use accent_color::{Hsv, Rgb, wrap_degrees};

use crate::options::{ClampPolicy, EngineOptions};
use crate::rule::HarmonyRule;
use crate::wheel::{cmy_hue_to_rgb_hue, remap, rgb_hue_to_cmy_hue};

/// Number of accent slots every rule fills.
pub const SLOTS: usize = 4;

/// Result of one [`HarmonyEngine::recalculate`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recalculation {
    /// The base color after the degeneracy guard, as RGB.
    pub base: Rgb,
    /// The base color after the degeneracy guard, as HSV. Feed this back as
    /// `previous` on the next call.
    pub base_hsv: Hsv,
    /// The four accent colors.
    pub colors: [Rgb; SLOTS],
}

/// Per-slot hue (degrees), saturation and value (percent) produced by a rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accents {
    pub hue: [f32; SLOTS],
    pub saturation: [f32; SLOTS],
    pub value: [f32; SLOTS],
}

impl Accents {
    /// Every slot equal to the base.
    const fn splat(h: f32, s: f32, v: f32) -> Self {
        Self {
            hue: [h; SLOTS],
            saturation: [s; SLOTS],
            value: [v; SLOTS],
        }
    }

    /// Slot `i` as a `(degrees, percent, percent)` triple.
    #[must_use]
    pub const fn triple(&self, i: usize) -> (f32, f32, f32) {
        (self.hue[i], self.saturation[i], self.value[i])
    }

    /// Slot `i` as normalized HSV.
    #[must_use]
    pub fn hsv(&self, i: usize) -> Hsv {
        Hsv::from_degrees(self.hue[i], self.saturation[i], self.value[i])
    }

    /// All four slots as RGB.
    #[must_use]
    pub fn to_rgb(&self) -> [Rgb; SLOTS] {
        std::array::from_fn(|i| self.hsv(i).to_rgb())
    }
}

/// Stateless palette calculator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HarmonyEngine {
    options: EngineOptions,
}

impl HarmonyEngine {
    #[must_use]
    pub const fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Recompute the palette for `base` under `rule`.
    ///
    /// - `previous`: the base HSV returned by the last call. Used in full
    ///   when `base` is too close to gray or black to carry a hue.
    /// - `current`: the four colors the caller holds now. Returned untouched
    ///   under [`HarmonyRule::Custom`].
    #[must_use]
    pub fn recalculate(
        &self,
        base: Rgb,
        previous: Hsv,
        rule: HarmonyRule,
        current: [Rgb; SLOTS],
    ) -> Recalculation {
        log::trace!("recalculate {rule} from {base:?}");

        let mut base_hsv = base.to_hsv();
        if base_hsv.is_degenerate(self.options.degenerate_threshold) {
            log::debug!("base {base:?} has no usable hue, keeping {previous:?}");
            base_hsv = previous;
        }
        let corrected = base_hsv.to_rgb();

        let colors = self.accents(base_hsv, rule).map_or(current, |a| a.to_rgb());

        Recalculation {
            base: corrected,
            base_hsv,
            colors,
        }
    }

    /// Derive the four slots in working units, with the clamp policy
    /// applied. `None` for [`HarmonyRule::Custom`].
    #[must_use]
    pub fn accents(&self, base: Hsv, rule: HarmonyRule) -> Option<Accents> {
        let (h, s, v) = base.to_degrees();
        let mut accents = derive(wrap_degrees(h), s, v, rule)?;
        if self.options.clamp == ClampPolicy::Clamp {
            clamp_percentages(&mut accents, rule);
        }
        Some(accents)
    }
}

/// Recalculate with default options.
#[must_use]
pub fn recalculate(
    base: Rgb,
    previous: Hsv,
    rule: HarmonyRule,
    current: [Rgb; SLOTS],
) -> Recalculation {
    HarmonyEngine::default().recalculate(base, previous, rule, current)
}

// ---------------------------------------------------------------------------
// Rule formulas
// ---------------------------------------------------------------------------

/// `x + by` below `pivot`, else `x - by`.
fn rise_or_fall(x: f32, pivot: f32, by: f32) -> f32 {
    if x < pivot { x + by } else { x - by }
}

/// `x - by` above `pivot`, else `x + by`.
fn fall_or_rise(x: f32, pivot: f32, by: f32) -> f32 {
    if x > pivot { x - by } else { x + by }
}

/// Gentle +5 with a floor of 10 and a ceiling turn at 95.
fn nudge_up(s: f32) -> f32 {
    if s > 95.0 {
        s - 5.0
    } else if s < 5.0 {
        10.0
    } else {
        s + 5.0
    }
}

/// Gentle -5, except +5 inside [5, 14].
fn nudge_down(s: f32) -> f32 {
    if s > 14.0 || s < 5.0 { s - 5.0 } else { s + 5.0 }
}

/// Hue shifter for one base hue: offsets are measured on the CMY wheel.
struct Shift {
    cmy: f32,
}

impl Shift {
    fn from_rgb_hue(h: f32) -> Self {
        Self { cmy: rgb_hue_to_cmy_hue(h) }
    }

    fn by(&self, offset: f32) -> f32 {
        wrap_degrees(cmy_hue_to_rgb_hue(self.cmy + offset))
    }
}

#[allow(clippy::too_many_lines)]
fn derive(h: f32, s: f32, v: f32, rule: HarmonyRule) -> Option<Accents> {
    let mut a = Accents::splat(h, s, v);
    let shift = Shift::from_rgb_hue(h);

    match rule {
        HarmonyRule::Analogous => {
            a.hue = [shift.by(30.0), shift.by(15.0), shift.by(-15.0), shift.by(-30.0)];
            a.saturation = [nudge_up(s); SLOTS];
            let outer = (v + 5.0).clamp(20.0, 100.0);
            let inner = if v > 90.0 {
                v - 10.0
            } else if v < 10.0 {
                20.0
            } else {
                v + 10.0
            };
            a.value = [outer, inner, inner, outer];
        }
        HarmonyRule::Monochromatic => {
            let s_mid = rise_or_fall(s, 40.0, 30.0);
            a.saturation[1] = s_mid;
            a.saturation[2] = s_mid;
            let v_even = if v > 70.0 { v - 50.0 } else { v + 30.0 };
            a.value[0] = v_even;
            a.value[2] = v_even;
            a.value[1] = if v < 10.0 { 20.0 } else { remap(v, 1.0, 100.0, 20.0, 100.0) };
            a.value[3] = if v < 41.0 { v + 60.0 } else { v - 20.0 };
        }
        HarmonyRule::Triad => {
            a.hue[1] = shift.by(120.0);
            a.hue[2] = shift.by(-120.0);
            a.hue[3] = shift.by(-120.0);
            let s0 = rise_or_fall(s, 91.0, 10.0);
            a.saturation = [s0, fall_or_rise(s, 19.0, 10.0), s0, nudge_up(s)];
            let v_outer = rise_or_fall(v, 50.0, 30.0);
            a.value[0] = v_outer;
            a.value[3] = v_outer;
        }
        HarmonyRule::Complementary => {
            let opposite = shift.by(180.0);
            a.hue[2] = opposite;
            a.hue[3] = opposite;
            a.saturation[0] = if s < 81.0 { s + 10.0 } else { remap(s, 80.0, 100.0, 90.0, 100.0) };
            a.saturation[1] = (s - 10.0).clamp(0.0, 90.0);
            a.saturation[2] = (s + 20.0).clamp(20.0, 100.0);
            // Branches on saturation, not value.
            let v_even = if s < 50.0 { v + 30.0 } else { v - 30.0 };
            a.value[0] = v_even;
            a.value[2] = v_even;
            a.value[1] = (v + 30.0).clamp(30.0, 100.0);
        }
        HarmonyRule::SplitComplementary => {
            let (left, right) = (shift.by(150.0), shift.by(-150.0));
            a.hue = [left, left, right, right];
            a.saturation = [
                fall_or_rise(s, 19.0, 10.0),
                nudge_down(s),
                rise_or_fall(s, 91.0, 10.0),
                nudge_up(s),
            ];
            let v_even = rise_or_fall(v, 50.0, 30.0);
            a.value[0] = v_even;
            a.value[2] = v_even;
        }
        HarmonyRule::DoubleSplitComplementary => {
            a.hue = [shift.by(30.0), shift.by(150.0), shift.by(-150.0), shift.by(-30.0)];
            a.saturation = [
                nudge_down(s),
                fall_or_rise(s, 19.0, 10.0),
                rise_or_fall(s, 91.0, 10.0),
                nudge_up(s),
            ];
        }
        HarmonyRule::Square => {
            a.hue[1] = shift.by(90.0);
            a.hue[2] = shift.by(180.0);
            a.hue[3] = shift.by(-90.0);
            let s_even = rise_or_fall(s, 91.0, 10.0);
            a.saturation = [s_even, fall_or_rise(s, 19.0, 10.0), s_even, nudge_down(s)];
        }
        HarmonyRule::Compound => {
            let near = shift.by(30.0);
            a.hue = [near, near, shift.by(165.0), shift.by(150.0)];
            let s_outer = rise_or_fall(s, 91.0, 10.0);
            a.saturation = [
                s_outer,
                fall_or_rise(s, 50.0, 40.0),
                rise_or_fall(s, 36.0, 25.0),
                s_outer,
            ];
            let v_outer = rise_or_fall(v, 81.0, 20.0);
            let v2 = if v < 16.0 {
                20.0
            } else if v < 65.0 {
                v + 5.0
            } else {
                remap(v, 65.0, 100.0, 69.0, 100.0)
            };
            a.value = [v_outer, fall_or_rise(v, 60.0, 40.0), v2, v_outer];
        }
        HarmonyRule::Shades => {
            a.value[0] = if v < 45.0 { v + 55.0 } else { v - 25.0 };
            a.value[1] = if v < 71.0 { v + 30.0 } else { v - 50.0 };
            a.value[2] = if v < 15.0 {
                20.0
            } else if v < 96.0 {
                v + 5.0
            } else {
                v - 75.0
            };
            a.value[3] = (v - 10.0).clamp(20.0, 90.0);
        }
        HarmonyRule::Custom => return None,
    }

    Some(a)
}

/// Pull every saturation and value back into [0, 100].
///
/// Logged at debug level when it fires: the formulas themselves do not
/// clamp these branches, so any change here departs from the raw numbers.
#[allow(clippy::float_cmp)]
fn clamp_percentages(a: &mut Accents, rule: HarmonyRule) {
    for (i, x) in a.saturation.iter_mut().chain(a.value.iter_mut()).enumerate() {
        let clamped = x.clamp(0.0, 100.0);
        if clamped != *x {
            let (channel, slot) = if i < SLOTS { ('S', i) } else { ('V', i - SLOTS) };
            log::debug!("{rule}: slot {slot} {channel}={x} clamped to {clamped}");
            *x = clamped;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
