// SPDX-License-Identifier: MIT
//
// accent color model — normalized RGB and HSV.
//
// Single-character variable names (r, g, b, h, s, v, p, q, t) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// Two representations, both normalized:
//
//   Rgb  r, g, b in [0, 1]
//   Hsv  h in [0, 1), s, v in [0, 1]
//
// The harmony rules think in degrees and percent ("working units"). The
// conversion to and from those units lives here so every call site agrees
// on the scale:
//
//   Rgb ↔ Hsv (normalized) ↔ (degrees, percent, percent)
//
// HSV → RGB never clamps. A value above 100% yields channels above 1.0,
// which `Rgb::is_in_gamut` reports and `Rgb::clamped` fixes explicitly.

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An RGB color with normalized `f32` channels.
///
/// No alpha. Channels are nominally in [0, 1]; values outside that range
/// are representable so raw harmony output can be inspected before clamping.
///
/// # Examples
///
/// ```
/// use accent_color::Rgb;
///
/// let red = Rgb::new(1.0, 0.0, 0.0);
/// assert_eq!(red.to_rgb8(), (255, 0, 0));
/// assert_eq!(Rgb::rgb8(255, 0, 0), red);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a color from normalized channels.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channels.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Convert to 8-bit channels, rounding and clamping each one.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Convert to normalized HSV.
    #[must_use]
    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self)
    }

    /// True when every channel lies in [0, 1].
    #[must_use]
    pub fn is_in_gamut(self) -> bool {
        [self.r, self.g, self.b].iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// Clamp every channel into [0, 1].
    #[must_use]
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// Channel-wise comparison within `epsilon`.
    #[must_use]
    pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() <= epsilon
            && (self.g - other.g).abs() <= epsilon
            && (self.b - other.b).abs() <= epsilon
    }
}

impl From<(f32, f32, f32)> for Rgb {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[f32; 3]> for Rgb {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for (f32, f32, f32) {
    fn from(c: Rgb) -> Self {
        (c.r, c.g, c.b)
    }
}

impl From<Rgb> for [f32; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv_to_rgb(hsv)
    }
}

// ─── Hsv ─────────────────────────────────────────────────────────────────────

/// A normalized HSV triple: `h` in [0, 1), `s` and `v` in [0, 1].
///
/// Harmony rules operate in degrees and percent; use
/// [`Hsv::from_degrees`] and [`Hsv::to_degrees`] to cross between the two
/// scales.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    #[must_use]
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Build from working units: hue in degrees, saturation and value in
    /// percent. The hue is wrapped into [0, 360) first; `s` and `v` are
    /// scaled as-is (no clamping).
    #[must_use]
    pub fn from_degrees(h: f32, s: f32, v: f32) -> Self {
        let h = wrap_degrees(h) / 360.0;
        // 359.99998 / 360 can round up to exactly 1.0 in f32.
        let h = if h >= 1.0 { 0.0 } else { h };
        Self::new(h, s / 100.0, v / 100.0)
    }

    /// Convert to working units `(degrees, percent, percent)`.
    #[must_use]
    pub fn to_degrees(self) -> (f32, f32, f32) {
        (self.h * 360.0, self.s * 100.0, self.v * 100.0)
    }

    /// Convert to RGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self)
    }

    /// True when saturation or value is below `threshold`, where the hue
    /// carries no reliable information (near gray or near black).
    #[must_use]
    pub fn is_degenerate(self, threshold: f32) -> bool {
        self.s < threshold || self.v < threshold
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsv(rgb)
    }
}

impl From<(f32, f32, f32)> for Hsv {
    fn from((h, s, v): (f32, f32, f32)) -> Self {
        Self::new(h, s, v)
    }
}

impl From<Hsv> for (f32, f32, f32) {
    fn from(c: Hsv) -> Self {
        (c.h, c.s, c.v)
    }
}

// ─── Conversion Functions ────────────────────────────────────────────────────

/// Wrap a hue angle into [0, 360).
///
/// `rem_euclid` can return exactly 360.0 for tiny negative inputs because of
/// rounding; that case folds back to 0.
#[inline]
#[must_use]
pub fn wrap_degrees(h: f32) -> f32 {
    let h = h.rem_euclid(360.0);
    if h >= 360.0 { 0.0 } else { h }
}

/// RGB → HSV (hexcone model). Gray inputs report hue 0.
#[must_use]
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let Rgb { r, g, b } = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta <= 0.0 {
        0.0
    } else if (max - r).abs() <= f32::EPSILON {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if (max - g).abs() <= f32::EPSILON {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };
    let h = if h >= 1.0 { 0.0 } else { h };

    let s = if max <= 0.0 { 0.0 } else { delta / max };

    Hsv::new(h, s, max)
}

/// HSV → RGB.
///
/// Does not clamp: saturation or value outside [0, 1] propagate into the
/// channels unchanged.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv { h, s, v } = hsv;
    let h6 = h.rem_euclid(1.0) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;

    let p = v * (1.0 - s);
    let q = v * s.mul_add(-f, 1.0);
    let t = v * s.mul_add(f - 1.0, 1.0);

    let (r, g, b) = match (sector as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb::new(r, g, b)
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f32) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
