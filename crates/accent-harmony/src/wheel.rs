// SPDX-License-Identifier: MIT

//! Hue wheel conversion — RGB hue ↔ CMY ("artist's") hue.
//!
//! The perceptual RGB wheel puts red, green and blue 120° apart. Painters
//! work on a subtractive wheel where yellow sits opposite violet and the
//! warm half is stretched. Harmony offsets measured on that wheel look
//! better, so every hue shift goes RGB → CMY, adds the offset, then comes
//! back CMY → RGB.
//!
//! The two wheels are related by a fixed calibration table and linear
//! interpolation between neighbouring entries. This module is the only
//! place that relation lives.

use accent_color::wrap_degrees;

/// One calibration point: the same hue expressed on both wheels, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationPoint {
    pub cmy: f32,
    pub rgb: f32,
}

const fn point(cmy: f32, rgb: f32) -> CalibrationPoint {
    CalibrationPoint { cmy, rgb }
}

/// CMY ↔ RGB hue calibration, increasing in both columns, spanning [0, 360].
pub const CALIBRATION: [CalibrationPoint; 8] = [
    point(0.0, 0.0),
    point(60.0, 35.0),
    point(122.0, 60.0),
    point(165.0, 120.0),
    point(218.0, 180.0),
    point(275.0, 240.0),
    point(330.0, 300.0),
    point(360.0, 360.0),
];

const ORIGIN: CalibrationPoint = point(0.0, 0.0);

/// Linear remap of `v` from `[a, b]` onto `[c, d]`.
///
/// `a` and `b` must differ; every caller passes fixed, distinct endpoints.
#[inline]
#[must_use]
pub fn remap(v: f32, a: f32, b: f32, c: f32, d: f32) -> f32 {
    (v - a) / (b - a) * (d - c) + c
}

/// Convert an RGB-wheel hue (degrees, any range) to the CMY wheel.
///
/// ```
/// use accent_harmony::wheel::rgb_hue_to_cmy_hue;
///
/// assert_eq!(rgb_hue_to_cmy_hue(60.0), 122.0);
/// assert_eq!(rgb_hue_to_cmy_hue(-300.0), 122.0);
/// ```
#[must_use]
pub fn rgb_hue_to_cmy_hue(h: f32) -> f32 {
    interpolate(h, |p| p.rgb, |p| p.cmy)
}

/// Convert a CMY-wheel hue (degrees, any range) to the RGB wheel.
#[must_use]
pub fn cmy_hue_to_rgb_hue(h: f32) -> f32 {
    interpolate(h, |p| p.cmy, |p| p.rgb)
}

/// Walk the `from` column for the first entry at or past `h` and
/// interpolate into the `to` column.
#[allow(clippy::float_cmp)]
fn interpolate(
    h: f32,
    from: impl Fn(&CalibrationPoint) -> f32,
    to: impl Fn(&CalibrationPoint) -> f32,
) -> f32 {
    let h = wrap_degrees(h);

    for (i, next) in CALIBRATION.iter().enumerate() {
        let key = from(next);
        if key < h {
            continue;
        }
        if key == h {
            return to(next);
        }
        let prev = if i == 0 { &ORIGIN } else { &CALIBRATION[i - 1] };
        return remap(h, from(prev), key, to(prev), to(next));
    }

    // Unreachable for a table that spans [0, 360] (NaN falls out above).
    log::warn!("hue {h} fell off the calibration table");
    0.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn table_points_map_exactly() {
        for p in &CALIBRATION[..7] {
            assert_eq!(rgb_hue_to_cmy_hue(p.rgb), p.cmy);
            assert_eq!(cmy_hue_to_rgb_hue(p.cmy), p.rgb);
        }
    }

    #[test]
    fn full_turn_wraps_to_zero() {
        assert_eq!(rgb_hue_to_cmy_hue(360.0), 0.0);
        assert_eq!(cmy_hue_to_rgb_hue(720.0), 0.0);
    }

    #[test]
    fn negative_hue_wraps() {
        assert!(close(rgb_hue_to_cmy_hue(-180.0), rgb_hue_to_cmy_hue(180.0)));
        assert_eq!(cmy_hue_to_rgb_hue(-30.0), 300.0);
    }

    #[test]
    fn interpolates_between_points() {
        // Halfway between (60, 35) and (122, 60) on the CMY column.
        assert!(close(cmy_hue_to_rgb_hue(91.0), 47.5));
        // Halfway between (165, 120) and (218, 180) on the RGB column.
        assert!(close(rgb_hue_to_cmy_hue(150.0), 191.5));
    }

    #[test]
    fn cmy_180_lands_near_137() {
        let rgb = cmy_hue_to_rgb_hue(180.0);
        assert!(close(rgb, 120.0 + 15.0 / 53.0 * 60.0), "got {rgb}");
        assert!(close(rgb, 136.981), "got {rgb}");
    }

    #[test]
    fn round_trip_off_table() {
        for h in [1.0, 17.5, 100.0, 199.9, 333.3, 359.0] {
            let back = cmy_hue_to_rgb_hue(rgb_hue_to_cmy_hue(h));
            assert!(close(back, h), "{h} came back as {back}");
        }
    }

    #[test]
    fn remap_endpoints() {
        assert_eq!(remap(1.0, 1.0, 100.0, 20.0, 100.0), 20.0);
        assert_eq!(remap(100.0, 1.0, 100.0, 20.0, 100.0), 100.0);
        assert_eq!(remap(90.0, 80.0, 100.0, 90.0, 100.0), 95.0);
    }

    #[test]
    fn nan_does_not_panic() {
        assert!(rgb_hue_to_cmy_hue(f32::NAN).is_nan());
    }
}
