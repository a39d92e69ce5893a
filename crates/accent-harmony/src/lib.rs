// SPDX-License-Identifier: MIT

//! # accent-harmony — accent palettes from a single base color
//!
//! Derives four accent colors from one base color and a [`HarmonyRule`].
//! Hue offsets are measured on the CMY ("artist's") wheel rather than the
//! RGB wheel, so the complement of red is a green near 137°, not cyan.
//!
//! # Architecture
//!
//! ```text
//! base Rgb + HarmonyRule (+ previous base Hsv)
//!     │
//!     ▼
//! engine.rs:  degeneracy guard, working units, per-rule S/V policy
//!     │
//!     ├──► wheel.rs:  RGB hue ↔ CMY hue via the calibration table
//!     │
//!     ▼
//! options.rs: clamp policy for S/V that leave [0, 100]
//!     │
//!     ▼
//! 4 × Rgb  (+ corrected base)
//! ```
//!
//! [`Session`] wraps the engine for callers that want the base, the rule,
//! the remembered HSV and the slots kept together.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/saturation/value locals are inherently similar.
#![allow(clippy::similar_names)]

pub mod engine;
pub mod error;
pub mod options;
pub mod rule;
pub mod session;
pub mod wheel;

pub use engine::{Accents, HarmonyEngine, Recalculation, SLOTS, recalculate};
pub use error::HarmonyError;
pub use options::{ClampPolicy, EngineOptions};
pub use rule::HarmonyRule;
pub use session::Session;
pub use wheel::{cmy_hue_to_rgb_hue, remap, rgb_hue_to_cmy_hue};
