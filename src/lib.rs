// SPDX-License-Identifier: MIT
//
// accent — four accent colors from one base color and a harmony rule.
//
// This crate wires the workspace together:
//
//   accent-color   → Rgb / Hsv model, conversions, text parsing
//   accent-harmony → CMY hue wheel, harmony rules, engine, session state
//
// A presentation layer (color picker, swatches, persistence) sits on top
// and calls `recalculate` or drives a `Session` whenever the base color or
// the rule changes:
//
//   base Rgb + rule ─► Session::set_base / set_rule ─► engine ─► 4 × Rgb

pub use accent_color::{Hsv, ParseColorError, Rgb, parse_color};
pub use accent_harmony::{
    Accents, ClampPolicy, EngineOptions, HarmonyEngine, HarmonyError, HarmonyRule, Recalculation,
    SLOTS, Session, cmy_hue_to_rgb_hue, recalculate, remap, rgb_hue_to_cmy_hue,
};

pub mod color {
    //! Color model, re-exported from `accent-color`.
    pub use accent_color::color::*;
}

pub mod harmony {
    //! Harmony engine internals, re-exported from `accent-harmony`.
    pub use accent_harmony::{engine, options, rule, session, wheel};
}
