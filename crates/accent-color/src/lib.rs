// SPDX-License-Identifier: MIT

//! # accent-color — color model for the accent palette engine
//!
//! - **[`color`]** — `Rgb` and `Hsv` (both normalized), the conversions
//!   between them, and the degrees/percent working units used by harmony rules
//! - **[`parse`]** — `#rrggbb`, `rgb()` and `hsv()` text input
//! - **[`error`]** — `ParseColorError`
//!
//! HSV → RGB is deliberately unclamped so out-of-range harmony output stays
//! observable; clamp with [`Rgb::clamped`].

pub mod color;
pub mod error;
pub mod parse;

pub use color::{Hsv, Rgb, hsv_to_rgb, rgb_to_hsv, wrap_degrees};
pub use error::ParseColorError;
pub use parse::parse_color;
