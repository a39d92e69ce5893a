// SPDX-License-Identifier: MIT

//! Error types for color parsing.

use thiserror::Error;

/// Errors produced when parsing a textual color.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// The input was empty or only whitespace.
    #[error("empty color string")]
    Empty,

    /// The input matched none of the accepted notations.
    #[error("unrecognized color '{0}' (expected #rgb, #rrggbb, rgb(r, g, b) or hsv(h, s%, v%))")]
    Unrecognized(String),

    /// A channel parsed but lies outside its legal range.
    #[error("channel '{channel}' out of range: {value}")]
    ChannelOutOfRange {
        /// Channel name (`r`, `g`, `b`, `s`, `v`)
        channel: char,
        /// The rejected value
        value: f32,
    },
}

impl ParseColorError {
    /// Create an unrecognized-input error.
    pub fn unrecognized(input: impl Into<String>) -> Self {
        Self::Unrecognized(input.into())
    }
}
