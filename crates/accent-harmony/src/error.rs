// SPDX-License-Identifier: MIT

//! Error types for the harmony configuration and session surfaces.
//!
//! The numeric core never fails; these only come from parsing names,
//! option directives, colors, and slot indices supplied by a caller.

use accent_color::ParseColorError;
use thiserror::Error;

/// Errors raised by rule lookup, option parsing, and session edits.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HarmonyError {
    /// No harmony rule has this name
    #[error("unknown harmony rule '{0}'")]
    UnknownRule(String),

    /// No engine option has this name
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    /// The option exists but the value is missing or malformed
    #[error("invalid value '{value}' for option '{option}'")]
    InvalidValue {
        /// Option name as written by the caller
        option: String,
        /// The rejected value (empty when missing)
        value: String,
    },

    /// Output slot index past the end of the palette
    #[error("slot {0} out of range (palette has 4 slots)")]
    SlotOutOfRange(usize),

    /// Base color text failed to parse
    #[error(transparent)]
    Color(#[from] ParseColorError),
}

impl HarmonyError {
    /// Create an invalid value error.
    pub fn invalid_value(option: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            option: option.into(),
            value: value.into(),
        }
    }
}
