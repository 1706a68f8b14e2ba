// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stock styling tables.
//!
//! [`default_log_styles`] is the ANSI table used when no styling is configured;
//! [`plain_styles`] is the identity passthrough used for byte-exact output (tests,
//! piping to files, terminals with no color support).

use std::sync::Arc;

use crossterm::style::Stylize;

use crate::{LogLevel, SemanticRole, StyleFn};

/// The default ANSI styling table: info is blue, warn is yellow, error is red, debug
/// is bold, the prefix name is green, and body text is dark grey.
#[must_use]
pub fn default_log_styles() -> StyleFn {
    Arc::new(|role, text| match role {
        SemanticRole::Level(LogLevel::Info) => text.blue().to_string(),
        SemanticRole::Level(LogLevel::Warn) => text.yellow().to_string(),
        SemanticRole::Level(LogLevel::Error) => text.red().to_string(),
        SemanticRole::Level(LogLevel::Debug) => text.bold().to_string(),
        SemanticRole::PrefixText => text.green().to_string(),
        SemanticRole::BodyText => text.dark_grey().to_string(),
    })
}

/// The identity styling table: returns the text unchanged for every role.
#[must_use]
pub fn plain_styles() -> StyleFn {
    Arc::new(|_, text| text.to_string())
}
