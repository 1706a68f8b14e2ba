// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use crate::LogLevel;

/// The semantic slot a piece of text occupies in the rendered output. A [`StyleFn`]
/// maps each role to a styled rendition of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticRole {
    /// The level tag itself (`info`, `warn`, `error`, `debug`).
    Level(LogLevel),
    /// The logger name inside the `[name]` prefix.
    PrefixText,
    /// A line of message body text.
    BodyText,
}

/// A styling table, passed by value to each [`Logger`] and [`FormattedError`] — no
/// process-global palette state exists anywhere in this crate. The core produces the
/// same structural output whether this is [`plain_styles`] (identity) or
/// [`default_log_styles`] (ANSI), since styling only ever wraps text in escape
/// sequences.
///
/// [`Logger`]: crate::Logger
/// [`FormattedError`]: crate::FormattedError
/// [`plain_styles`]: crate::plain_styles
/// [`default_log_styles`]: crate::default_log_styles
pub type StyleFn = Arc<dyn Fn(SemanticRole, &str) -> String + Send + Sync>;
