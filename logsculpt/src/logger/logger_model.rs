// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{self, Debug, Formatter},
          sync::Arc};

use strum_macros::{Display, EnumString};

use crate::{StringifyOptions, StyleFn, default_log_styles};

/// Severity of a log message. Renders lowercase (`info`, `warn`, `error`, `debug`).
///
/// `Debug` has no dedicated method on [`Logger`] — it exists for custom prefix
/// functions and styling tables.
///
/// [`Logger`]: crate::Logger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

/// A user-provided function that renders the prefix of a log line from the logger
/// name and the level. The resulting text is followed by one space and the level
/// tag.
pub type LogPrefixFn = Arc<dyn Fn(&str, LogLevel) -> String + Send + Sync>;

/// The sink every rendered log text is written to, one call per write.
pub type PrinterFn = Arc<dyn Fn(&str) + Send + Sync>;

/// How the leading tag of every log line is produced. Replaces a `bool`-or-function
/// union with explicit, statically-typed variants.
#[derive(Clone, Default)]
pub enum PrefixPolicy {
    /// No prefix; lines start with the level tag.
    Hidden,
    /// Synthesize `[name] ` from the logger name.
    #[default]
    NameTag,
    /// Delegate to the given function.
    Custom(LogPrefixFn),
}

impl Debug for PrefixPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PrefixPolicy::Hidden => write!(f, "Hidden"),
            PrefixPolicy::NameTag => write!(f, "NameTag"),
            PrefixPolicy::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Configuration a [`Logger`] is created from. Resolved once at creation time; a
/// logger is immutable afterwards.
///
/// [`Logger`]: crate::Logger
#[derive(Clone)]
pub struct LoggerOptions {
    /// Formatting options handed to the stringifier for every argument.
    pub stringify: StringifyOptions,
    /// Prefix policy for every line. Default: [`PrefixPolicy::NameTag`].
    pub prefix: PrefixPolicy,
    /// Output sink. Default: one `println!` per call.
    pub printer: PrinterFn,
    /// Styling table, passed by value. Default: [`default_log_styles`].
    pub styles: StyleFn,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            stringify: StringifyOptions::default(),
            prefix: PrefixPolicy::default(),
            printer: Arc::new(|text| println!("{text}")),
            styles: default_log_styles(),
        }
    }
}

impl Debug for LoggerOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerOptions")
            .field("stringify", &self.stringify)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

/// Options for [`Logger::create_log_message`].
///
/// [`Logger::create_log_message`]: crate::Logger::create_log_message
#[derive(Debug, Clone)]
pub struct CreateLogMessageOptions {
    pub level: LogLevel,
    /// Overrides the logger's prefix policy for this message when present.
    pub add_prefix: Option<PrefixPolicy>,
}

impl CreateLogMessageOptions {
    /// Options for the given level, using the logger's own prefix policy.
    #[must_use]
    pub fn for_level(level: LogLevel) -> Self {
        Self {
            level,
            add_prefix: None,
        }
    }
}
