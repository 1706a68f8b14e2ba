// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Logger
//!
//! A [`Logger`] composes the stringifier's output with per-line level/name
//! prefixing. The prefix is re-applied to **every** line of a multi-line stringified
//! value, so downstream log viewers that filter or grep by prefix see every line of
//! a nested structure:
//!
//! ```text
//! [net] info: {
//! [net] info:   host: example.com,
//! [net] info:   port: 443
//! [net] info: }
//! ```
//!
//! `info` has a dual printing mode (see [`Logger::info`]); `warn` and `error` always
//! produce one printer call. All operations are synchronous: each call's text is
//! fully computed and written before the call returns, and nothing is buffered
//! across calls.

use crate::{CreateLogMessageOptions, LogLevel, LoggerOptions, PrefixPolicy,
            SemanticRole, UnsupportedValueKind, Value, pretty_stringify,
            text::contains_ansi_escape_sequence};

/// A named logger. Created by [`create_logger`] or [`create_logger_with_options`],
/// immutable afterwards. Instances are fully independent — there is no shared global
/// state, and a logger can be shared across threads as long as its printer sink
/// tolerates interleaved writes.
#[derive(Debug)]
pub struct Logger {
    name: String,
    options: LoggerOptions,
}

/// Create a logger with default options: `[name] ` prefix, stdout printer, ANSI
/// styling.
#[must_use]
pub fn create_logger(arg_name: impl Into<String>) -> Logger {
    create_logger_with_options(arg_name, LoggerOptions::default())
}

/// Create a logger with the given options.
#[must_use]
pub fn create_logger_with_options(
    arg_name: impl Into<String>,
    options: LoggerOptions,
) -> Logger {
    Logger {
        name: arg_name.into(),
        options,
    }
}

impl Logger {
    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    /// Stringify `message` and prefix every resulting line independently with
    /// `<prefix><level>: `. Lines already carrying ANSI escapes are passed through
    /// unstyled; all others get the body text role.
    ///
    /// # Errors
    /// Propagates [`UnsupportedValueKind`] from the stringifier.
    pub fn create_log_message(
        &self,
        message: &Value,
        options: &CreateLogMessageOptions,
    ) -> Result<String, UnsupportedValueKind> {
        let text = pretty_stringify(message, &self.options.stringify)?;
        let prefix = self.prefix_with_level(options.level, options.add_prefix.as_ref());
        let rows: Vec<String> = text
            .split('\n')
            .map(|line| {
                let body = if contains_ansi_escape_sequence(line) {
                    line.to_string()
                } else {
                    (self.options.styles)(SemanticRole::BodyText, line)
                };
                format!("{prefix}{body}")
            })
            .collect();
        Ok(rows.join("\n"))
    }

    /// Log at `info` level. Dual mode:
    ///
    /// - If any string argument contains an embedded newline, every argument is
    ///   flattened into individual units (strings split on `'\n'`, non-strings kept
    ///   whole) and each unit becomes its **own printer call**, fully prefixed.
    /// - Otherwise all arguments are stringified and prefixed independently, then
    ///   joined with a single space into **one** printer call.
    ///
    /// This way `info(&[A, map, B])` produces one aligned block, while a single
    /// `"line1\nline2"` argument produces two independently prefixed physical lines.
    ///
    /// # Errors
    /// Propagates [`UnsupportedValueKind`]; nothing is printed when any argument
    /// fails to stringify.
    pub fn info(&self, args: &[Value]) -> Result<(), UnsupportedValueKind> {
        let options = CreateLogMessageOptions::for_level(LogLevel::Info);

        if helpers::any_string_arg_multiline(args) {
            let units = helpers::flatten_multiline_args(args);
            let mut messages = Vec::with_capacity(units.len());
            for unit in &units {
                messages.push(self.create_log_message(unit, &options)?);
            }
            for message in &messages {
                (self.options.printer)(message);
            }
            return Ok(());
        }

        let message = self.join_args(args, &options)?;
        (self.options.printer)(&message);
        Ok(())
    }

    /// Log at `warn` level: every argument stringified and prefixed independently,
    /// space-joined into one printer call.
    ///
    /// # Errors
    /// Propagates [`UnsupportedValueKind`]; nothing is printed on failure.
    pub fn warn(&self, args: &[Value]) -> Result<(), UnsupportedValueKind> {
        let message =
            self.join_args(args, &CreateLogMessageOptions::for_level(LogLevel::Warn))?;
        (self.options.printer)(&message);
        Ok(())
    }

    /// Log at `error` level: every argument stringified and prefixed independently,
    /// space-joined into one printer call.
    ///
    /// # Errors
    /// Propagates [`UnsupportedValueKind`]; nothing is printed on failure.
    pub fn error(&self, args: &[Value]) -> Result<(), UnsupportedValueKind> {
        let message =
            self.join_args(args, &CreateLogMessageOptions::for_level(LogLevel::Error))?;
        (self.options.printer)(&message);
        Ok(())
    }

    /// Print one error: the prefixed display text first, then — when the error has a
    /// source chain — the rendered `Caused by:` chain with every line re-prefixed
    /// identically.
    pub fn single_error(&self, error: &dyn std::error::Error) {
        let prefix = self.prefix_with_level(LogLevel::Error, None);
        (self.options.printer)(&format!("{prefix}{error}"));

        if let Some(chain) = helpers::render_cause_chain(error) {
            let reprefixed: Vec<String> = chain
                .split('\n')
                .map(|line| format!("{prefix}{line}"))
                .collect();
            (self.options.printer)(&reprefixed.join("\n"));
        }
    }

    fn join_args(
        &self,
        args: &[Value],
        options: &CreateLogMessageOptions,
    ) -> Result<String, UnsupportedValueKind> {
        let mut messages = Vec::with_capacity(args.len());
        for arg in args {
            messages.push(self.create_log_message(arg, options)?);
        }
        Ok(messages.join(" "))
    }

    /// Resolve `<prefix><level>: ` for one line. `add_prefix` overrides the logger's
    /// policy when present.
    fn prefix_with_level(
        &self,
        level: LogLevel,
        add_prefix: Option<&PrefixPolicy>,
    ) -> String {
        let styles = &self.options.styles;
        let level_tag = format!(
            "{}: ",
            styles(SemanticRole::Level(level), &level.to_string())
        );
        match add_prefix.unwrap_or(&self.options.prefix) {
            PrefixPolicy::Hidden => level_tag,
            PrefixPolicy::NameTag => format!(
                "[{}] {level_tag}",
                styles(SemanticRole::PrefixText, &self.name)
            ),
            PrefixPolicy::Custom(prefix_fn) => {
                format!("{} {level_tag}", prefix_fn(&self.name, level))
            }
        }
    }
}

mod helpers {
    use super::Value;

    /// Whether any string argument carries an embedded newline — the explicit,
    /// tested contract behind [`Logger::info`]'s dual printing mode.
    ///
    /// [`Logger::info`]: super::Logger::info
    #[must_use]
    pub fn any_string_arg_multiline(args: &[Value]) -> bool {
        args.iter()
            .any(|arg| matches!(arg, Value::Str(text) if text.contains('\n')))
    }

    /// Flatten arguments into printable units: strings split on `'\n'` into one unit
    /// per line, every other kind kept whole.
    #[must_use]
    pub fn flatten_multiline_args(args: &[Value]) -> Vec<Value> {
        let mut units = Vec::with_capacity(args.len());
        for arg in args {
            match arg {
                Value::Str(text) => {
                    units.extend(text.split('\n').map(Value::from));
                }
                other => units.push(other.clone()),
            }
        }
        units
    }

    /// Render an error's source chain, one cause per line. `None` when the error has
    /// no source.
    #[must_use]
    pub fn render_cause_chain(error: &dyn std::error::Error) -> Option<String> {
        let mut current = error.source()?;
        let mut chain = String::from("Caused by:");
        loop {
            chain.push('\n');
            chain.push_str(&current.to_string());
            match current.source() {
                Some(next) => current = next,
                None => break,
            }
        }
        Some(chain)
    }
}
