// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Formatted error
//!
//! A [`FormattedError`] is a domain error whose *display* is enhanced — the message
//! is pre-rendered into a double-bordered, titled block, optionally showing the
//! causing error in a nested round box — while its *propagation* stays ordinary
//! `Result`/`?`. Rendering happens once, synchronously, in the constructor; the raw
//! message is not recoverable afterwards.
//!
//! ```text
//! ╔═ ConfigError ══════════════════════╗
//! ║                                    ║
//! ║  bad value for `retries`           ║
//! ║                                    ║
//! ║  ╭─ Cause ──────────╮              ║
//! ║  │                  │              ║
//! ║  │  not a number    │              ║
//! ║  │                  │              ║
//! ║  ╰──────────────────╯              ║
//! ║                                    ║
//! ╚════════════════════════════════════╝
//! ```
//!
//! Instead of requiring a subclass override, the message shaping seam is the
//! [`MessageFormatter`] capability: error variants that want to enrich their raw
//! message supply one through [`FormattedErrorOptions`].

use std::{error::Error,
          fmt::{self, Display, Formatter}};

use crate::{BorderStyle, BoxConfig, LogLevel, SemanticRole, StyleFn, plain_styles,
            render_box, text::max_line_width};

/// Capability that shapes the raw message into the text shown inside the outermost
/// box. Supplied per error through [`FormattedErrorOptions::formatter`]; when
/// absent, the raw message is used verbatim.
pub trait MessageFormatter: Send + Sync {
    fn format_message(&self, raw_message: &str) -> String;
}

impl<F> MessageFormatter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn format_message(&self, raw_message: &str) -> String { self(raw_message) }
}

/// Options for [`FormattedError::new`].
pub struct FormattedErrorOptions {
    /// The causing error, shown in a nested round box titled `Cause` and exposed
    /// through [`Error::source`].
    pub cause: Option<Box<dyn Error + Send + Sync + 'static>>,
    /// Shapes the raw message before boxing. `None` = verbatim.
    pub formatter: Option<Box<dyn MessageFormatter>>,
    /// Styling table for the rendered block. Default: [`plain_styles`]. The box
    /// geometry is measured before styling, so any table yields the same structure.
    pub style: StyleFn,
}

impl Default for FormattedErrorOptions {
    fn default() -> Self {
        Self {
            cause: None,
            formatter: None,
            style: plain_styles(),
        }
    }
}

impl fmt::Debug for FormattedErrorOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormattedErrorOptions")
            .field("cause", &self.cause)
            .field("has_formatter", &self.formatter.is_some())
            .finish_non_exhaustive()
    }
}

/// An error whose display text is a bordered, titled block. See the [module docs]
/// for the rendering protocol.
///
/// [module docs]: self
#[derive(Debug)]
pub struct FormattedError {
    name: String,
    message: String,
    cause: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl FormattedError {
    /// Build the error and render its display text. `arg_name` is the concrete
    /// error variant's name; it becomes the title of the outermost box.
    #[must_use]
    pub fn new(
        arg_name: impl Into<String>,
        raw_message: &str,
        options: FormattedErrorOptions,
    ) -> Self {
        let name = arg_name.into();
        let inner_message = match &options.formatter {
            Some(formatter) => formatter.format_message(raw_message),
            None => raw_message.to_string(),
        };
        let message = helpers::render_boxed_message(
            &name,
            &inner_message,
            options.cause.as_deref(),
            &options.style,
        );
        Self {
            name,
            message,
            cause: options.cause,
        }
    }

    /// The concrete error variant name (also the outer box title).
    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    /// The rendered display text.
    #[must_use]
    pub fn message(&self) -> &str { &self.message }

    /// Nominal runtime check: is `error` a [`FormattedError`]? Usable for narrowing
    /// when processing heterogeneous `dyn Error` values.
    #[must_use]
    pub fn is_instance(error: &(dyn Error + 'static)) -> bool {
        error.is::<FormattedError>()
    }
}

impl Display for FormattedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for FormattedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause.as_ref() as &(dyn Error + 'static))
    }
}

mod helpers {
    use super::{BorderStyle, BoxConfig, Error, LogLevel, SemanticRole, StyleFn,
                max_line_width, render_box};

    /// Extra content width added to every error box beyond its widest line.
    const WIDTH_ALLOWANCE: usize = 10;

    pub fn render_boxed_message(
        name: &str,
        inner_message: &str,
        cause: Option<&(dyn Error + Send + Sync + 'static)>,
        style: &StyleFn,
    ) -> String {
        let Some(cause) = cause else {
            let width = max_line_width(inner_message.split('\n')) + WIDTH_ALLOWANCE;
            return render_box(inner_message, &outer_box_config(name, width));
        };

        // Box nesting is two-level: the cause box is rendered once and becomes part
        // of the outer box's content. The outer width is measured on the unstyled
        // combined content.
        let cause_box = render_box(
            &cause.to_string(),
            &BoxConfig {
                title: Some("Cause".to_string()),
                padding: 1,
                border_style: BorderStyle::Round,
                ..Default::default()
            },
        );
        let unstyled = format!("{inner_message}\n\n{cause_box}");
        let width = max_line_width(unstyled.split('\n')) + WIDTH_ALLOWANCE;

        let styled = format!(
            "{inner_message}\n\n{styled_cause_box}",
            styled_cause_box = style(SemanticRole::Level(LogLevel::Error), &cause_box)
        );
        render_box(&styled, &outer_box_config(name, width))
    }

    fn outer_box_config(name: &str, width: usize) -> BoxConfig {
        BoxConfig {
            title: Some(name.to_string()),
            padding: 1,
            margin: 1,
            border_style: BorderStyle::Double,
            width: Some(width),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests_formatted_error {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain_error(message: &str) -> FormattedError {
        FormattedError::new(
            "ConfigError",
            message,
            FormattedErrorOptions::default(),
        )
    }

    #[test]
    fn test_message_is_a_titled_double_box() {
        let it = plain_error("bad value");
        let rows: Vec<&str> = it.message().split('\n').collect();

        // margin 1: one leading and one trailing blank line.
        assert_eq!(rows[0], "");
        assert_eq!(*rows.last().unwrap(), "");
        assert!(rows[1].starts_with("╔═ ConfigError ═"));
        assert!(rows[1].ends_with('╗'));
        assert!(rows.last().is_some());
        assert!(rows[rows.len() - 2].starts_with('╚'));

        // Content width = widest line (9) + 10; inner = +2 padding; run = +2.
        let run_width = rows[1].chars().count() - 2;
        assert_eq!(run_width, 9 + 10 + 2 + 2);

        // The raw message is inside, left-aligned behind border, space, padding.
        assert!(it.message().contains("║  bad value"));
    }

    #[test]
    fn test_display_equals_message_and_raw_is_gone() {
        let it = plain_error("raw text");
        assert_eq!(it.to_string(), it.message());
        assert_ne!(it.to_string(), "raw text");
    }

    #[test]
    fn test_formatter_capability_shapes_the_inner_message() {
        let it = FormattedError::new(
            "QueryError",
            "select *",
            FormattedErrorOptions {
                formatter: Some(Box::new(|raw: &str| format!("query failed: {raw}"))),
                ..Default::default()
            },
        );
        assert!(it.message().contains("query failed: select *"));
        assert!(!it.message().contains("║  select *"));
    }

    #[test]
    fn test_cause_renders_a_nested_round_box() {
        let it = FormattedError::new(
            "ConfigError",
            "bad value for `retries`",
            FormattedErrorOptions {
                cause: Some(Box::new(std::io::Error::other("not a number"))),
                ..Default::default()
            },
        );
        let message = it.message();

        // Outer double box titled with the error name, inner round box titled Cause.
        assert!(message.contains("═ ConfigError ═"));
        assert!(message.contains("─ Cause ─"));
        assert!(message.contains("not a number"));

        // The round box rows sit inside the double box rows.
        let cause_row = message
            .split('\n')
            .find(|row| row.contains("not a number"))
            .unwrap();
        assert!(cause_row.starts_with('║'));
        assert!(cause_row.ends_with('║'));
        assert!(cause_row.contains('│'));

        // Two-level nesting only: exactly one round box.
        assert_eq!(message.matches('╭').count(), 1);
    }

    #[test]
    fn test_source_exposes_the_cause() {
        let it = FormattedError::new(
            "ConfigError",
            "bad value",
            FormattedErrorOptions {
                cause: Some(Box::new(std::io::Error::other("not a number"))),
                ..Default::default()
            },
        );
        assert_eq!(it.source().unwrap().to_string(), "not a number");
        assert!(plain_error("no cause").source().is_none());
    }

    #[test]
    fn test_is_instance_is_a_nominal_check() {
        let formatted = plain_error("x");
        let other = std::io::Error::other("x");
        assert!(FormattedError::is_instance(&formatted));
        assert!(!FormattedError::is_instance(&other));
    }
}
