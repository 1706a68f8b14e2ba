// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # logsculpt
//!
//! Deterministic console output formatting: a recursive [pretty-printer]
//! ([`pretty_stringify`]) that turns structured [`Value`]s into indented text, a
//! multi-level [`Logger`] that re-applies its `[name] level: ` prefix to every line
//! of multi-line output, a [box renderer] ([`render_box`]) that frames text with
//! single/double/round borders, and a [`FormattedError`] whose display text is a
//! bordered, titled block with an optional nested `Cause` box.
//!
//! ## Example
//!
//! ```rust
//! use logsculpt::{LoggerOptions, create_logger_with_options, plain_styles, value};
//!
//! # fn main() -> Result<(), logsculpt::UnsupportedValueKind> {
//! let logger = create_logger_with_options("net", LoggerOptions {
//!     styles: plain_styles(),
//!     ..Default::default()
//! });
//!
//! // One printer call, three arguments joined by single spaces.
//! logger.info(&[value!("connected:"), value!({ host: "example.com", port: 443 })])?;
//! # Ok(())
//! # }
//! ```
//!
//! Which prints:
//!
//! ```text
//! [net] info: connected: [net] info: {
//! [net] info:   host: example.com,
//! [net] info:   port: 443
//! [net] info: }
//! ```
//!
//! ## Modules
//!
//! - [`stringify`] — the [`Value`] model, [`StringifyOptions`], and the pure
//!   recursive pretty-printer.
//! - [`boxed`] — [`BorderStyle`] glyph sets, [`render_box`], and
//!   [`nest_content_boxes`].
//! - [`text`] — line centering and ANSI/width helpers.
//! - [`styling`] — [`SemanticRole`], the [`StyleFn`] styling table type, and the
//!   stock [`default_log_styles`]/[`plain_styles`] tables. Styling is always passed
//!   by value; there is no process-global palette.
//! - [`logger`] — [`Logger`], its options, and the factory functions.
//! - [`error`] — [`FormattedError`] and the [`MessageFormatter`] capability.
//!
//! All operations are synchronous and complete before returning; the only side
//! effect anywhere is the printer sink a [`Logger`] writes to.
//!
//! [pretty-printer]: crate::pretty_stringify
//! [box renderer]: crate::render_box

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod boxed;
pub mod error;
pub mod logger;
pub mod stringify;
pub mod styling;
pub mod text;

// Re-export.
pub use boxed::*;
pub use error::*;
pub use logger::*;
pub use stringify::*;
pub use styling::*;
pub use text::*;
