// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Recursive pretty-printer
//!
//! [`pretty_stringify`] converts a [`Value`] into a deterministic, indented text
//! block. It is pure (no I/O) and deterministic: equal inputs always produce equal
//! output. Nesting indents by exactly 2 spaces per level, and the closing bracket of
//! a container aligns with the indent of the line that opened it.
//!
//! ## Dispatch rules
//!
//! | Value kind           | Rendering                                              |
//! |----------------------|--------------------------------------------------------|
//! | `Str`                | the string itself, double-quoted if `quote_strings`    |
//! | `Bool`/`Num`/`Undefined`/`Null` | canonical form: `true`, `3`, `undefined`, `null` |
//! | `Function`           | its source text, verbatim                              |
//! | empty `Seq` / `Map`  | `[]` / `{}` regardless of all other options            |
//! | non-empty `Seq`      | one element per line at indent+2, comma-joined         |
//! | non-empty `Map`      | one `key: value` entry per line at indent+2            |
//! | `Opaque`             | [`UnsupportedValueKind`] naming the runtime type       |
//!
//! ## The scalar map entry asymmetry
//!
//! Scalar entry values (string, number, boolean, null, undefined) are rendered by
//! [`StringifyOptions::object_value_modifier`] and do NOT recurse, so
//! `quote_strings` and nested options do not reach them unless the modifier applies
//! them itself. Non-scalar entry values recurse through [`pretty_stringify`] at
//! indent+2 and inherit every option. This asymmetry is the mechanism by which the
//! key/value modifiers apply only to directly-owned scalar fields; it is part of the
//! output contract and must not be "fixed".

use crate::{StringifyOptions, UnsupportedValueKind, Value};

/// Convert `value` into its indented text form. See the [module docs] for the
/// dispatch rules.
///
/// # Errors
/// Returns [`UnsupportedValueKind`] when the value (or any nested value) is a kind
/// with no defined rendering.
///
/// [module docs]: self
pub fn pretty_stringify(
    value: &Value,
    options: &StringifyOptions,
) -> Result<String, UnsupportedValueKind> {
    pretty_stringify_at(value, options, 0)
}

/// Recursive engine behind [`pretty_stringify`]. The indent is always a non-negative
/// multiple of 2 and only ever lives on the call stack.
fn pretty_stringify_at(
    value: &Value,
    options: &StringifyOptions,
    indent: usize,
) -> Result<String, UnsupportedValueKind> {
    match value {
        Value::Str(text) => Ok(if options.quote_strings {
            format!("\"{text}\"")
        } else {
            text.clone()
        }),
        Value::Bool(_) | Value::Num(_) | Value::Undefined | Value::Null => {
            Ok(value.to_plain_text())
        }
        Value::Function(source) => Ok(source.clone()),
        Value::Seq(elements) if elements.is_empty() => Ok("[]".to_string()),
        Value::Seq(elements) => helpers::format_seq(elements, options, indent),
        Value::Map(entries) if entries.is_empty() => Ok("{}".to_string()),
        Value::Map(entries) => helpers::format_map(entries, options, indent),
        Value::Opaque { type_name } => Err(UnsupportedValueKind {
            type_name: type_name.clone(),
        }),
    }
}

mod helpers {
    use super::{StringifyOptions, UnsupportedValueKind, Value, pretty_stringify_at};

    pub fn format_seq(
        elements: &[Value],
        options: &StringifyOptions,
        indent: usize,
    ) -> Result<String, UnsupportedValueKind> {
        let entry_pad = " ".repeat(indent + 2);
        let mut rows = Vec::with_capacity(elements.len());
        for element in elements {
            let rendered = pretty_stringify_at(element, options, indent + 2)?;
            rows.push(format!("{entry_pad}{rendered}"));
        }
        Ok(format!(
            "[\n{rows}\n{close_pad}]",
            rows = rows.join(",\n"),
            close_pad = " ".repeat(indent)
        ))
    }

    pub fn format_map(
        entries: &[(String, Value)],
        options: &StringifyOptions,
        indent: usize,
    ) -> Result<String, UnsupportedValueKind> {
        let entry_pad = " ".repeat(indent + 2);

        // Sort by the raw key, before the key modifier runs.
        let mut ordered: Vec<&(String, Value)> = entries.iter().collect();
        if options.sort_object_keys {
            ordered.sort_by(|lhs, rhs| lhs.0.cmp(&rhs.0));
        }

        let mut rows = Vec::with_capacity(ordered.len());
        for (key, entry_value) in ordered {
            let shown_key = (options.object_key_modifier)(key);
            let shown_value = if entry_value.is_scalar() {
                (options.object_value_modifier)(entry_value)
            } else {
                pretty_stringify_at(entry_value, options, indent + 2)?
            };
            rows.push(format!("{entry_pad}{shown_key}: {shown_value}"));
        }
        Ok(format!(
            "{{\n{rows}\n{close_pad}}}",
            rows = rows.join(",\n"),
            close_pad = " ".repeat(indent)
        ))
    }
}
