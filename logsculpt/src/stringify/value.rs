// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The dynamic value model consumed by [`pretty_stringify`].
//!
//! The pretty-printer accepts values whose shape is only known at runtime: scalars,
//! sequences, insertion-ordered maps, function source text, and opaque kinds that
//! have no defined rendering. [`Value`] models exactly that set. Construct values
//! with the [`From`] conversions, the constructor functions on [`Value`], or the
//! [`value!`] macro for nested literals:
//!
//! ```rust
//! use logsculpt::{Value, value};
//!
//! let config = value!({
//!     name: "proxy",
//!     retries: 3,
//!     upstreams: ["a", "b"],
//! });
//! assert!(matches!(config, Value::Map(_)));
//! ```
//!
//! [`pretty_stringify`]: crate::pretty_stringify
//! [`value!`]: crate::value

/// A runtime value that can be handed to the pretty-printer and the logger.
///
/// Map entries preserve insertion order; sorting is an opt-in formatting concern
/// ([`StringifyOptions::sort_object_keys`]), never a property of the value itself.
///
/// [`StringifyOptions::sort_object_keys`]: crate::StringifyOptions
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Undefined,
    Bool(bool),
    Num(f64),
    Str(String),
    /// Source text of a function or closure. Rendered verbatim, never reformatted.
    Function(String),
    Seq(Vec<Value>),
    /// Insertion-ordered key/value entries.
    Map(Vec<(String, Value)>),
    /// A kind with no defined rendering. Carries the runtime type name that is
    /// reported by [`UnsupportedValueKind`].
    ///
    /// [`UnsupportedValueKind`]: crate::UnsupportedValueKind
    Opaque { type_name: String },
}

impl Value {
    /// Shorthand for building a [`Value::Seq`].
    #[must_use]
    pub fn seq(arg_elements: impl IntoIterator<Item = Value>) -> Self {
        Value::Seq(arg_elements.into_iter().collect())
    }

    /// Shorthand for building a [`Value::Map`] while preserving the iteration order
    /// of the given entries.
    #[must_use]
    pub fn map<K: Into<String>>(
        arg_entries: impl IntoIterator<Item = (K, Value)>,
    ) -> Self {
        Value::Map(
            arg_entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Shorthand for building a [`Value::Function`] from its source text.
    #[must_use]
    pub fn function(arg_source: impl Into<String>) -> Self {
        Value::Function(arg_source.into())
    }

    /// Shorthand for building a [`Value::Opaque`] from a runtime type name.
    #[must_use]
    pub fn opaque(arg_type_name: impl Into<String>) -> Self {
        Value::Opaque {
            type_name: arg_type_name.into(),
        }
    }

    /// The runtime kind name used in diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Undefined => "undefined",
            Value::Bool(_) => "boolean",
            Value::Num(_) => "number",
            Value::Str(_) => "string",
            Value::Function(_) => "function",
            Value::Seq(_) => "sequence",
            Value::Map(_) => "map",
            Value::Opaque { type_name } => type_name,
        }
    }

    /// Whether this value is a scalar for the purposes of map entry rendering. Scalar
    /// entry values go through the value modifier; everything else recurses through
    /// the stringifier.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Null
                | Value::Undefined
                | Value::Bool(_)
                | Value::Num(_)
                | Value::Str(_)
        )
    }

    /// Canonical un-quoted textual form: `null`, `undefined`, `true`, `42`, or the
    /// raw string content. This is what the default value modifier produces for
    /// scalar map entries. Non-scalars fall back to their [`Self::kind_name`].
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Undefined => "undefined".to_string(),
            Value::Bool(value) => value.to_string(),
            Value::Num(value) => value.to_string(),
            Value::Str(text) => text.clone(),
            other => other.kind_name().to_string(),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self { Value::Bool(value) }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self { Value::Num(value) }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self { Value::Num(f64::from(value)) }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self { Value::Num(f64::from(value)) }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self { Value::Str(text.to_string()) }
}

impl From<String> for Value {
    fn from(text: String) -> Self { Value::Str(text) }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self { Value::Seq(elements) }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

/// Build a [`Value`] from a literal, in the style of `serde_json::json!`.
///
/// Map keys may be identifiers or string literals. Sequence elements and map entry
/// values are single token trees; wrap compound expressions in parentheses, eg:
/// `value!([(1 + 2), 4])`.
///
/// ```rust
/// use logsculpt::{Value, value};
///
/// let it = value!({
///     id: "worker-1",
///     busy: false,
///     jobs: [1, 2, 3],
///     parent: null,
/// });
/// assert!(matches!(it, Value::Map(entries) if entries.len() == 4));
/// ```
#[macro_export]
macro_rules! value {
    (null) => { $crate::Value::Null };
    (undefined) => { $crate::Value::Undefined };
    ([ $($element:tt),* $(,)? ]) => {
        $crate::Value::Seq(::std::vec![ $( $crate::value!($element) ),* ])
    };
    ({ $($key:tt : $entry_value:tt),* $(,)? }) => {
        $crate::Value::Map(::std::vec![
            $( ($crate::value_key!($key), $crate::value!($entry_value)) ),*
        ])
    };
    ($other:expr) => { $crate::Value::from($other) };
}

/// Internal helper for [`value!`] map keys.
#[macro_export]
#[doc(hidden)]
macro_rules! value_key {
    ($key:ident) => { ::std::string::String::from(stringify!($key)) };
    ($key:literal) => { ::std::string::String::from($key) };
}

#[cfg(test)]
mod tests_value {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(3), Value::Num(3.0));
        assert_eq!(Value::from("hi"), Value::Str("hi".to_string()));
        assert_eq!(Value::from(Option::<i32>::None), Value::Null);
        assert_eq!(Value::from(Some(1)), Value::Num(1.0));
    }

    #[test]
    fn test_plain_text_of_scalars() {
        assert_eq!(Value::Null.to_plain_text(), "null");
        assert_eq!(Value::Undefined.to_plain_text(), "undefined");
        assert_eq!(Value::Bool(false).to_plain_text(), "false");
        assert_eq!(Value::Num(42.0).to_plain_text(), "42");
        assert_eq!(Value::Num(1.5).to_plain_text(), "1.5");
        assert_eq!(Value::Str("raw".to_string()).to_plain_text(), "raw");
    }

    #[test]
    fn test_value_macro_builds_nested_structures() {
        let it = value!({
            name: "proxy",
            retries: 3,
            "spaced key": true,
            tags: ["a", "b"],
            inner: { enabled: false },
            missing: undefined,
        });

        let Value::Map(entries) = it else {
            panic!("expected a map");
        };
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0], ("name".to_string(), Value::Str("proxy".to_string())));
        assert_eq!(entries[1], ("retries".to_string(), Value::Num(3.0)));
        assert_eq!(entries[2], ("spaced key".to_string(), Value::Bool(true)));
        assert_eq!(
            entries[3].1,
            Value::Seq(vec![
                Value::Str("a".to_string()),
                Value::Str("b".to_string())
            ])
        );
        assert_eq!(
            entries[4].1,
            Value::Map(vec![("enabled".to_string(), Value::Bool(false))])
        );
        assert_eq!(entries[5].1, Value::Undefined);
    }

    #[test]
    fn test_value_macro_empty_containers() {
        assert_eq!(value!([]), Value::Seq(vec![]));
        assert_eq!(value!({}), Value::Map(vec![]));
    }

    #[test]
    fn test_is_scalar_partition() {
        assert!(Value::Null.is_scalar());
        assert!(Value::Undefined.is_scalar());
        assert!(Value::Bool(true).is_scalar());
        assert!(Value::Num(0.0).is_scalar());
        assert!(Value::Str(String::new()).is_scalar());
        assert!(!Value::Function("fn x() {}".to_string()).is_scalar());
        assert!(!Value::seq([]).is_scalar());
        assert!(!Value::map([] as [(&str, Value); 0]).is_scalar());
        assert!(!Value::opaque("symbol").is_scalar());
    }
}
