// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{self, Debug, Formatter},
          sync::Arc};

use crate::Value;

/// Rewrites a map key before it is rendered.
pub type KeyModifierFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Rewrites a scalar map entry value into its display text.
pub type ValueModifierFn = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// Formatting configuration for [`pretty_stringify`]. Configuration, not state: the
/// current nesting indent is threaded through recursive calls as a parameter and is
/// never stored here.
///
/// The modifiers apply only to directly-owned scalar map entry values; non-scalar
/// entry values recurse through the stringifier and inherit all options. See
/// [`pretty_stringify`] for the full dispatch rules.
///
/// ```rust
/// use logsculpt::StringifyOptions;
///
/// let options = StringifyOptions {
///     sort_object_keys: true,
///     ..Default::default()
/// };
/// let shouting = StringifyOptions::default()
///     .with_key_modifier(|key| key.to_uppercase());
/// ```
///
/// [`pretty_stringify`]: crate::pretty_stringify
#[derive(Clone)]
pub struct StringifyOptions {
    /// Applied to every map key before rendering. Default: identity.
    pub object_key_modifier: KeyModifierFn,
    /// Applied to every scalar map entry value. Default:
    /// [`Value::to_plain_text`].
    pub object_value_modifier: ValueModifierFn,
    /// Order map entries by ascending raw (unmodified) key instead of insertion
    /// order. Default: `false`.
    pub sort_object_keys: bool,
    /// Wrap directly-rendered strings in double quotes. Default: `false`.
    pub quote_strings: bool,
}

impl Default for StringifyOptions {
    fn default() -> Self {
        Self {
            object_key_modifier: Arc::new(str::to_string),
            object_value_modifier: Arc::new(Value::to_plain_text),
            sort_object_keys: false,
            quote_strings: false,
        }
    }
}

impl StringifyOptions {
    /// Replace the key modifier.
    #[must_use]
    pub fn with_key_modifier(
        mut self,
        arg_modifier: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.object_key_modifier = Arc::new(arg_modifier);
        self
    }

    /// Replace the scalar value modifier.
    #[must_use]
    pub fn with_value_modifier(
        mut self,
        arg_modifier: impl Fn(&Value) -> String + Send + Sync + 'static,
    ) -> Self {
        self.object_value_modifier = Arc::new(arg_modifier);
        self
    }
}

impl Debug for StringifyOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringifyOptions")
            .field("sort_object_keys", &self.sort_object_keys)
            .field("quote_strings", &self.quote_strings)
            .finish_non_exhaustive()
    }
}
