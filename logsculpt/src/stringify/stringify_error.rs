// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use thiserror::Error;

/// Raised by [`pretty_stringify`] when asked to render a value kind that has no
/// defined rendering (eg: [`Value::Opaque`]). Propagates synchronously through every
/// logger operation that stringifies its arguments; never retried, never masked.
///
/// [`pretty_stringify`]: crate::pretty_stringify
/// [`Value::Opaque`]: crate::Value::Opaque
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported value kind: {type_name}")]
pub struct UnsupportedValueKind {
    /// The runtime type name of the offending value.
    pub type_name: String,
}

#[cfg(test)]
mod tests_stringify_error {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_names_the_runtime_type() {
        let it = UnsupportedValueKind {
            type_name: "symbol".to_string(),
        };
        assert_eq!(it.to_string(), "Unsupported value kind: symbol");
    }
}
