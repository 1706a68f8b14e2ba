// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use unicode_width::UnicodeWidthStr;

/// Tests whether the given text contains an ANSI escape sequence.
///
/// This is the explicit, tested contract behind the logger's "is this line already
/// carrying embedded style codes" decision: such lines are passed through untouched
/// instead of being restyled with the body text role.
#[must_use]
pub fn contains_ansi_escape_sequence(text: &str) -> bool {
    text.chars().any(|it| it == '\x1b')
}

/// Display width of the widest line, taking into account that lines may contain
/// emoji and other wide graphemes.
#[must_use]
pub fn max_line_width<'a>(lines: impl IntoIterator<Item = &'a str>) -> usize {
    lines
        .into_iter()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
}
