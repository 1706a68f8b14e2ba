// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use unicode_width::UnicodeWidthStr;

use crate::text::max_line_width;

/// Centers each line of text within the given width. If no width is provided, the
/// width of the widest line is used. A width smaller than the widest line is
/// reported via [`tracing::warn!`] and the affected lines are returned unchanged.
#[must_use]
pub fn center_text_lines<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    width: Option<usize>,
) -> Vec<String> {
    let lines: Vec<&str> = lines.into_iter().collect();
    let widest = max_line_width(lines.iter().copied());

    if let Some(width) = width
        && width < widest
    {
        tracing::warn!(
            "The specified width of {width} is less than the maximum line width of {widest}."
        );
    }

    let line_width = width.unwrap_or(widest);
    lines
        .iter()
        .map(|line| center_text_line(line, line_width))
        .collect()
}

/// Centers one line within `line_width` by padding it with spaces on both sides
/// (left-biased when the split is uneven). Text at least as wide as `line_width` is
/// returned unchanged.
#[must_use]
pub fn center_text_line(text: &str, line_width: usize) -> String {
    let text_width = text.width();
    if text_width >= line_width {
        if text_width > line_width {
            tracing::warn!(
                "The text width of {text_width} is greater than the specified line width of {line_width}."
            );
        }
        return text.to_string();
    }

    let start = (line_width + text_width) / 2 - text_width;
    let end = line_width - text_width - start;
    format!(
        "{left}{text}{right}",
        left = " ".repeat(start),
        right = " ".repeat(end)
    )
}
