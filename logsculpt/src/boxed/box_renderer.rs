// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Box renderer
//!
//! [`render_box`] draws a bordered frame around a block of text:
//!
//! ```text
//! ┌─ title ────────┐
//! │  one line      │
//! │  another line  │
//! └────────────────┘
//! ```
//!
//! Geometry contract: with `content_width` = the display width of the widest line
//! (raised to [`BoxConfig::width`] when that is larger), the inner width is
//! `content_width + 2 * padding`, and the top/bottom border rows carry exactly
//! `inner_width + 2` horizontal glyphs between their corner glyphs — the extra 2
//! matches the single space that flanks the padded content on each side. The margin
//! prepends and appends that many newlines. A title consumes border glyphs in the
//! top row but never changes the content-box geometry.

use unicode_width::UnicodeWidthStr;

use crate::{BorderGlyphs, BorderStyle, text::{center_text_line, max_line_width}};

/// Horizontal placement of a line (or the title) within its available run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxAlign {
    #[default]
    Left,
    Center,
}

/// Configuration for [`render_box`].
#[derive(Debug, Clone, Default)]
pub struct BoxConfig {
    /// Rendered into the top border row when present.
    pub title: Option<String>,
    pub title_align: BoxAlign,
    /// Spaces inside the frame on the left/right of each content line.
    pub padding: usize,
    /// Blank lines before and after the box.
    pub margin: usize,
    pub border_style: BorderStyle,
    /// Content width floor. The content area is at least this wide; it is never
    /// narrowed below the widest line (no wrapping happens here).
    pub width: Option<usize>,
    pub text_align: BoxAlign,
}

/// Draw `text` inside a bordered frame. See the [module docs] for the geometry
/// contract.
///
/// [module docs]: self
#[must_use]
pub fn render_box(text: &str, config: &BoxConfig) -> String {
    let glyphs = config.border_style.glyphs();

    let lines: Vec<&str> = text.split('\n').map(|it| it.trim_end_matches('\r')).collect();
    let content_width = max_line_width(lines.iter().copied())
        .max(config.width.unwrap_or(0));
    let inner_width = content_width + 2 * config.padding;
    let run_width = inner_width + 2;

    let top = helpers::top_border(&glyphs, run_width, config);
    let bottom = format!(
        "{corner_l}{run}{corner_r}",
        corner_l = glyphs.bottom_left,
        run = helpers::horizontal_run(&glyphs, run_width),
        corner_r = glyphs.bottom_right
    );

    let pad = " ".repeat(config.padding);
    let mut rows = Vec::with_capacity(lines.len() + 2);
    rows.push(top);
    for line in &lines {
        let aligned = match config.text_align {
            BoxAlign::Left => helpers::pad_to_width(line, content_width),
            BoxAlign::Center => center_text_line(line, content_width),
        };
        rows.push(format!(
            "{v} {pad}{aligned}{pad} {v}",
            v = glyphs.vertical
        ));
    }
    rows.push(bottom);

    let margin_lines = "\n".repeat(config.margin);
    format!("{margin_lines}{body}{margin_lines}", body = rows.join("\n"))
}

mod helpers {
    use super::{BoxAlign, BoxConfig, BorderGlyphs, UnicodeWidthStr};

    pub fn horizontal_run(glyphs: &BorderGlyphs, run_width: usize) -> String {
        glyphs.horizontal.to_string().repeat(run_width)
    }

    pub fn pad_to_width(line: &str, content_width: usize) -> String {
        let fill = content_width.saturating_sub(line.width());
        format!("{line}{}", " ".repeat(fill))
    }

    /// The top border row, with the title label (` title `) replacing part of the
    /// horizontal run when one is configured. A label wider than the run swallows
    /// the whole run rather than growing the box.
    pub fn top_border(
        glyphs: &BorderGlyphs,
        run_width: usize,
        config: &BoxConfig,
    ) -> String {
        let run = match &config.title {
            None => horizontal_run(glyphs, run_width),
            Some(title) => {
                let label = format!(" {title} ");
                let label_width = label.width();
                if label_width >= run_width {
                    label
                } else {
                    let remaining = run_width - label_width;
                    let start = match config.title_align {
                        BoxAlign::Left => remaining.min(1),
                        BoxAlign::Center => remaining / 2,
                    };
                    format!(
                        "{left}{label}{right}",
                        left = horizontal_run(glyphs, start),
                        right = horizontal_run(glyphs, remaining - start)
                    )
                }
            }
        };
        format!(
            "{corner_l}{run}{corner_r}",
            corner_l = glyphs.top_left,
            corner_r = glyphs.top_right
        )
    }
}

#[cfg(test)]
mod tests_box_renderer {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_minimal_single_box() {
        let it = render_box("hi", &BoxConfig::default());
        assert_eq!(it, "┌────┐\n│ hi │\n└────┘");
    }

    #[test]
    fn test_multi_line_content_is_padded_to_the_widest_line() {
        let it = render_box("one\nlonger", &BoxConfig::default());
        assert_eq!(it, "┌────────┐\n│ one    │\n│ longer │\n└────────┘");
    }

    #[test_case(BorderStyle::Single, '┌', '─', '│'; "single glyphs")]
    #[test_case(BorderStyle::Double, '╔', '═', '║'; "double glyphs")]
    #[test_case(BorderStyle::Round, '╭', '─', '│'; "round glyphs")]
    fn test_border_styles(
        border_style: BorderStyle,
        top_left: char,
        horizontal: char,
        vertical: char,
    ) {
        let it = render_box(
            "x",
            &BoxConfig {
                border_style,
                ..Default::default()
            },
        );
        let mut chars = it.chars();
        assert_eq!(chars.next(), Some(top_left));
        assert_eq!(chars.next(), Some(horizontal));
        assert!(it.contains(vertical));
    }

    #[test]
    fn test_padding_adds_spaces_inside_the_frame() {
        let it = render_box(
            "ab",
            &BoxConfig {
                padding: 2,
                ..Default::default()
            },
        );
        // inner width = 2 + 2*2 = 6, run width = 8.
        assert_eq!(it, "┌────────┐\n│   ab   │\n└────────┘");
    }

    #[test]
    fn test_margin_prepends_and_appends_blank_lines() {
        let it = render_box(
            "x",
            &BoxConfig {
                margin: 2,
                ..Default::default()
            },
        );
        assert!(it.starts_with("\n\n┌"));
        assert!(it.ends_with("┘\n\n"));
    }

    #[test]
    fn test_width_floor_widens_the_content_area() {
        let it = render_box(
            "ab",
            &BoxConfig {
                width: Some(5),
                ..Default::default()
            },
        );
        assert_eq!(it, "┌───────┐\n│ ab    │\n└───────┘");
    }

    #[test]
    fn test_width_floor_never_narrows_below_the_widest_line() {
        let narrow = render_box(
            "abcdef",
            &BoxConfig {
                width: Some(2),
                ..Default::default()
            },
        );
        assert_eq!(narrow, render_box("abcdef", &BoxConfig::default()));
    }

    #[test]
    fn test_title_is_embedded_without_changing_geometry() {
        let titled = render_box(
            "content",
            &BoxConfig {
                title: Some("T".to_string()),
                ..Default::default()
            },
        );
        let untitled = render_box("content", &BoxConfig::default());

        let titled_rows: Vec<&str> = titled.split('\n').collect();
        let untitled_rows: Vec<&str> = untitled.split('\n').collect();
        assert_eq!(titled_rows[0], "┌─ T ─────┐");
        assert_eq!(titled_rows[0].chars().count(), untitled_rows[0].chars().count());
        assert_eq!(titled_rows[1..], untitled_rows[1..]);
    }

    #[test]
    fn test_centered_title_and_text() {
        let it = render_box(
            "ab",
            &BoxConfig {
                title: Some("T".to_string()),
                title_align: BoxAlign::Center,
                text_align: BoxAlign::Center,
                width: Some(6),
                ..Default::default()
            },
        );
        // run width = 8, label " T " = 3 wide, start = (8-3)/2 = 2.
        assert_eq!(it, "┌── T ───┐\n│   ab   │\n└────────┘");
    }

    #[test]
    fn test_all_rows_share_one_display_width() {
        let it = render_box(
            "short\nmuch longer line",
            &BoxConfig {
                padding: 1,
                border_style: BorderStyle::Double,
                title: Some("W".to_string()),
                ..Default::default()
            },
        );
        let widths: Vec<usize> =
            it.split('\n').map(|row| row.chars().count()).collect();
        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
