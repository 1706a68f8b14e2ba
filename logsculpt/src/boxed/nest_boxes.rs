// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BorderStyle, BoxAlign, BoxConfig, render_box, text::max_line_width};

/// One titled block of content for [`nest_content_boxes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBox {
    pub title: String,
    pub contents: String,
}

impl ContentBox {
    #[must_use]
    pub fn new(arg_title: impl Into<String>, arg_contents: impl Into<String>) -> Self {
        Self {
            title: arg_title.into(),
            contents: arg_contents.into(),
        }
    }
}

/// Nests the given content boxes inside each other, innermost last: each box wraps
/// its own contents with all later boxes rendered below, in a double-border,
/// center-aligned frame whose content width is pinned to the widest line produced so
/// far (so outer frames never collapse around their nested box).
#[must_use]
pub fn nest_content_boxes(boxes: &[ContentBox]) -> String {
    let mut output = String::new();
    for content_box in boxes.iter().rev() {
        let nested_width = max_line_width(output.split('\n'));
        let combined = if output.is_empty() {
            content_box.contents.clone()
        } else {
            format!("{contents}\n{output}", contents = content_box.contents)
        };
        output = render_box(
            &combined,
            &BoxConfig {
                title: Some(content_box.title.clone()),
                title_align: BoxAlign::Center,
                text_align: BoxAlign::Center,
                padding: 1,
                margin: 1,
                border_style: BorderStyle::Double,
                width: Some(nested_width),
            },
        );
    }
    output
}
