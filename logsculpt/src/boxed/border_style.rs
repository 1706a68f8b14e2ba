// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// You can get the unicode symbols for the drawings here:
// - <https://symbl.cc/en/unicode/blocks/box-drawing/>

use strum_macros::EnumCount;

/// Which glyph set [`render_box`] draws its frame with.
///
/// [`render_box`]: crate::render_box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumCount)]
pub enum BorderStyle {
    #[default]
    Single,
    Double,
    Round,
}

/// The six glyphs that make up one border style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

#[rustfmt::skip]
mod glyph_sets {
    use super::BorderGlyphs;

    pub const SINGLE: BorderGlyphs = BorderGlyphs {
        top_left: '┌', top_right: '┐', bottom_left: '└', bottom_right: '┘',
        horizontal: '─', vertical: '│',
    };

    pub const DOUBLE: BorderGlyphs = BorderGlyphs {
        top_left: '╔', top_right: '╗', bottom_left: '╚', bottom_right: '╝',
        horizontal: '═', vertical: '║',
    };

    pub const ROUND: BorderGlyphs = BorderGlyphs {
        top_left: '╭', top_right: '╮', bottom_left: '╰', bottom_right: '╯',
        horizontal: '─', vertical: '│',
    };
}

impl BorderStyle {
    #[must_use]
    pub fn glyphs(self) -> BorderGlyphs {
        match self {
            BorderStyle::Single => glyph_sets::SINGLE,
            BorderStyle::Double => glyph_sets::DOUBLE,
            BorderStyle::Round => glyph_sets::ROUND,
        }
    }
}
