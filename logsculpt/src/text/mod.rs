// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod center_text;
pub mod string_helper;

// Re-export.
pub use center_text::*;
pub use string_helper::*;
