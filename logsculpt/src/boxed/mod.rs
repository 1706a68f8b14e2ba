// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod border_style;
pub mod box_renderer;
pub mod nest_boxes;

// Re-export.
pub use border_style::*;
pub use box_renderer::*;
pub use nest_boxes::*;
