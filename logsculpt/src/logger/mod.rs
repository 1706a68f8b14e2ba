// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod logger_impl;
pub mod logger_model;

// Re-export.
pub use logger_impl::*;
pub use logger_model::*;
