// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod fmt;
pub mod log_support;
pub mod output_buffer;

// Re-export.
pub use fmt::*;
pub use log_support::*;
pub use output_buffer::*;
