// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Include.
pub mod clap_config;
pub mod clipboard;
pub mod color_file;
pub mod commands;
pub mod launcher;
pub mod line_eraser;
pub mod palette;
pub mod preview;
pub mod prompt;
pub mod session;
pub mod ui_str;

// Reexport.
pub use clap_config::*;
pub use clipboard::*;
pub use color_file::*;
pub use commands::*;
pub use launcher::*;
pub use line_eraser::*;
pub use palette::*;
pub use preview::*;
pub use prompt::*;
pub use session::*;
