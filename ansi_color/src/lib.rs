// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # termcolours_ansi
//!
//! The color engine behind the `termcolours` app:
//!
//! 1. [`ConversionFormat`] reads a single channel typed as decimal (`255`), hexadecimal
//!    (`ff`) or a fraction of 255 (`1.0`). Every parser shares [`range_check`].
//! 2. [`RgbColor`] turns three channels into a `#rrggbb` hex string and back.
//! 3. [`AnsiCode`] is the truecolor escape sequence for a color, as a background
//!    (`ESC[48;2;R;G;Bm`) or a foreground (`ESC[38;2;R;G;Bm`) code.
//!
//! ```rust
//! use termcolours_ansi::*;
//!
//! let red = RgbColor::try_parse_channels("ff;00;00", ConversionFormat::Hexadecimal).unwrap();
//! assert_eq!(red.to_hex(), "#ff0000");
//!
//! let mut code = red.to_ansi(AnsiTarget::Background);
//! assert_eq!(code.as_str(), "\x1b[48;2;255;0;0m");
//!
//! code.switch_to_foreground();
//! assert_eq!(code.as_str(), "\x1b[38;2;255;0;0m");
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach.
pub mod ansi_escape_codes;
pub mod ansi_styled_text;
pub mod color;
pub mod convert;
pub mod error;

// Re-export.
pub use ansi_escape_codes::*;
pub use ansi_styled_text::*;
pub use color::*;
pub use convert::*;
pub use error::*;
