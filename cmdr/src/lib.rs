// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # termcolours
//!
//! An interactive color converter for the terminal. Type a color as three channels,
//! separated by `;`, and `termcolours` prints its hex string, its 24-bit ANSI escape code,
//! and a swatch painted in that color:
//!
//! ```text
//! Enter a colour code (R;G;B, decimal), command or help: 255;0;0
//! ████████████████████  ← #ff0000 = (255, 0, 0)     = '\x1b[48;2;255;0;0m'
//! ```
//!
//! # Run the binary
//!
//! ```sh
//! cargo run --bin termcolours            # interactive mode
//! cargo run --bin termcolours -- -f FILE # batch mode, renders every color in FILE
//! cargo run --bin termcolours -- -h      # help
//! ```
//!
//! # Commands in interactive mode
//!
//! | Token                  | Action                                                    |
//! | ---------------------- | --------------------------------------------------------- |
//! | `decm`, `hexa`, `prct` | Read channels as decimal, hexadecimal or fractions of 255 |
//! | `fg`, `bg`             | Copy the current color's ANSI code to the clipboard       |
//! | `palette`              | Pick a named palette and render it                        |
//! | `help`                 | Print usage                                               |
//! | `quit`, `q`, empty     | Exit                                                      |
//!
//! # Color files
//!
//! Batch mode and palettes read the same format. One color per line, `R;G;B;FORMAT`,
//! where `FORMAT` is one of `decm`, `hexa`, `prct`. Blank lines and lines starting with
//! `#` are ignored.
//!
//! ```text
//! # Traffic lights
//! 255;0;0;decm
//! ff;bf;00;hexa
//! 0;1;0;prct
//! ```
//!
//! # Module layout
//!
//! - [`termcolours`] holds the app: [`termcolours::Session`] drives the loop and returns
//!   a [`termcolours::ControlSignal`] every step. The things it talks to (prompt,
//!   clipboard, line erasure, palettes) are traits with a test double next to each real
//!   implementation.
//! - [`common`] holds text styles and logging setup shared by the app and the binary.
//! - The color math lives in the [`termcolours_ansi`] crate.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod common;
pub mod termcolours;

// Re-export.
pub use common::*;
