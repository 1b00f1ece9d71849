// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Text styles for the app's own messages. Every style is a foreground truecolor code,
//! so the output looks the same on any terminal that can show the previews.

use std::fmt::Display;

use termcolours_ansi::{fg_rgb_color, rgb_color};

#[must_use]
pub fn colon() -> String { dim(":") }

/// Normal or default text style.
pub fn normal(arg_text: impl Display) -> String {
    let text = arg_text.to_string();
    fg_rgb_color(rgb_color!(silver_metallic), &text).to_string()
}

/// Error text style.
pub fn error(arg_text: impl Display) -> String {
    let text = arg_text.to_string();
    fg_rgb_color(rgb_color!(soft_pink), &text).to_string()
}

/// Warnings that don't stop anything, eg: the clipboard is not available.
pub fn warning(arg_text: impl Display) -> String {
    let text = arg_text.to_string();
    fg_rgb_color(rgb_color!(orange), &text).to_string()
}

/// Emphasis text style to highlight.
pub fn emphasis(arg_text: impl Display) -> String {
    let text = arg_text.to_string();
    fg_rgb_color(rgb_color!(lizard_green), &text).to_string()
}

/// De-emphasize (dim) text.
pub fn dim(arg_text: impl Display) -> String {
    let text = arg_text.to_string();
    fg_rgb_color(rgb_color!(slate_gray), &text).to_string()
}

/// The part of the prompt which gives the user instruction, e.g.: `Enter a palette
/// name`.
pub fn prompt_seg_normal(arg_text: impl Display) -> String {
    let text = arg_text.to_string();
    fg_rgb_color(rgb_color!(frozen_blue), &text).to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn styles_wrap_text_in_fg_code_and_reset() {
        assert_eq!(error("oops"), "\x1b[38;2;255;181;234moops\x1b[0m");
        assert_eq!(dim(42), "\x1b[38;2;94;103;111m42\x1b[0m");
    }

    #[test]
    fn colon_is_dim() {
        assert_eq!(colon(), dim(":"));
    }
}
