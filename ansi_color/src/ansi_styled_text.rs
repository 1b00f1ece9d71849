// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{RgbColor, SgrCode};

/// Text wrapped in truecolor SGR codes, followed by a reset.
///
/// # Example usage:
///
/// ```rust
/// use termcolours_ansi::*;
///
/// let warning = fg_rgb_color(rgb_color!(orange), "no color to copy");
/// let on_dark = warning.bg_rgb_color((31, 36, 46));
/// assert!(on_dark.to_string().starts_with("\x1b[38;2;255;132;18m\x1b[48;2;31;36;46m"));
/// assert!(on_dark.to_string().ends_with("\x1b[0m"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsiStyledText<'a> {
    pub text: &'a str,
    pub fg: Option<RgbColor>,
    pub bg: Option<RgbColor>,
}

impl AnsiStyledText<'_> {
    #[must_use]
    pub fn bg_rgb_color(mut self, arg_color: impl Into<RgbColor>) -> Self {
        self.bg = Some(arg_color.into());
        self
    }
}

impl Display for AnsiStyledText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if let Some(RgbColor { red, green, blue }) = self.fg {
            write!(f, "{}", SgrCode::ForegroundRGB(red, green, blue))?;
        }
        if let Some(RgbColor { red, green, blue }) = self.bg {
            write!(f, "{}", SgrCode::BackgroundRGB(red, green, blue))?;
        }
        write!(f, "{}{}", self.text, SgrCode::Reset)
    }
}

pub fn fg_rgb_color(arg_color: impl Into<RgbColor>, text: &str) -> AnsiStyledText<'_> {
    AnsiStyledText {
        text,
        fg: Some(arg_color.into()),
        bg: None,
    }
}
