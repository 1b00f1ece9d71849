// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

use crate::RgbColor;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    ForegroundRGB(u8, u8, u8),
    BackgroundRGB(u8, u8, u8),
}

pub mod sgr_code_impl {
    use super::{Display, Formatter, Result, SgrCode};

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset                  => write!(f, "{CSI}0{SGR}"),
                SgrCode::ForegroundRGB(r, g, b) => write!(f, "{CSI}38;2;{r};{g};{b}{SGR}"),
                SgrCode::BackgroundRGB(r, g, b) => write!(f, "{CSI}48;2;{r};{g};{b}{SGR}"),
            }
        }
    }
}

pub use sgr_code_impl::{CSI, SGR};

/// Selector bytes that follow [`CSI`] in a truecolor code.
pub const FOREGROUND_SELECTOR: &str = "[38";
pub const BACKGROUND_SELECTOR: &str = "[48";

/// Which part of the terminal cell a truecolor code paints.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnsiTarget {
    Foreground,
    Background,
}

impl AnsiTarget {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Foreground => "foreground",
            Self::Background => "background",
        }
    }
}

/// A truecolor escape sequence, eg: `ESC[48;2;255;0;0m`.
///
/// The foreground and background codes for the same color differ only in the selector
/// bytes. [`AnsiCode::switch_to_foreground`] rewrites an existing code by text
/// substitution instead of rebuilding it from the channels, so the bytes of the rest of
/// the sequence are kept exactly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnsiCode {
    code: String,
}

impl AnsiCode {
    #[must_use]
    pub fn new(color: RgbColor, target: AnsiTarget) -> Self {
        let RgbColor { red, green, blue } = color;
        let sgr_code = match target {
            AnsiTarget::Foreground => SgrCode::ForegroundRGB(red, green, blue),
            AnsiTarget::Background => SgrCode::BackgroundRGB(red, green, blue),
        };
        Self {
            code: sgr_code.to_string(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.code }

    /// Replace the first `[48` with `[38`, in place.
    pub fn switch_to_foreground(&mut self) {
        self.code = self.code.replacen(BACKGROUND_SELECTOR, FOREGROUND_SELECTOR, 1);
    }

    /// Replace the first `[38` with `[48`, in place.
    pub fn switch_to_background(&mut self) {
        self.code = self.code.replacen(FOREGROUND_SELECTOR, BACKGROUND_SELECTOR, 1);
    }

    #[must_use]
    pub fn to_foreground(&self) -> Self {
        let mut it = self.clone();
        it.switch_to_foreground();
        it
    }

    #[must_use]
    pub fn to_background(&self) -> Self {
        let mut it = self.clone();
        it.switch_to_background();
        it
    }

    /// Quoted, with control characters escaped, so the code can be printed without
    /// being interpreted by the terminal, eg: `'\x1b[48;2;255;0;0m'`.
    #[must_use]
    pub fn escaped(&self) -> String {
        let mut acc = String::with_capacity(self.code.len() + 6);
        acc.push('\'');
        for ch in self.code.chars() {
            match ch {
                '\x1b' => acc.push_str("\\x1b"),
                '\'' => acc.push_str("\\'"),
                '\\' => acc.push_str("\\\\"),
                _ => acc.push(ch),
            }
        }
        acc.push('\'');
        acc
    }
}

impl Display for AnsiCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.code) }
}

impl AsRef<str> for AnsiCode {
    fn as_ref(&self) -> &str { &self.code }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn reset() {
        assert_eq!(SgrCode::Reset.to_string(), "\x1b[0m");
    }

    #[test]
    fn fg_color_rgb() {
        let sgr_code = SgrCode::ForegroundRGB(175, 215, 135);
        assert_eq!(sgr_code.to_string(), "\x1b[38;2;175;215;135m");
    }

    #[test]
    fn bg_color_rgb() {
        let sgr_code = SgrCode::BackgroundRGB(175, 215, 135);
        assert_eq!(sgr_code.to_string(), "\x1b[48;2;175;215;135m");
    }

    #[test]
    fn background_code_for_red() {
        let code = RgbColor::new(255, 0, 0).to_ansi(AnsiTarget::Background);
        assert_eq!(code.as_str(), "\x1b[48;2;255;0;0m");
    }

    #[test]
    fn substitution_matches_generated_foreground_for_every_channel_value() {
        for value in 0..=u8::MAX {
            let color = RgbColor::new(value, value.wrapping_mul(7), value.wrapping_add(48));
            let background = color.to_ansi(AnsiTarget::Background);
            let foreground = color.to_ansi(AnsiTarget::Foreground);
            assert_eq!(background.to_foreground(), foreground);
            assert_eq!(foreground.to_background(), background);
        }
    }

    #[test]
    fn substitution_only_touches_the_selector() {
        // The green channel contains `48` too.
        let mut code = RgbColor::new(48, 48, 48).to_ansi(AnsiTarget::Background);
        code.switch_to_foreground();
        assert_eq!(code.as_str(), "\x1b[38;2;48;48;48m");

        // Already foreground, nothing to replace.
        code.switch_to_foreground();
        assert_eq!(code.as_str(), "\x1b[38;2;48;48;48m");
    }

    #[test]
    fn escaped_form() {
        let code = RgbColor::new(255, 0, 0).to_ansi(AnsiTarget::Background);
        assert_eq!(code.escaped(), "'\\x1b[48;2;255;0;0m'");
    }
}
