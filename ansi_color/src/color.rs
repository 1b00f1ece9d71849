// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>
//! - <https://en.wikipedia.org/wiki/Web_colors#Hex_triplet>

use std::fmt::{Display, Formatter, Result};

use crate::{AnsiCode, AnsiTarget, ConversionFormat, ConvertError, ConvertResult};

/// Separator between channels in user input and in color files, eg: `255;0;0`.
pub const CHANNEL_SEPARATOR: char = ';';

/// A color with three 8-bit channels. The hex string is always computed from the
/// channels (see [`RgbColor::to_hex`]), so the two can never disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self { red, green, blue } }
}

impl From<RgbColor> for (u8, u8, u8) {
    fn from(color: RgbColor) -> Self { (color.red, color.green, color.blue) }
}

impl RgbColor {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Inverse of [`Self::to_hex`]. The leading `#` is optional.
    ///
    /// # Errors
    ///
    /// [`ConvertError::HexColor`] unless there are exactly 6 hex digits after the `#`.
    pub fn try_from_hex(hex: &str) -> ConvertResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        let is_valid =
            digits.len() == 6 && digits.bytes().all(|byte| byte.is_ascii_hexdigit());
        if !is_valid {
            return Err(ConvertError::HexColor {
                text: hex.to_string(),
            });
        }

        let channel = |index: usize| {
            u8::from_str_radix(&digits[index..index + 2], 16).map_err(|_| {
                ConvertError::HexColor {
                    text: hex.to_string(),
                }
            })
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Parse `R;G;B` where every channel is written in `format`.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::Format`] if there aren't exactly 3 channels, or a channel isn't
    ///   a number in `format`.
    /// - [`ConvertError::OutOfRange`] if a channel is outside `0..=255`.
    pub fn try_parse_channels(text: &str, format: ConversionFormat) -> ConvertResult<Self> {
        let channels: Vec<&str> = text.split(CHANNEL_SEPARATOR).collect();

        let [red, green, blue] = channels.as_slice() else {
            return Err(ConvertError::Format {
                text: text.to_string(),
                format: format.name(),
            });
        };

        Ok(Self::new(
            format.parse(red)?,
            format.parse(green)?,
            format.parse(blue)?,
        ))
    }

    #[must_use]
    pub fn to_ansi(&self, target: AnsiTarget) -> AnsiCode { AnsiCode::new(*self, target) }
}

/// Formats like a tuple, eg: `(255, 0, 0)`.
impl Display for RgbColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Convenience free functions, matching the names used in color files and docs.
pub mod hex {
    use super::{AnsiCode, AnsiTarget, ConvertResult, RgbColor};

    #[must_use]
    pub fn to_hex(red: u8, green: u8, blue: u8) -> String {
        RgbColor::new(red, green, blue).to_hex()
    }

    /// # Errors
    ///
    /// See [`RgbColor::try_from_hex`].
    pub fn hex_to_rgb(hex: &str) -> ConvertResult<(u8, u8, u8)> {
        RgbColor::try_from_hex(hex).map(Into::into)
    }

    /// # Errors
    ///
    /// See [`RgbColor::try_from_hex`].
    pub fn to_ansi(hex: &str, target: AnsiTarget) -> ConvertResult<AnsiCode> {
        RgbColor::try_from_hex(hex).map(|color| color.to_ansi(target))
    }
}

/// Named colors used to style the app's own output.
#[macro_export]
macro_rules! rgb_color {
    (soft_pink) => {
        $crate::RgbColor::new(255, 181, 234)
    };
    (lizard_green) => {
        $crate::RgbColor::new(20, 244, 0)
    };
    (slate_gray) => {
        $crate::RgbColor::new(94, 103, 111)
    };
    (silver_metallic) => {
        $crate::RgbColor::new(213, 217, 220)
    };
    (frozen_blue) => {
        $crate::RgbColor::new(171, 204, 242)
    };
    (orange) => {
        $crate::RgbColor::new(255, 132, 18)
    };
}
