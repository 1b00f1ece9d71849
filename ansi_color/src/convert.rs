// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turn the text of a single color channel into a `u8`. The three numeral systems that
//! users can type in are modeled by [`ConversionFormat`]. Each parser runs its result
//! through [`range_check`], so a value outside `0..=255` is always reported as
//! [`ConvertError::OutOfRange`] and never clamped.

use std::num::IntErrorKind;

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{ConvertError, ConvertResult};

pub const MIN_CHANNEL_VALUE: i64 = 0;
pub const MAX_CHANNEL_VALUE: i64 = 255;

/// The numeral system used to read channel values. The strum serializations are the
/// command tokens that users type to switch formats (matched case-insensitively).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum ConversionFormat {
    #[default]
    #[strum(serialize = "decm")]
    Decimal,
    #[strum(serialize = "hexa")]
    Hexadecimal,
    #[strum(serialize = "prct")]
    Percentage,
}

impl ConversionFormat {
    /// Command token, eg: `hexa`.
    #[must_use]
    pub fn token(self) -> &'static str { self.into() }

    /// Human readable name, used in prompts.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Hexadecimal => "hexadecimal",
            Self::Percentage => "percentage",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Decimal => "sets conversion from decimal format",
            Self::Hexadecimal => "sets conversion from hexadecimal format",
            Self::Percentage => "sets conversion from percentage format",
        }
    }

    /// Parse the text of one channel in this format.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::Format`] if the text isn't a number in this format.
    /// - [`ConvertError::OutOfRange`] if the number is outside `0..=255`.
    pub fn parse(self, text: &str) -> ConvertResult<u8> {
        match self {
            Self::Decimal => parse_decimal(text),
            Self::Hexadecimal => parse_hex(text),
            Self::Percentage => parse_percentage(text),
        }
    }
}

/// Base 10 integer, eg: `255`.
///
/// # Errors
///
/// See [`ConversionFormat::parse`].
pub fn parse_decimal(text: &str) -> ConvertResult<u8> {
    parse_integer(text, 10, ConversionFormat::Decimal)
}

/// Base 16 integer, eg: `ff` or `0xff`.
///
/// # Errors
///
/// See [`ConversionFormat::parse`].
pub fn parse_hex(text: &str) -> ConvertResult<u8> {
    parse_integer(text, 16, ConversionFormat::Hexadecimal)
}

/// Fraction of 255, eg: `0.5` is `127`. The product is truncated toward zero.
///
/// # Errors
///
/// See [`ConversionFormat::parse`].
#[allow(clippy::cast_possible_truncation)]
pub fn parse_percentage(text: &str) -> ConvertResult<u8> {
    let fraction: f64 = text
        .trim()
        .parse()
        .map_err(|_| format_error(text, ConversionFormat::Percentage))?;

    if !fraction.is_finite() {
        return Err(format_error(text, ConversionFormat::Percentage));
    }

    // `as` saturates, so huge fractions still land outside the channel range.
    let value = (fraction * 255.0).trunc() as i64;
    range_check(value)
}

/// Shared by all the parsers.
///
/// # Errors
///
/// [`ConvertError::OutOfRange`] if `value` is outside `0..=255`.
pub fn range_check(value: i64) -> ConvertResult<u8> {
    u8::try_from(value).map_err(|_| ConvertError::OutOfRange { value })
}

fn parse_integer(text: &str, radix: u32, format: ConversionFormat) -> ConvertResult<u8> {
    let trimmed = text.trim();

    let (is_negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = if radix == 16 {
        unsigned
            .strip_prefix("0x")
            .or_else(|| unsigned.strip_prefix("0X"))
            .unwrap_or(unsigned)
    } else {
        unsigned
    };

    // A second sign, eg: `--5` or `0x-5`.
    if digits.starts_with(['+', '-']) {
        return Err(format_error(text, format));
    }

    match i64::from_str_radix(digits, radix) {
        Ok(magnitude) => range_check(if is_negative { -magnitude } else { magnitude }),
        Err(error) => match error.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Err(ConvertError::OutOfRange {
                    value: if is_negative { i64::MIN } else { i64::MAX },
                })
            }
            _ => Err(format_error(text, format)),
        },
    }
}

fn format_error(text: &str, format: ConversionFormat) -> ConvertError {
    ConvertError::Format {
        text: text.to_string(),
        format: format.name(),
    }
}
