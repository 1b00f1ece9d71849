// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Everything that can go wrong while turning text into a color channel or a color.
///
/// Callers re-prompt on [`ConvertError::Format`]. On [`ConvertError::OutOfRange`] they
/// also reset their color state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ConvertError {
    /// The text is not a number in the requested format.
    #[error("{text:?} is not a valid {format} value")]
    #[diagnostic(
        code(termcolours_ansi::convert::format),
        help("Use digits of the selected format, eg: 255, ff or 0.5")
    )]
    Format { text: String, format: &'static str },

    /// The text is a number, but it doesn't fit in a color channel.
    #[error("Value {value} is out of range <0-255>")]
    #[diagnostic(code(termcolours_ansi::convert::out_of_range))]
    OutOfRange { value: i64 },

    /// The text is not a `#rrggbb` hex color string.
    #[error("{text:?} is not a 6 digit hex color")]
    #[diagnostic(
        code(termcolours_ansi::convert::hex_color),
        help("A hex color looks like #ff8000 (the leading # is optional)")
    )]
    HexColor { text: String },
}

impl ConvertError {
    #[must_use]
    pub fn is_out_of_range(&self) -> bool { matches!(self, Self::OutOfRange { .. }) }
}

pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn out_of_range_message() {
        let error = ConvertError::OutOfRange { value: 256 };
        assert_eq!(error.to_string(), "Value 256 is out of range <0-255>");
        assert!(error.is_out_of_range());
    }

    #[test]
    fn format_message() {
        let error = ConvertError::Format {
            text: "zz".into(),
            format: "decimal",
        };
        assert_eq!(error.to_string(), "\"zz\" is not a valid decimal value");
        assert!(!error.is_out_of_range());
    }
}
