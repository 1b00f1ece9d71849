// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color files hold one color per line, as `R;G;B;FORMAT`, eg: `ff;80;00;hexa`. Batch
//! mode (`-f FILE`) and palettes use the same format.
//!
//! Lines are handled independently, and a bad line never stops the file:
//! - Blank lines, and lines starting with `#`, are ignored.
//! - Lines with fewer than 4 fields are reported in
//!   [`ParsedColorFile::skipped_lines`].
//! - Lines whose channels don't parse, or whose format is unknown, are dropped silently.
//! - Fields after the 4th are ignored.

use std::{fmt::{Display, Formatter},
          fs,
          io,
          path::Path,
          str::FromStr};

use termcolours_ansi::{AnsiCode, AnsiTarget, CHANNEL_SEPARATOR, ConversionFormat,
                       RgbColor};

use crate::termcolours::ui_str;

pub const COMMENT_PREFIX: char = '#';
pub const MIN_FIELD_COUNT: usize = 4;

/// A color that was read from a color file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRecord {
    pub color: RgbColor,
    pub format: ConversionFormat,
    /// 1-based line number in the file.
    pub line_number: usize,
    /// 1-based position among the records of the file.
    pub ordinal: usize,
}

impl ColorRecord {
    #[must_use]
    pub fn hex(&self) -> String { self.color.to_hex() }

    #[must_use]
    pub fn ansi_code(&self) -> AnsiCode { self.color.to_ansi(AnsiTarget::Background) }
}

/// A line with too few fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the file.
    pub line_number: usize,
    pub line: String,
}

impl Display for SkippedLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            ui_str::skipping_invalid_line_msg(self.line_number, &self.line)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedColorFile {
    pub records: Vec<ColorRecord>,
    pub skipped_lines: Vec<SkippedLine>,
}

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ColorFileError {
    #[error("Could not read color file '{path}'")]
    #[diagnostic(
        code(termcolours::color_file::read),
        help("Check that the file exists, is readable, and is UTF-8 text")
    )]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Read `path` and parse it with [`parse_color_lines`].
///
/// # Errors
///
/// [`ColorFileError::Read`] if the file can't be read. Problems with individual lines
/// are never errors.
pub fn try_parse_color_file(path: &Path) -> Result<ParsedColorFile, ColorFileError> {
    let text = fs::read_to_string(path).map_err(|source| ColorFileError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let parsed = parse_color_lines(&text);

    tracing::debug!(
        message = "Parsed color file",
        path = %path.display(),
        records = parsed.records.len(),
        skipped_lines = parsed.skipped_lines.len()
    );

    Ok(parsed)
}

#[must_use]
pub fn parse_color_lines(text: &str) -> ParsedColorFile {
    let mut acc = ParsedColorFile::default();

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let fields: Vec<&str> = line.split(CHANNEL_SEPARATOR).collect();
        if fields.len() < MIN_FIELD_COUNT {
            tracing::warn!(message = "Skipping invalid line", line_number, line);
            acc.skipped_lines.push(SkippedLine {
                line_number,
                line: line.to_string(),
            });
            continue;
        }

        let Some((format, color)) = parse_fields(&fields) else {
            continue;
        };

        acc.records.push(ColorRecord {
            color,
            format,
            line_number,
            ordinal: acc.records.len() + 1,
        });
    }

    acc
}

fn parse_fields(fields: &[&str]) -> Option<(ConversionFormat, RgbColor)> {
    let [red, green, blue, format, ..] = fields else {
        return None;
    };

    let format = ConversionFormat::from_str(format.trim()).ok()?;
    let color = RgbColor::new(
        format.parse(red).ok()?,
        format.parse(green).ok()?,
        format.parse(blue).ok()?,
    );

    Some((format, color))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let parsed = parse_color_lines("255;0;0;decm\n\n# comment\n0;0;0;decm\n");

        assert_eq!(
            parsed.records,
            vec![
                ColorRecord {
                    color: RgbColor::new(255, 0, 0),
                    format: ConversionFormat::Decimal,
                    line_number: 1,
                    ordinal: 1,
                },
                ColorRecord {
                    color: RgbColor::new(0, 0, 0),
                    format: ConversionFormat::Decimal,
                    line_number: 4,
                    ordinal: 2,
                },
            ]
        );
        assert!(parsed.skipped_lines.is_empty());
    }

    #[test]
    fn short_lines_are_reported_with_their_line_number() {
        let parsed = parse_color_lines("255;0;0\n  1;2;3;decm  \n");

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].line_number, 2);
        assert_eq!(
            parsed.skipped_lines,
            vec![SkippedLine {
                line_number: 1,
                line: "255;0;0".to_string(),
            }]
        );
        assert_eq!(
            parsed.skipped_lines[0].to_string(),
            "Skipping invalid line 1: 255;0;0"
        );
    }

    #[test]
    fn bad_values_and_unknown_formats_are_dropped_silently() {
        let text = "256;0;0;decm\nzz;0;0;hexa\n1;2;3;rgb\n1;2;3;\nff;80;00;hexa\n";
        let parsed = parse_color_lines(text);

        assert!(parsed.skipped_lines.is_empty());
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].hex(), "#ff8000");
        assert_eq!(parsed.records[0].line_number, 5);
        assert_eq!(parsed.records[0].ordinal, 1);
    }

    #[test]
    fn format_field_is_trimmed_and_case_insensitive_and_extra_fields_ignored() {
        let parsed = parse_color_lines("1;0.5;0; PRCT ;extra;fields\n");
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].color, RgbColor::new(255, 127, 0));
        assert_eq!(parsed.records[0].format, ConversionFormat::Percentage);
    }

    #[test]
    fn channel_values_may_have_spaces() {
        let parsed = parse_color_lines("255 ; 0 ; 0 ; decm\n");
        assert_eq!(parsed.records[0].color, RgbColor::new(255, 0, 0));
    }

    #[test]
    fn parsing_is_idempotent() {
        let text = "# palette\n255;0;0;decm\nbad\nff;ff;ff;hexa\n";
        assert_eq!(parse_color_lines(text), parse_color_lines(text));
    }

    #[test]
    fn records_carry_the_background_code() {
        let parsed = parse_color_lines("ff;00;00;hexa\n");
        assert_eq!(parsed.records[0].ansi_code().as_str(), "\x1b[48;2;255;0;0m");
    }

    #[test]
    fn file_round_trip_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.ssv");
        fs::write(&path, "0;0;0;decm\n").unwrap();
        assert_eq!(try_parse_color_file(&path).unwrap().records.len(), 1);

        let missing = dir.path().join("missing.ssv");
        let result = try_parse_color_file(&missing);
        assert!(matches!(result, Err(ColorFileError::Read { .. })));
    }
}
