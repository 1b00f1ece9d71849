// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          io::{Result, Write}};

use termcolours_ansi::{AnsiCode, RgbColor, SgrCode};

use crate::termcolours::{ColorRecord, ParsedColorFile};

/// Width of the painted block at the start of a preview line, in cells.
pub const SWATCH_WIDTH: usize = 20;
pub const RGB_COLUMN_WIDTH: usize = 15;
pub const ANSI_COLUMN_WIDTH: usize = 25;

/// Brackets a rendered list of colors: `↓` on the first line, `│` in between, and
/// `↑ (N)` on the last line. A list of one is all last line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryMarker {
    First,
    Interior,
    Last { total: usize },
}

impl BoundaryMarker {
    /// `index` is 0-based, and must be less than `total`.
    #[must_use]
    pub fn for_position(index: usize, total: usize) -> Self {
        if index + 1 == total {
            Self::Last { total }
        } else if index == 0 {
            Self::First
        } else {
            Self::Interior
        }
    }
}

impl Display for BoundaryMarker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "↓"),
            Self::Interior => write!(f, "│"),
            Self::Last { total } => write!(f, "↑ ({total})"),
        }
    }
}

/// One line: the swatch painted with `code`, then the hex string, the channels, and the
/// escaped code. Trailing whitespace is trimmed when there is no marker.
#[must_use]
pub fn format_preview_line(
    color: RgbColor,
    code: &AnsiCode,
    maybe_marker: Option<BoundaryMarker>,
) -> String {
    let swatch = " ".repeat(SWATCH_WIDTH);
    let marker = maybe_marker.map(|it| it.to_string()).unwrap_or_default();
    let line = format!(
        "{code}{swatch} {reset} ← {hex} = {rgb:<RGB_COLUMN_WIDTH$} = {escaped:<ANSI_COLUMN_WIDTH$} {marker}",
        reset = SgrCode::Reset,
        hex = color.to_hex(),
        rgb = color.to_string(),
        escaped = code.escaped(),
    );
    line.trim_end().to_string()
}

/// # Errors
///
/// If writing to `output` fails.
pub fn write_preview_line(
    output: &mut dyn Write,
    color: RgbColor,
    code: &AnsiCode,
) -> Result<()> {
    writeln!(output, "{}", format_preview_line(color, code, None))
}

/// Every record on its own line, bracketed by [`BoundaryMarker`]s.
///
/// # Errors
///
/// If writing to `output` fails.
pub fn render_color_records(output: &mut dyn Write, records: &[ColorRecord]) -> Result<()> {
    let total = records.len();
    for (index, record) in records.iter().enumerate() {
        let marker = BoundaryMarker::for_position(index, total);
        let line = format_preview_line(record.color, &record.ansi_code(), Some(marker));
        writeln!(output, "{line}")?;
    }
    Ok(())
}

/// The skipped line diagnostics first, then the records.
///
/// # Errors
///
/// If writing to `output` fails.
pub fn render_color_file(output: &mut dyn Write, parsed: &ParsedColorFile) -> Result<()> {
    for skipped_line in &parsed.skipped_lines {
        writeln!(output, "{skipped_line}")?;
    }
    render_color_records(output, &parsed.records)
}
