// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Display, path::Path};

use strum::IntoEnumIterator;
use termcolours_ansi::{AnsiCode, AnsiTarget, ConversionFormat, RgbColor};

use crate::{dim, emphasis, error, normal, prompt_seg_normal, warning};

pub const APP_NAME: &str = "termcolours";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[must_use]
pub fn version_msg() -> String { format!("{APP_NAME} v. {APP_VERSION}") }

#[must_use]
pub fn interactive_banner_msg() -> String {
    emphasis(format!("{} -- interactive mode", version_msg()))
}

pub fn batch_banner_msg(file_path: &Path) -> String {
    emphasis(format!(
        "{} -- batch mode: '{}'",
        version_msg(),
        file_path.display()
    ))
}

#[must_use]
pub fn color_prompt_label(format: ConversionFormat) -> String {
    prompt_seg_normal(format!(
        "Enter a colour code (R;G;B, {}), command or help",
        format.name()
    ))
}

#[must_use]
pub fn quitting_msg() -> String { dim("quitting...") }

#[must_use]
pub fn aborting_msg() -> String { dim("aborting...") }

pub fn unrecognized_input_msg(input: &str) -> String {
    error(format!(
        "ERROR: unrecognized value/command '{input}' - use 'help' for help"
    ))
}

/// `arg_error` renders as `Value 256 is out of range <0-255>`.
pub fn out_of_range_msg(arg_error: impl Display) -> String {
    error(format!("ERROR: {arg_error}"))
}

#[must_use]
pub fn no_color_to_copy_msg() -> String { warning("no color to copy") }

pub fn copying_msg(color: RgbColor, code: &AnsiCode, target: AnsiTarget) -> String {
    normal(format!(
        "copying {color} = {hex}: {escaped} ({label})",
        hex = color.to_hex(),
        escaped = code.escaped(),
        label = target.label()
    ))
}

pub fn clipboard_failed_msg(arg_error: impl Display, code: &AnsiCode) -> String {
    warning(format!(
        "could not copy to the clipboard ({arg_error}), here is the code: {}",
        code.escaped()
    ))
}

pub fn skipping_invalid_line_msg(line_number: usize, line: &str) -> String {
    format!("Skipping invalid line {line_number}: {line}")
}

pub fn palette_entry_msg(ordinal: usize, name: &str, description: &str) -> String {
    format!(
        "{a} {b} {c}",
        a = dim(format!("{ordinal}.")),
        b = emphasis(format!("'{name}'")),
        c = normal(description)
    )
}

#[must_use]
pub fn palette_choice_label() -> String {
    prompt_seg_normal("Enter a palette name (empty to cancel)")
}

pub fn invalid_choice_msg(answer: &str) -> String {
    error(format!("'{answer}' is not one of the listed choices"))
}

pub fn no_palettes_msg(folder: &Path) -> String {
    warning(format!("no palettes found in '{}'", folder.display()))
}

pub fn unreadable_palettes_msg(report: &miette::Report) -> String {
    error(format!("Could not list palettes: {report}"))
}

pub fn unreadable_color_file_msg(report: &miette::Report) -> String {
    error(format!("{report:?}"))
}

pub fn unrecoverable_error_message(report: miette::Report) -> String {
    error(format!(
        "{a}:\n{b:?}",
        a = "Could not run termcolours due to the following problem",
        b = report
    ))
}

/// Interactive help. The session erases these lines (plus the prompt lines around them)
/// on the next cycle, so keep the count in sync with what is printed.
#[must_use]
pub fn usage_lines() -> Vec<String> {
    let mut acc = vec![
        format!("USAGE: {APP_NAME} [-f FILE] [-l] [-p DIR] [-v] [-h]"),
        "Input color as 3 numbers, separated by semicolon, when prompted,".to_string(),
        "e.g. '255;0;0' (decm), 'ff;00;00' (hexa) or '1;0;0' (prct) for red.".to_string(),
        "Commands:".to_string(),
        "    - fg/bg: copies the current color to the clipboard".to_string(),
        "      (ANSI foreground/background code, respectively)".to_string(),
    ];
    for format in ConversionFormat::iter() {
        acc.push(format!("    - {}: {}", format.token(), format.description()));
    }
    acc.push("    - help: prints this message".to_string());
    acc.push("    - palette: renders a named palette".to_string());
    acc.push("    - quit/q: quits the application (so does empty input)".to_string());
    acc
}

/// The help text, the prompt line that asked for it, and the prompt line after it.
#[must_use]
pub fn help_lines_to_erase() -> u16 {
    u16::try_from(usage_lines().len() + 2).unwrap_or(u16::MAX)
}
