// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io, str::FromStr};

use strum_macros::EnumString;
use termcolours_ansi::{AnsiTarget, ConversionFormat};

use crate::termcolours::{ControlSignal, Session, render_color_file,
                         try_parse_color_file, ui_str};

/// Tokens typed at the color prompt, matched case-insensitively. Copy commands are kept
/// in [`CopyCommand`], since they act on the current color rather than the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Command {
    #[strum(disabled)]
    SwitchFormat(ConversionFormat),
    #[strum(serialize = "help")]
    Help,
    #[strum(serialize = "palette")]
    Palette,
    #[strum(serialize = "quit", serialize = "q")]
    Quit,
}

impl Command {
    /// [None] if `input` isn't a command token.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match ConversionFormat::from_str(input) {
            Ok(format) => Some(Self::SwitchFormat(format)),
            Err(_) => Self::from_str(input).ok(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum CopyCommand {
    #[strum(serialize = "fg")]
    Foreground,
    #[strum(serialize = "bg")]
    Background,
}

impl CopyCommand {
    #[must_use]
    pub fn target(self) -> AnsiTarget {
        match self {
            Self::Foreground => AnsiTarget::Foreground,
            Self::Background => AnsiTarget::Background,
        }
    }
}

impl Session<'_> {
    /// # Errors
    ///
    /// If writing to the output fails.
    pub fn dispatch(&mut self, command: Command) -> io::Result<ControlSignal> {
        tracing::debug!(message = "Dispatch command", command = ?command);
        match command {
            Command::SwitchFormat(format) => self.switch_format(format),
            Command::Help => self.show_help(),
            Command::Palette => self.select_palette(),
            Command::Quit => self.quit(),
        }
    }

    /// # Errors
    ///
    /// If writing to the output fails.
    pub fn switch_format(&mut self, format: ConversionFormat) -> io::Result<ControlSignal> {
        self.state.format = format;
        self.erase_lines();
        Ok(ControlSignal::Continue)
    }

    /// # Errors
    ///
    /// If writing to the output fails.
    pub fn show_help(&mut self) -> io::Result<ControlSignal> {
        for line in ui_str::usage_lines() {
            writeln!(self.devices.output, "{line}")?;
        }
        self.state.is_after_help = true;
        Ok(ControlSignal::Continue)
    }

    /// `fg` rewrites the stored code into its foreground form, `bg` copies the background
    /// form. A clipboard that can't be reached is a warning, and the code is printed
    /// instead.
    ///
    /// # Errors
    ///
    /// If writing to the output fails.
    pub fn copy_color(&mut self, copy_command: CopyCommand) -> io::Result<ControlSignal> {
        let Some(resolved) = self.state.maybe_resolved.as_mut() else {
            writeln!(self.devices.output, "{}", ui_str::no_color_to_copy_msg())?;
            return Ok(ControlSignal::Continue);
        };

        let target = copy_command.target();
        let code = match copy_command {
            CopyCommand::Foreground => {
                resolved.ansi_code.switch_to_foreground();
                resolved.ansi_code.clone()
            }
            CopyCommand::Background => resolved.ansi_code.to_background(),
        };

        writeln!(
            self.devices.output,
            "{}",
            ui_str::copying_msg(resolved.color, &code, target)
        )?;

        if let Err(error) = self
            .devices
            .clipboard
            .try_to_put_content_into_clipboard(code.to_string())
        {
            tracing::warn!(message = "Could not copy to clipboard", error = %error);
            writeln!(
                self.devices.output,
                "{}",
                ui_str::clipboard_failed_msg(error, &code)
            )?;
        }

        Ok(ControlSignal::Continue)
    }

    /// List the palettes, ask for one, then render it in place of the listing.
    ///
    /// # Errors
    ///
    /// If writing to the output fails.
    pub fn select_palette(&mut self) -> io::Result<ControlSignal> {
        let palettes = match self.devices.palettes.list_palettes() {
            Ok(it) => it,
            Err(report) => {
                tracing::warn!(message = "Could not list palettes", error = ?report);
                writeln!(
                    self.devices.output,
                    "{}",
                    ui_str::unreadable_palettes_msg(&report)
                )?;
                return Ok(ControlSignal::Continue);
            }
        };

        if palettes.is_empty() {
            let location = self.devices.palettes.location();
            writeln!(self.devices.output, "{}", ui_str::no_palettes_msg(&location))?;
            return Ok(ControlSignal::Continue);
        }

        for (index, entry) in palettes.iter().enumerate() {
            writeln!(
                self.devices.output,
                "{}",
                ui_str::palette_entry_msg(index + 1, &entry.name, &entry.description)
            )?;
        }

        let names: Vec<String> = palettes.iter().map(|it| it.name.clone()).collect();
        let label = ui_str::palette_choice_label();
        let maybe_name = match self.devices.prompt.read_choice(
            &mut *self.devices.output,
            &label,
            &names,
        ) {
            Ok(it) => it,
            Err(error) => return self.abort(&error),
        };

        let Some(name) = maybe_name else {
            return Ok(ControlSignal::Continue);
        };

        // The listing, and the prompt lines above and below it.
        self.state.lines_to_erase = u16::try_from(palettes.len() + 2).unwrap_or(u16::MAX);
        self.erase_lines();

        let maybe_path = match self.devices.palettes.resolve(&name) {
            Ok(it) => it,
            Err(report) => {
                writeln!(
                    self.devices.output,
                    "{}",
                    ui_str::unreadable_palettes_msg(&report)
                )?;
                return Ok(ControlSignal::Continue);
            }
        };

        let Some(path) = maybe_path else {
            return Ok(ControlSignal::Continue);
        };

        match try_parse_color_file(&path) {
            Ok(parsed) => render_color_file(&mut *self.devices.output, &parsed)?,
            Err(error) => {
                let report = miette::Report::new(error);
                tracing::warn!(message = "Could not read palette", error = ?report);
                writeln!(
                    self.devices.output,
                    "{}",
                    ui_str::unreadable_color_file_msg(&report)
                )?;
            }
        }

        Ok(ControlSignal::Continue)
    }
}
