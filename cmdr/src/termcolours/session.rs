// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The interactive loop. Every [`Session::step`] shows the preview of a freshly resolved
//! color (if any), prompts once, and acts on the answer:
//!
//! ```text
//! AWAITING_INPUT ──► color spec ──► PREVIEW ─┐
//!        ▲       ├─► command ───► COMMAND ───┤
//!        │       ├─► fg / bg ───► COPY ──────┤
//!        │       └─► bad input ─► ERROR ─────┤
//!        └───────────── Continue ◄───────────┘
//! ```
//!
//! Quit and Shutdown end the loop from any state. They are returned as
//! [`ControlSignal`] values, and the caller decides how the process exits.

use std::{fmt::{Debug, Formatter},
          io::{self, Write},
          str::FromStr};

use termcolours_ansi::{AnsiCode, AnsiTarget, ConversionFormat, RgbColor};

use crate::termcolours::{ClipboardService, Command, CopyCommand, LineEraser,
                         LinePrompt, PaletteRegistry, PromptError, ui_str,
                         write_preview_line};

pub const DEFAULT_LINES_TO_ERASE: u16 = 1;

/// What the driver of the loop should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSignal {
    Continue,
    /// Clean exit.
    Quit,
    /// The input stream was closed or interrupted.
    Shutdown,
}

impl ControlSignal {
    /// Process exit code for a signal that ended the loop.
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Continue | Self::Quit => 0,
            Self::Shutdown => 1,
        }
    }
}

/// The color and its code are always set together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColor {
    pub color: RgbColor,
    pub ansi_code: AnsiCode,
}

impl ResolvedColor {
    #[must_use]
    pub fn new(color: RgbColor) -> Self {
        Self {
            color,
            ansi_code: color.to_ansi(AnsiTarget::Background),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub format: ConversionFormat,
    pub maybe_resolved: Option<ResolvedColor>,
    /// The preview of `maybe_resolved` hasn't been shown yet.
    pub is_fresh: bool,
    /// How many lines the next erasure removes.
    pub lines_to_erase: u16,
    /// The next erasure removes the help text instead.
    pub is_after_help: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            format: ConversionFormat::default(),
            maybe_resolved: None,
            is_fresh: false,
            lines_to_erase: DEFAULT_LINES_TO_ERASE,
            is_after_help: false,
        }
    }
}

/// Everything the session talks to. Borrowed, so that tests keep ownership of their
/// doubles and can inspect them when the session is done.
pub struct IoDevices<'a> {
    pub output: &'a mut dyn Write,
    pub prompt: &'a mut dyn LinePrompt,
    pub clipboard: &'a mut dyn ClipboardService,
    pub eraser: &'a mut dyn LineEraser,
    pub palettes: &'a dyn PaletteRegistry,
}

impl Debug for IoDevices<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IoDevices").finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct Session<'a> {
    pub state: SessionState,
    pub devices: IoDevices<'a>,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(devices: IoDevices<'a>) -> Self {
        Self {
            state: SessionState::default(),
            devices,
        }
    }

    /// Step until something other than [`ControlSignal::Continue`] comes back.
    pub fn run(&mut self) -> ControlSignal {
        loop {
            match self.step() {
                ControlSignal::Continue => {}
                signal => {
                    tracing::debug!(message = "Session ended", signal = ?signal);
                    return signal;
                }
            }
        }
    }

    /// One iteration of the loop. Output that can't be written ends the session like a
    /// closed input stream does.
    pub fn step(&mut self) -> ControlSignal {
        match self.try_step() {
            Ok(signal) => signal,
            Err(error) => {
                tracing::error!(message = "Could not write output", error = ?error);
                ControlSignal::Shutdown
            }
        }
    }

    fn try_step(&mut self) -> io::Result<ControlSignal> {
        if self.state.is_fresh {
            if let Some(resolved) = &self.state.maybe_resolved {
                write_preview_line(
                    &mut *self.devices.output,
                    resolved.color,
                    &resolved.ansi_code,
                )?;
            }
            self.state.is_fresh = false;
        }

        let label = ui_str::color_prompt_label(self.state.format);
        let input = match self.devices.prompt.read_line(&mut *self.devices.output, &label)
        {
            Ok(it) => it,
            Err(error) => return self.abort(&error),
        };

        // Only a truly empty answer quits. Blank or padded commands are not recognized.
        if input.is_empty() {
            return self.quit();
        }

        if let Some(command) = Command::parse(&input) {
            return self.dispatch(command);
        }

        if let Ok(copy_command) = CopyCommand::from_str(&input) {
            return self.copy_color(copy_command);
        }

        self.apply_color_spec(&input)
    }

    /// Parse `input` as `R;G;B` in the current format.
    ///
    /// # Errors
    ///
    /// If writing to the output fails.
    pub fn apply_color_spec(&mut self, input: &str) -> io::Result<ControlSignal> {
        // The preview line takes the place of the prompt.
        self.erase_lines();

        match RgbColor::try_parse_channels(input, self.state.format) {
            Ok(color) => {
                let resolved = ResolvedColor::new(color);
                tracing::debug!(
                    message = "Resolved color",
                    input,
                    hex = %color.to_hex(),
                    ansi_code = %resolved.ansi_code.escaped()
                );
                self.state.maybe_resolved = Some(resolved);
                self.state.is_fresh = true;
            }
            Err(error) if error.is_out_of_range() => {
                writeln!(self.devices.output, "{}", ui_str::out_of_range_msg(&error))?;
                self.state.maybe_resolved = None;
                self.state.is_fresh = false;
            }
            Err(error) => {
                tracing::debug!(message = "Unrecognized input", input, error = %error);
                writeln!(
                    self.devices.output,
                    "{}",
                    ui_str::unrecognized_input_msg(input)
                )?;
            }
        }

        Ok(ControlSignal::Continue)
    }

    /// Erase the pending number of lines (or the help text), then go back to erasing a
    /// single line.
    pub fn erase_lines(&mut self) {
        let count = if self.state.is_after_help {
            ui_str::help_lines_to_erase()
        } else {
            self.state.lines_to_erase
        };

        self.devices
            .eraser
            .erase_lines(&mut *self.devices.output, count);

        self.state.is_after_help = false;
        self.state.lines_to_erase = DEFAULT_LINES_TO_ERASE;
    }

    /// # Errors
    ///
    /// If writing to the output fails.
    pub fn quit(&mut self) -> io::Result<ControlSignal> {
        self.erase_lines();
        writeln!(self.devices.output, "{}", ui_str::quitting_msg())?;
        Ok(ControlSignal::Quit)
    }

    /// # Errors
    ///
    /// If writing to the output fails.
    pub fn abort(&mut self, error: &PromptError) -> io::Result<ControlSignal> {
        tracing::debug!(message = "Input stream ended", error = ?error);
        writeln!(self.devices.output)?;
        writeln!(self.devices.output, "{}", ui_str::aborting_msg())?;
        Ok(ControlSignal::Shutdown)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{OutputBuffer,
                termcolours::{clipboard_test_fixtures::TestClipboard,
                              line_eraser_test_fixtures::RecordingLineEraser,
                              palette_test_fixtures::TestPalettes,
                              prompt_test_fixtures::ScriptedPrompt,
                              NoopLineEraser}};

    /// Run a whole session on scripted answers. Returns the final signal and state, and
    /// the output with ANSI codes stripped.
    fn run_script(answers: &[&str]) -> (ControlSignal, SessionState, String) {
        let mut output = OutputBuffer::new();
        let mut prompt = ScriptedPrompt::new(answers.iter().copied());
        let mut clipboard = TestClipboard::default();
        let mut eraser = NoopLineEraser;
        let palettes = TestPalettes::default();

        let mut session = Session::new(IoDevices {
            output: &mut output,
            prompt: &mut prompt,
            clipboard: &mut clipboard,
            eraser: &mut eraser,
            palettes: &palettes,
        });
        let signal = session.run();
        let state = session.state.clone();
        drop(session);

        (signal, state, output.get_copy_of_buffer_as_string_strip_ansi())
    }

    #[test]
    fn decimal_color_is_resolved_and_previewed() {
        let (signal, state, output) = run_script(&["255;0;0", "q"]);

        assert_eq!(signal, ControlSignal::Quit);
        let resolved = state.maybe_resolved.unwrap();
        assert_eq!(resolved.color.to_hex(), "#ff0000");
        assert_eq!(resolved.ansi_code.as_str(), "\x1b[48;2;255;0;0m");
        assert!(output.contains("← #ff0000 = (255, 0, 0)"));
        assert!(output.ends_with("quitting...\n"));
    }

    #[test]
    fn hexadecimal_after_switching_format() {
        let (_, state, output) = run_script(&["hexa", "ff;00;00", "quit"]);

        assert_eq!(state.format, ConversionFormat::Hexadecimal);
        assert_eq!(
            state.maybe_resolved.unwrap().ansi_code.as_str(),
            "\x1b[48;2;255;0;0m"
        );
        assert!(output.contains("Enter a colour code (R;G;B, hexadecimal), command or help"));
    }

    #[test]
    fn out_of_range_clears_the_color_and_continues() {
        let (signal, state, output) = run_script(&["1;2;3", "256;0;0", ""]);

        assert_eq!(signal, ControlSignal::Quit);
        assert_eq!(state.maybe_resolved, None);
        assert!(!state.is_fresh);
        assert!(output.contains("ERROR: Value 256 is out of range <0-255>"));
    }

    #[test]
    fn format_error_keeps_the_color() {
        let (_, state, output) = run_script(&["1;2;3", "1;2", "blue", "q"]);

        assert_eq!(state.maybe_resolved.unwrap().color, RgbColor::new(1, 2, 3));
        assert!(output.contains("ERROR: unrecognized value/command '1;2' - use 'help' for help"));
        assert!(output.contains("ERROR: unrecognized value/command 'blue' - use 'help' for help"));
    }

    #[test]
    fn empty_input_quits() {
        let (signal, _, output) = run_script(&[""]);
        assert_eq!(signal, ControlSignal::Quit);
        assert_eq!(signal.exit_code(), 0);
        assert!(output.ends_with("quitting...\n"));
    }

    #[test]
    fn end_of_input_shuts_down() {
        let (signal, _, output) = run_script(&["255;0;0"]);
        assert_eq!(signal, ControlSignal::Shutdown);
        assert_eq!(signal.exit_code(), 1);
        assert!(output.ends_with("aborting...\n"));
    }

    #[test]
    fn interrupt_shuts_down() {
        let mut output = OutputBuffer::new();
        let mut prompt = ScriptedPrompt::new(["0;0;0"]).then_interrupt();
        let mut clipboard = TestClipboard::default();
        let mut eraser = NoopLineEraser;
        let palettes = TestPalettes::default();

        let mut session = Session::new(IoDevices {
            output: &mut output,
            prompt: &mut prompt,
            clipboard: &mut clipboard,
            eraser: &mut eraser,
            palettes: &palettes,
        });
        assert_eq!(session.step(), ControlSignal::Continue);
        assert_eq!(session.step(), ControlSignal::Shutdown);
    }

    #[test]
    fn preview_is_shown_once_per_resolved_color() {
        let (_, _, output) = run_script(&["0;0;0", "hexa", "q"]);
        assert_eq!(output.matches("← #000000").count(), 1);
    }

    #[test]
    fn commands_are_case_insensitive() {
        let (signal, state, _) = run_script(&["PRCT", "1;0.5;0", "Q"]);
        assert_eq!(signal, ControlSignal::Quit);
        assert_eq!(state.format, ConversionFormat::Percentage);
        assert_eq!(state.maybe_resolved.unwrap().color, RgbColor::new(255, 127, 0));
    }

    #[test]
    fn blank_or_padded_input_is_not_a_command() {
        let (signal, state, output) = run_script(&["   ", " q", "1;2;3", ""]);

        assert_eq!(signal, ControlSignal::Quit);
        assert!(output.contains("ERROR: unrecognized value/command '   ' - use 'help' for help"));
        assert!(output.contains("ERROR: unrecognized value/command ' q' - use 'help' for help"));
        assert_eq!(state.maybe_resolved.unwrap().color, RgbColor::new(1, 2, 3));
    }

    #[test]
    fn channels_may_be_padded() {
        let (_, state, _) = run_script(&[" 1; 2 ;3 ", "q"]);
        assert_eq!(state.maybe_resolved.unwrap().color, RgbColor::new(1, 2, 3));
    }

    #[test]
    fn erase_counts_follow_help_format_switch_and_palette() {
        let mut output = OutputBuffer::new();
        let mut prompt = ScriptedPrompt::new(["help", "1;2;3", "hexa", "palette", "a", "q"]);
        let mut clipboard = TestClipboard::default();
        let mut eraser = RecordingLineEraser::default();
        let palettes = TestPalettes::default()
            .with_entry("a", "First", "/nowhere/a.ssv")
            .with_entry("b", "Second", "/nowhere/b.ssv");

        let signal = Session::new(IoDevices {
            output: &mut output,
            prompt: &mut prompt,
            clipboard: &mut clipboard,
            eraser: &mut eraser,
            palettes: &palettes,
        })
        .run();

        assert_eq!(signal, ControlSignal::Quit);
        let help_lines = u16::try_from(ui_str::usage_lines().len() + 2).unwrap();
        assert_eq!(help_lines, ui_str::help_lines_to_erase());
        // Help text, format switch, palette listing (2 entries + 2 prompt lines), quit.
        assert_eq!(eraser.counts, vec![help_lines, 1, 4, 1]);
    }

    #[test]
    fn erase_count_goes_back_to_one_after_help() {
        let mut output = OutputBuffer::new();
        let mut prompt = ScriptedPrompt::new(["help", "decm", "prct", ""]);
        let mut clipboard = TestClipboard::default();
        let mut eraser = RecordingLineEraser::default();
        let palettes = TestPalettes::default();

        let mut session = Session::new(IoDevices {
            output: &mut output,
            prompt: &mut prompt,
            clipboard: &mut clipboard,
            eraser: &mut eraser,
            palettes: &palettes,
        });
        assert_eq!(session.run(), ControlSignal::Quit);
        assert!(!session.state.is_after_help);
        assert_eq!(session.state.lines_to_erase, DEFAULT_LINES_TO_ERASE);
        drop(session);

        assert_eq!(eraser.counts, vec![ui_str::help_lines_to_erase(), 1, 1]);
    }
}
