// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{self, IsTerminal, Write},
          path::Path,
          process::ExitCode};

use clap::CommandFactory;
use miette::IntoDiagnostic;

use crate::termcolours::{CLIArg, ControlSignal, CrosstermLineEraser, IoDevices,
                         LineEraser, NoopLineEraser, PaletteFolder, Session,
                         StdinPrompt, SystemClipboard, render_color_file,
                         try_parse_color_file, ui_str};

/// Exit code for an unreadable batch file, or output that can't be written.
pub const EXIT_CODE_UNRECOVERABLE_ERROR: u8 = 2;

/// Pick the mode from the command line, run it, and turn the outcome into an exit code.
pub fn run_app(cli_arg: CLIArg) -> ExitCode {
    let mut stdout = io::stdout().lock();

    let result = if cli_arg.help {
        print_help(&mut stdout)
    } else if cli_arg.version {
        writeln!(stdout, "{}", ui_str::version_msg())
            .into_diagnostic()
            .map(|()| ControlSignal::Quit)
    } else if let Some(file_path) = cli_arg.file.as_deref() {
        run_batch(&mut stdout, file_path)
    } else {
        run_interactive(cli_arg, &mut stdout)
    };

    match result {
        Ok(signal) => ExitCode::from(signal.exit_code()),
        Err(report) => {
            tracing::error!(message = "Unrecoverable error", error = ?report);
            eprintln!("{}", ui_str::unrecoverable_error_message(report));
            ExitCode::from(EXIT_CODE_UNRECOVERABLE_ERROR)
        }
    }
}

/// The clap generated help, followed by the interactive usage.
///
/// # Errors
///
/// If writing to `output` fails.
pub fn print_help(output: &mut dyn Write) -> miette::Result<ControlSignal> {
    let help = CLIArg::command().render_help();
    writeln!(output, "{help}").into_diagnostic()?;
    for line in ui_str::usage_lines() {
        writeln!(output, "{line}").into_diagnostic()?;
    }
    Ok(ControlSignal::Quit)
}

/// Render every color in `file_path`, then quit.
///
/// # Errors
///
/// If the file can't be read, or writing to `output` fails.
pub fn run_batch(output: &mut dyn Write, file_path: &Path) -> miette::Result<ControlSignal> {
    writeln!(output, "{}", ui_str::batch_banner_msg(file_path)).into_diagnostic()?;

    let parsed = try_parse_color_file(file_path)?;
    render_color_file(output, &parsed).into_diagnostic()?;

    writeln!(output, "{}", ui_str::quitting_msg()).into_diagnostic()?;
    Ok(ControlSignal::Quit)
}

/// Run the session on `stdin`, `stdout`, and the system clipboard. Lines are only
/// erased when `stdout` is a terminal.
///
/// # Errors
///
/// If the banner can't be written, or the `Ctrl+C` handler can't be installed.
pub fn run_interactive(
    cli_arg: CLIArg,
    stdout: &mut io::StdoutLock<'static>,
) -> miette::Result<ControlSignal> {
    install_ctrl_c_handler()?;

    writeln!(stdout, "{}", ui_str::interactive_banner_msg()).into_diagnostic()?;

    let is_terminal = stdout.is_terminal();
    let mut crossterm_line_eraser = CrosstermLineEraser;
    let mut noop_line_eraser = NoopLineEraser;
    let eraser: &mut dyn LineEraser = if is_terminal {
        &mut crossterm_line_eraser
    } else {
        &mut noop_line_eraser
    };

    let palettes =
        PaletteFolder::new(PaletteFolder::resolve_folder(cli_arg.global_options.palette_dir));
    let mut prompt = StdinPrompt::stdin();
    let mut clipboard = SystemClipboard;

    tracing::debug!(
        message = "Start interactive session",
        is_terminal,
        palettes = %palettes.folder.display()
    );

    let signal = Session::new(IoDevices {
        output: stdout,
        prompt: &mut prompt,
        clipboard: &mut clipboard,
        eraser,
        palettes: &palettes,
    })
    .run();

    Ok(signal)
}

/// What the `Ctrl+C` handler prints, the same notice as any other interrupted input.
#[must_use]
pub fn ctrl_c_notice() -> Vec<u8> { format!("\n{}\n", ui_str::aborting_msg()).into_bytes() }

/// `Ctrl+C` can't be read as input while a blocking read is in progress, so the handler
/// prints the notice and exits right away, with the same code as any other interrupted
/// input.
#[cfg(unix)]
fn install_ctrl_c_handler() -> miette::Result<()> {
    use std::{fs::File,
              mem::ManuallyDrop,
              os::fd::{FromRawFd, RawFd}};

    use signal_hook::{consts::SIGINT, low_level};

    const STDOUT_FD: RawFd = 1;

    let notice = ctrl_c_notice();
    let exit_code = i32::from(ControlSignal::Shutdown.exit_code());

    // Only `write(2)` and `_exit(2)` run in the handler, nothing allocates.
    let action = move || {
        // SAFETY: fd 1 stays open for the whole process, and `ManuallyDrop` keeps it open.
        let mut stdout = ManuallyDrop::new(unsafe { File::from_raw_fd(STDOUT_FD) });
        let _unused = stdout.write_all(&notice);
        low_level::exit(exit_code);
    };

    // SAFETY: `action` is async-signal-safe, see above.
    unsafe { low_level::register(SIGINT, action) }.into_diagnostic()?;
    Ok(())
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn install_ctrl_c_handler() -> miette::Result<()> { Ok(()) }

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::OutputBuffer;

    #[test]
    fn batch_renders_every_color_then_quits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.ssv");
        fs::write(&path, "255;0;0;decm\n\n#comment\n0;0;0;decm\n").unwrap();

        let mut output = OutputBuffer::new();
        let signal = run_batch(&mut output, &path).unwrap();
        assert_eq!(signal, ControlSignal::Quit);

        let output = output.get_copy_of_buffer_as_string_strip_ansi();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with(&format!("-- batch mode: '{}'", path.display())));
        assert!(lines[1].contains("#ff0000") && lines[1].ends_with('↓'));
        assert!(lines[2].contains("#000000") && lines[2].ends_with("↑ (2)"));
        assert_eq!(lines[3], "quitting...");
    }

    #[test]
    fn batch_with_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut output = OutputBuffer::new();
        let result = run_batch(&mut output, &dir.path().join("missing.ssv"));
        assert!(result.is_err());
    }

    #[test]
    fn help_has_options_and_usage() {
        let mut output = OutputBuffer::new();
        assert_eq!(print_help(&mut output).unwrap(), ControlSignal::Quit);

        let output = output.get_copy_of_buffer_as_string_strip_ansi();
        assert!(output.contains("--file"));
        assert!(output.contains("--palette-dir"));
        assert!(output.contains("Commands:"));
    }

    #[test]
    fn ctrl_c_notice_is_the_aborting_message_on_its_own_line() {
        let notice = String::from_utf8(ctrl_c_notice()).unwrap();
        let notice = strip_ansi_escapes::strip_str(notice);
        assert_eq!(notice, "\naborting...\n");
    }
}
