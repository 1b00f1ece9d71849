// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser};

/// Environment variable that points at the palettes folder, used when
/// `--palette-dir` isn't passed.
pub const PALETTE_DIR_ENV_VAR: &str = "TERMCOLOURS_PALETTE_DIR";

/// The built in `-h` and `-V` flags are replaced, so that `-h` can append the
/// interactive usage text, and `-v` prints the same version line as the banner.
///
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[derive(Debug, Parser)]
#[command(bin_name = "termcolours")]
#[command(
    about = "🎨 Convert RGB colors to hex strings and 24-bit ANSI codes, with a live preview"
)]
#[command(version)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(next_line_help = true)]
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nRun without options for interactive mode, or pass a color file for batch mode.\nUSAGE 📓:\n  termcolours [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(
        long,
        short = 'f',
        value_name = "FILE",
        help = "Render every color in FILE (lines of `R;G;B;FORMAT`) and exit"
    )]
    pub file: Option<PathBuf>,

    #[arg(long, short = 'v', action = ArgAction::SetTrue, help = "Print version")]
    pub version: bool,

    #[arg(long, short = 'h', action = ArgAction::SetTrue, help = "Print help")]
    pub help: bool,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        short = 'p',
        value_name = "DIR",
        env = PALETTE_DIR_ENV_VAR,
        help = "Folder with `*.ssv` palette files for the `palette` command"
    )]
    pub palette_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    #[test]
    fn command_is_well_formed() { CLIArg::command().debug_assert(); }

    #[test]
    #[serial]
    fn no_args_is_interactive_mode() {
        let cli_arg = CLIArg::try_parse_from(["termcolours"]).unwrap();
        assert_eq!(cli_arg.file, None);
        assert!(!cli_arg.version);
        assert!(!cli_arg.help);
        assert!(!cli_arg.global_options.enable_logging);
    }

    #[test]
    #[serial]
    fn short_flags() {
        let cli_arg =
            CLIArg::try_parse_from(["termcolours", "-f", "colors.ssv", "-l", "-p", "/tmp/p"])
                .unwrap();
        assert_eq!(cli_arg.file, Some(PathBuf::from("colors.ssv")));
        assert!(cli_arg.global_options.enable_logging);
        assert_eq!(
            cli_arg.global_options.palette_dir,
            Some(PathBuf::from("/tmp/p"))
        );
    }

    #[test]
    #[serial]
    fn custom_help_and_version_flags() {
        let cli_arg = CLIArg::try_parse_from(["termcolours", "-h"]).unwrap();
        assert!(cli_arg.help);
        let cli_arg = CLIArg::try_parse_from(["termcolours", "--version"]).unwrap();
        assert!(cli_arg.version);
    }

    #[test]
    #[serial]
    fn palette_dir_from_env() {
        // SAFETY: tests that touch the environment are serialized.
        unsafe { std::env::set_var(PALETTE_DIR_ENV_VAR, "/from/env") };
        let cli_arg = CLIArg::try_parse_from(["termcolours"]).unwrap();
        unsafe { std::env::remove_var(PALETTE_DIR_ENV_VAR) };

        assert_eq!(
            cli_arg.global_options.palette_dir,
            Some(PathBuf::from("/from/env"))
        );
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(CLIArg::try_parse_from(["termcolours", "--bogus"]).is_err());
    }
}
