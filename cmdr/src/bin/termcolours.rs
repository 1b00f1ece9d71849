// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use std::process::ExitCode;

use clap::Parser;
use termcolours::{termcolours::{CLIArg, run_app},
                  try_initialize_logging_global};
use tracing_core::LevelFilter;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> ExitCode {
    // No args means interactive mode.
    let cli_arg = CLIArg::parse();

    // Logging is optional, and a log file that can't be created doesn't stop the app.
    let enable_logging = cli_arg.global_options.enable_logging;
    if enable_logging {
        if let Err(report) = try_initialize_logging_global(LevelFilter::DEBUG) {
            eprintln!("Could not start logging: {report:?}");
        }
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let exit_code = run_app(cli_arg);

    if enable_logging {
        tracing::debug!(message = "Stop logging...", exit_code = ?exit_code);
    }

    exit_code
}
