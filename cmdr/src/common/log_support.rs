// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging is **DISABLED** by **default**. Pass `-l` to the binary to write `tracing`
//! output to [`DEFAULT_LOG_FILE_NAME`] in the current folder. Until
//! [`try_initialize_logging_global`] is called, the [`tracing::debug!`] etc. macros
//! used throughout the app are no-ops.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use tracing_appender::rolling::RollingFileAppender;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Global default subscriber, which once set, can't be unset or changed.
/// - Docs for [Global default tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_global_default.html)
///
/// Passing [`LevelFilter::OFF`] leaves logging disabled.
///
/// # Errors
///
/// If the log file can't be created, or a global subscriber is already set.
pub fn try_initialize_logging_global(level_filter: LevelFilter) -> miette::Result<()> {
    // Early return if the level filter is off.
    if level_filter == LevelFilter::OFF {
        return Ok(());
    }

    let layers = try_create_layers(level_filter, DEFAULT_LOG_FILE_NAME)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .into_diagnostic()
}

/// The level filter, followed by a `fmt` layer that writes to `log_file_path`.
///
/// # Errors
///
/// See [`try_create_rolling_file_appender`].
pub fn try_create_layers(
    level_filter: LevelFilter,
    log_file_path: &str,
) -> miette::Result<Vec<Box<DynLayer<Registry>>>> {
    let file = try_create_rolling_file_appender(log_file_path)?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(file)
        .with_filter(level_filter);

    let mut return_it: Vec<Box<DynLayer<Registry>>> = vec![];
    return_it.push(Box::new(level_filter));
    return_it.push(Box::new(fmt_layer));

    Ok(return_it)
}

/// Note that if you wrap this up in a non blocking writer, it doesn't work. Here's an
/// example of that:
/// `tracing_appender::non_blocking(try_create_rolling_file_appender("foo")?)`
///
/// # Errors
///
/// If `path_str` has no parent folder or no file name.
pub fn try_create_rolling_file_appender(
    path_str: &str,
) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access current folder {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}
