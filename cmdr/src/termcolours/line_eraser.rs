// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Result, Write};

use crossterm::{QueueableCommand,
                cursor::MoveToPreviousLine,
                terminal::{Clear, ClearType}};

/// Erase lines that were already printed, so that a preview line can take the place of
/// the prompt that produced it. This is cosmetic: failures are logged and dropped.
pub trait LineEraser {
    fn erase_lines(&mut self, output: &mut dyn Write, count: u16);
}

/// Moves the cursor up one line and clears it, `count` times. Only makes sense when
/// `stdout` is a terminal.
#[derive(Debug, Default)]
pub struct CrosstermLineEraser;

impl LineEraser for CrosstermLineEraser {
    fn erase_lines(&mut self, output: &mut dyn Write, count: u16) {
        let result = (0..count)
            .try_for_each(|_| -> Result<()> {
                output
                    .queue(MoveToPreviousLine(1))?
                    .queue(Clear(ClearType::CurrentLine))?;
                Ok(())
            })
            .and_then(|()| output.flush());

        if let Err(error) = result {
            tracing::debug!(message = "Could not erase lines", count, error = ?error);
        }
    }
}

/// For output that isn't a terminal (pipes, files, tests).
#[derive(Debug, Default)]
pub struct NoopLineEraser;

impl LineEraser for NoopLineEraser {
    fn erase_lines(&mut self, _output: &mut dyn Write, _count: u16) {}
}

pub mod line_eraser_test_fixtures {
    use std::io::Write;

    use super::LineEraser;

    /// Writes nothing, and keeps the count of every erase request in order.
    #[derive(Debug, Default)]
    pub struct RecordingLineEraser {
        pub counts: Vec<u16>,
    }

    impl LineEraser for RecordingLineEraser {
        fn erase_lines(&mut self, _output: &mut dyn Write, count: u16) {
            self.counts.push(count);
        }
    }
}
