// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, BufRead, ErrorKind, StdinLock, Write};

use crate::{colon, termcolours::ui_str};

/// Closing or interrupting the input stream is never reported as an empty answer. The
/// session turns every variant into [`crate::termcolours::ControlSignal::Shutdown`].
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum PromptError {
    #[error("Reached the end of input")]
    #[diagnostic(
        code(termcolours::prompt::eof),
        help("The input stream was closed, eg: Ctrl+D or the end of a pipe")
    )]
    Eof,

    #[error("Reading input was interrupted")]
    #[diagnostic(code(termcolours::prompt::interrupted))]
    Interrupted,

    #[error("Could not read input")]
    #[diagnostic(code(termcolours::prompt::io))]
    Io {
        #[source]
        source: io::Error,
    },
}

impl From<io::Error> for PromptError {
    fn from(source: io::Error) -> Self {
        match source.kind() {
            ErrorKind::UnexpectedEof => Self::Eof,
            ErrorKind::Interrupted => Self::Interrupted,
            _ => Self::Io { source },
        }
    }
}

/// Abstraction for reading a line of user input, for dependency injection. The label
/// is written to `output`, so a transcript of a session shows the prompts too.
pub trait LinePrompt {
    /// Print `label`, then read one line. The line ending is removed, everything else
    /// is returned as typed.
    ///
    /// # Errors
    ///
    /// [`PromptError`] if the input stream is closed or interrupted.
    fn read_line(&mut self, output: &mut dyn Write, label: &str)
    -> Result<String, PromptError>;

    /// Keep asking until the (trimmed) answer is one of `choices`. An empty answer
    /// returns [None].
    ///
    /// # Errors
    ///
    /// [`PromptError`] if the input stream is closed or interrupted.
    fn read_choice(
        &mut self,
        output: &mut dyn Write,
        label: &str,
        choices: &[String],
    ) -> Result<Option<String>, PromptError> {
        loop {
            let answer = self.read_line(output, label)?;
            let answer = answer.trim();

            if answer.is_empty() {
                return Ok(None);
            }

            if let Some(choice) = choices.iter().find(|choice| *choice == answer) {
                return Ok(Some(choice.clone()));
            }

            writeln!(output, "{}", ui_str::invalid_choice_msg(answer))?;
        }
    }
}

/// Reads from any [`BufRead`], which is `stdin` in the binary.
#[derive(Debug)]
pub struct StdinPrompt<R: BufRead> {
    reader: R,
}

impl<R: BufRead> StdinPrompt<R> {
    pub fn new(reader: R) -> Self { Self { reader } }
}

impl StdinPrompt<StdinLock<'static>> {
    #[must_use]
    pub fn stdin() -> Self { Self::new(io::stdin().lock()) }
}

impl<R: BufRead> LinePrompt for StdinPrompt<R> {
    fn read_line(
        &mut self,
        output: &mut dyn Write,
        label: &str,
    ) -> Result<String, PromptError> {
        write!(output, "{label}{} ", colon())?;
        output.flush()?;

        let mut line = String::new();
        let bytes_read = self.reader.read_line(&mut line)?;
        if bytes_read == 0 {
            return Err(PromptError::Eof);
        }

        let content_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(content_len);

        tracing::debug!(message = "Read line", line = ?line);
        Ok(line)
    }
}

pub mod prompt_test_fixtures {
    use std::collections::VecDeque;

    use super::{LinePrompt, PromptError, Write};

    /// Hands out canned answers, then reports the end of input (or an interrupt, see
    /// [`ScriptedPrompt::then_interrupt`]). Each prompt and answer is echoed to the
    /// output, the way a terminal would show them.
    #[derive(Debug, Default)]
    pub struct ScriptedPrompt {
        pub answers: VecDeque<String>,
        pub is_interrupted_when_done: bool,
    }

    impl ScriptedPrompt {
        pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
            Self {
                answers: answers.into_iter().map(Into::into).collect(),
                is_interrupted_when_done: false,
            }
        }

        #[must_use]
        pub fn then_interrupt(mut self) -> Self {
            self.is_interrupted_when_done = true;
            self
        }
    }

    impl LinePrompt for ScriptedPrompt {
        fn read_line(
            &mut self,
            output: &mut dyn Write,
            label: &str,
        ) -> Result<String, PromptError> {
            match self.answers.pop_front() {
                Some(answer) => {
                    writeln!(output, "{label}: {answer}")?;
                    Ok(answer)
                }
                None if self.is_interrupted_when_done => Err(PromptError::Interrupted),
                None => Err(PromptError::Eof),
            }
        }
    }
}
