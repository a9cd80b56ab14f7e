use std::io::{BufRead, Write};

use rustyline::{DefaultEditor, error::ReadlineError};

use crate::error::SessionError;

/// A supplier of input lines for a session.
pub trait LineSource {
    /// Shows `prompt` and reads the next line.
    ///
    /// # Returns
    /// - `Ok(Some(line))`: The next line, possibly still ending in a newline.
    /// - `Ok(None)`: No more input.
    ///
    /// # Errors
    /// Returns a [`SessionError`] if the prompt cannot be shown or the line
    /// cannot be read.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, SessionError>;
}

/// Reads lines from any buffered reader, writing prompts to `prompt_out`.
///
/// Used for piped standard input and for files. Pass [`std::io::sink`] as
/// the prompt writer to read silently.
pub struct ReaderSource<R, W> {
    reader:     R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> ReaderSource<R, W> {
    /// Creates a source reading from `reader`.
    pub const fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineSource for ReaderSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, SessionError> {
        self.prompt_out.write_all(prompt.as_bytes())?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Reads lines from an interactive terminal with editing and history.
///
/// `Ctrl-C` and `Ctrl-D` both end the input.
pub struct TerminalSource {
    editor: DefaultEditor,
}

impl TerminalSource {
    /// Creates a terminal line editor.
    ///
    /// # Errors
    /// Returns [`SessionError::Readline`] if the terminal cannot be set up.
    pub fn new() -> Result<Self, SessionError> {
        Ok(Self { editor: DefaultEditor::new()? })
    }
}

impl LineSource for TerminalSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, SessionError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
