use std::path::PathBuf;

use rustyline::error::ReadlineError;

use crate::error::LexError;

#[derive(Debug)]
/// Represents all errors that can end a session early.
pub enum SessionError {
    /// Reading input or writing output failed.
    Io(std::io::Error),
    /// The input file could not be opened.
    InputFile {
        /// The file that was requested.
        path:  PathBuf,
        /// The reason opening it failed.
        error: std::io::Error,
    },
    /// The interactive line editor failed.
    Readline(ReadlineError),
    /// A line was rejected while the session aborts on errors.
    Lex(LexError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InputFile { path, error } => {
                write!(f, "Failed to read the input file '{}': {error}", path.display())
            },
            Self::Readline(e) => write!(f, "Line editor error: {e}"),
            Self::Lex(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::InputFile { error: e, .. } => Some(e),
            Self::Readline(e) => Some(e),
            Self::Lex(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ReadlineError> for SessionError {
    fn from(e: ReadlineError) -> Self {
        Self::Readline(e)
    }
}

impl From<LexError> for SessionError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}
