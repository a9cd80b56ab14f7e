use std::io::Write;

use crate::{error::SessionError, eval_line};

/// Where session input lines come from.
///
/// Provides the [`LineSource`] trait and its two implementations: a plain
/// buffered reader for pipes and files, and a line editor with history for
/// interactive terminals.
pub mod source;

pub use source::{LineSource, ReaderSource, TerminalSource};

/// Default prompt printed before each line is read.
pub const DEFAULT_PROMPT: &str = "> ";
/// Default number of fractional digits in a printed answer.
pub const DEFAULT_PRECISION: usize = 6;

/// What a session does with a line that fails to tokenize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Report the error and read the next line.
    #[default]
    Continue,
    /// Stop the session and return the error.
    Abort,
}

/// Settings for a read/evaluate/print session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Text shown before each line is read.
    pub prompt:    String,
    /// Number of fractional digits in printed answers.
    pub precision: usize,
    /// Handling of invalid lines.
    pub on_error:  ErrorPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { prompt:    DEFAULT_PROMPT.to_string(),
               precision: DEFAULT_PRECISION,
               on_error:  ErrorPolicy::default(), }
    }
}

/// Counts of what happened during a session that ended normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Lines that produced an answer.
    pub evaluated: usize,
    /// Lines that were reported as invalid and skipped.
    pub rejected:  usize,
}

/// Runs the read/evaluate/print loop.
///
/// ## Usage
///
/// A `Session` is created from a [`SessionConfig`] and driven with
/// [`Session::run`], which keeps reading lines from a [`LineSource`] until an
/// empty line or the end of input.
pub struct Session {
    config: SessionConfig,
}

impl Session {
    /// Creates a session with the given settings.
    #[must_use]
    pub const fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Reads, evaluates and prints lines until the input is exhausted.
    ///
    /// Each answer is written to `out` as `answer = <value>`. Invalid lines
    /// are reported on `err` and skipped, unless the session was configured
    /// with [`ErrorPolicy::Abort`].
    ///
    /// # Errors
    /// Returns a [`SessionError`] if reading a line or writing output fails,
    /// or if a line is invalid under [`ErrorPolicy::Abort`].
    ///
    /// # Example
    /// ```
    /// use lrcalc::session::{ReaderSource, Session, SessionConfig};
    ///
    /// let mut source = ReaderSource::new("1+2\n2+3*4\n\n9\n".as_bytes(), std::io::sink());
    /// let mut out = Vec::new();
    /// let mut err = Vec::new();
    ///
    /// let summary = Session::new(SessionConfig::default()).run(&mut source, &mut out, &mut err)
    ///                                                      .unwrap();
    /// assert_eq!(summary.evaluated, 2);
    /// assert_eq!(String::from_utf8(out).unwrap(),
    ///            "answer = 3.000000\nanswer = 20.000000\n");
    /// ```
    pub fn run<S, O, E>(&self,
                        source: &mut S,
                        out: &mut O,
                        err: &mut E)
                        -> Result<SessionSummary, SessionError>
        where S: LineSource + ?Sized,
              O: Write,
              E: Write
    {
        let mut summary = SessionSummary::default();

        while let Some(raw) = source.read_line(&self.config.prompt)? {
            let line = raw.trim_end_matches(['\r', '\n']);
            if line.is_empty() {
                log::debug!("empty line, ending session");
                break;
            }

            match eval_line(line) {
                Ok(answer) => {
                    summary.evaluated += 1;
                    writeln!(out, "{}", format_answer(answer, self.config.precision))?;
                },
                Err(e) => match self.config.on_error {
                    ErrorPolicy::Continue => {
                        summary.rejected += 1;
                        log::debug!("skipping invalid line: {e}");
                        writeln!(err, "error: {e}")?;
                    },
                    ErrorPolicy::Abort => return Err(e.into()),
                },
            }
            out.flush()?;
        }

        log::debug!("session ended: {} evaluated, {} rejected",
                    summary.evaluated,
                    summary.rejected);
        Ok(summary)
    }
}

/// Formats an answer the way the session prints it.
///
/// # Example
/// ```
/// use lrcalc::session::format_answer;
///
/// assert_eq!(format_answer(4.75, 6), "answer = 4.750000");
/// assert_eq!(format_answer(20.0, 0), "answer = 20");
/// ```
#[must_use]
pub fn format_answer(value: f64, precision: usize) -> String {
    format!("answer = {value:.precision$}")
}
