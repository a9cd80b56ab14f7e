//! # lrcalc
//!
//! lrcalc is an interactive calculator written in Rust.
//! It tokenizes a line of digits and `+ - * /` operators and reduces it to a
//! single number strictly from left to right, without operator precedence:
//! `2+3*4` is `20`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::LexError,
    interpreter::{evaluator::evaluate, lexer::tokenize},
};

/// Provides the error types for lexing and for running sessions.
///
/// This module defines every error the crate can report. Lexing errors carry
/// the offending character, its position and the whole line so the caller can
/// print a useful diagnostic.
///
/// # Responsibilities
/// - Defines the single lexing failure, an invalid character.
/// - Wraps I/O and line editor failures that end a session.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Turns lines into numbers.
///
/// This module ties together the lexer and the evaluator. Every line goes
/// through both, in that order.
///
/// # Responsibilities
/// - Tokenizes a line into numbers and operators.
/// - Reduces the tokens to a single answer, left to right.
pub mod interpreter;
/// Drives the read/evaluate/print loop.
///
/// This module reads lines from a terminal, a pipe or a file, prints each
/// answer, and decides what happens with invalid lines.
///
/// # Responsibilities
/// - Shows the prompt and reads lines until an empty line or end of input.
/// - Prints answers in fixed-point notation.
/// - Applies the error policy: report and continue, or abort.
pub mod session;

/// Tokenizes and evaluates a single line.
///
/// # Errors
/// Returns [`LexError::InvalidCharacter`] if the line contains anything other
/// than digits, number-internal `.`, and the operators `+ - * /`.
///
/// # Examples
/// ```
/// use lrcalc::eval_line;
///
/// assert_eq!(eval_line("1+2").unwrap(), 3.0);
///
/// // No precedence: this is (2 + 3) * 4.
/// assert_eq!(eval_line("2+3*4").unwrap(), 20.0);
///
/// // Spaces are not allowed.
/// assert!(eval_line("2 + 2").is_err());
/// ```
pub fn eval_line(line: &str) -> Result<f64, LexError> {
    let tokens = tokenize(line)?;
    log::debug!("tokens: {}",
                tokens.iter()
                      .map(ToString::to_string)
                      .collect::<Vec<_>>()
                      .join(" "));

    let answer = evaluate(&tokens);
    log::trace!("{line} => {answer}");
    Ok(answer)
}
