use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in a calculator line.
///
/// The set of kinds is closed: a number literal or one of the four
/// arithmetic operators. There is no unary minus; a leading `-` is lexed as
/// [`Token::Minus`] like any other.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.25` or `3.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", scan_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Times,
    /// `/`
    #[token("/")]
    Divide,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Times => write!(f, "*"),
            Self::Divide => write!(f, "/"),
        }
    }
}

/// Converts a line of text into its token sequence.
///
/// The line is scanned left to right. Digits start a number, which runs
/// until the first character that is neither a digit nor the first `.` of
/// the literal. Whitespace is not skipped: every character must belong to a
/// token.
///
/// # Errors
/// Returns [`LexError::InvalidCharacter`] for the first character that is
/// not a digit, `.`, `+`, `-`, `*` or `/`, or for a `.` outside a number.
///
/// # Example
/// ```
/// use lrcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1+2").unwrap();
/// assert_eq!(tokens, vec![Token::Number(1.0), Token::Plus, Token::Number(2.0)]);
///
/// assert!(tokenize("1 + 2").is_err());
/// ```
pub fn tokenize(line: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(line);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => return Err(invalid_character(line, lexer.span().start)),
        }
    }

    Ok(tokens)
}

/// Builds the error for the character starting at byte `offset` of `line`.
fn invalid_character(line: &str, offset: usize) -> LexError {
    let position = line.get(..offset)
                       .map_or(offset, |prefix| prefix.chars().count());
    let character = line.get(offset..)
                        .and_then(|rest| rest.chars().next())
                        .unwrap_or(char::REPLACEMENT_CHARACTER);

    LexError::InvalidCharacter { line: line.to_string(),
                                 position,
                                 character }
}

/// Computes the value of the number literal at the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The accumulated value of the literal.
fn scan_number(lex: &logos::Lexer<Token>) -> f64 {
    accumulate_digits(lex.slice())
}

/// Accumulates a literal of the form `digits[.digits]` digit by digit.
///
/// The integer part is built as `value * 10 + digit`. Each fractional digit
/// adds `digit * place`, where `place` starts at `0.1` and shrinks by a
/// factor of ten per digit.
fn accumulate_digits(literal: &str) -> f64 {
    let (integer, fraction) = literal.split_once('.').unwrap_or((literal, ""));

    let mut value = integer.bytes()
                           .fold(0.0, |acc, digit| acc * 10.0 + f64::from(digit - b'0'));

    let mut place = 0.1;
    for digit in fraction.bytes() {
        value += f64::from(digit - b'0') * place;
        place *= 0.1;
    }

    value
}
