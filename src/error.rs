/// Lexing errors.
///
/// Defines the error raised while turning a line of input into tokens. This
/// is the only failure the calculator core can produce.
pub mod lex_error;
/// Session errors.
///
/// Covers everything that can stop a read/evaluate/print session: failing to
/// read a line, failing to write an answer, or an invalid line under the
/// abort policy.
pub mod session_error;

pub use lex_error::LexError;
pub use session_error::SessionError;
