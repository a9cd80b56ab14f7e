use crate::interpreter::lexer::Token;

/// Reduces a token sequence to a single value, strictly left to right.
///
/// The running answer starts at `0` and the first token is treated as if it
/// were preceded by `+`. Every number is combined into the answer using the
/// token right before it, so `*` and `/` scale everything accumulated so
/// far. `2+3*4` is therefore `(2+3)*4 = 20`.
///
/// Operators on their own change nothing. A number preceded by another
/// number leaves the answer unchanged. Division by zero follows IEEE-754
/// and produces an infinity or NaN.
///
/// # Example
/// ```
/// use lrcalc::interpreter::{evaluator::evaluate, lexer::Token};
///
/// let tokens = [Token::Number(2.0),
///               Token::Plus,
///               Token::Number(3.0),
///               Token::Times,
///               Token::Number(4.0)];
/// assert_eq!(evaluate(&tokens), 20.0);
/// ```
#[must_use]
pub fn evaluate(tokens: &[Token]) -> f64 {
    let (answer, _) = tokens.iter()
                            .fold((0.0, Token::Plus), |(answer, previous), &token| match token {
                                Token::Number(value) => {
                                    let next = apply(previous, answer, value);
                                    log::trace!("{answer} {previous} {value} = {next}");
                                    (next, token)
                                },
                                Token::Plus | Token::Minus | Token::Times | Token::Divide => {
                                    (answer, token)
                                },
                            });
    answer
}

/// Combines `value` into `answer` using the operator that preceded it.
fn apply(operator: Token, answer: f64, value: f64) -> f64 {
    match operator {
        Token::Plus => answer + value,
        Token::Minus => answer - value,
        Token::Times => answer * value,
        Token::Divide => answer / value,
        Token::Number(_) => answer,
    }
}
