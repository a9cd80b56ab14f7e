/// The evaluator module reduces token sequences to numbers.
///
/// The evaluator folds a token sequence into a single running answer, applying
/// each operator to everything accumulated so far. There is no operator
/// precedence and no failure mode.
///
/// # Responsibilities
/// - Combines every number into the running answer using the operator before
///   it.
/// - Leaves division by zero to floating-point semantics.
pub mod evaluator;
/// The lexer module tokenizes a line of input.
///
/// The lexer reads the raw line and produces the ordered token sequence of
/// number literals and operators. This is the first stage of every
/// evaluation.
///
/// # Responsibilities
/// - Converts the input characters into tokens.
/// - Computes the value of number literals digit by digit.
/// - Reports the first invalid character with its position.
pub mod lexer;
