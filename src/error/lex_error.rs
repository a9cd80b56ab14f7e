#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// Found a character that cannot start or continue a token.
    InvalidCharacter {
        /// The full line being tokenized.
        line:      String,
        /// Zero-based character position of the offending character.
        position:  usize,
        /// The offending character.
        character: char,
    },
}

impl LexError {
    /// Zero-based character position where lexing stopped.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { line,
                                     position,
                                     character, } => write!(f,
                                                            "Invalid character {character:?} at position {position} in {line:?}."),
        }
    }
}

impl std::error::Error for LexError {}
