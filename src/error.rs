//! Error types for lexing and parsing formulas.
//!
//! Both errors are terminal for the call that produced them: no partial
//! formula is ever returned alongside an error.

use std::fmt;

use crate::lexer::Token;

/// A character the lexer could not turn into a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexError {
    /// 0-based character index into the source.
    pub position: usize,
    /// The offending character (or the first character of a malformed operator).
    pub character: char,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected character '{}' at position {}", self.character, self.position)
    }
}

impl std::error::Error for LexError {}

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// An identifier, `!`, or `(`.
    Expression,
    /// A `)` closing an open group.
    ClosingParen,
    /// Nothing: the expression was complete.
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Expression => write!(f, "expression"),
            Expected::ClosingParen => write!(f, "')'"),
            Expected::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Error type for [`parse`][crate::parser::parse] and [`parse_formula`][crate::parser::parse_formula].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Tokenizing failed before parsing started.
    Lex(LexError),
    /// The token stream does not form a formula.
    ///
    /// `found = None` means the input ended early.
    Unexpected { expected: Expected, found: Option<Token> },
    /// Groups, negations and right-hand operands nest deeper than `limit`.
    TooDeep { limit: usize },
}

impl ParseError {
    pub fn unexpected(expected: Expected, found: Option<Token>) -> Self {
        ParseError::Unexpected { expected, found }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError::Lex(e)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(e) => write!(f, "Lex error: {}", e),
            ParseError::Unexpected { expected, found: Some(token) } => {
                write!(f, "Parse error: expected {}, found '{}'", expected, token)
            }
            ParseError::Unexpected { expected, found: None } => {
                write!(f, "Parse error: expected {}, found end of input", expected)
            }
            ParseError::TooDeep { limit } => write!(f, "Parse error: nesting exceeds {} levels", limit),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(e) => Some(e),
            ParseError::Unexpected { .. } | ParseError::TooDeep { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn test_display_lex_error() {
        let e = LexError { position: 3, character: '$' };
        assert_eq!(e.to_string(), "unexpected character '$' at position 3");
    }

    #[test]
    fn test_display_unexpected() {
        let e = ParseError::unexpected(Expected::ClosingParen, None);
        assert_eq!(e.to_string(), "Parse error: expected ')', found end of input");

        let e = ParseError::unexpected(Expected::EndOfInput, Some(Token::Ident("Q".to_string())));
        assert_eq!(e.to_string(), "Parse error: expected end of input, found 'Q'");
    }

    #[test]
    fn test_display_too_deep() {
        let e = ParseError::TooDeep { limit: 256 };
        assert_eq!(e.to_string(), "Parse error: nesting exceeds 256 levels");
        assert!(e.source().is_none());
    }

    #[test]
    fn test_lex_error_is_source() {
        let e: ParseError = LexError { position: 0, character: '#' }.into();
        assert!(e.source().is_some());
        assert!(ParseError::unexpected(Expected::Expression, None).source().is_none());
    }
}
