//! Formula tokenizer.
//!
//! Accepts both ASCII and Unicode spellings of the connectives and normalizes
//! them to a single token per operator:
//!
//! | Token     | Spellings             |
//! |-----------|-----------------------|
//! | `Not`     | `!` `~` `¬`           |
//! | `And`     | `&` `∧`               |
//! | `Or`      | `|` `∨`               |
//! | `Implies` | `->` `→`              |
//! | `Iff`     | `<->` `↔` `≡` `←→`    |
//!
//! Space, tab, CR and LF are skipped. Identifiers match `[A-Za-z][A-Za-z0-9_]*`, longest match first.

use std::fmt;

use crate::error::LexError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    LParen,
    RParen,
    Not,
    And,
    Or,
    Implies,
    Iff,
    Ident(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Not => write!(f, "!"),
            Token::And => write!(f, "&"),
            Token::Or => write!(f, "|"),
            Token::Implies => write!(f, "->"),
            Token::Iff => write!(f, "<->"),
            Token::Ident(name) => write!(f, "{}", name),
        }
    }
}

/// Splits `source` into tokens.
///
/// Fails on the first character that cannot start a token, or on a
/// multi-character operator that is cut short (`-x`, `<-`, `←`).
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    // Matches `rest` right after position `i`, returning the position past it.
    let follows = |i: usize, rest: &[char]| -> Option<usize> {
        let end = i + 1 + rest.len();
        if end <= chars.len() && chars[i + 1..end] == *rest {
            Some(end)
        } else {
            None
        }
    };

    while i < chars.len() {
        let c = chars[i];
        let malformed = LexError { position: i, character: c };

        match c {
            ' ' | '\t' | '\n' | '\r' => {
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            '!' | '~' | '¬' => {
                tokens.push(Token::Not);
                i += 1;
            }
            '&' | '∧' => {
                tokens.push(Token::And);
                i += 1;
            }
            '|' | '∨' => {
                tokens.push(Token::Or);
                i += 1;
            }
            '→' => {
                tokens.push(Token::Implies);
                i += 1;
            }
            '↔' | '≡' => {
                tokens.push(Token::Iff);
                i += 1;
            }
            '-' => {
                i = follows(i, &['>']).ok_or(malformed)?;
                tokens.push(Token::Implies);
            }
            '<' => {
                i = follows(i, &['-', '>']).ok_or(malformed)?;
                tokens.push(Token::Iff);
            }
            '←' => {
                i = follows(i, &['→']).ok_or(malformed)?;
                tokens.push(Token::Iff);
            }
            _ if c.is_ascii_alphabetic() => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                tokens.push(Token::Ident(chars[start..i].iter().collect()));
            }
            _ => return Err(malformed),
        }
    }

    Ok(tokens)
}
