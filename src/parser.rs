//! Precedence-climbing parser.
//!
//! Binding powers, loosest first:
//!
//! | Operator | Power | Position |
//! |----------|-------|----------|
//! | `<->`    | 0     | infix    |
//! | `->`     | 1     | infix    |
//! | `|`      | 2     | infix    |
//! | `&`      | 3     | infix    |
//! | `!`      | 4     | prefix   |
//!
//! Binary operators chain to the right: `A -> B -> C` is `A -> (B -> C)`.
//! `!` applies to the next primary only (an identifier, a group, or another `!`).
//!
//! Every group, every `!` and every right-hand operand adds one level of
//! recursion. Input nested deeper than [`MAX_NESTING`] is rejected with
//! [`ParseError::TooDeep`], which also bounds the depth of every parsed tree.

use std::str::FromStr;

use log::debug;

use crate::ast::{Formula, NodeKind};
use crate::error::{Expected, ParseError};
use crate::lexer::{tokenize, Token};

/// Maximum recursion depth of the parser.
pub const MAX_NESTING: usize = 256;

fn binary_op(token: &Token) -> Option<(NodeKind, u8)> {
    match token {
        Token::Iff => Some((NodeKind::Iff, 0)),
        Token::Implies => Some((NodeKind::Implies, 1)),
        Token::Or => Some((NodeKind::Or, 2)),
        Token::And => Some((NodeKind::And, 3)),
        _ => None,
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, pos: 0, depth: 0 }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(ParseError::TooDeep { limit: MAX_NESTING });
        }
        Ok(())
    }

    fn parse_expr(&mut self, min_power: u8) -> Result<Formula, ParseError> {
        self.enter()?;
        let mut lhs = self.parse_unary()?;

        while let Some((kind, power)) = self.peek().and_then(binary_op) {
            if power < min_power {
                break;
            }
            self.advance();
            let rhs = self.parse_expr(power)?;
            lhs = Formula::binary(kind, lhs, rhs);
        }

        self.depth -= 1;
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Formula, ParseError> {
        if let Some(Token::Not) = self.peek() {
            self.advance();
            self.enter()?;
            let operand = self.parse_unary()?;
            self.depth -= 1;
            return Ok(Formula::not(operand));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Formula, ParseError> {
        match self.advance() {
            Some(Token::Ident(name)) => Ok(Formula::var(name.as_str())),
            Some(Token::LParen) => {
                let inner = self.parse_expr(0)?;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    found => Err(ParseError::unexpected(Expected::ClosingParen, found.cloned())),
                }
            }
            found => Err(ParseError::unexpected(Expected::Expression, found.cloned())),
        }
    }
}

/// Parses a complete token sequence into a formula.
///
/// Trailing tokens after a complete formula are an error.
pub fn parse(tokens: &[Token]) -> Result<Formula, ParseError> {
    let mut parser = Parser::new(tokens);
    let formula = parser.parse_expr(0)?;
    if let Some(token) = parser.peek() {
        return Err(ParseError::unexpected(Expected::EndOfInput, Some(token.clone())));
    }
    Ok(formula)
}

/// Tokenizes and parses `text`.
pub fn parse_formula(text: &str) -> Result<Formula, ParseError> {
    let tokens = tokenize(text)?;
    debug!("tokenized {:?} into {} tokens", text, tokens.len());
    parse(&tokens)
}

impl FromStr for Formula {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_formula(s)
    }
}
