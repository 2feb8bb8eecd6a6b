//! Operator sugar for building formulas.
//!
//! | Rust      | Formula  |
//! |-----------|----------|
//! | `!a`      | `¬a`     |
//! | `a & b`   | `a ∧ b`  |
//! | `a | b`   | `a ∨ b`  |
//! | `a >> b`  | `a → b`  |
//! | `a % b`   | `a ↔ b`  |
//!
//! Rust precedence applies, not formula precedence: `>>` binds tighter than `&`.

use std::ops::{BitAnd, BitOr, Not, Rem, Shr};

use crate::ast::Formula;

impl Not for Formula {
    type Output = Formula;

    fn not(self) -> Self::Output {
        Formula::not(self)
    }
}

impl BitAnd for Formula {
    type Output = Formula;

    fn bitand(self, rhs: Self) -> Self::Output {
        Formula::and(self, rhs)
    }
}

impl BitOr for Formula {
    type Output = Formula;

    fn bitor(self, rhs: Self) -> Self::Output {
        Formula::or(self, rhs)
    }
}

impl Shr for Formula {
    type Output = Formula;

    fn shr(self, rhs: Self) -> Self::Output {
        Formula::implies(self, rhs)
    }
}

impl Rem for Formula {
    type Output = Formula;

    fn rem(self, rhs: Self) -> Self::Output {
        Formula::iff(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_ops_not() {
        let p = Formula::var("P");
        assert_eq!(!p.clone(), Formula::not(p));
    }

    #[test]
    fn test_ops_binary() {
        let p = Formula::var("P");
        let q = Formula::var("Q");
        assert_eq!(p.clone() & q.clone(), Formula::and(p.clone(), q.clone()));
        assert_eq!(p.clone() | q.clone(), Formula::or(p.clone(), q.clone()));
        assert_eq!(p.clone() >> q.clone(), Formula::implies(p.clone(), q.clone()));
        assert_eq!(p.clone() % q.clone(), Formula::iff(p, q));
    }

    #[test]
    fn test_ops_modus_ponens() {
        let p = Formula::var("P");
        let q = Formula::var("Q");
        let f = ((p.clone() >> q.clone()) & p) >> q;
        assert_eq!(f.to_string(), "(((P → Q) ∧ P) → Q)");
    }
}
