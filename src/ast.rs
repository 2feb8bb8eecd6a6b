//! Propositional formula trees.
//!
//! [`Formula`] is a closed sum type: every consumer (evaluation, layout,
//! canonical keys, printing) matches on it exhaustively. Children are owned
//! boxes, so trees are never shared and never cyclic.

use std::collections::BTreeSet;
use std::fmt;

/// A propositional formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    /// Variable `P`
    Var(String),
    /// Negation `¬A`
    Not(Box<Formula>),
    /// Conjunction `A ∧ B`
    And(Box<Formula>, Box<Formula>),
    /// Disjunction `A ∨ B`
    Or(Box<Formula>, Box<Formula>),
    /// Implication `A → B`
    Implies(Box<Formula>, Box<Formula>),
    /// Equivalence `A ↔ B`
    Iff(Box<Formula>, Box<Formula>),
}

/// Node kind, without children.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum NodeKind {
    Var,
    Not,
    And,
    Or,
    Implies,
    Iff,
}

impl NodeKind {
    pub const BINARY: [NodeKind; 4] = [NodeKind::And, NodeKind::Or, NodeKind::Implies, NodeKind::Iff];

    /// Printed glyph for connectives, `None` for variables.
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            NodeKind::Var => None,
            NodeKind::Not => Some("¬"),
            NodeKind::And => Some("∧"),
            NodeKind::Or => Some("∨"),
            NodeKind::Implies => Some("→"),
            NodeKind::Iff => Some("↔"),
        }
    }

    /// ASCII marker used inside canonical keys.
    fn marker(self) -> &'static str {
        match self {
            NodeKind::Var => "",
            NodeKind::Not => "!",
            NodeKind::And => "&",
            NodeKind::Or => "|",
            NodeKind::Implies => "->",
            NodeKind::Iff => "<->",
        }
    }
}

impl Formula {
    pub fn var(name: impl Into<String>) -> Self {
        Formula::Var(name.into())
    }

    pub fn not(operand: Self) -> Self {
        Formula::Not(Box::new(operand))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Formula::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Formula::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Formula::Implies(Box::new(lhs), Box::new(rhs))
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Formula::Iff(Box::new(lhs), Box::new(rhs))
    }

    /// Builds a binary node of the given kind.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is not a binary connective.
    pub fn binary(kind: NodeKind, lhs: Self, rhs: Self) -> Self {
        match kind {
            NodeKind::And => Formula::and(lhs, rhs),
            NodeKind::Or => Formula::or(lhs, rhs),
            NodeKind::Implies => Formula::implies(lhs, rhs),
            NodeKind::Iff => Formula::iff(lhs, rhs),
            NodeKind::Var | NodeKind::Not => panic!("{:?} is not a binary connective", kind),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Formula::Var(_) => NodeKind::Var,
            Formula::Not(_) => NodeKind::Not,
            Formula::And(..) => NodeKind::And,
            Formula::Or(..) => NodeKind::Or,
            Formula::Implies(..) => NodeKind::Implies,
            Formula::Iff(..) => NodeKind::Iff,
        }
    }

    /// Left and right operands of a binary node.
    pub fn operands(&self) -> Option<(&Formula, &Formula)> {
        match self {
            Formula::Var(_) | Formula::Not(_) => None,
            Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) | Formula::Iff(l, r) => Some((l, r)),
        }
    }

    /// Depth of the formula tree (0 for variables).
    pub fn depth(&self) -> usize {
        match self {
            Formula::Var(_) => 0,
            Formula::Not(e) => 1 + e.depth(),
            Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) | Formula::Iff(l, r) => {
                1 + l.depth().max(r.depth())
            }
        }
    }

    /// Number of nodes in the formula tree.
    pub fn size(&self) -> usize {
        match self {
            Formula::Var(_) => 1,
            Formula::Not(e) => 1 + e.size(),
            Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) | Formula::Iff(l, r) => {
                1 + l.size() + r.size()
            }
        }
    }

    /// Number of variable occurrences (leaves).
    pub fn leaf_count(&self) -> usize {
        match self {
            Formula::Var(_) => 1,
            Formula::Not(e) => e.leaf_count(),
            Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) | Formula::Iff(l, r) => {
                l.leaf_count() + r.leaf_count()
            }
        }
    }

    /// Distinct free variables, sorted lexicographically.
    pub fn vars(&self) -> BTreeSet<&str> {
        let mut vars = BTreeSet::new();
        self.collect_vars_into(&mut vars);
        vars
    }

    fn collect_vars_into<'a>(&'a self, vars: &mut BTreeSet<&'a str>) {
        match self {
            Formula::Var(name) => {
                vars.insert(name.as_str());
            }
            Formula::Not(e) => e.collect_vars_into(vars),
            Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) | Formula::Iff(l, r) => {
                l.collect_vars_into(vars);
                r.collect_vars_into(vars);
            }
        }
    }

    /// Whether `sub` occurs as a subtree of `self` (including `self`).
    pub fn contains(&self, sub: &Formula) -> bool {
        if self == sub {
            return true;
        }
        match self {
            Formula::Var(_) => false,
            Formula::Not(e) => e.contains(sub),
            Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) | Formula::Iff(l, r) => {
                l.contains(sub) || r.contains(sub)
            }
        }
    }

    /// Structural key: two formulas have the same key iff they are the same tree.
    ///
    /// ```text
    /// P           -> P
    /// ¬A          -> (!A)
    /// A op B      -> (A<op>B)    op in & | -> <->
    /// ```
    pub fn canonical_key(&self) -> String {
        let mut key = String::new();
        self.write_key(&mut key);
        key
    }

    fn write_key(&self, key: &mut String) {
        match self {
            Formula::Var(name) => key.push_str(name),
            Formula::Not(e) => {
                key.push_str("(!");
                e.write_key(key);
                key.push(')');
            }
            Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) | Formula::Iff(l, r) => {
                key.push('(');
                l.write_key(key);
                key.push_str(self.kind().marker());
                r.write_key(key);
                key.push(')');
            }
        }
    }
}

/// Printed form: Unicode glyphs, every binary subexpression parenthesized.
///
/// The output always parses back to the same tree.
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Var(name) => write!(f, "{}", name),
            Formula::Not(e) => write!(f, "¬{}", e),
            Formula::And(l, r) => write!(f, "({} ∧ {})", l, r),
            Formula::Or(l, r) => write!(f, "({} ∨ {})", l, r),
            Formula::Implies(l, r) => write!(f, "({} → {})", l, r),
            Formula::Iff(l, r) => write!(f, "({} ↔ {})", l, r),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn p() -> Formula {
        Formula::var("P")
    }

    fn q() -> Formula {
        Formula::var("Q")
    }

    #[test]
    fn test_formula_depth() {
        assert_eq!(p().depth(), 0);
        assert_eq!(Formula::not(p()).depth(), 1);
        assert_eq!(Formula::and(p(), q()).depth(), 1);
        assert_eq!(Formula::and(Formula::not(p()), q()).depth(), 2);
    }

    #[test]
    fn test_formula_size_and_leaves() {
        let f = Formula::implies(Formula::not(p()), Formula::or(p(), q()));
        assert_eq!(f.size(), 5);
        assert_eq!(f.leaf_count(), 3);
        assert_eq!(Formula::not(Formula::not(p())).leaf_count(), 1);
    }

    #[test]
    fn test_vars_sorted_distinct() {
        let f = Formula::and(Formula::var("b"), Formula::or(Formula::var("a"), Formula::var("b")));
        assert_eq!(f.vars().into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_canonical_key() {
        let f = Formula::iff(Formula::not(p()), Formula::implies(p(), q()));
        assert_eq!(f.canonical_key(), "((!P)<->(P->Q))");
        assert_eq!(Formula::and(p(), q()).canonical_key(), "(P&Q)");
        assert_eq!(Formula::or(p(), q()).canonical_key(), "(P|Q)");
    }

    #[test]
    fn test_canonical_key_respects_order() {
        let pq = Formula::implies(p(), q());
        let qp = Formula::implies(q(), p());
        assert_ne!(pq.canonical_key(), qp.canonical_key());
    }

    #[test]
    fn test_display() {
        let f = Formula::implies(Formula::and(Formula::implies(p(), q()), p()), q());
        assert_eq!(f.to_string(), "(((P → Q) ∧ P) → Q)");
        assert_eq!(Formula::not(Formula::or(p(), Formula::not(q()))).to_string(), "¬(P ∨ ¬Q)");
        assert_eq!(Formula::iff(p(), q()).to_string(), "(P ↔ Q)");
    }

    #[test]
    fn test_contains() {
        let f = Formula::or(p(), Formula::not(Formula::and(p(), q())));
        assert!(f.contains(&Formula::and(p(), q())));
        assert!(f.contains(&q()));
        assert!(f.contains(&f));
        assert!(!f.contains(&Formula::and(q(), p())));
    }

    #[test]
    fn test_binary_kind() {
        for kind in NodeKind::BINARY {
            let f = Formula::binary(kind, p(), q());
            assert_eq!(f.kind(), kind);
            assert_eq!(f.operands(), Some((&p(), &q())));
        }
    }

    #[test]
    #[should_panic(expected = "is not a binary connective")]
    fn test_binary_rejects_not() {
        Formula::binary(NodeKind::Not, p(), q());
    }
}
