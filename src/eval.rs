//! Evaluation of formulas under a total assignment.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ast::Formula;

/// A total mapping from variable names to truth values.
///
/// Iteration order is lexicographic by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment(BTreeMap<String, bool>);

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.0.get(name).copied()
    }

    pub fn set(&mut self, name: impl Into<String>, value: bool) {
        self.0.insert(name.into(), value);
    }

    pub fn with(mut self, name: impl Into<String>, value: bool) -> Self {
        self.set(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Assignment(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Renders as `{P=1, Q=0}`.
impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, value as u8)?;
        }
        write!(f, "}}")
    }
}

/// Evaluates `formula` under `assignment`.
///
/// # Panics
///
/// Panics if a variable of `formula` is missing from `assignment`.
/// Assignments should be derived from [`Formula::vars`] of the same formula.
pub fn evaluate(formula: &Formula, assignment: &Assignment) -> bool {
    match formula {
        Formula::Var(name) => match assignment.get(name) {
            Some(value) => value,
            None => panic!("variable {} is not assigned", name),
        },
        Formula::Not(e) => !evaluate(e, assignment),
        Formula::And(l, r) => evaluate(l, assignment) && evaluate(r, assignment),
        Formula::Or(l, r) => evaluate(l, assignment) || evaluate(r, assignment),
        Formula::Implies(l, r) => !evaluate(l, assignment) || evaluate(r, assignment),
        Formula::Iff(l, r) => evaluate(l, assignment) == evaluate(r, assignment),
    }
}

impl Formula {
    /// See [`evaluate`].
    pub fn eval(&self, assignment: &Assignment) -> bool {
        evaluate(self, assignment)
    }
}
