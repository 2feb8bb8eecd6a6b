//! Exhaustive truth-table tautology checking.
//!
//! For a formula over `k` variables, all `2^k` assignments are enumerated and
//! evaluated. There is no pruning: the cost is `O(2^k · size)`.
//!
//! # Enumeration order
//!
//! Variables are sorted lexicographically. Row `i` (for `i` in `0..2^k`) assigns
//! the `j`-th variable the bit `(i >> (k - 1 - j)) & 1`, so the first variable
//! is the most significant bit:
//!
//! ```text
//!        P Q
//! row 0: 0 0
//! row 1: 0 1
//! row 2: 1 0
//! row 3: 1 1
//! ```
//!
//! A formula with no variables has exactly one (empty) row.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::ast::Formula;
use crate::eval::{evaluate, Assignment};

/// Free variables of `formula`, sorted and distinct.
pub fn collect_vars(formula: &Formula) -> Vec<String> {
    formula.vars().into_iter().map(str::to_string).collect()
}

/// Iterator over all total assignments of a fixed variable list.
#[derive(Debug, Clone)]
pub struct Assignments {
    vars: Vec<String>,
    next: u64,
    end: u64,
}

impl Assignments {
    /// # Panics
    ///
    /// Panics if there are 64 or more variables.
    pub fn new(vars: Vec<String>) -> Self {
        assert!(vars.len() < 64, "Too many variables to enumerate: {}", vars.len());
        let end = 1u64 << vars.len();
        Assignments { vars, next: 0, end }
    }

    fn row(&self, index: u64) -> Assignment {
        let k = self.vars.len();
        self.vars
            .iter()
            .enumerate()
            .map(|(j, name)| (name.as_str(), (index >> (k - 1 - j)) & 1 == 1))
            .collect()
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let row = self.row(self.next);
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments {}

/// All assignments of the free variables of `formula`, in enumeration order.
///
/// # Panics
///
/// Panics if `formula` has 64 or more distinct variables.
pub fn assignments(formula: &Formula) -> Assignments {
    Assignments::new(collect_vars(formula))
}

/// Full truth table of a formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTable {
    vars: Vec<String>,
    rows: Vec<(Assignment, bool)>,
}

impl TruthTable {
    pub fn vars(&self) -> &[String] {
        &self.vars
    }

    pub fn rows(&self) -> &[(Assignment, bool)] {
        &self.rows
    }

    /// Number of satisfying rows.
    pub fn models(&self) -> usize {
        self.rows.iter().filter(|(_, value)| *value).count()
    }
}

/// Evaluates `formula` on every assignment of its free variables.
///
/// # Panics
///
/// Panics if `formula` has 64 or more distinct variables.
pub fn truth_table(formula: &Formula) -> TruthTable {
    let vars = collect_vars(formula);
    let rows: Vec<(Assignment, bool)> = Assignments::new(vars.clone())
        .map(|env| {
            let value = evaluate(formula, &env);
            (env, value)
        })
        .collect();
    debug!("truth table of {} over {} vars: {} rows", formula, vars.len(), rows.len());
    TruthTable { vars, rows }
}

/// Outcome of [`check_tautology`].
///
/// `is_tautology()` holds exactly when there are no falsifying assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TautologyResult {
    is_tautology: bool,
    falsifying_assignments: Vec<Assignment>,
}

impl TautologyResult {
    fn from_falsifying(falsifying_assignments: Vec<Assignment>) -> Self {
        TautologyResult {
            is_tautology: falsifying_assignments.is_empty(),
            falsifying_assignments,
        }
    }

    pub fn is_tautology(&self) -> bool {
        self.is_tautology
    }

    /// Falsifying rows in enumeration order.
    pub fn falsifying_assignments(&self) -> &[Assignment] {
        &self.falsifying_assignments
    }
}

/// Checks whether `formula` is true under every assignment of its free variables.
///
/// # Panics
///
/// Panics if `formula` has 64 or more distinct variables.
pub fn check_tautology(formula: &Formula) -> TautologyResult {
    let rows = assignments(formula);
    debug!("checking {} over {} rows", formula, rows.len());
    let falsifying = rows.filter(|env| !evaluate(formula, env)).collect();
    TautologyResult::from_falsifying(falsifying)
}

impl Formula {
    /// Shorthand for [`check_tautology`], with the same panics.
    pub fn is_tautology(&self) -> bool {
        check_tautology(self).is_tautology()
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn vars(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_assignments_order() {
        let rows: Vec<Assignment> = Assignments::new(vars(&["P", "Q"])).collect();
        let expected: Vec<Assignment> = [(false, false), (false, true), (true, false), (true, true)]
            .into_iter()
            .map(|(p, q)| Assignment::new().with("P", p).with("Q", q))
            .collect();
        assert_eq!(rows, expected);
    }

    #[test]
    #[should_panic(expected = "Too many variables")]
    fn test_check_tautology_too_many_vars() {
        let f = (0..64)
            .map(|i| Formula::var(format!("x{}", i)))
            .reduce(Formula::or)
            .unwrap();
        check_tautology(&f);
    }

    #[test]
    fn test_assignments_count() {
        assert_eq!(Assignments::new(vars(&[])).count(), 1);
        assert_eq!(Assignments::new(vars(&["a"])).count(), 2);
        assert_eq!(Assignments::new(vars(&["a", "b", "c", "d"])).len(), 16);
    }

    #[test]
    fn test_empty_row() {
        let rows: Vec<Assignment> = Assignments::new(vec![]).collect();
        assert_eq!(rows, vec![Assignment::new()]);
    }

    #[test]
    fn test_collect_vars_sorted() {
        let f = Formula::or(Formula::var("z"), Formula::and(Formula::var("a"), Formula::var("z")));
        assert_eq!(collect_vars(&f), vars(&["a", "z"]));
    }

    #[test]
    fn test_excluded_middle() {
        let p = Formula::var("P");
        let f = Formula::or(p.clone(), Formula::not(p));
        let result = check_tautology(&f);
        assert!(result.is_tautology());
        assert!(result.falsifying_assignments().is_empty());
    }

    #[test]
    fn test_contradiction() {
        let p = Formula::var("P");
        let f = Formula::and(p.clone(), Formula::not(p));
        let result = check_tautology(&f);
        assert!(!result.is_tautology());
        assert_eq!(
            result.falsifying_assignments(),
            &[Assignment::new().with("P", false), Assignment::new().with("P", true)]
        );
    }

    #[test]
    fn test_implication_counterexample() {
        let f = Formula::implies(Formula::var("P"), Formula::var("Q"));
        let result = check_tautology(&f);
        assert_eq!(
            result.falsifying_assignments(),
            &[Assignment::new().with("P", true).with("Q", false)]
        );
    }

    #[test]
    fn test_truth_table_models() {
        let f = Formula::iff(Formula::var("P"), Formula::var("Q"));
        let table = truth_table(&f);
        assert_eq!(table.vars(), &vars(&["P", "Q"])[..]);
        assert_eq!(table.rows().len(), 4);
        assert_eq!(table.models(), 2);
        let values: Vec<bool> = table.rows().iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![true, false, false, true]);
    }
}
