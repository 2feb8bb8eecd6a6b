//! Bounded tautology search.
//!
//! ## Algorithm
//!
//! Candidates are built bottom-up by depth:
//!
//! ```text
//! S(0) = { atoms }
//! S(d) = S(d-1) ∪ { ¬a : a ∈ S(d-1) } ∪ { a op b : a, b ∈ S(d-1), op ∈ ∧ ∨ → ↔ }
//! ```
//!
//! Pairs are ordered, so `a → b` and `b → a` are both built. Every candidate is
//! keyed by [`Formula::canonical_key`]; a key that was already seen is dropped
//! before evaluation. The seen-set is an explicit accumulator owned by one run,
//! so generation is a pure function of its inputs.
//!
//! Unique candidates with at least one variable go through [`check_tautology`].
//! Survivors are deduplicated again by printed form, sorted by printed length
//! (stable, so ties keep generation order) and truncated to `max_results`.
//!
//! ## Cost
//!
//! `|S(d)| = n + |S(d-1)| + 4·|S(d-1)|²` for `n` atoms, which is doubly
//! exponential in depth. Nothing here bounds memory or time: callers must keep
//! `max_depth` small (4 at most is a sane ceiling) and may use
//! [`count_candidates`] to check the budget up front.

use std::collections::HashSet;
use std::fmt;

use log::{debug, info};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::ast::{Formula, NodeKind};
use crate::tautology::check_tautology;

/// Default number of ranked results kept.
pub const MAX_RESULTS: usize = 64;

/// A tautology found by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFormula {
    /// Structural key, see [`Formula::canonical_key`].
    pub key: String,
    /// Printed form, see [`Formula`]'s `Display`.
    pub text: String,
    pub formula: Formula,
}

impl GeneratedFormula {
    fn new(formula: Formula) -> Self {
        GeneratedFormula {
            key: formula.canonical_key(),
            text: formula.to_string(),
            formula,
        }
    }
}

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub max_depth: u32,
    pub atoms: Vec<String>,
    /// Ranked results kept (default: [`MAX_RESULTS`])
    pub max_results: usize,
}

impl GeneratorConfig {
    /// # Panics
    ///
    /// Panics if `atoms` is empty, contains duplicates, or contains a name
    /// that is not an identifier. Use [`check_atoms`] to validate untrusted input first.
    pub fn new<S: Into<String>>(max_depth: u32, atoms: impl IntoIterator<Item = S>) -> Self {
        let atoms: Vec<String> = atoms.into_iter().map(Into::into).collect();
        if let Err(e) = check_atoms(&atoms) {
            panic!("{}", e);
        }
        GeneratorConfig {
            max_depth,
            atoms,
            max_results: MAX_RESULTS,
        }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// Why a list of atoms cannot seed the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtomError {
    Empty,
    NotIdentifier(String),
    Duplicate(String),
}

impl fmt::Display for AtomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtomError::Empty => write!(f, "At least one atom is required"),
            AtomError::NotIdentifier(atom) => write!(f, "Atom {:?} is not an identifier", atom),
            AtomError::Duplicate(atom) => write!(f, "Duplicate atom {:?}", atom),
        }
    }
}

impl std::error::Error for AtomError {}

/// Checks that `atoms` is non-empty, distinct, and made of identifiers.
pub fn check_atoms(atoms: &[String]) -> Result<(), AtomError> {
    if atoms.is_empty() {
        return Err(AtomError::Empty);
    }
    let mut seen = HashSet::new();
    for atom in atoms {
        if !is_identifier(atom) {
            return Err(AtomError::NotIdentifier(atom.clone()));
        }
        if !seen.insert(atom.as_str()) {
            return Err(AtomError::Duplicate(atom.clone()));
        }
    }
    Ok(())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
        _ => false,
    }
}

/// Counters collected during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Candidates built, duplicates included.
    pub raw_candidates: usize,
    /// Candidates that survived structural dedup (and were evaluated).
    pub unique_candidates: usize,
    /// Unique candidates that are tautologies.
    pub tautologies: usize,
}

/// Result of [`Generator::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub formulas: Vec<GeneratedFormula>,
    pub stats: GenerationStats,
}

/// Unique candidates in generation order, with the keys seen so far.
#[derive(Debug, Default)]
struct Pool {
    formulas: Vec<Formula>,
    seen: HashSet<String>,
    raw: usize,
}

impl Pool {
    fn offer(&mut self, formula: Formula) {
        self.raw += 1;
        if self.seen.insert(formula.canonical_key()) {
            self.formulas.push(formula);
        }
    }
}

pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Generator { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn build_pool(&self) -> Pool {
        let mut pool = Pool::default();
        for atom in &self.config.atoms {
            pool.offer(Formula::var(atom.as_str()));
        }

        for depth in 1..=self.config.max_depth {
            let sub = pool.formulas.clone();
            for a in &sub {
                pool.offer(Formula::not(a.clone()));
            }
            for kind in NodeKind::BINARY {
                for a in &sub {
                    for b in &sub {
                        pool.offer(Formula::binary(kind, a.clone(), b.clone()));
                    }
                }
            }
            debug!(
                "depth {}: {} raw candidates, {} unique",
                depth,
                pool.raw,
                pool.formulas.len()
            );
        }

        pool
    }

    /// Unique candidates up to `max_depth`, in generation order.
    pub fn candidates(&self) -> Vec<Formula> {
        self.build_pool().formulas
    }

    pub fn run(&self) -> Generation {
        let pool = self.build_pool();
        let unique_candidates = pool.formulas.len();

        let found: Vec<GeneratedFormula> = pool
            .formulas
            .into_iter()
            .filter(|f| !f.vars().is_empty())
            .filter(|f| check_tautology(f).is_tautology())
            .map(GeneratedFormula::new)
            .collect();
        let tautologies = found.len();

        let mut printed = HashSet::new();
        let mut formulas: Vec<GeneratedFormula> = found
            .into_iter()
            .filter(|g| printed.insert(g.text.clone()))
            .collect();
        formulas.sort_by_key(|g| g.text.chars().count());
        formulas.truncate(self.config.max_results);

        let stats = GenerationStats {
            raw_candidates: pool.raw,
            unique_candidates,
            tautologies,
        };
        info!(
            "generated {} unique candidates ({} raw), {} tautologies, kept {}",
            stats.unique_candidates,
            stats.raw_candidates,
            stats.tautologies,
            formulas.len()
        );

        Generation { formulas, stats }
    }
}

/// Ranked tautologies over `atoms` up to `max_depth`, at most [`MAX_RESULTS`].
///
/// # Panics
///
/// See [`GeneratorConfig::new`].
pub fn generate<S: Into<String>>(max_depth: u32, atoms: impl IntoIterator<Item = S>) -> Vec<GeneratedFormula> {
    Generator::new(GeneratorConfig::new(max_depth, atoms)).run().formulas
}

/// All structurally distinct formulas over `atoms` up to `max_depth`.
pub fn enumerate<S: Into<String>>(max_depth: u32, atoms: impl IntoIterator<Item = S>) -> Vec<Formula> {
    Generator::new(GeneratorConfig::new(max_depth, atoms)).candidates()
}

/// Number of unique candidates a run over `num_atoms` atoms will evaluate.
///
/// ```text
/// T(0) = n
/// T(d) = n + T(d-1) + 4·T(d-1)²
/// ```
pub fn count_candidates(max_depth: u32, num_atoms: usize) -> BigUint {
    let n = BigUint::from(num_atoms);
    let mut total = n.clone();
    for _ in 0..max_depth {
        total = &n + &total + BigUint::from(4u32) * &total * &total;
    }
    total
}
