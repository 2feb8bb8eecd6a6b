//! End-to-end tests through the public API.
//!
//! Tests cover parsing, tautology checking, layout and generation.

use std::collections::HashSet;

use taut_rs::generate::{enumerate, Generator, GeneratorConfig};
use taut_rs::tautology::{assignments, truth_table};
use taut_rs::{check_tautology, generate, layout, parse_formula, Assignment, Expected, Formula, ParseError};

fn tautology(text: &str) -> bool {
    check_tautology(&parse_formula(text).unwrap()).is_tautology()
}

// ─── Parsing ───────────────────────────────────────────────────────────────────

#[test]
fn implication_chains_to_the_right() {
    let f = parse_formula("A -> B -> C").unwrap();
    let a = Formula::var("A");
    let b = Formula::var("B");
    let c = Formula::var("C");
    assert_eq!(f, Formula::implies(a.clone(), Formula::implies(b.clone(), c.clone())));
    assert_ne!(f, Formula::implies(Formula::implies(a, b), c));
}

#[test]
fn unbalanced_group_fails() {
    let err = parse_formula("(P & Q").unwrap_err();
    assert!(matches!(err, ParseError::Unexpected { expected: Expected::ClosingParen, found: None }));
}

#[test]
fn trailing_token_fails() {
    let err = parse_formula("P Q").unwrap_err();
    assert!(matches!(err, ParseError::Unexpected { expected: Expected::EndOfInput, found: Some(_) }));
}

#[test]
fn printed_form_reparses() {
    for text in [
        "P",
        "!P",
        "!!P",
        "(P -> Q) & P -> Q",
        "A <-> B <-> C",
        "!(a | b & c) -> ~d ≡ e",
        "x1 ∧ x_2 ∨ ¬x3",
    ] {
        let f = parse_formula(text).unwrap();
        let reparsed = parse_formula(&f.to_string()).unwrap();
        assert_eq!(reparsed.canonical_key(), f.canonical_key(), "round-trip of {:?}", text);
    }
}

// ─── Tautology checking ────────────────────────────────────────────────────────

#[test]
fn excluded_middle() {
    assert!(tautology("P | !P"));
}

#[test]
fn contradiction_falsified_everywhere() {
    let result = check_tautology(&parse_formula("P & !P").unwrap());
    assert!(!result.is_tautology());
    assert_eq!(result.falsifying_assignments().len(), 2);
    assert_eq!(result.falsifying_assignments()[0], Assignment::new().with("P", false));
    assert_eq!(result.falsifying_assignments()[1], Assignment::new().with("P", true));
}

#[test]
fn known_tautologies() {
    assert!(tautology("(P -> Q) & P -> Q"));
    assert!(tautology("P | Q | !P"));
    assert!(tautology("!(P & Q) <-> !P | !Q"));
    assert!(tautology("(P -> Q) <-> (!Q -> !P)"));
    assert!(tautology("P -> Q -> P"));
}

#[test]
fn modus_ponens_true_on_every_row() {
    let f = parse_formula("(P -> Q) & P -> Q").unwrap();
    let table = truth_table(&f);
    assert_eq!(table.rows().len(), 4);
    assert!(table.rows().iter().all(|(_, value)| *value));
}

#[test]
fn implication_has_one_counterexample() {
    let result = check_tautology(&parse_formula("P -> Q").unwrap());
    assert_eq!(
        result.falsifying_assignments(),
        &[Assignment::new().with("P", true).with("Q", false)]
    );
}

#[test]
fn verdict_matches_falsifying_rows() {
    for text in ["P", "P | !P", "P -> Q", "(P <-> Q) | (P <-> !Q)", "a & b & c"] {
        let result = check_tautology(&parse_formula(text).unwrap());
        assert_eq!(result.is_tautology(), result.falsifying_assignments().is_empty());
    }
}

#[test]
fn enumeration_size_is_two_to_the_k() {
    for (text, k) in [("P", 1), ("P & Q", 2), ("a | b -> c & a", 3), ("(a <-> b) & (c <-> d)", 4)] {
        let f = parse_formula(text).unwrap();
        assert_eq!(assignments(&f).count(), 1 << k);
        assert_eq!(truth_table(&f).rows().len(), 1 << k);
    }
}

// ─── Layout ────────────────────────────────────────────────────────────────────

#[test]
fn sibling_spans_do_not_overlap() {
    let f = parse_formula("((a & b) -> !c) <-> (d | (e & f & g))").unwrap();
    let l = layout(&f);
    for node in l.nodes() {
        if let [left, right] = node.children.as_slice() {
            assert!(left.span.1 <= right.span.0);
            assert!(left.span.0 >= node.span.0 && right.span.1 <= node.span.1);
        }
    }
}

#[test]
fn width_proportional_to_leaves() {
    let f = parse_formula("((a & b) -> !c) <-> (d | (e & f & g))").unwrap();
    let l = layout(&f);
    let per_leaf = l.width / l.root.leaves as f64;
    for node in l.nodes() {
        assert!((node.width() - per_leaf * node.leaves as f64).abs() < 1e-9);
    }
}

#[test]
fn layout_ids_are_preorder() {
    let f = parse_formula("(a & b) | !c").unwrap();
    let l = layout(&f);
    let ids: Vec<usize> = l.nodes().map(|n| n.id).collect();
    assert_eq!(ids, (0..f.size()).collect::<Vec<_>>());
}

// ─── Generation ────────────────────────────────────────────────────────────────

#[test]
fn generated_keys_are_unique() {
    let found = generate(1, ["P"]);
    let keys: HashSet<&str> = found.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys.len(), found.len());
    for g in &found {
        assert!(g.formula.is_tautology());
        assert!(!g.formula.vars().is_empty());
        assert_eq!(g.key, g.formula.canonical_key());
    }
}

#[test]
fn generation_is_deterministic() {
    let first = generate(2, ["P", "Q"]);
    let second = generate(2, ["P", "Q"]);
    assert_eq!(first, second);
}

#[test]
fn candidates_are_structurally_distinct() {
    let candidates = enumerate(2, ["P", "Q"]);
    let keys: HashSet<String> = candidates.iter().map(Formula::canonical_key).collect();
    assert_eq!(keys.len(), candidates.len());
    assert!(candidates.iter().all(|f| f.depth() <= 2));
}

#[test]
fn generated_formulas_reparse() {
    let generation = Generator::new(GeneratorConfig::new(2, ["P", "Q"])).run();
    for g in &generation.formulas {
        let reparsed = parse_formula(&g.text).unwrap();
        assert_eq!(reparsed, g.formula);
    }
}
