//! # taut-rs: Propositional tautology checking and search
//!
//! **`taut-rs`** parses propositional formulas, decides whether they are
//! tautologies by exhaustive truth-table enumeration, lays formula trees out
//! for rendering, and searches a bounded formula space for tautologies.
//!
//! Everything is single-threaded, synchronous and pure: each call builds fresh
//! data and never mutates a formula after construction.
//!
//! ## Basic Usage
//!
//! ```rust
//! use taut_rs::{check_tautology, parse_formula};
//!
//! let f = parse_formula("(P -> Q) & P -> Q").unwrap();
//! assert!(check_tautology(&f).is_tautology());
//!
//! let g = parse_formula("P → Q").unwrap();
//! let result = check_tautology(&g);
//! assert_eq!(result.falsifying_assignments().len(), 1);
//! assert_eq!(result.falsifying_assignments()[0].to_string(), "{P=1, Q=0}");
//! ```
//!
//! ## Surface Syntax
//!
//! Variables match `[A-Za-z][A-Za-z0-9_]*`. Connectives, loosest first:
//! `<->` (`↔`, `≡`, `←→`), `->` (`→`), `|` (`∨`), `&` (`∧`), and prefix
//! `!` (`~`, `¬`). Binary connectives chain to the right.
//! Printed formulas use the Unicode glyphs and parenthesize every binary
//! subexpression, and always parse back to the same tree.
//!
//! ## Core Components
//!
//! - **[`lexer`]** / **[`parser`]**: text to [`Formula`].
//! - **[`eval`]** / **[`tautology`]**: evaluation and truth tables.
//! - **[`layout`]** / **[`dot`]**: node positions and Graphviz output.
//! - **[`generate`]**: bounded tautology search.
//! - **[`export`]**: JSON snapshots.

pub mod ast;
pub mod dot;
pub mod error;
pub mod eval;
pub mod export;
pub mod generate;
pub mod layout;
pub mod lexer;
pub mod ops;
pub mod parser;
pub mod tautology;

pub use ast::{Formula, NodeKind};
pub use error::{Expected, LexError, ParseError};
pub use eval::{evaluate, Assignment};
pub use generate::{generate, GeneratedFormula};
pub use layout::{layout, Layout, PositionedNode};
pub use parser::parse_formula;
pub use tautology::{check_tautology, TautologyResult};
