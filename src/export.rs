//! JSON serialization types for analysis snapshots.
//!
//! A [`Snapshot`] records one analysis of one input: the text, whether it
//! parsed, the formula tree, the tautology verdict with its falsifying rows,
//! and the generated tautologies shown alongside it.

use serde::{Deserialize, Serialize};

use crate::ast::Formula;
use crate::eval::Assignment;
use crate::generate::GeneratedFormula;
use crate::parser::parse_formula;
use crate::tautology::check_tautology;

/// JSON representation of a formula tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FormulaJson {
    Var { name: String },
    Not { operand: Box<FormulaJson> },
    And { left: Box<FormulaJson>, right: Box<FormulaJson> },
    Or { left: Box<FormulaJson>, right: Box<FormulaJson> },
    Implies { left: Box<FormulaJson>, right: Box<FormulaJson> },
    Iff { left: Box<FormulaJson>, right: Box<FormulaJson> },
}

impl From<&Formula> for FormulaJson {
    fn from(formula: &Formula) -> Self {
        let pair = |l: &Formula, r: &Formula| (Box::new(FormulaJson::from(l)), Box::new(FormulaJson::from(r)));
        match formula {
            Formula::Var(name) => FormulaJson::Var { name: name.clone() },
            Formula::Not(e) => FormulaJson::Not {
                operand: Box::new(FormulaJson::from(e.as_ref())),
            },
            Formula::And(l, r) => {
                let (left, right) = pair(l, r);
                FormulaJson::And { left, right }
            }
            Formula::Or(l, r) => {
                let (left, right) = pair(l, r);
                FormulaJson::Or { left, right }
            }
            Formula::Implies(l, r) => {
                let (left, right) = pair(l, r);
                FormulaJson::Implies { left, right }
            }
            Formula::Iff(l, r) => {
                let (left, right) = pair(l, r);
                FormulaJson::Iff { left, right }
            }
        }
    }
}

impl From<&FormulaJson> for Formula {
    fn from(json: &FormulaJson) -> Self {
        match json {
            FormulaJson::Var { name } => Formula::var(name.as_str()),
            FormulaJson::Not { operand } => Formula::not(operand.as_ref().into()),
            FormulaJson::And { left, right } => Formula::and(left.as_ref().into(), right.as_ref().into()),
            FormulaJson::Or { left, right } => Formula::or(left.as_ref().into(), right.as_ref().into()),
            FormulaJson::Implies { left, right } => Formula::implies(left.as_ref().into(), right.as_ref().into()),
            FormulaJson::Iff { left, right } => Formula::iff(left.as_ref().into(), right.as_ref().into()),
        }
    }
}

/// JSON representation of a generated tautology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedJson {
    pub key: String,
    pub text: String,
    pub ast: FormulaJson,
}

impl From<&GeneratedFormula> for GeneratedJson {
    fn from(g: &GeneratedFormula) -> Self {
        GeneratedJson {
            key: g.key.clone(),
            text: g.text.clone(),
            ast: FormulaJson::from(&g.formula),
        }
    }
}

impl From<&GeneratedJson> for GeneratedFormula {
    fn from(json: &GeneratedJson) -> Self {
        GeneratedFormula {
            key: json.key.clone(),
            text: json.text.clone(),
            formula: Formula::from(&json.ast),
        }
    }
}

/// One exported analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub input: String,
    pub parsed: bool,
    /// Parse error message when `parsed` is false.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
    pub ast: Option<FormulaJson>,
    pub is_tautology: bool,
    pub falsifying_assignments: Vec<Assignment>,
    pub generated: Vec<GeneratedJson>,
}

impl Snapshot {
    /// Parses and checks `input`, attaching `generated`.
    ///
    /// A parse failure yields `parsed = false`, no tree, `is_tautology = false`
    /// and no falsifying rows.
    pub fn build(input: &str, generated: &[GeneratedFormula]) -> Self {
        let generated = generated.iter().map(GeneratedJson::from).collect();
        match parse_formula(input) {
            Ok(formula) => {
                let result = check_tautology(&formula);
                Snapshot {
                    input: input.to_string(),
                    parsed: true,
                    error: None,
                    ast: Some(FormulaJson::from(&formula)),
                    is_tautology: result.is_tautology(),
                    falsifying_assignments: result.falsifying_assignments().to_vec(),
                    generated,
                }
            }
            Err(e) => Snapshot {
                input: input.to_string(),
                parsed: false,
                error: Some(e.to_string()),
                ast: None,
                is_tautology: false,
                falsifying_assignments: vec![],
                generated,
            },
        }
    }

    /// The parsed formula, if any.
    pub fn formula(&self) -> Option<Formula> {
        self.ast.as_ref().map(Formula::from)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Reads a snapshot written by [`to_json`][Snapshot::to_json].
    ///
    /// The recursion limit of `serde_json` is lifted and the stack grows on
    /// demand, so any tree [`to_json`][Snapshot::to_json] writes reads back.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut de = serde_json::Deserializer::from_str(json);
        de.disable_recursion_limit();
        let snapshot = Snapshot::deserialize(serde_stacker::Deserializer::new(&mut de))?;
        de.end()?;
        Ok(snapshot)
    }
}
