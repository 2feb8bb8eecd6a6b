//! Tree layout for rendering formulas.
//!
//! Leaf-count-weighted tidy layout. Each node owns a horizontal span `[x0, x1]`
//! and sits at its midpoint. A binary node splits its span between its children
//! in proportion to their leaf counts; a negation hands its whole span to its
//! operand. Sibling spans are therefore disjoint, and width grows with the
//! number of leaves rather than the number of nodes.
//!
//! ```text
//! root span  = [0, max(leaves(root) * unit_leaf_width, min_width)]
//! left span  = [x0, x0 + (x1 - x0) * leaves(left) / leaves(node)]
//! right span = [that, x1]
//! x          = (x0 + x1) / 2
//! y          = base_offset + depth * level_height
//! ```
//!
//! Node ids are assigned in pre-order, starting at 0, fresh on every call.

use crate::ast::{Formula, NodeKind};

/// Layout constants.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal room per leaf (default: 80)
    pub unit_leaf_width: f64,
    /// Minimum total width (default: 320)
    pub min_width: f64,
    /// Vertical distance between levels (default: 80)
    pub level_height: f64,
    /// Top margin for the root (default: 40)
    pub base_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            unit_leaf_width: 80.0,
            min_width: 320.0,
            level_height: 80.0,
            base_offset: 40.0,
        }
    }
}

impl LayoutConfig {
    pub fn with_unit_leaf_width(mut self, width: f64) -> Self {
        self.unit_leaf_width = width;
        self
    }

    pub fn with_min_width(mut self, width: f64) -> Self {
        self.min_width = width;
        self
    }

    pub fn with_level_height(mut self, height: f64) -> Self {
        self.level_height = height;
        self
    }

    pub fn with_base_offset(mut self, offset: f64) -> Self {
        self.base_offset = offset;
        self
    }
}

/// A formula node with its computed position.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedNode {
    pub id: usize,
    pub kind: NodeKind,
    /// Variable name for leaves, connective glyph otherwise.
    pub label: String,
    pub depth: usize,
    pub leaves: usize,
    pub x: f64,
    pub y: f64,
    /// Horizontal span `[x0, x1]` owned by this subtree.
    pub span: (f64, f64),
    pub children: Vec<PositionedNode>,
}

impl PositionedNode {
    pub fn width(&self) -> f64 {
        self.span.1 - self.span.0
    }

    /// Pre-order traversal of this subtree.
    pub fn iter(&self) -> impl Iterator<Item = &PositionedNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

/// A laid-out formula tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub root: PositionedNode,
    pub width: f64,
    pub height: f64,
}

impl Layout {
    /// All nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = &PositionedNode> {
        self.root.iter()
    }

    /// Parent-child id pairs, grouped by parent in pre-order.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.nodes()
            .flat_map(|node| node.children.iter().map(move |child| (node.id, child.id)))
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }
}

/// Appends the leaf count of every subtree of `formula` in pre-order and
/// returns the count for `formula` itself.
fn leaf_counts(formula: &Formula, out: &mut Vec<usize>) -> usize {
    let slot = out.len();
    out.push(0);
    let leaves = match formula {
        Formula::Var(_) => 1,
        Formula::Not(e) => leaf_counts(e, out),
        Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) | Formula::Iff(l, r) => {
            leaf_counts(l, out) + leaf_counts(r, out)
        }
    };
    out[slot] = leaves;
    leaves
}

struct Placer<'a> {
    config: &'a LayoutConfig,
    /// Leaf counts indexed by pre-order id.
    leaves: Vec<usize>,
    next_id: usize,
    max_depth: usize,
}

impl Placer<'_> {
    fn place(&mut self, formula: &Formula, depth: usize, x0: f64, x1: f64) -> PositionedNode {
        let id = self.next_id;
        self.next_id += 1;
        let leaves = self.leaves[id];
        self.max_depth = self.max_depth.max(depth);

        let kind = formula.kind();
        let children = match formula {
            Formula::Var(_) => vec![],
            Formula::Not(e) => vec![self.place(e, depth + 1, x0, x1)],
            Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) | Formula::Iff(l, r) => {
                // The left child is the next node in pre-order.
                let mid = x0 + (x1 - x0) * self.leaves[id + 1] as f64 / leaves as f64;
                let left = self.place(l, depth + 1, x0, mid);
                let right = self.place(r, depth + 1, mid, x1);
                vec![left, right]
            }
        };
        let label = match formula {
            Formula::Var(name) => name.clone(),
            _ => kind.symbol().unwrap_or_default().to_string(),
        };

        PositionedNode {
            id,
            kind,
            label,
            depth,
            leaves,
            x: (x0 + x1) / 2.0,
            y: self.config.base_offset + depth as f64 * self.config.level_height,
            span: (x0, x1),
            children,
        }
    }
}

/// Lays out `formula` with the given constants.
pub fn layout_with_config(formula: &Formula, config: &LayoutConfig) -> Layout {
    let mut counts = Vec::with_capacity(formula.size());
    let leaves = leaf_counts(formula, &mut counts);
    let width = (leaves as f64 * config.unit_leaf_width).max(config.min_width);
    let mut placer = Placer {
        config,
        leaves: counts,
        next_id: 0,
        max_depth: 0,
    };
    let root = placer.place(formula, 0, 0.0, width);
    let height = 2.0 * config.base_offset + placer.max_depth as f64 * config.level_height;
    Layout { root, width, height }
}

/// Lays out `formula` with [`LayoutConfig::default`].
pub fn layout(formula: &Formula) -> Layout {
    layout_with_config(formula, &LayoutConfig::default())
}
