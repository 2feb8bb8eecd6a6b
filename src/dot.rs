//! Layout to DOT (Graphviz) conversion.
//!
//! Renders a [`Layout`] as an undirected graph. Nodes are keyed by their layout
//! ids and labelled with the variable name or connective glyph. With
//! `pin_positions` enabled, every node carries a `pos="x,y!"` attribute so
//! `neato -n` reproduces the computed layout exactly (y is flipped, since
//! Graphviz grows upwards).
//!
//! # Examples
//!
//! ```
//! use taut_rs::layout::layout;
//! use taut_rs::parser::parse_formula;
//!
//! let f = parse_formula("P | !P").unwrap();
//! let dot = layout(&f).to_dot().unwrap();
//! assert!(dot.starts_with("graph {"));
//! // Render with: neato -n -Tpng formula.dot -o formula.png
//! ```

use crate::ast::NodeKind;
use crate::layout::Layout;

/// Configuration options for DOT output generation.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for connective nodes (default: "circle")
    pub node_shape: &'static str,
    /// Shape for variable nodes (default: "box")
    pub leaf_shape: &'static str,
    /// Style for parent-child edges (default: "solid")
    pub edge_style: &'static str,
    /// Whether to emit pinned `pos` attributes (default: true)
    pub pin_positions: bool,
    /// Points per layout unit (default: 1.0)
    pub scale: f64,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            node_shape: "circle",
            leaf_shape: "box",
            edge_style: "solid",
            pin_positions: true,
            scale: 1.0,
        }
    }
}

impl Layout {
    /// Converts the layout to DOT format with default settings.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the layout to DOT format with custom configuration.
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        use std::fmt::Write as _;

        let mut dot = String::new();
        writeln!(dot, "graph {{")?;
        writeln!(dot, "node [shape={}];", config.node_shape)?;

        for node in self.nodes() {
            let label = node.label.replace('"', "\\\"");
            write!(dot, "{} [label=\"{}\"", node.id, label)?;
            if node.kind == NodeKind::Var {
                write!(dot, ", shape={}", config.leaf_shape)?;
            }
            if config.pin_positions {
                write!(
                    dot,
                    ", pos=\"{},{}!\"",
                    node.x * config.scale,
                    (self.height - node.y) * config.scale
                )?;
            }
            writeln!(dot, "];")?;
        }

        for (parent, child) in self.edges() {
            writeln!(dot, "{} -- {} [style={}];", parent, child, config.edge_style)?;
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}
