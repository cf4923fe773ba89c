//! Joining linker edges with priced nodes.

use serde::Serialize;
use std::fmt;

use bopm_core::lattice::{round_to, LatticeNode, NodeTable};
use bopm_core::linker::{Branch, NodeEdge};
use bopm_core::numbering::NodeIndex;

use crate::error::{RenderError, RenderResult};

/// Formats `value` rounded to `precision` decimals with trailing zeros.
#[must_use]
pub fn format_value(value: f64, precision: u32) -> String {
    format!("{:.prec$}", round_to(value, precision), prec = precision as usize)
}

/// Price and payoff of one node, rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeLabel {
    /// Node index.
    pub index: usize,
    /// Rounded underlying price.
    pub price: String,
    /// Rounded option value.
    pub payoff: String,
}

impl NodeLabel {
    /// Builds the label of `node` at `precision` decimals.
    #[must_use]
    pub fn new(node: &LatticeNode, precision: u32) -> Self {
        Self {
            index: node.index.get(),
            price: format_value(node.price, precision),
            payoff: format_value(node.payoff, precision),
        }
    }

    /// Graphviz label text with left-justified line breaks.
    #[must_use]
    pub fn dot_text(&self) -> String {
        format!(
            "Price {i}: {price}\\lPayoff {i}: {payoff}\\l",
            i = self.index,
            price = self.price,
            payoff = self.payoff
        )
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Price {i}: {}, Payoff {i}: {}",
            self.price,
            self.payoff,
            i = self.index
        )
    }
}

/// An edge with both endpoints labelled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledEdge {
    /// Parent node.
    pub parent: NodeLabel,
    /// Child node.
    pub child: NodeLabel,
    /// Move taken along the edge.
    pub branch: Branch,
}

fn lookup(nodes: &NodeTable, index: NodeIndex) -> RenderResult<&LatticeNode> {
    nodes.get(index).ok_or(RenderError::MissingNode {
        index: index.get(),
    })
}

/// Attaches rounded price/payoff labels to every edge.
///
/// Fails if an edge references a node missing from `nodes`, which happens
/// when the edges were linked for more periods than the table was priced
/// with.
pub fn label_edges(
    nodes: &NodeTable,
    edges: &[NodeEdge],
    precision: u32,
) -> RenderResult<Vec<LabeledEdge>> {
    edges
        .iter()
        .map(|edge| {
            Ok(LabeledEdge {
                parent: NodeLabel::new(lookup(nodes, edge.parent)?, precision),
                child: NodeLabel::new(lookup(nodes, edge.child)?, precision),
                branch: edge.branch,
            })
        })
        .collect()
}
