//! Graphviz DOT rendering of a priced lattice.

use std::fmt;
use std::io::Write;

use bopm_config::DisplayConfig;
use bopm_core::lattice::LatticePricing;
use bopm_core::linker::link_pairs;

use crate::error::RenderResult;
use crate::labels::{label_edges, LabeledEdge, NodeLabel};

/// Directed graph of the lattice with price/payoff labels on every node.
///
/// Output is plain DOT text; pipe it to `dot -Tpdf` or `dot -Tsvg` for a
/// document.
#[derive(Debug, Clone)]
pub struct DotGraph {
    root: NodeLabel,
    edges: Vec<LabeledEdge>,
    rank_dir: String,
    font: String,
    node_width: f64,
}

impl DotGraph {
    /// Labels every lattice edge of `pricing` using `display` settings.
    pub fn new(pricing: &LatticePricing, display: &DisplayConfig) -> RenderResult<Self> {
        let edges = label_edges(
            &pricing.nodes,
            &link_pairs(pricing.nodes.periods()),
            display.precision,
        )?;
        tracing::debug!(edges = edges.len(), "built lattice graph");

        Ok(Self {
            root: NodeLabel::new(pricing.nodes.root(), display.precision),
            edges,
            rank_dir: display.rank_dir.clone(),
            font: display.font.clone(),
            node_width: display.node_width,
        })
    }

    /// Labelled edges in linker order.
    #[must_use]
    pub fn edges(&self) -> &[LabeledEdge] {
        &self.edges
    }

    /// Writes the DOT text to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> RenderResult<()> {
        write!(writer, "{self}")?;
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Display for DotGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        writeln!(f, "    rankdir=\"{}\"", self.rank_dir)?;
        writeln!(
            f,
            "    node [shape=\"box\" width=\"{}\" fontname=\"{}\"]",
            self.node_width, self.font
        )?;
        if self.edges.is_empty() {
            writeln!(f, "    \"{}\";", self.root.dot_text())?;
        }
        for edge in &self.edges {
            writeln!(
                f,
                "    \"{}\" -> \"{}\";",
                edge.parent.dot_text(),
                edge.child.dot_text()
            )?;
        }
        writeln!(f, "}}")
    }
}
