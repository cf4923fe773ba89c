//! Index-ordered table of lattice nodes.

use serde::{Deserialize, Serialize};

use crate::numbering::NodeIndex;

/// One node of the priced lattice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeNode {
    /// Display index of the node.
    pub index: NodeIndex,
    /// Time step, `0..=N`.
    pub step: usize,
    /// Number of up moves taken to reach the node, `0..=step`.
    pub up_moves: usize,
    /// Underlying price `S0 * u^j * d^(t-j)`.
    pub price: f64,
    /// Option value at the node.
    pub payoff: f64,
}

/// Nodes of a priced lattice, keyed by [`NodeIndex`].
///
/// Storage is ordered by index, so node `i` lives at offset `i - 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeTable {
    periods: usize,
    nodes: Vec<LatticeNode>,
}

impl NodeTable {
    /// Builds the table from nodes produced most-advanced step first.
    ///
    /// The first produced node receives the highest index and the last one
    /// (the root) receives index 1.
    pub(crate) fn from_backward_sequence(periods: usize, produced: Vec<LatticeNode>) -> Self {
        let nodes: Vec<LatticeNode> = produced.into_iter().rev().collect();
        debug_assert!(
            nodes
                .iter()
                .enumerate()
                .all(|(offset, node)| node.index.get() == offset + 1),
            "node numbering does not match production order"
        );
        Self { periods, nodes }
    }

    /// Number of time steps in the lattice.
    #[must_use]
    pub fn periods(&self) -> usize {
        self.periods
    }

    /// Number of nodes, `(N+1)(N+2)/2`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the table holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node by index.
    #[must_use]
    pub fn get(&self, index: NodeIndex) -> Option<&LatticeNode> {
        self.nodes.get(index.offset())
    }

    /// The root node (index 1).
    ///
    /// # Panics
    ///
    /// Panics if the table is empty, which a successful pricing never
    /// produces.
    #[must_use]
    pub fn root(&self) -> &LatticeNode {
        &self.nodes[0]
    }

    /// All nodes in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = &LatticeNode> {
        self.nodes.iter()
    }

    /// Nodes at `step`, highest up-count first. Empty beyond maturity.
    #[must_use]
    pub fn step(&self, step: usize) -> &[LatticeNode] {
        if step > self.periods {
            return &[];
        }
        let range = NodeIndex::step_range(step);
        &self.nodes[range.start() - 1..*range.end()]
    }

    /// Nodes at maturity.
    #[must_use]
    pub fn leaves(&self) -> &[LatticeNode] {
        self.step(self.periods)
    }
}

impl<'a> IntoIterator for &'a NodeTable {
    type Item = &'a LatticeNode;
    type IntoIter = std::slice::Iter<'a, LatticeNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
