//! Node Graph Linker.
//!
//! Enumerates the parent/child edges of the lattice from the period count
//! alone, using the numbering in [`crate::numbering`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::numbering::NodeIndex;

/// Which move leads from the parent to the child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    /// Underlying moves up by `u`.
    Up,
    /// Underlying moves down by `d`.
    Down,
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::Up => write!(f, "up"),
            Branch::Down => write!(f, "down"),
        }
    }
}

/// Directed edge between two lattice nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeEdge {
    /// Node at step `t`.
    pub parent: NodeIndex,
    /// Node at step `t + 1`.
    pub child: NodeIndex,
    /// Move taken along this edge.
    pub branch: Branch,
}

impl NodeEdge {
    /// `(parent, child)` as raw indices.
    #[must_use]
    pub fn pair(&self) -> (usize, usize) {
        (self.parent.get(), self.child.get())
    }
}

/// Number of edges in a lattice with `periods` steps: `N(N+1)`.
#[must_use]
pub fn edge_count(periods: usize) -> usize {
    periods * (periods + 1)
}

/// Lists every parent/child edge of a lattice with `periods` steps.
///
/// Steps are visited from the root outwards and nodes within a step in
/// ascending index order. Each parent contributes its up edge
/// `(n, n + t + 1)` followed by its down edge `(n, n + t + 2)`.
/// Zero periods yield no edges.
#[must_use]
pub fn link_pairs(periods: usize) -> Vec<NodeEdge> {
    let mut edges = Vec::with_capacity(edge_count(periods));
    for step in 0..periods {
        // Most up moves first is ascending index order.
        for up_moves in (0..=step).rev() {
            let parent = NodeIndex::from_coords(step, up_moves);
            edges.push(NodeEdge {
                parent,
                child: parent.up_child(),
                branch: Branch::Up,
            });
            edges.push(NodeEdge {
                parent,
                child: parent.down_child(),
                branch: Branch::Down,
            });
        }
    }
    tracing::trace!(periods, edges = edges.len(), "linked lattice nodes");
    edges
}
