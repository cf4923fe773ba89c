//! Canonical node numbering shared by the pricer and the graph linker.
//!
//! Nodes are numbered from 1 at the root, step by step towards maturity.
//! Within a step the node with the most up moves comes first:
//!
//! ```text
//!                 (2,2) = 4
//!        (1,1) = 2
//! (0,0) = 1       (2,1) = 5
//!        (1,0) = 3
//!                 (2,0) = 6
//! ```
//!
//! With this layout the children of node `n` at step `t` are `n + t + 1`
//! (up) and `n + t + 2` (down), and two neighbouring parents share their
//! middle child, so the edges describe the recombining lattice exactly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Total number of nodes in a lattice with `periods` steps: `(N+1)(N+2)/2`.
#[must_use]
pub fn node_count(periods: usize) -> usize {
    (periods + 1) * (periods + 2) / 2
}

/// Number of nodes strictly before `step`: `t(t+1)/2`.
fn nodes_before(step: usize) -> usize {
    step * (step + 1) / 2
}

/// 1-based position of a lattice node in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// The root node.
    pub const ROOT: NodeIndex = NodeIndex(1);

    /// Wraps a raw 1-based index. Returns `None` for zero.
    #[must_use]
    pub fn new(index: usize) -> Option<Self> {
        (index >= 1).then_some(Self(index))
    }

    /// Index of the node reached after `up_moves` up moves in `step` steps.
    ///
    /// # Panics
    ///
    /// Panics if `up_moves > step`.
    #[must_use]
    pub fn from_coords(step: usize, up_moves: usize) -> Self {
        assert!(
            up_moves <= step,
            "up_moves ({up_moves}) cannot exceed step ({step})"
        );
        Self(nodes_before(step) + 1 + (step - up_moves))
    }

    /// Contiguous index run of all nodes at `step`.
    #[must_use]
    pub fn step_range(step: usize) -> RangeInclusive<usize> {
        let first = nodes_before(step) + 1;
        first..=first + step
    }

    /// The raw 1-based value.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }

    /// Zero-based offset, handy for indexing into index-ordered storage.
    #[must_use]
    pub fn offset(self) -> usize {
        self.0 - 1
    }

    /// Time step this node belongs to.
    #[must_use]
    pub fn step(self) -> usize {
        // Largest t with t(t+1)/2 <= offset, seeded by the triangular root.
        let offset = self.offset();
        let mut step = ((((8 * offset + 1) as f64).sqrt() as usize).saturating_sub(1)) / 2;
        while nodes_before(step + 1) <= offset {
            step += 1;
        }
        while nodes_before(step) > offset {
            step -= 1;
        }
        step
    }

    /// `(step, up_moves)` lattice coordinates.
    #[must_use]
    pub fn coords(self) -> (usize, usize) {
        let step = self.step();
        let position = self.0 - nodes_before(step) - 1;
        (step, step - position)
    }

    /// Child reached by an up move.
    #[must_use]
    pub fn up_child(self) -> Self {
        Self(self.0 + self.step() + 1)
    }

    /// Child reached by a down move.
    #[must_use]
    pub fn down_child(self) -> Self {
        Self(self.0 + self.step() + 2)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_count() {
        assert_eq!(node_count(0), 1);
        assert_eq!(node_count(1), 3);
        assert_eq!(node_count(2), 6);
        assert_eq!(node_count(50), 1326);
    }

    #[test]
    fn test_from_coords_layout() {
        assert_eq!(NodeIndex::from_coords(0, 0), NodeIndex::ROOT);
        assert_eq!(NodeIndex::from_coords(1, 1).get(), 2);
        assert_eq!(NodeIndex::from_coords(1, 0).get(), 3);
        assert_eq!(NodeIndex::from_coords(2, 2).get(), 4);
        assert_eq!(NodeIndex::from_coords(2, 1).get(), 5);
        assert_eq!(NodeIndex::from_coords(2, 0).get(), 6);
    }

    #[test]
    #[should_panic(expected = "cannot exceed")]
    fn test_from_coords_rejects_impossible_node() {
        let _ = NodeIndex::from_coords(2, 3);
    }

    #[test]
    fn test_coords_round_trip_small_lattice() {
        for step in 0..=6 {
            for up_moves in 0..=step {
                let index = NodeIndex::from_coords(step, up_moves);
                assert_eq!(index.coords(), (step, up_moves));
            }
        }
    }

    #[test]
    fn test_step_at_triangular_boundaries() {
        for step in [10, 100, 999, 4096] {
            assert_eq!(NodeIndex::from_coords(step, step).step(), step);
            assert_eq!(NodeIndex::from_coords(step, 0).step(), step);
        }
    }

    #[test]
    fn test_step_range() {
        assert_eq!(NodeIndex::step_range(0), 1..=1);
        assert_eq!(NodeIndex::step_range(1), 2..=3);
        assert_eq!(NodeIndex::step_range(3), 7..=10);
    }

    #[test]
    fn test_children_recombine() {
        let up = NodeIndex::from_coords(1, 1);
        let down = NodeIndex::from_coords(1, 0);
        assert_eq!(up.up_child().get(), 4);
        assert_eq!(up.down_child().get(), 5);
        assert_eq!(down.up_child().get(), 5);
        assert_eq!(down.down_child().get(), 6);
        assert_eq!(up.down_child(), down.up_child());
    }

    #[test]
    fn test_new_rejects_zero() {
        assert!(NodeIndex::new(0).is_none());
        assert_eq!(NodeIndex::new(3).map(NodeIndex::offset), Some(2));
    }
}
