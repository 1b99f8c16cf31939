use crate::types::{Cost, INFINITE_COST, NodeId};

/// Outcome of a single shortest-path search. An exhausted open set is a
/// normal result, reported as infinite cost and an empty path rather than
/// an error.
#[derive(Clone, Debug)]
pub struct SearchResult {
    pub cost: Cost,
    pub path: Vec<NodeId>,

    /// Number of nodes expanded, for diagnostics only.
    pub expanded: usize,
}

impl SearchResult {
    pub fn unreachable(expanded: usize) -> SearchResult {
        SearchResult {
            cost: INFINITE_COST,
            path: Vec::new(),
            expanded,
        }
    }

    pub fn is_unreachable(&self) -> bool {
        !self.cost.is_finite()
    }
}
