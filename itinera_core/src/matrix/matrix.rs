use fxhash::FxHashMap;

use crate::types::{Cost, INFINITE_COST, NodeId};

/// All-pairs shortest costs over a small node subset. The diagonal is
/// always zero; symmetry is never assumed since the underlying graph is
/// directed. Unknown pairs read as infinite.
#[derive(Clone, Debug)]
pub struct CostMatrix {
    nodes: Vec<NodeId>,
    index: FxHashMap<NodeId, usize>,
    costs: Vec<Vec<Cost>>,
}

impl CostMatrix {
    pub(crate) fn from_rows(nodes: Vec<NodeId>, costs: Vec<Vec<Cost>>) -> CostMatrix {
        debug_assert_eq!(nodes.len(), costs.len());

        let index = nodes
            .iter()
            .enumerate()
            .map(|(position, &node)| (node, position))
            .collect();

        CostMatrix {
            nodes,
            index,
            costs,
        }
    }

    pub fn cost(&self, from: NodeId, to: NodeId) -> Cost {
        match (self.index.get(&from), self.index.get(&to)) {
            (Some(&row), Some(&column)) => self.costs[row][column],
            _ => INFINITE_COST,
        }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
