use fxhash::FxHashMap;

use crate::error::GraphError;
use crate::geopoint::GeoPoint;
use crate::types::{Cost, EdgeId, INFINITE_COST, NodeId};

/// A directed relation between two nodes. One record per parallel road
/// segment; the graph resolves them to a single effective cost.
#[derive(Clone, Debug)]
pub struct RoadEdge {
    start_node: NodeId,
    end_node: NodeId,
    weights: Vec<Cost>,
}

impl RoadEdge {
    pub fn start_node(&self) -> NodeId {
        self.start_node
    }

    pub fn end_node(&self) -> NodeId {
        self.end_node
    }

    pub fn weights(&self) -> &[Cost] {
        &self.weights
    }
}

/// In-memory road network with value semantics: `Clone` is the snapshot
/// mechanism used before any cost mutation, so no caller ever observes a
/// penalized or blocked copy it did not create itself.
#[derive(Clone, Debug, Default)]
pub struct RoadGraph {
    positions: FxHashMap<NodeId, GeoPoint>,
    edges: Vec<RoadEdge>,
    adjacency: FxHashMap<NodeId, Vec<EdgeId>>,
    relation_index: FxHashMap<(NodeId, NodeId), EdgeId>,
}

impl RoadGraph {
    pub fn new() -> RoadGraph {
        RoadGraph::default()
    }

    pub fn add_node(&mut self, node: NodeId, position: GeoPoint) {
        self.positions.insert(node, position);
        self.adjacency.entry(node).or_default();
    }

    /// Each call adds one parallel weight record for the directed pair.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, length: Cost) {
        debug_assert!(length >= 0.0, "edge lengths are non-negative");

        if let Some(&edge_id) = self.relation_index.get(&(from, to)) {
            self.edges[edge_id].weights.push(length);
            return;
        }

        let edge_id = self.edges.len();
        self.edges.push(RoadEdge {
            start_node: from,
            end_node: to,
            weights: vec![length],
        });
        self.relation_index.insert((from, to), edge_id);
        self.adjacency.entry(from).or_default().push(edge_id);
    }

    pub fn position(&self, node: NodeId) -> Result<GeoPoint, GraphError> {
        self.positions
            .get(&node)
            .copied()
            .ok_or(GraphError::NodeNotFound(node))
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.positions.contains_key(&node)
    }

    /// The directed relation between two nodes with all its parallel
    /// weight records, `None` when no segment connects the pair.
    pub fn edge(&self, from: NodeId, to: NodeId) -> Option<&RoadEdge> {
        let &edge_id = self.relation_index.get(&(from, to))?;
        Some(&self.edges[edge_id])
    }

    /// The cost-resolution rule for parallel records: the minimum finite
    /// weight, never an average. `None` when every record is infinite,
    /// which is equivalent to the edge being absent.
    pub fn effective_cost(&self, from: NodeId, to: NodeId) -> Option<Cost> {
        self.edge(from, to).and_then(resolve_weights)
    }

    /// Distinct adjacent nodes with their effective traversal cost.
    /// Neighbors reachable only through infinite-cost records are excluded.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Cost)> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flatten()
            .filter_map(move |&edge_id| {
                let edge = &self.edges[edge_id];
                resolve_weights(edge).map(|cost| (edge.end_node, cost))
            })
    }

    /// Multiplies every parallel record of each matching directed edge.
    /// Absent pairs are a no-op. Only this copy of the graph is affected.
    pub fn penalize_edges(&mut self, edges: &[(NodeId, NodeId)], factor: Cost) {
        debug_assert!(factor > 0.0, "penalty factors are positive");

        for &(from, to) in edges {
            if let Some(&edge_id) = self.relation_index.get(&(from, to)) {
                for weight in &mut self.edges[edge_id].weights {
                    *weight *= factor;
                }
            }
        }
    }

    /// Marks the matching road segments impassable in both directions by
    /// setting every parallel record to infinity. Undone by starting over
    /// from an unblocked snapshot.
    pub fn block_edges(&mut self, edges: &[(NodeId, NodeId)]) {
        for &(from, to) in edges {
            for pair in [(from, to), (to, from)] {
                if let Some(&edge_id) = self.relation_index.get(&pair) {
                    for weight in &mut self.edges[edge_id].weights {
                        *weight = INFINITE_COST;
                    }
                }
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

fn resolve_weights(edge: &RoadEdge) -> Option<Cost> {
    edge.weights
        .iter()
        .copied()
        .filter(|weight| weight.is_finite())
        .min_by(Cost::total_cmp)
}
