use serde::Serialize;
use tracing::warn;

use itinera_core::graph::RoadGraph;
use itinera_core::heuristic::Heuristic;
use itinera_core::routing::astar::AStar;
use itinera_core::types::{Cost, NodeId};

use crate::error::TourError;

/// A chosen visiting order expanded into one continuous road-level path.
#[derive(Clone, Debug, Serialize)]
pub struct AssembledRoute {
    nodes: Vec<NodeId>,
    legs: Vec<Vec<NodeId>>,
    total_cost: Cost,

    /// Nodes expanded while recomputing the legs, for diagnostics only.
    expanded_nodes: usize,
}

impl AssembledRoute {
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn legs(&self) -> &[Vec<NodeId>] {
        &self.legs
    }

    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    /// The traversed directed edges as consecutive node pairs, geometry
    /// free. This is what gets penalized between alternative-route rounds.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        self.nodes
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .collect()
    }
}

/// Re-runs the shortest-path search for each consecutive pair of the
/// ordering and stitches the legs together, dropping the junction node
/// shared between a leg and its predecessor. The search is deterministic,
/// so on an unmutated graph the leg costs reproduce the matrix cells
/// exactly; a leg coming back empty here is a round-contract violation.
pub fn assemble_route<H: Heuristic>(
    graph: &RoadGraph,
    ordering: &[NodeId],
    heuristic: &H,
) -> Result<AssembledRoute, TourError> {
    let mut nodes: Vec<NodeId> = Vec::new();
    let mut legs: Vec<Vec<NodeId>> = Vec::with_capacity(ordering.len().saturating_sub(1));
    let mut total_cost = 0.0;
    let mut expanded_nodes = 0;

    let mut astar = AStar::with_heuristic(heuristic);

    for pair in ordering.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let result = astar.calc_path(graph, from, to);

        if result.is_unreachable() {
            warn!(from, to, "feasible leg became unreachable during assembly");
            return Err(TourError::AssemblyFailed { from, to });
        }

        total_cost += result.cost;
        expanded_nodes += result.expanded;

        if nodes.is_empty() {
            nodes.extend_from_slice(&result.path);
        } else {
            // The leg starts on the previous leg's last node
            nodes.extend_from_slice(&result.path[1..]);
        }
        legs.push(result.path);
    }

    if nodes.is_empty() {
        if let Some(&start) = ordering.first() {
            nodes.push(start);
        }
    }

    Ok(AssembledRoute {
        nodes,
        legs,
        total_cost,
        expanded_nodes,
    })
}
