use crate::graph::RoadGraph;
use crate::types::{Cost, NodeId};

/// Lower-bound estimate of the remaining cost between two nodes. The search
/// stays optimal as long as the estimate never exceeds the true path cost.
pub trait Heuristic: Sync {
    fn estimate(&self, graph: &RoadGraph, from: NodeId, to: NodeId) -> Cost;
}

impl<H: Heuristic + ?Sized> Heuristic for &H {
    fn estimate(&self, graph: &RoadGraph, from: NodeId, to: NodeId) -> Cost {
        (**self).estimate(graph, from, to)
    }
}

/// Great-circle distance between the node positions. Admissible whenever
/// edge costs are physical road lengths in meters.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreatCircle;

impl Heuristic for GreatCircle {
    fn estimate(&self, graph: &RoadGraph, from: NodeId, to: NodeId) -> Cost {
        match (graph.position(from), graph.position(to)) {
            (Ok(a), Ok(b)) => a.haversine_distance(&b),
            _ => 0.0,
        }
    }
}

/// Constant zero, turning the search into a blind uniform-cost search.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    #[inline(always)]
    fn estimate(&self, _graph: &RoadGraph, _from: NodeId, _to: NodeId) -> Cost {
        0.0
    }
}
