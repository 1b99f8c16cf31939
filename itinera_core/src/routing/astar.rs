use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fxhash::FxHashMap;
use tracing::debug;

use crate::graph::RoadGraph;
use crate::heuristic::{GreatCircle, Heuristic};
use crate::routing::search_result::SearchResult;
use crate::types::{Cost, INFINITE_COST, NodeId};

/// https://en.wikipedia.org/wiki/A*_search_algorithm

#[derive(Copy, Clone, Debug)]
struct HeapItem {
    node_id: NodeId,

    /// g_score is the current cheapest cost from the source to "node_id"
    g_score: Cost,

    /// f_score = g_score + h_score, with h_score being the heuristic value
    /// from node_id to the target
    f_score: Cost,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.f_score == other.f_score && self.g_score == other.g_score
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip scores to make this a min-heap
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.g_score.total_cmp(&self.g_score))
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

/// Best-first search over a road graph. The heuristic decides the flavor:
/// a great-circle estimate makes it an informed A* search, a constant zero
/// makes it uniform-cost. Scratch state is keyed by node id, so searches
/// never allocate for the whole graph.
pub struct AStar<H: Heuristic> {
    heuristic: H,
    heap: BinaryHeap<HeapItem>,
    g_score: FxHashMap<NodeId, Cost>,
    came_from: FxHashMap<NodeId, NodeId>,
}

impl AStar<GreatCircle> {
    pub fn new() -> AStar<GreatCircle> {
        AStar::with_heuristic(GreatCircle)
    }
}

impl Default for AStar<GreatCircle> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Heuristic> AStar<H> {
    pub fn with_heuristic(heuristic: H) -> AStar<H> {
        AStar {
            heuristic,
            heap: BinaryHeap::with_capacity(1024),
            g_score: FxHashMap::default(),
            came_from: FxHashMap::default(),
        }
    }

    pub fn calc_path(
        &mut self,
        graph: &RoadGraph,
        source: NodeId,
        target: NodeId,
    ) -> SearchResult {
        // Cost-matrix diagonals rely on this short-circuit
        if source == target {
            return SearchResult {
                cost: 0.0,
                path: vec![source],
                expanded: 0,
            };
        }

        self.clear();
        self.g_score.insert(source, 0.0);
        let f_score = self.heuristic.estimate(graph, source, target);
        self.heap.push(HeapItem {
            node_id: source,
            g_score: 0.0,
            f_score,
        });

        let mut expanded = 0;

        while let Some(HeapItem {
            node_id, g_score, ..
        }) = self.heap.pop()
        {
            // Stale entry, superseded by a later relaxation
            if g_score > self.current_shortest(node_id) {
                continue;
            }

            if node_id == target {
                let path = self.build_path(source, target);
                debug!(cost = g_score, expanded, "search reached target");
                return SearchResult {
                    cost: g_score,
                    path,
                    expanded,
                };
            }

            expanded += 1;

            for (adj_node, edge_cost) in graph.neighbors(node_id) {
                let next_g = g_score + edge_cost;

                if next_g < self.current_shortest(adj_node) {
                    self.g_score.insert(adj_node, next_g);
                    self.came_from.insert(adj_node, node_id);

                    let h_score = self.heuristic.estimate(graph, adj_node, target);
                    self.heap.push(HeapItem {
                        node_id: adj_node,
                        g_score: next_g,
                        f_score: next_g + h_score,
                    });
                }
            }
        }

        debug!(source, target, expanded, "open set exhausted");
        SearchResult::unreachable(expanded)
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.g_score.clear();
        self.came_from.clear();
    }

    #[inline(always)]
    fn current_shortest(&self, node: NodeId) -> Cost {
        self.g_score.get(&node).copied().unwrap_or(INFINITE_COST)
    }

    fn build_path(&self, source: NodeId, target: NodeId) -> Vec<NodeId> {
        let mut path = vec![target];

        let mut node = target;
        while node != source {
            node = self.came_from[&node];
            path.push(node);
        }

        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geopoint::GeoPoint;
    use crate::heuristic::ZeroHeuristic;
    use crate::test_graph_utils::test_graph::{CoastalPlace, create_coastal_graph};

    fn flat_graph(edges: &[(NodeId, NodeId, Cost)]) -> RoadGraph {
        let mut graph = RoadGraph::new();
        for &(from, to, length) in edges {
            graph.add_node(from, GeoPoint::new(0.0, 0.0));
            graph.add_node(to, GeoPoint::new(0.0, 0.0));
            graph.add_edge(from, to, length);
        }
        graph
    }

    #[test]
    fn source_equals_target_short_circuits() {
        let graph = flat_graph(&[(1, 2, 10.0)]);
        let mut astar = AStar::new();

        let result = astar.calc_path(&graph, 1, 1);

        assert_eq!(result.cost, 0.0);
        assert_eq!(result.path, vec![1]);
        assert_eq!(result.expanded, 0);
    }

    #[test]
    fn follows_the_cheaper_detour() {
        // Direct 1 -> 4 costs 30, the detour through 2 and 3 costs 21
        let graph = flat_graph(&[(1, 4, 30.0), (1, 2, 7.0), (2, 3, 7.0), (3, 4, 7.0)]);
        let mut astar = AStar::with_heuristic(ZeroHeuristic);

        let result = astar.calc_path(&graph, 1, 4);

        assert_eq!(result.cost, 21.0);
        assert_eq!(result.path, vec![1, 2, 3, 4]);
    }

    #[test]
    fn later_relaxation_supersedes_a_stale_heap_entry() {
        // 3 is first queued through the expensive edge from 1, then
        // re-queued cheaper through 2; the stale entry must lose.
        let graph = flat_graph(&[(1, 3, 10.0), (1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0)]);
        let mut astar = AStar::with_heuristic(ZeroHeuristic);

        let result = astar.calc_path(&graph, 1, 4);

        assert_eq!(result.cost, 3.0);
        assert_eq!(result.path, vec![1, 2, 3, 4]);
    }

    #[test]
    fn unreachable_targets_report_infinite_cost() {
        let graph = flat_graph(&[(1, 2, 5.0), (3, 4, 5.0)]);
        let mut astar = AStar::with_heuristic(ZeroHeuristic);

        let result = astar.calc_path(&graph, 1, 4);

        assert!(result.is_unreachable());
        assert!(result.path.is_empty());
    }

    #[test]
    fn one_way_edges_are_not_traversed_backwards() {
        let graph = flat_graph(&[(1, 2, 5.0)]);
        let mut astar = AStar::with_heuristic(ZeroHeuristic);

        let forward = astar.calc_path(&graph, 1, 2);
        let backward = astar.calc_path(&graph, 2, 1);

        assert_eq!(forward.cost, 5.0);
        assert!(backward.is_unreachable());
    }

    #[test]
    fn informed_and_blind_searches_agree_on_cost() {
        let graph = create_coastal_graph();

        let informed = AStar::new().calc_path(
            &graph,
            CoastalPlace::Harbour.into(),
            CoastalPlace::Beach.into(),
        );
        let blind = AStar::with_heuristic(ZeroHeuristic).calc_path(
            &graph,
            CoastalPlace::Harbour.into(),
            CoastalPlace::Beach.into(),
        );

        assert!(informed.cost.is_finite());
        assert_eq!(informed.cost, blind.cost);
        assert_eq!(informed.path, blind.path);
        // The great-circle bound prunes at least as well as no bound at all
        assert!(informed.expanded <= blind.expanded);
    }

    #[test]
    fn scratch_state_is_reset_between_searches() {
        let graph = create_coastal_graph();
        let mut astar = AStar::new();

        let first = astar.calc_path(
            &graph,
            CoastalPlace::Harbour.into(),
            CoastalPlace::Hilltop.into(),
        );
        let second = astar.calc_path(
            &graph,
            CoastalPlace::Harbour.into(),
            CoastalPlace::Hilltop.into(),
        );

        assert_eq!(first.cost, second.cost);
        assert_eq!(first.path, second.path);
    }
}
