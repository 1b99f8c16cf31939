pub mod test_graph {
    use itinera_core::geopoint::GeoPoint;
    use itinera_core::graph::RoadGraph;
    use itinera_core::types::{Cost, NodeId};

    /// Directed graph with the given weighted edges. All nodes share one
    /// position, so the great-circle heuristic degenerates to zero and
    /// stays admissible no matter what the edge costs are.
    pub fn flat_graph(edges: &[(NodeId, NodeId, Cost)]) -> RoadGraph {
        let mut graph = RoadGraph::new();
        for &(from, to, length) in edges {
            graph.add_node(from, GeoPoint::new(-1.26, 116.83));
            graph.add_node(to, GeoPoint::new(-1.26, 116.83));
            graph.add_edge(from, to, length);
        }
        graph
    }

    /// Same as `flat_graph` but every edge is added in both directions.
    pub fn flat_two_way_graph(edges: &[(NodeId, NodeId, Cost)]) -> RoadGraph {
        let mut graph = flat_graph(edges);
        for &(from, to, length) in edges {
            graph.add_edge(to, from, length);
        }
        graph
    }

    /// Exactly one route from 1 to 3: the chain 1 -> 2 -> 3.
    pub fn single_path_graph() -> RoadGraph {
        flat_two_way_graph(&[(1, 2, 100.0), (2, 3, 100.0)])
    }

    /// Two disjoint routes from 1 to 4: through 2 (cost 10) and through 3
    /// (cost 12).
    pub fn two_path_graph() -> RoadGraph {
        flat_two_way_graph(&[(1, 2, 5.0), (2, 4, 5.0), (1, 3, 6.0), (3, 4, 6.0)])
    }
}
