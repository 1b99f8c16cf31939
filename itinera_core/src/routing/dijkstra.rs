use crate::heuristic::ZeroHeuristic;
use crate::routing::astar::AStar;

pub struct Dijkstra;

/// Dijkstra is simply a variant of AStar with a zero heuristic
impl Dijkstra {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> AStar<ZeroHeuristic> {
        AStar::with_heuristic(ZeroHeuristic)
    }
}
