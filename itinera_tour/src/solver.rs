use tracing::debug;

use itinera_core::matrix::matrix::CostMatrix;
use itinera_core::types::{Cost, NodeId};

use crate::error::TourError;
use crate::permutation::Permutations;
use crate::tour::Tour;

/// Exact solver: enumerates every ordering of the destinations and scores
/// it against the cost matrix, keeping the `top_k` cheapest. Deliberately
/// brute force; the factorial blow-up is the caller's responsibility to
/// bound. No pruning beyond discarding orderings with an infinite leg.
pub fn solve_tours(
    start: NodeId,
    destinations: &[NodeId],
    matrix: &CostMatrix,
    top_k: usize,
) -> Result<Vec<Tour>, TourError> {
    debug_assert!(top_k >= 1);

    if destinations.is_empty() {
        return Ok(vec![Tour::trivial(start)]);
    }

    let mut best: Vec<Tour> = Vec::with_capacity(top_k + 1);

    for ordering in Permutations::new(destinations.to_vec()) {
        let Some(tour) = score_ordering(start, &ordering, matrix) else {
            continue;
        };

        // Ascending by total cost; the first tour found keeps its slot on ties
        let position = best.partition_point(|kept| kept.total_cost() <= tour.total_cost());
        if position < top_k {
            best.insert(position, tour);
            best.truncate(top_k);
        }
    }

    if best.is_empty() {
        return Err(TourError::NoFeasibleTour);
    }

    debug!(
        destinations = destinations.len(),
        kept = best.len(),
        best_cost = best[0].total_cost(),
        "exact tour solve finished"
    );
    Ok(best)
}

/// Walks start -> d1 -> d2 -> ... through the matrix. `None` as soon as a
/// leg is infinite: disconnected orderings are discarded, not scored.
fn score_ordering(start: NodeId, ordering: &[NodeId], matrix: &CostMatrix) -> Option<Tour> {
    let mut stops = Vec::with_capacity(ordering.len() + 1);
    let mut leg_costs: Vec<Cost> = Vec::with_capacity(ordering.len());
    stops.push(start);

    let mut current = start;
    for &next in ordering {
        let cost = matrix.cost(current, next);
        if !cost.is_finite() {
            return None;
        }
        leg_costs.push(cost);
        stops.push(next);
        current = next;
    }

    Some(Tour::new(stops, leg_costs))
}
