use serde::Serialize;

use itinera_core::types::{Cost, NodeId};

/// A visiting order over the destinations with the start prefixed, plus
/// the per-leg shortest-path costs it was scored with.
#[derive(Clone, Debug, Serialize)]
pub struct Tour {
    stops: Vec<NodeId>,
    leg_costs: Vec<Cost>,
    total_cost: Cost,
}

impl Tour {
    pub(crate) fn new(stops: Vec<NodeId>, leg_costs: Vec<Cost>) -> Tour {
        debug_assert_eq!(stops.len(), leg_costs.len() + 1);
        debug_assert!(leg_costs.iter().all(|cost| cost.is_finite()));

        let total_cost = leg_costs.iter().sum();
        Tour {
            stops,
            leg_costs,
            total_cost,
        }
    }

    /// The degenerate tour with no destinations: just the start, cost zero.
    pub fn trivial(start: NodeId) -> Tour {
        Tour {
            stops: vec![start],
            leg_costs: Vec::new(),
            total_cost: 0.0,
        }
    }

    pub fn stops(&self) -> &[NodeId] {
        &self.stops
    }

    pub fn destinations(&self) -> &[NodeId] {
        &self.stops[1..]
    }

    pub fn leg_costs(&self) -> &[Cost] {
        &self.leg_costs
    }

    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }
}
