use std::time::{Duration, Instant};

use tracing::{debug, info};

use itinera_core::graph::RoadGraph;
use itinera_core::heuristic::Heuristic;
use itinera_core::matrix::pairwise::build_cost_matrix;
use itinera_core::types::{Cost, NodeId};

use crate::assembler::{AssembledRoute, assemble_route};
use crate::error::TourError;
use crate::solver::solve_tours;
use crate::tour::Tour;

pub const DEFAULT_PENALTY_FACTOR: Cost = 2.0;

#[derive(Debug)]
pub struct RankedRoute {
    /// 1-based, best route first.
    pub rank: usize,
    pub tour: Tour,
    pub route: AssembledRoute,

    /// Nodes expanded by this round's matrix build and assembly.
    pub expanded_nodes: usize,
    pub elapsed: Duration,
}

/// Produces up to `rounds` ranked routes by re-solving the tour after
/// multiplying the cost of every edge the previous route traversed. Reuse
/// of earlier road segments is discouraged, not forbidden, so the results
/// are progressively more diverse but never guaranteed edge-disjoint.
///
/// Repeated identical routes are reported, not deduplicated: penalties
/// scale costs without removing edges, so a graph with a single feasible
/// path yields `rounds` copies of that path with non-decreasing cost.
pub struct AlternativeRouteGenerator {
    rounds: usize,
    penalty_factor: Cost,
}

impl AlternativeRouteGenerator {
    pub fn new(rounds: usize) -> AlternativeRouteGenerator {
        AlternativeRouteGenerator {
            rounds,
            penalty_factor: DEFAULT_PENALTY_FACTOR,
        }
    }

    pub fn with_penalty_factor(mut self, factor: Cost) -> AlternativeRouteGenerator {
        debug_assert!(factor > 1.0, "penalties must increase costs");
        self.penalty_factor = factor;
        self
    }

    pub fn generate<H: Heuristic>(
        &self,
        graph: &RoadGraph,
        start: NodeId,
        destinations: &[NodeId],
        heuristic: &H,
    ) -> Result<Vec<RankedRoute>, TourError> {
        // One private working copy per invocation. The caller's graph is
        // never penalized, and rounds are strictly sequential so each
        // matrix build observes the previous round's penalties.
        let mut working = graph.clone();

        let mut matrix_nodes = Vec::with_capacity(destinations.len() + 1);
        matrix_nodes.push(start);
        matrix_nodes.extend_from_slice(destinations);

        let mut routes = Vec::with_capacity(self.rounds);

        for round in 0..self.rounds {
            let round_start = Instant::now();

            let built = build_cost_matrix(&working, &matrix_nodes, heuristic);

            let tour = match solve_tours(start, destinations, &built.matrix, 1) {
                Ok(mut tours) => tours.remove(0),
                Err(TourError::NoFeasibleTour) if round > 0 => {
                    info!(round, "no feasible tour left, stopping early");
                    break;
                }
                Err(err) => return Err(err),
            };

            let route = assemble_route(&working, tour.stops(), heuristic)?;

            if round + 1 < self.rounds {
                working.penalize_edges(&route.edges(), self.penalty_factor);
                debug!(
                    round,
                    edges = route.edges().len(),
                    factor = self.penalty_factor,
                    "penalized traversed edges"
                );
            }

            info!(
                rank = round + 1,
                cost = route.total_cost(),
                "alternative route assembled"
            );
            let expanded_nodes = built.expanded_nodes + route.expanded_nodes();
            routes.push(RankedRoute {
                rank: round + 1,
                tour,
                route,
                expanded_nodes,
                elapsed: round_start.elapsed(),
            });
        }

        Ok(routes)
    }
}
