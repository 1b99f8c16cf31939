use serde::{Deserialize, Serialize};

use itinera_core::error::GraphError;
use itinera_core::graph::RoadGraph;
use itinera_core::heuristic::{GreatCircle, Heuristic, ZeroHeuristic};
use itinera_core::types::{Cost, NodeId};

use crate::alternatives::{AlternativeRouteGenerator, DEFAULT_PENALTY_FACTOR, RankedRoute};
use crate::error::TourError;

/// Assumed constant travel speed for the duration estimate.
pub const AVERAGE_SPEED_KMH: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Great-circle guided search.
    Informed,
    /// Zero-heuristic uniform-cost search.
    Blind,
    /// Both, side by side, for effort comparison.
    Compare,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TourRequest {
    pub start: NodeId,
    pub destinations: Vec<NodeId>,
    pub mode: SearchMode,

    /// Number of ranked alternative routes to produce.
    #[serde(default = "default_alternatives")]
    pub alternatives: usize,

    #[serde(default)]
    pub penalty_factor: Option<Cost>,

    /// Road segments to treat as impassable for this request.
    #[serde(default)]
    pub blocked_edges: Vec<(NodeId, NodeId)>,
}

fn default_alternatives() -> usize {
    1
}

#[derive(Clone, Debug, Serialize)]
pub struct SearchDiagnostics {
    pub expanded_nodes: usize,
    pub elapsed_ms: u128,
}

#[derive(Clone, Debug, Serialize)]
pub struct RoutePlan {
    pub rank: usize,

    /// The visiting order, start first.
    pub stops: Vec<NodeId>,

    /// The full road-level node sequence.
    pub nodes: Vec<NodeId>,
    pub total_distance: Cost,
    pub estimated_duration_secs: f64,
    pub diagnostics: SearchDiagnostics,
}

#[derive(Debug, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TourResponse {
    Single { routes: Vec<RoutePlan> },
    Compare { informed: RoutePlan, blind: RoutePlan },
}

/// Entry point for the request surface: validates the referenced nodes,
/// applies per-request road blockages to a working copy, and runs the
/// alternative-route generator in the requested search mode. All route
/// geometry stays as node ids; turning positions into an interchange
/// format is the serialization layer's concern.
pub fn plan_tour(graph: &RoadGraph, request: &TourRequest) -> Result<TourResponse, TourError> {
    for &node in std::iter::once(&request.start).chain(&request.destinations) {
        if !graph.contains_node(node) {
            return Err(GraphError::NodeNotFound(node).into());
        }
    }

    let mut working;
    let graph = if request.blocked_edges.is_empty() {
        graph
    } else {
        working = graph.clone();
        working.block_edges(&request.blocked_edges);
        &working
    };

    match request.mode {
        SearchMode::Informed => Ok(TourResponse::Single {
            routes: run_rounds(graph, request, &GreatCircle, request.alternatives.max(1))?,
        }),
        SearchMode::Blind => Ok(TourResponse::Single {
            routes: run_rounds(graph, request, &ZeroHeuristic, request.alternatives.max(1))?,
        }),
        SearchMode::Compare => {
            let informed = run_rounds(graph, request, &GreatCircle, 1)?;
            let blind = run_rounds(graph, request, &ZeroHeuristic, 1)?;

            // Both heuristics are admissible, so the two plans only differ
            // in search effort
            Ok(TourResponse::Compare {
                informed: take_single(informed)?,
                blind: take_single(blind)?,
            })
        }
    }
}

fn run_rounds<H: Heuristic>(
    graph: &RoadGraph,
    request: &TourRequest,
    heuristic: &H,
    rounds: usize,
) -> Result<Vec<RoutePlan>, TourError> {
    let factor = request.penalty_factor.unwrap_or(DEFAULT_PENALTY_FACTOR);
    let generator = AlternativeRouteGenerator::new(rounds).with_penalty_factor(factor);

    let ranked = generator.generate(graph, request.start, &request.destinations, heuristic)?;
    Ok(ranked.into_iter().map(to_plan).collect())
}

fn take_single(mut plans: Vec<RoutePlan>) -> Result<RoutePlan, TourError> {
    if plans.is_empty() {
        return Err(TourError::NoFeasibleTour);
    }
    Ok(plans.remove(0))
}

fn to_plan(ranked: RankedRoute) -> RoutePlan {
    let total_distance = ranked.route.total_cost();
    let speed_meters_per_second = AVERAGE_SPEED_KMH / 3.6;

    RoutePlan {
        rank: ranked.rank,
        stops: ranked.tour.stops().to_vec(),
        nodes: ranked.route.nodes().to_vec(),
        total_distance,
        estimated_duration_secs: total_distance / speed_meters_per_second,
        diagnostics: SearchDiagnostics {
            expanded_nodes: ranked.expanded_nodes,
            elapsed_ms: ranked.elapsed.as_millis(),
        },
    }
}
