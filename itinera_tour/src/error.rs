use thiserror::Error;

use itinera_core::error::GraphError;
use itinera_core::types::NodeId;

#[derive(Error, Debug)]
pub enum TourError {
    /// No destination ordering has a finite total cost. A failed route
    /// computation, not a crash.
    #[error("no destination ordering has a finite total cost")]
    NoFeasibleTour,

    /// A leg the cost matrix marked feasible could not be assembled. Only
    /// possible if the working graph was mutated between matrix build and
    /// assembly, which the round contract forbids.
    #[error("leg {from} -> {to} could not be assembled despite a feasible cost matrix entry")]
    AssemblyFailed { from: NodeId, to: NodeId },

    #[error(transparent)]
    Graph(#[from] GraphError),
}
