mod constants;
pub mod error;
pub mod geopoint;
pub mod graph;
pub mod heuristic;
pub mod matrix;
pub mod routing;
pub mod stopwatch;
pub mod types;

#[cfg(test)]
pub(crate) mod test_graph_utils;
