pub mod alternatives;
pub mod assembler;
pub mod error;
pub mod permutation;
pub mod plan;
pub mod solver;
pub mod tour;

#[cfg(test)]
pub(crate) mod test_graph_utils;
