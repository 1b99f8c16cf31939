pub mod matrix;
pub mod pairwise;
