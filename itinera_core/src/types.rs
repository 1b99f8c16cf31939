pub type NodeId = i64;
pub type EdgeId = usize;

/// Edge traversal costs in meters. Infinity is the "no path" sentinel and
/// must be compared, never summed into a result.
pub type Cost = f64;

pub const INFINITE_COST: Cost = f64::INFINITY;
