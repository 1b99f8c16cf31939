use thiserror::Error;

use crate::types::NodeId;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {0} is not part of the road graph")]
    NodeNotFound(NodeId),
}
