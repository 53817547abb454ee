use thiserror::Error;

use crate::{routing::routing_request::RoutingAlgorithm, types::VertexId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Duplicate vertex id {0}")]
    DuplicateVertex(VertexId),
    #[error("Edge {from} - {to} refers to missing vertex {missing}")]
    UnknownEndpoint {
        from: VertexId,
        to: VertexId,
        missing: VertexId,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Start vertex {0} is not part of the graph")]
    StartNotFound(VertexId),
    #[error("End vertex {0} is not part of the graph")]
    EndNotFound(VertexId),
    #[error("{0} is not available for a graph with negative weights")]
    AlgorithmUnavailable(RoutingAlgorithm),
    #[error(transparent)]
    Graph(#[from] GraphError),
}
