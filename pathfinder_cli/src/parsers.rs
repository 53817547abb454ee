use pathfinder_core::{routing::routing_request::RoutingAlgorithm, types::VertexId};

pub fn parse_algorithm(input: &str) -> Result<RoutingAlgorithm, String> {
    input.parse::<RoutingAlgorithm>()
}

pub fn parse_vertex_id(input: &str) -> Result<VertexId, String> {
    input
        .trim()
        .parse::<VertexId>()
        .map_err(|_| format!("Invalid vertex id '{input}'"))
}
