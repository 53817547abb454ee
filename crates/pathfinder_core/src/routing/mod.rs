pub mod astar;
pub mod astar_heuristic;
pub mod bellman_ford;
pub mod dijkstra;
pub(crate) mod negative_cycle;
pub(crate) mod routing_path_builder;
pub mod routing_request;
pub mod search_result;
pub mod shortest_path_algorithm;

use tracing::debug_span;

use crate::{
    edge::Edge, error::SearchError, graph_snapshot::GraphSnapshot, types::VertexId,
    vertex::Vertex,
};

use self::{
    astar::AStar, astar_heuristic::AStarHeuristic, bellman_ford::BellmanFord, dijkstra::Dijkstra,
    search_result::SearchResult, shortest_path_algorithm::ShortestPathAlgorithm,
};

// One-shot entry points: the collections are frozen into a snapshot for the duration of
// the call. `directed_default` is the graph-level flag; it is recorded on the span but
// traversal always follows each edge's own directedness.

pub fn find_path_dijkstra(
    start: VertexId,
    end: VertexId,
    vertices: &[Vertex],
    edges: &[Edge],
    directed_default: bool,
) -> Result<SearchResult, SearchError> {
    let _span = debug_span!("find_path_dijkstra", directed_default).entered();
    let graph = GraphSnapshot::from_slices(vertices, edges)?;
    Dijkstra::new().calc_path(&graph, start, end)
}

pub fn find_path_bellman_ford(
    start: VertexId,
    end: VertexId,
    vertices: &[Vertex],
    edges: &[Edge],
    directed_default: bool,
) -> Result<SearchResult, SearchError> {
    let _span = debug_span!("find_path_bellman_ford", directed_default).entered();
    let graph = GraphSnapshot::from_slices(vertices, edges)?;
    BellmanFord::new().calc_path(&graph, start, end)
}

pub fn find_path_astar(
    start: VertexId,
    end: VertexId,
    vertices: &[Vertex],
    edges: &[Edge],
    heuristic: impl AStarHeuristic,
    directed_default: bool,
) -> Result<SearchResult, SearchError> {
    let _span = debug_span!("find_path_astar", directed_default).entered();
    let graph = GraphSnapshot::from_slices(vertices, edges)?;
    AStar::with_heuristic(heuristic).calc_path(&graph, start, end)
}
