use tracing::warn;

use crate::{
    graph_snapshot::GraphSnapshot,
    types::{VertexIndex, Weight},
    vertex::Vertex,
};

use super::search_result::{SearchResult, SearchStats};

/// Result of walking predecessor links back from the end vertex.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum PredecessorTrace {
    /// Vertices from start to end inclusive.
    Path(Vec<VertexIndex>),
    Unreachable,
    /// The walk came back to a vertex it had already placed. Vertices are in
    /// traversal order, without repeating the first one.
    Cycle(Vec<VertexIndex>),
}

pub(crate) fn trace_predecessors(
    vertex_count: usize,
    parent: impl Fn(VertexIndex) -> Option<VertexIndex>,
    start: VertexIndex,
    end: VertexIndex,
) -> PredecessorTrace {
    if start == end {
        return PredecessorTrace::Path(vec![start]);
    }

    let mut on_path = vec![false; vertex_count];
    let mut path = Vec::with_capacity(32);
    let mut vertex = end;
    on_path[end] = true;
    path.push(end);

    while vertex != start {
        let Some(next) = parent(vertex) else {
            return PredecessorTrace::Unreachable;
        };

        if on_path[next] {
            // `path` runs against the edges: reversing the tail that starts at `next`
            // gives the cycle in traversal order, rotated so that it starts at `next`.
            let Some(position) = path.iter().position(|&placed| placed == next) else {
                return PredecessorTrace::Unreachable;
            };
            let mut cycle = path.split_off(position);
            cycle.reverse();
            cycle.rotate_right(1);
            return PredecessorTrace::Cycle(cycle);
        }

        on_path[next] = true;
        path.push(next);
        vertex = next;
    }

    path.reverse();
    PredecessorTrace::Path(path)
}

pub(crate) fn to_vertices(graph: &GraphSnapshot, indices: &[VertexIndex]) -> Vec<Vertex> {
    indices.iter().map(|&index| *graph.vertex(index)).collect()
}

/// Builds the result of a frontier-based search (Dijkstra, A*) that cannot report
/// negative cycles.
pub(crate) fn build_search_result(
    graph: &GraphSnapshot,
    trace: PredecessorTrace,
    path_cost: Weight,
    stats: SearchStats,
) -> SearchResult {
    match trace {
        PredecessorTrace::Path(path) => {
            SearchResult::path_found(to_vertices(graph, &path), path_cost, stats)
        }
        PredecessorTrace::Unreachable => SearchResult::no_path(stats),
        PredecessorTrace::Cycle(cycle) => {
            warn!(
                cycle_length = cycle.len(),
                "predecessor links form a cycle, the graph likely has negative weights"
            );
            SearchResult::no_path(stats)
        }
    }
}
