use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::constants::MAX_WEIGHT;
use crate::error::SearchError;
use crate::graph_snapshot::GraphSnapshot;
use crate::stopwatch::Stopwatch;
use crate::types::{VertexId, VertexIndex, Weight};

use super::routing_path_builder::{build_search_result, trace_predecessors};
use super::search_result::{SearchResult, SearchStats};
use super::shortest_path_algorithm::ShortestPathAlgorithm;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
struct HeapItem {
    vertex: VertexIndex,
    weight: Weight,
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip weight to make this a min-heap, lower index first on ties
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

#[derive(Clone, Copy)]
struct VertexData {
    weight: Weight,
    settled: bool,
    parent: Option<VertexIndex>,
}

impl VertexData {
    fn new() -> Self {
        VertexData {
            weight: MAX_WEIGHT,
            settled: false,
            parent: None,
        }
    }
}

/// Uniform-cost search. Assumes non-negative weights: it stops as soon as the end
/// vertex is settled, which is only correct when no later relaxation can improve a
/// settled vertex.
pub struct Dijkstra {
    heap: BinaryHeap<HeapItem>,
    data: Vec<VertexData>,
    vertices_visited: usize,
    edge_relaxations: usize,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra {
            heap: BinaryHeap::with_capacity(1024),
            data: Vec::new(),
            vertices_visited: 0,
            edge_relaxations: 0,
        }
    }

    fn init(&mut self, graph: &GraphSnapshot, start: VertexIndex) {
        self.heap.clear();
        self.data.clear();
        self.data.resize(graph.vertex_count(), VertexData::new());
        self.vertices_visited = 0;
        self.edge_relaxations = 0;

        self.data[start].weight = 0;
        self.heap.push(HeapItem {
            vertex: start,
            weight: 0,
        });
    }

    fn update_vertex_data(&mut self, vertex: VertexIndex, weight: Weight, parent: VertexIndex) {
        let data = &mut self.data[vertex];
        data.weight = weight;
        data.parent = Some(parent);
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn calc_path(
        &mut self,
        graph: &GraphSnapshot,
        start: VertexId,
        end: VertexId,
    ) -> Result<SearchResult, SearchError> {
        let stopwatch = Stopwatch::new("dijkstra/calc_path");
        let (start, end) = graph.resolve_endpoints(start, end)?;

        self.init(graph, start);

        while let Some(HeapItem { vertex, weight }) = self.heap.pop() {
            // Vertex is already settled, skip
            if self.data[vertex].settled {
                continue;
            }

            // A cheaper entry for this vertex was pushed after this one
            if weight > self.data[vertex].weight {
                continue;
            }

            self.data[vertex].settled = true;
            self.vertices_visited += 1;

            if vertex == end {
                break;
            }

            for (edge_id, adj_vertex) in graph.neighbors(vertex) {
                if self.data[adj_vertex].settled {
                    continue;
                }

                let Some(next_weight) = weight.checked_add(graph.edge(edge_id).cost()) else {
                    continue;
                };

                if next_weight < self.data[adj_vertex].weight {
                    self.update_vertex_data(adj_vertex, next_weight, vertex);
                    self.heap.push(HeapItem {
                        vertex: adj_vertex,
                        weight: next_weight,
                    });
                    self.edge_relaxations += 1;
                }
            }
        }

        debug!(
            vertices_visited = self.vertices_visited,
            edge_relaxations = self.edge_relaxations,
            "Dijkstra finished"
        );
        stopwatch.report();

        let trace = trace_predecessors(
            graph.vertex_count(),
            |vertex| self.data[vertex].parent,
            start,
            end,
        );

        Ok(build_search_result(
            graph,
            trace,
            self.data[end].weight,
            SearchStats {
                duration: stopwatch.elapsed(),
                vertices_visited: self.vertices_visited,
                edge_relaxations: self.edge_relaxations,
            },
        ))
    }
}
