use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::constants::MAX_WEIGHT;
use crate::error::SearchError;
use crate::graph_snapshot::GraphSnapshot;
use crate::stopwatch::Stopwatch;
use crate::types::{VertexId, VertexIndex, Weight};

use super::astar_heuristic::{AStarHeuristic, EuclideanHeuristic};
use super::routing_path_builder::{build_search_result, trace_predecessors};
use super::search_result::{SearchResult, SearchStats};
use super::shortest_path_algorithm::ShortestPathAlgorithm;

/// https://en.wikipedia.org/wiki/A*_search_algorithm

#[derive(Copy, Clone, Debug)]
struct HeapItem {
    vertex: VertexIndex,

    /// g_score is the current cheapest weight from start to `vertex`
    g_score: Weight,

    /// f_score = g_score + h_score, with h_score being the heuristic value from `vertex` to the end
    f_score: f64,

    /// Push order, the last tie-break
    sequence: u64,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    /// Lowest f_score first, then lowest g_score, then the earliest push.
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip everything to make this a min-heap
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.g_score.cmp(&self.g_score))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

#[derive(Clone, Copy)]
struct VertexData {
    settled: bool,
    g_score: Weight,
    parent: Option<VertexIndex>,
}

impl VertexData {
    fn new() -> Self {
        VertexData {
            settled: false,
            g_score: MAX_WEIGHT,
            parent: None,
        }
    }
}

pub struct AStar<H: AStarHeuristic> {
    heap: BinaryHeap<HeapItem>,
    data: Vec<VertexData>,
    heuristic: H,
    sequence: u64,
    vertices_visited: usize,
    edge_relaxations: usize,
}

impl<H: AStarHeuristic> AStar<H> {
    pub fn with_heuristic(heuristic: H) -> AStar<H> {
        AStar {
            heap: BinaryHeap::with_capacity(1024),
            data: Vec::new(),
            heuristic,
            sequence: 0,
            vertices_visited: 0,
            edge_relaxations: 0,
        }
    }

    fn init(&mut self, graph: &GraphSnapshot, start: VertexIndex, end: VertexIndex) {
        self.heap.clear();
        self.data.clear();
        self.data.resize(graph.vertex_count(), VertexData::new());
        self.sequence = 0;
        self.vertices_visited = 0;
        self.edge_relaxations = 0;

        let h_score = self.heuristic.estimate(graph.vertex(start), graph.vertex(end));
        self.data[start].g_score = 0;
        self.push(start, 0, h_score);
    }

    fn push(&mut self, vertex: VertexIndex, g_score: Weight, f_score: f64) {
        self.heap.push(HeapItem {
            vertex,
            g_score,
            f_score,
            sequence: self.sequence,
        });
        self.sequence += 1;
    }
}

impl<H: AStarHeuristic> ShortestPathAlgorithm for AStar<H> {
    fn calc_path(
        &mut self,
        graph: &GraphSnapshot,
        start: VertexId,
        end: VertexId,
    ) -> Result<SearchResult, SearchError> {
        let stopwatch = Stopwatch::new("astar/calc_path");
        let (start, end) = graph.resolve_endpoints(start, end)?;

        self.init(graph, start, end);

        while let Some(HeapItem {
            vertex, g_score, ..
        }) = self.heap.pop()
        {
            // Duplicate entry left behind by a later improvement
            if self.data[vertex].settled {
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

                let Some(next_weight) = g_score.checked_add(graph.edge(edge_id).cost()) else {
                    continue;
                };

                if next_weight < self.data[adj_vertex].g_score {
                    let h_score = self
                        .heuristic
                        .estimate(graph.vertex(adj_vertex), graph.vertex(end));
                    let f_score = next_weight as f64 + h_score;

                    let data = &mut self.data[adj_vertex];
                    data.g_score = next_weight;
                    data.parent = Some(vertex);

                    self.push(adj_vertex, next_weight, f_score);
                    self.edge_relaxations += 1;
                }
            }
        }

        debug!(
            vertices_visited = self.vertices_visited,
            edge_relaxations = self.edge_relaxations,
            "AStar finished"
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
            self.data[end].g_score,
            SearchStats {
                duration: stopwatch.elapsed(),
                vertices_visited: self.vertices_visited,
                edge_relaxations: self.edge_relaxations,
            },
        ))
    }
}

impl AStar<EuclideanHeuristic> {
    pub fn new() -> AStar<EuclideanHeuristic> {
        Self::with_heuristic(EuclideanHeuristic)
    }
}

impl Default for AStar<EuclideanHeuristic> {
    fn default() -> Self {
        Self::new()
    }
}
