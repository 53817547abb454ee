use tracing::{debug, error, warn};

use crate::constants::MAX_WEIGHT;
use crate::error::SearchError;
use crate::graph_snapshot::GraphSnapshot;
use crate::stopwatch::Stopwatch;
use crate::types::{VertexId, VertexIndex, Weight};

use super::negative_cycle::{find_predecessor_cycle, walk_back_to_cycle};
use super::routing_path_builder::{PredecessorTrace, to_vertices, trace_predecessors};
use super::search_result::{SearchResult, SearchStats};
use super::shortest_path_algorithm::ShortestPathAlgorithm;

/// Label-correcting search that tolerates negative weights and reports negative cycles
/// reachable from the start vertex.
///
/// Edges are scanned in snapshot order, undirected edges in both orientations. An
/// unweighted edge costs 1, like in the other engines.
pub struct BellmanFord {
    distances: Vec<Weight>,
    parents: Vec<Option<VertexIndex>>,
    edge_relaxations: usize,
}

impl Default for BellmanFord {
    fn default() -> Self {
        Self::new()
    }
}

impl BellmanFord {
    pub fn new() -> Self {
        BellmanFord {
            distances: Vec::new(),
            parents: Vec::new(),
            edge_relaxations: 0,
        }
    }

    fn init(&mut self, graph: &GraphSnapshot, start: VertexIndex) {
        self.distances.clear();
        self.distances.resize(graph.vertex_count(), MAX_WEIGHT);
        self.parents.clear();
        self.parents.resize(graph.vertex_count(), None);
        self.edge_relaxations = 0;

        self.distances[start] = 0;
    }

    fn relax(&mut self, from: VertexIndex, to: VertexIndex, cost: Weight) -> bool {
        let from_weight = self.distances[from];
        if from_weight == MAX_WEIGHT {
            return false;
        }

        let Some(candidate) = from_weight.checked_add(cost) else {
            return false;
        };

        if candidate < self.distances[to] {
            self.distances[to] = candidate;
            self.parents[to] = Some(from);
            return true;
        }

        false
    }

    /// Scans every edge once. Returns the last vertex whose distance improved.
    fn relax_all(&mut self, graph: &GraphSnapshot) -> Option<VertexIndex> {
        let mut last_relaxed = None;

        for edge_id in 0..graph.edge_count() {
            let cost = graph.edge(edge_id).cost();
            for (from, to) in graph.arcs(edge_id) {
                if self.relax(from, to, cost) {
                    last_relaxed = Some(to);
                }
            }
        }

        last_relaxed
    }

    fn reachable_count(&self) -> usize {
        self.distances
            .iter()
            .filter(|&&distance| distance != MAX_WEIGHT)
            .count()
    }

    fn negative_cycle_result(
        &self,
        graph: &GraphSnapshot,
        cycle: Option<Vec<VertexIndex>>,
        stats: SearchStats,
    ) -> SearchResult {
        match cycle {
            Some(cycle) => {
                debug!(cycle_length = cycle.len(), "negative weight cycle found");
                SearchResult::negative_cycle_found(Some(to_vertices(graph, &cycle)), stats)
            }
            None => {
                error!("negative weight cycle detected but could not be reconstructed");
                SearchResult::negative_cycle_found(None, stats)
            }
        }
    }
}

impl ShortestPathAlgorithm for BellmanFord {
    fn calc_path(
        &mut self,
        graph: &GraphSnapshot,
        start: VertexId,
        end: VertexId,
    ) -> Result<SearchResult, SearchError> {
        let stopwatch = Stopwatch::new("bellman_ford/calc_path");
        let (start, end) = graph.resolve_endpoints(start, end)?;

        self.init(graph, start);

        let max_rounds = graph.vertex_count().saturating_sub(1);
        let mut rounds = 0;

        while rounds < max_rounds {
            let before = self.edge_relaxations;

            for edge_id in 0..graph.edge_count() {
                let cost = graph.edge(edge_id).cost();
                for (from, to) in graph.arcs(edge_id) {
                    if self.relax(from, to, cost) {
                        self.edge_relaxations += 1;
                    }
                }
            }

            rounds += 1;

            // Fixed point reached
            if self.edge_relaxations == before {
                break;
            }
        }

        // Any improvement after |V| - 1 rounds means a negative cycle is reachable. The
        // improvements are kept so the predecessor links close that cycle.
        let still_relaxed = self.relax_all(graph);

        debug!(
            rounds,
            edge_relaxations = self.edge_relaxations,
            negative_cycle = still_relaxed.is_some(),
            "BellmanFord finished"
        );
        stopwatch.report();

        let stats = SearchStats {
            duration: stopwatch.elapsed(),
            vertices_visited: self.reachable_count(),
            edge_relaxations: self.edge_relaxations,
        };

        if let Some(relaxed_vertex) = still_relaxed {
            let cycle = find_predecessor_cycle(graph, &self.parents)
                .or_else(|| walk_back_to_cycle(&self.parents, relaxed_vertex));
            return Ok(self.negative_cycle_result(graph, cycle, stats));
        }

        let trace = trace_predecessors(
            graph.vertex_count(),
            |vertex| self.parents[vertex],
            start,
            end,
        );

        let result = match trace {
            PredecessorTrace::Path(path) => {
                SearchResult::path_found(to_vertices(graph, &path), self.distances[end], stats)
            }
            PredecessorTrace::Unreachable => SearchResult::no_path(stats),
            PredecessorTrace::Cycle(cycle) => {
                warn!("predecessor links loop without a detected negative cycle");
                self.negative_cycle_result(graph, Some(cycle), stats)
            }
        };

        Ok(result)
    }
}
