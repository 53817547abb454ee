use std::{fmt::Display, time::Duration};

use serde::Serialize;

use crate::{
    types::{VertexId, Weight},
    vertex::Vertex,
};

/// Counters and timing shared by every engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub duration: Duration,
    pub vertices_visited: usize,
    pub edge_relaxations: usize,
}

/// Outcome of one shortest-path search. Built once by the engine and never mutated.
#[derive(Clone, Debug, Serialize)]
pub struct SearchResult {
    path: Vec<Vertex>,
    path_cost: Option<Weight>,
    duration: Duration,
    vertices_visited: usize,
    edge_relaxations: usize,
    has_negative_cycle: bool,
    negative_cycle: Option<Vec<Vertex>>,
    status_message: String,
}

impl SearchResult {
    pub(crate) fn path_found(path: Vec<Vertex>, path_cost: Weight, stats: SearchStats) -> Self {
        Self::build(path, Some(path_cost), stats, false, None)
    }

    pub(crate) fn no_path(stats: SearchStats) -> Self {
        Self::build(vec![], None, stats, false, None)
    }

    /// `cycle` lists the vertices in traversal order without repeating the first one.
    pub(crate) fn negative_cycle_found(cycle: Option<Vec<Vertex>>, stats: SearchStats) -> Self {
        Self::build(vec![], None, stats, true, cycle)
    }

    fn build(
        path: Vec<Vertex>,
        path_cost: Option<Weight>,
        stats: SearchStats,
        has_negative_cycle: bool,
        negative_cycle: Option<Vec<Vertex>>,
    ) -> Self {
        let mut result = SearchResult {
            path,
            path_cost,
            duration: stats.duration,
            vertices_visited: stats.vertices_visited,
            edge_relaxations: stats.edge_relaxations,
            has_negative_cycle,
            negative_cycle,
            status_message: String::new(),
        };
        result.status_message = result.describe();
        result
    }

    pub fn path(&self) -> &[Vertex] {
        &self.path
    }

    /// Sum of the edge costs along [`SearchResult::path`], `None` when there is no path.
    pub fn path_cost(&self) -> Option<Weight> {
        self.path_cost
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    pub fn vertices_visited(&self) -> usize {
        self.vertices_visited
    }

    pub fn edge_relaxations(&self) -> usize {
        self.edge_relaxations
    }

    pub fn has_negative_cycle(&self) -> bool {
        self.has_negative_cycle
    }

    pub fn negative_cycle(&self) -> Option<&[Vertex]> {
        self.negative_cycle.as_deref()
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn path_ids(&self) -> Vec<VertexId> {
        self.path.iter().map(Vertex::id).collect()
    }

    /// Renders the outcome. Depends only on the fields of the record.
    pub fn describe(&self) -> String {
        if self.has_negative_cycle {
            return match self.negative_cycle.as_deref() {
                Some(cycle) if !cycle.is_empty() => format!(
                    "No shortest path exists due to a negative weight cycle: {} -> {}",
                    join_ids(cycle),
                    cycle[0].id()
                ),
                _ => String::from("Negative weight cycle detected!"),
            };
        }

        if self.path.is_empty() {
            return String::from("No path found.");
        }

        format!(
            "Path: {}\nTime: {:.4}s, Vertices: {}, Relaxations: {}",
            join_ids(&self.path),
            self.elapsed_seconds(),
            self.vertices_visited,
            self.edge_relaxations
        )
    }
}

impl Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.status_message)
    }
}

fn join_ids(vertices: &[Vertex]) -> String {
    vertices
        .iter()
        .map(|vertex| vertex.id().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
