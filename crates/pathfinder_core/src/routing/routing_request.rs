use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug_span;

use crate::{error::SearchError, graph_snapshot::GraphSnapshot, types::VertexId};

use super::{
    astar::AStar,
    astar_heuristic::{AStarHeuristic, EuclideanHeuristic},
    bellman_ford::BellmanFord,
    dijkstra::Dijkstra,
    search_result::SearchResult,
    shortest_path_algorithm::ShortestPathAlgorithm,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingAlgorithm {
    Dijkstra,
    BellmanFord,
    AStar,
}

impl RoutingAlgorithm {
    pub const ALL: [RoutingAlgorithm; 3] = [
        RoutingAlgorithm::Dijkstra,
        RoutingAlgorithm::BellmanFord,
        RoutingAlgorithm::AStar,
    ];

    /// Algorithms that give a meaningful answer on `graph`. Only Bellman-Ford handles
    /// negative weights.
    pub fn available_for(graph: &GraphSnapshot) -> &'static [RoutingAlgorithm] {
        if graph.has_negative_weights() {
            &[RoutingAlgorithm::BellmanFord]
        } else {
            &Self::ALL
        }
    }

    pub fn is_available_for(self, graph: &GraphSnapshot) -> bool {
        Self::available_for(graph).contains(&self)
    }
}

impl Display for RoutingAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoutingAlgorithm::Dijkstra => "Dijkstra",
            RoutingAlgorithm::BellmanFord => "Bellman-Ford",
            RoutingAlgorithm::AStar => "A*",
        };
        write!(f, "{name}")
    }
}

impl FromStr for RoutingAlgorithm {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(RoutingAlgorithm::Dijkstra),
            "bellman-ford" | "bellman_ford" | "bellmanford" => Ok(RoutingAlgorithm::BellmanFord),
            "a*" | "astar" | "a_star" => Ok(RoutingAlgorithm::AStar),
            _ => Err(format!("Unknown algorithm '{input}'")),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RoutingRequest {
    pub start: VertexId,
    pub end: VertexId,
    pub algorithm: RoutingAlgorithm,
    /// Graph-level directedness. Only decides the directedness of edges the caller
    /// creates; existing edges are always walked according to their own flag.
    #[serde(default)]
    pub directed_default: bool,
}

impl RoutingRequest {
    pub fn new(start: VertexId, end: VertexId, algorithm: RoutingAlgorithm) -> Self {
        RoutingRequest {
            start,
            end,
            algorithm,
            directed_default: false,
        }
    }

    /// Runs the requested algorithm, A* with [`EuclideanHeuristic`].
    pub fn solve(&self, graph: &GraphSnapshot) -> Result<SearchResult, SearchError> {
        self.solve_with_heuristic(graph, EuclideanHeuristic)
    }

    pub fn solve_with_heuristic(
        &self,
        graph: &GraphSnapshot,
        heuristic: impl AStarHeuristic,
    ) -> Result<SearchResult, SearchError> {
        if !self.algorithm.is_available_for(graph) {
            return Err(SearchError::AlgorithmUnavailable(self.algorithm));
        }

        let _span = debug_span!(
            "solve",
            algorithm = %self.algorithm,
            start = self.start,
            end = self.end,
            directed_default = self.directed_default
        )
        .entered();

        match self.algorithm {
            RoutingAlgorithm::Dijkstra => Dijkstra::new().calc_path(graph, self.start, self.end),
            RoutingAlgorithm::BellmanFord => {
                BellmanFord::new().calc_path(graph, self.start, self.end)
            }
            RoutingAlgorithm::AStar => {
                AStar::with_heuristic(heuristic).calc_path(graph, self.start, self.end)
            }
        }
    }
}
