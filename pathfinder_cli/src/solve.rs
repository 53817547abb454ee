use std::path::PathBuf;

use clap::{Args, ValueEnum};
use pathfinder_core::{
    routing::{
        astar_heuristic::{EuclideanHeuristic, ZeroHeuristic},
        routing_request::{RoutingAlgorithm, RoutingRequest},
        search_result::SearchResult,
    },
    types::VertexId,
};
use tracing::info;

use crate::{graph_document::GraphDocument, parsers};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum HeuristicKind {
    /// Straight-line distance between vertex coordinates
    #[default]
    Euclidean,
    /// Always zero, A* then behaves like Dijkstra
    Zero,
}

#[derive(Args)]
pub struct SolveArgs {
    /// JSON graph file
    #[arg(short, long)]
    graph: PathBuf,

    #[arg(short, long, value_parser = parsers::parse_vertex_id)]
    start: VertexId,

    #[arg(short, long, value_parser = parsers::parse_vertex_id)]
    end: VertexId,

    /// dijkstra, bellman-ford or astar
    #[arg(short, long, value_parser = parsers::parse_algorithm, default_value = "dijkstra")]
    algorithm: RoutingAlgorithm,

    /// Heuristic used by A*
    #[arg(long, value_enum, default_value_t = HeuristicKind::Euclidean)]
    heuristic: HeuristicKind,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: SolveArgs) -> Result<(), anyhow::Error> {
    info!("Solving {:?} with {}", args.graph, args.algorithm);

    let document = GraphDocument::from_file(&args.graph)?;
    let directed = document.directed;
    let graph = document.into_builder()?.snapshot()?;

    let request = RoutingRequest {
        directed_default: directed,
        ..RoutingRequest::new(args.start, args.end, args.algorithm)
    };

    let result = match args.heuristic {
        HeuristicKind::Euclidean => request.solve_with_heuristic(&graph, EuclideanHeuristic)?,
        HeuristicKind::Zero => request.solve_with_heuristic(&graph, ZeroHeuristic)?,
    };

    println!("{}", render(&result, args.json)?);

    Ok(())
}

fn render(result: &SearchResult, json: bool) -> Result<String, anyhow::Error> {
    if json {
        Ok(serde_json::to_string_pretty(result)?)
    } else {
        Ok(result.to_string())
    }
}
