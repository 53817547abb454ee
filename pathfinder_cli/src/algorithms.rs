use std::path::PathBuf;

use clap::Args;
use pathfinder_core::routing::routing_request::RoutingAlgorithm;
use tracing::info;

use crate::graph_document::GraphDocument;

#[derive(Args)]
pub struct AlgorithmsArgs {
    /// JSON graph file
    #[arg(short, long)]
    graph: PathBuf,
}

pub fn run(args: AlgorithmsArgs) -> Result<(), anyhow::Error> {
    let graph = GraphDocument::from_file(&args.graph)?
        .into_builder()?
        .snapshot()?;

    if graph.has_negative_weights() {
        info!("Graph has negative weights, only Bellman-Ford can run");
    }

    for algorithm in RoutingAlgorithm::available_for(&graph) {
        println!("{algorithm}");
    }

    Ok(())
}
