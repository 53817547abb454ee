use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{algorithms::AlgorithmsArgs, solve::SolveArgs};

mod algorithms;
mod graph_document;
mod parsers;
mod solve;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest path between two vertices of a graph file
    #[command(visible_alias = "s")]
    Solve {
        #[command(flatten)]
        args: SolveArgs,
    },
    /// List the algorithms that can run on a graph file
    Algorithms {
        #[command(flatten)]
        args: AlgorithmsArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Solve { args }) => solve::run(args)?,
        Some(Commands::Algorithms { args }) => algorithms::run(args)?,
        None => {}
    }

    Ok(())
}
