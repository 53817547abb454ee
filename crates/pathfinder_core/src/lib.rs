pub mod constants;
pub mod edge;
pub mod edge_direction;
pub mod error;
pub mod graph_builder;
pub mod graph_snapshot;
pub mod routing;
pub mod stopwatch;
pub mod types;
pub mod vertex;

#[cfg(test)]
pub(crate) mod test_graph_utils;
