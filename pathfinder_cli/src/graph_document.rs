use std::{fs, path::Path};

use anyhow::{Context, bail};
use pathfinder_core::{
    graph_builder::GraphBuilder,
    types::{VertexId, Weight},
    vertex::Vertex,
};
use serde::Deserialize;
use tracing::{info, warn};

/// JSON graph file: `{ "directed": bool, "vertices": [...], "edges": [...] }`.
///
/// An edge without `is_directed` takes the document's `directed` flag.
#[derive(Debug, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub directed: bool,
    pub vertices: Vec<Vertex>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Deserialize)]
pub struct EdgeRecord {
    pub source: VertexId,
    pub target: VertexId,
    pub is_directed: Option<bool>,
    pub weight: Option<Weight>,
}

impl GraphDocument {
    pub fn from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Cannot read graph file {}", path.display()))?;
        let document = serde_json::from_str(&content)
            .with_context(|| format!("Invalid graph file {}", path.display()))?;
        Ok(document)
    }

    /// Loads the document into a builder. Duplicate vertex ids are an error, an edge
    /// between an already connected pair is skipped.
    pub fn into_builder(self) -> Result<GraphBuilder, anyhow::Error> {
        let mut builder = GraphBuilder::new(self.directed);

        for vertex in self.vertices {
            if !builder.add_vertex(vertex) {
                bail!("Duplicate vertex id {}", vertex.id());
            }
        }

        for edge in self.edges {
            let is_directed = edge.is_directed.unwrap_or(self.directed);
            if !builder.add_edge_with(edge.source, edge.target, is_directed, edge.weight)? {
                warn!(
                    "Skipping edge {} - {}: the vertices are already connected",
                    edge.source, edge.target
                );
            }
        }

        info!(
            vertices = builder.vertices().len(),
            edges = builder.edges().len(),
            "Graph loaded"
        );

        Ok(builder)
    }
}
