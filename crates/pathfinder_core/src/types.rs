/// Caller-facing vertex identifier. Identity of a vertex is its id, never its coordinates.
pub type VertexId = i64;

/// Dense position of a vertex inside a [`crate::graph_snapshot::GraphSnapshot`].
pub type VertexIndex = usize;

/// Dense position of an edge inside a [`crate::graph_snapshot::GraphSnapshot`].
pub type EdgeIndex = usize;

pub type Weight = i64;
