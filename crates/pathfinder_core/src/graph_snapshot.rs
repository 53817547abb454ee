use fxhash::FxHashMap;

use crate::{
    edge::Edge,
    edge_direction::EdgeDirection,
    error::{GraphError, SearchError},
    types::{EdgeIndex, VertexId, VertexIndex},
    vertex::Vertex,
};

/// Frozen copy of a graph that the search engines read from.
///
/// Vertices are addressed by a dense index assigned in insertion order, and every
/// edge is listed in the adjacency list of both of its endpoints regardless of its
/// directedness. Whether an edge may be walked from a given endpoint is decided by
/// [`GraphSnapshot::edge_direction`].
#[derive(Debug, Clone)]
pub struct GraphSnapshot {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    index: FxHashMap<VertexId, VertexIndex>,
    endpoints: Vec<(VertexIndex, VertexIndex)>,
    adjacency_list: Vec<Vec<EdgeIndex>>,
}

impl GraphSnapshot {
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let mut index = FxHashMap::default();
        index.reserve(vertices.len());

        for (vertex_index, vertex) in vertices.iter().enumerate() {
            if index.insert(vertex.id(), vertex_index).is_some() {
                return Err(GraphError::DuplicateVertex(vertex.id()));
            }
        }

        let mut endpoints = Vec::with_capacity(edges.len());
        let mut adjacency_list = vec![vec![]; vertices.len()];

        for (edge_id, edge) in edges.iter().enumerate() {
            let lookup = |id: VertexId| {
                index.get(&id).copied().ok_or(GraphError::UnknownEndpoint {
                    from: edge.source(),
                    to: edge.target(),
                    missing: id,
                })
            };
            let source = lookup(edge.source())?;
            let target = lookup(edge.target())?;

            endpoints.push((source, target));
            adjacency_list[source].push(edge_id);
            if target != source {
                adjacency_list[target].push(edge_id);
            }
        }

        Ok(GraphSnapshot {
            vertices,
            edges,
            index,
            endpoints,
            adjacency_list,
        })
    }

    pub fn from_slices(vertices: &[Vertex], edges: &[Edge]) -> Result<Self, GraphError> {
        Self::new(vertices.to_vec(), edges.to_vec())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex(&self, vertex: VertexIndex) -> &Vertex {
        &self.vertices[vertex]
    }

    pub fn edge(&self, edge_id: EdgeIndex) -> &Edge {
        &self.edges[edge_id]
    }

    pub fn vertex_index(&self, id: VertexId) -> Option<VertexIndex> {
        self.index.get(&id).copied()
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.index.contains_key(&id)
    }

    /// Resolves the ids of a search request, failing when either one is unknown.
    pub fn resolve_endpoints(
        &self,
        start: VertexId,
        end: VertexId,
    ) -> Result<(VertexIndex, VertexIndex), SearchError> {
        let start = self
            .vertex_index(start)
            .ok_or(SearchError::StartNotFound(start))?;
        let end = self.vertex_index(end).ok_or(SearchError::EndNotFound(end))?;
        Ok((start, end))
    }

    pub fn vertex_edges(&self, vertex: VertexIndex) -> &[EdgeIndex] {
        &self.adjacency_list[vertex]
    }

    pub fn endpoints(&self, edge_id: EdgeIndex) -> (VertexIndex, VertexIndex) {
        self.endpoints[edge_id]
    }

    pub fn edge_direction(&self, edge_id: EdgeIndex, from: VertexIndex) -> Option<EdgeDirection> {
        let (source, target) = self.endpoints[edge_id];

        if source == from {
            Some(EdgeDirection::Forward)
        } else if target == from && !self.edges[edge_id].is_directed() {
            Some(EdgeDirection::Backward)
        } else {
            None
        }
    }

    pub fn adj_vertex(&self, edge_id: EdgeIndex, direction: EdgeDirection) -> VertexIndex {
        let (source, target) = self.endpoints[edge_id];
        match direction {
            EdgeDirection::Forward => target,
            EdgeDirection::Backward => source,
        }
    }

    /// Edges that can be walked when leaving `vertex`, with the vertex they lead to.
    pub fn neighbors(
        &self,
        vertex: VertexIndex,
    ) -> impl Iterator<Item = (EdgeIndex, VertexIndex)> + '_ {
        self.adjacency_list[vertex]
            .iter()
            .filter_map(move |&edge_id| {
                self.edge_direction(edge_id, vertex)
                    .map(|direction| (edge_id, self.adj_vertex(edge_id, direction)))
            })
    }

    /// Every `(from, to)` orientation in which the edge can be walked: one for a directed
    /// edge, two for an undirected one.
    pub fn arcs(&self, edge_id: EdgeIndex) -> impl Iterator<Item = (VertexIndex, VertexIndex)> {
        let (source, target) = self.endpoints[edge_id];
        let backward = (!self.edges[edge_id].is_directed()).then_some((target, source));
        std::iter::once((source, target)).chain(backward)
    }

    pub fn has_negative_weights(&self) -> bool {
        self.edges.iter().any(Edge::has_negative_weight)
    }
}
