use tracing::trace;

use crate::{
    edge::Edge,
    error::GraphError,
    graph_snapshot::GraphSnapshot,
    types::{VertexId, Weight},
    vertex::Vertex,
};

/// Caller-side editable graph. Searches never run on it directly: call
/// [`GraphBuilder::snapshot`] to freeze a copy.
///
/// At most one edge connects a pair of vertices, whatever its orientation.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    directed: bool,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// `directed` is the directedness given to edges added with [`GraphBuilder::add_edge`].
    pub fn new(directed: bool) -> Self {
        GraphBuilder {
            directed,
            ..Default::default()
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Changes the directedness of future edges. Existing edges keep their own flag.
    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.iter().any(|vertex| vertex.id() == id)
    }

    pub fn edge(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.connects(from, to))
    }

    /// Smallest positive id not used by any vertex, so removed ids get reused.
    pub fn next_vertex_id(&self) -> VertexId {
        let mut id = 1;
        while self.contains_vertex(id) {
            id += 1;
        }
        id
    }

    /// Returns `false` when a vertex with the same id already exists.
    pub fn add_vertex(&mut self, vertex: Vertex) -> bool {
        if self.contains_vertex(vertex.id()) {
            return false;
        }

        trace!(id = vertex.id(), "vertex added");
        self.vertices.push(vertex);
        true
    }

    /// Adds a vertex at `(x, y)` with the next free id.
    pub fn add_vertex_at(&mut self, x: f64, y: f64) -> VertexId {
        let id = self.next_vertex_id();
        self.vertices.push(Vertex::new(id, x, y));
        id
    }

    /// Removes the vertex and every edge touching it.
    pub fn remove_vertex(&mut self, id: VertexId) -> bool {
        let Some(position) = self.vertices.iter().position(|vertex| vertex.id() == id) else {
            return false;
        };

        self.vertices.remove(position);
        self.edges
            .retain(|edge| edge.source() != id && edge.target() != id);
        trace!(id, "vertex removed");
        true
    }

    /// Adds an edge with the builder's directedness.
    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: Option<Weight>,
    ) -> Result<bool, GraphError> {
        self.add_edge_with(from, to, self.directed, weight)
    }

    /// Returns `Ok(false)` when the two vertices are already connected in either
    /// orientation.
    pub fn add_edge_with(
        &mut self,
        from: VertexId,
        to: VertexId,
        is_directed: bool,
        weight: Option<Weight>,
    ) -> Result<bool, GraphError> {
        for id in [from, to] {
            if !self.contains_vertex(id) {
                return Err(GraphError::UnknownEndpoint {
                    from,
                    to,
                    missing: id,
                });
            }
        }

        if self.edge(from, to).is_some() {
            return Ok(false);
        }

        trace!(from, to, is_directed, ?weight, "edge added");
        self.edges.push(Edge::new(from, to, is_directed, weight));
        Ok(true)
    }

    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> bool {
        let before = self.edges.len();
        self.edges.retain(|edge| !edge.connects(from, to));
        before != self.edges.len()
    }

    /// Sets the weight of the edge between `from` and `to`, clamped to the allowed range.
    pub fn set_weight(&mut self, from: VertexId, to: VertexId, weight: Option<Weight>) -> bool {
        match self.edges.iter_mut().find(|edge| edge.connects(from, to)) {
            Some(edge) => {
                edge.set_weight(weight);
                true
            }
            None => false,
        }
    }

    pub fn set_edge_directed(&mut self, from: VertexId, to: VertexId, is_directed: bool) -> bool {
        match self.edges.iter_mut().find(|edge| edge.connects(from, to)) {
            Some(edge) => {
                edge.set_directed(is_directed);
                true
            }
            None => false,
        }
    }

    pub fn has_negative_weights(&self) -> bool {
        self.edges.iter().any(Edge::has_negative_weight)
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }

    /// Freezes a copy of the current graph for a search.
    pub fn snapshot(&self) -> Result<GraphSnapshot, GraphError> {
        GraphSnapshot::from_slices(&self.vertices, &self.edges)
    }
}

#[cfg(test)]
mod tests {
    use crate::routing::{
        dijkstra::Dijkstra, routing_request::RoutingAlgorithm,
        shortest_path_algorithm::ShortestPathAlgorithm,
    };

    use super::*;

    fn builder_with_vertices(directed: bool, count: usize) -> GraphBuilder {
        let mut builder = GraphBuilder::new(directed);
        for _ in 0..count {
            builder.add_vertex_at(0.0, 0.0);
        }
        builder
    }

    #[test]
    fn test_add_vertex_rejects_duplicate_id() {
        let mut builder = GraphBuilder::new(false);

        assert!(builder.add_vertex(Vertex::new(1, 0.0, 0.0)));
        assert!(!builder.add_vertex(Vertex::new(1, 10.0, 10.0)));
        assert_eq!(builder.vertices().len(), 1);
    }

    #[test]
    fn test_next_vertex_id_reuses_removed_ids() {
        let mut builder = builder_with_vertices(false, 3);
        assert_eq!(builder.next_vertex_id(), 4);

        builder.remove_vertex(2);
        assert_eq!(builder.next_vertex_id(), 2);
        assert_eq!(builder.add_vertex_at(1.0, 1.0), 2);
    }

    #[test]
    fn test_add_edge_uses_graph_directedness() {
        let mut builder = builder_with_vertices(true, 3);

        assert_eq!(builder.add_edge(1, 2, Some(3)), Ok(true));
        builder.set_directed(false);
        assert_eq!(builder.add_edge(2, 3, None), Ok(true));

        assert!(builder.edge(1, 2).unwrap().is_directed());
        assert!(!builder.edge(2, 3).unwrap().is_directed());
    }

    #[test]
    fn test_add_edge_rejects_existing_pair() {
        let mut builder = builder_with_vertices(false, 2);

        assert_eq!(builder.add_edge(1, 2, Some(1)), Ok(true));
        assert_eq!(builder.add_edge(1, 2, Some(5)), Ok(false));
        assert_eq!(builder.add_edge_with(2, 1, true, Some(5)), Ok(false));
        assert_eq!(builder.edges().len(), 1);
    }

    #[test]
    fn test_add_edge_requires_endpoints() {
        let mut builder = builder_with_vertices(false, 1);

        assert_eq!(
            builder.add_edge(1, 9, None),
            Err(GraphError::UnknownEndpoint {
                from: 1,
                to: 9,
                missing: 9
            })
        );
    }

    #[test]
    fn test_remove_vertex_removes_incident_edges() {
        let mut builder = builder_with_vertices(false, 3);
        builder.add_edge(1, 2, None).unwrap();
        builder.add_edge(2, 3, None).unwrap();
        builder.add_edge(1, 3, None).unwrap();

        assert!(builder.remove_vertex(2));
        assert!(!builder.remove_vertex(2));
        assert_eq!(builder.edges().len(), 1);
        assert!(builder.edge(1, 3).is_some());
    }

    #[test]
    fn test_set_weight_is_clamped() {
        let mut builder = builder_with_vertices(false, 2);
        builder.add_edge(1, 2, None).unwrap();

        assert!(builder.set_weight(2, 1, Some(500_000)));
        assert_eq!(builder.edge(1, 2).unwrap().weight(), Some(99_999));
        assert!(!builder.set_weight(1, 3, Some(1)));
    }

    #[test]
    fn test_snapshot_is_independent_of_later_edits() {
        let mut builder = builder_with_vertices(false, 3);
        builder.add_edge(1, 2, Some(2)).unwrap();
        builder.add_edge(2, 3, Some(2)).unwrap();

        let graph = builder.snapshot().unwrap();
        builder.remove_edge(2, 3);
        builder.set_weight(1, 2, Some(-4));

        let result = Dijkstra::new().calc_path(&graph, 1, 3).unwrap();
        assert_eq!(result.path_cost(), Some(4));
        assert!(!graph.has_negative_weights());
        assert!(builder.has_negative_weights());

        let graph = builder.snapshot().unwrap();
        assert_eq!(
            RoutingAlgorithm::available_for(&graph),
            &[RoutingAlgorithm::BellmanFord]
        );
    }

    #[test]
    fn test_clear() {
        let mut builder = builder_with_vertices(false, 2);
        builder.add_edge(1, 2, None).unwrap();

        builder.clear();

        assert!(builder.vertices().is_empty());
        assert!(builder.edges().is_empty());
        assert_eq!(builder.next_vertex_id(), 1);
    }
}
