use crate::vertex::Vertex;

/// Estimate of the remaining cost from `vertex` to `end`.
///
/// The engine does not check admissibility or consistency: an overestimating heuristic
/// still yields a path, without the shortest-path guarantee.
pub trait AStarHeuristic {
    fn estimate(&self, vertex: &Vertex, end: &Vertex) -> f64;
}

impl<F> AStarHeuristic for F
where
    F: Fn(&Vertex, &Vertex) -> f64,
{
    fn estimate(&self, vertex: &Vertex, end: &Vertex) -> f64 {
        self(vertex, end)
    }
}

/// Straight-line distance between the vertex coordinates.
#[derive(Clone, Copy, Debug, Default)]
pub struct EuclideanHeuristic;

impl AStarHeuristic for EuclideanHeuristic {
    fn estimate(&self, vertex: &Vertex, end: &Vertex) -> f64 {
        vertex.euclidean_distance(end)
    }
}

/// Always 0, which makes A* expand vertices in the same order as Dijkstra.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl AStarHeuristic for ZeroHeuristic {
    #[inline(always)]
    fn estimate(&self, _vertex: &Vertex, _end: &Vertex) -> f64 {
        0.0
    }
}
