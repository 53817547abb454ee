use std::{
    fmt::Display,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

use crate::types::VertexId;

/// A graph vertex. Equality and hashing only look at the id; the coordinates are
/// opaque data that A* heuristics may use.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Vertex {
    id: VertexId,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
}

impl Vertex {
    pub fn new(id: VertexId, x: f64, y: f64) -> Self {
        Vertex { id, x, y }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn euclidean_distance(&self, other: &Vertex) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_identity_ignores_coordinates() {
        let a = Vertex::new(1, 0.0, 0.0);
        let b = Vertex::new(1, 25.0, -3.5);
        let c = Vertex::new(2, 0.0, 0.0);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Vertex> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_euclidean_distance() {
        let a = Vertex::new(1, 0.0, 0.0);
        let b = Vertex::new(2, 3.0, 4.0);

        assert_eq!(a.euclidean_distance(&b), 5.0);
        assert_eq!(b.euclidean_distance(&a), 5.0);
    }
}
