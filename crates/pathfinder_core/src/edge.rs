use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    constants::{DEFAULT_EDGE_WEIGHT, MAX_EDGE_WEIGHT, MIN_EDGE_WEIGHT},
    edge_direction::EdgeDirection,
    types::{VertexId, Weight},
};

pub fn clamp_weight(weight: Weight) -> Weight {
    weight.clamp(MIN_EDGE_WEIGHT, MAX_EDGE_WEIGHT)
}

fn deserialize_clamped_weight<'de, D>(deserializer: D) -> Result<Option<Weight>, D::Error>
where
    D: Deserializer<'de>,
{
    let weight = Option::<Weight>::deserialize(deserializer)?;
    Ok(weight.map(clamp_weight))
}

/// An edge between two vertex ids. Each edge carries its own directedness, so a graph
/// may mix directed and undirected edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
    #[serde(default)]
    is_directed: bool,
    #[serde(default, deserialize_with = "deserialize_clamped_weight")]
    weight: Option<Weight>,
}

impl Edge {
    /// Creates an edge. A present weight is clamped to `[-99_999, 99_999]`.
    pub fn new(
        source: VertexId,
        target: VertexId,
        is_directed: bool,
        weight: Option<Weight>,
    ) -> Self {
        Edge {
            source,
            target,
            is_directed,
            weight: weight.map(clamp_weight),
        }
    }

    pub fn directed(source: VertexId, target: VertexId, weight: Option<Weight>) -> Self {
        Self::new(source, target, true, weight)
    }

    pub fn undirected(source: VertexId, target: VertexId, weight: Option<Weight>) -> Self {
        Self::new(source, target, false, weight)
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn target(&self) -> VertexId {
        self.target
    }

    pub fn is_directed(&self) -> bool {
        self.is_directed
    }

    pub fn set_directed(&mut self, is_directed: bool) {
        self.is_directed = is_directed;
    }

    pub fn weight(&self) -> Option<Weight> {
        self.weight
    }

    pub fn set_weight(&mut self, weight: Option<Weight>) {
        self.weight = weight.map(clamp_weight);
    }

    /// Cost used during relaxation. Unweighted edges cost [`DEFAULT_EDGE_WEIGHT`].
    pub fn cost(&self) -> Weight {
        self.weight.unwrap_or(DEFAULT_EDGE_WEIGHT)
    }

    pub fn has_negative_weight(&self) -> bool {
        self.weight.is_some_and(|weight| weight < 0)
    }

    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    /// Direction in which the edge can be walked when leaving `vertex`, if any.
    pub fn direction_from(&self, vertex: VertexId) -> Option<EdgeDirection> {
        if self.source == vertex {
            Some(EdgeDirection::Forward)
        } else if self.target == vertex && !self.is_directed {
            Some(EdgeDirection::Backward)
        } else {
            None
        }
    }

    pub fn adj_vertex(&self, vertex: VertexId) -> VertexId {
        if self.source == vertex {
            self.target
        } else {
            self.source
        }
    }
}
