use crate::types::Weight;

pub const MAX_EDGE_WEIGHT: Weight = 99_999;
pub const MIN_EDGE_WEIGHT: Weight = -99_999;

/// Cost of an edge that carries no weight.
pub const DEFAULT_EDGE_WEIGHT: Weight = 1;

/// Tentative distance of a vertex that has not been reached yet.
pub(crate) const MAX_WEIGHT: Weight = Weight::MAX;
