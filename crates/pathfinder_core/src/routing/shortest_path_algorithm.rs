use crate::{error::SearchError, graph_snapshot::GraphSnapshot, types::VertexId};

use super::search_result::SearchResult;

pub trait ShortestPathAlgorithm {
    /// Runs one search over `graph`. The engine's buffers are reset on every call, so
    /// the same engine may be reused for several searches.
    fn calc_path(
        &mut self,
        graph: &GraphSnapshot,
        start: VertexId,
        end: VertexId,
    ) -> Result<SearchResult, SearchError>;
}
