#[cfg(test)]
pub mod test_graph {
    use std::ops::RangeInclusive;

    use rand::Rng;

    use crate::{
        edge::Edge,
        graph_snapshot::GraphSnapshot,
        routing::search_result::SearchResult,
        types::{VertexId, Weight},
        vertex::Vertex,
    };

    #[derive(Clone, Copy, Debug)]
    pub enum RomaniaCity {
        Arad = 1,
        Bucharest = 2,
        Craiova = 3,
        Dobreta = 4,
        Eforie = 5,
        Fagaras = 6,
        Giurgiu = 7,
        Hirsova = 8,
        Iasi = 9,
        Lugoj = 10,
        Mehadia = 11,
        Neamt = 12,
        Oradea = 13,
        Pitesti = 14,
        RimnicuVilcea = 15,
        Sibiu = 16,
        Timisoara = 17,
        Urziceni = 18,
        Vaslui = 19,
        Zerind = 20,
    }

    impl From<RomaniaCity> for VertexId {
        fn from(value: RomaniaCity) -> Self {
            value as VertexId
        }
    }

    fn romania_cities() -> Vec<(RomaniaCity, f64, f64)> {
        vec![
            (RomaniaCity::Arad, 91.0, 492.0),
            (RomaniaCity::Bucharest, 400.0, 327.0),
            (RomaniaCity::Craiova, 253.0, 288.0),
            (RomaniaCity::Dobreta, 165.0, 299.0),
            (RomaniaCity::Eforie, 562.0, 293.0),
            (RomaniaCity::Fagaras, 305.0, 449.0),
            (RomaniaCity::Giurgiu, 375.0, 270.0),
            (RomaniaCity::Hirsova, 534.0, 350.0),
            (RomaniaCity::Iasi, 473.0, 506.0),
            (RomaniaCity::Lugoj, 165.0, 379.0),
            (RomaniaCity::Mehadia, 168.0, 339.0),
            (RomaniaCity::Neamt, 406.0, 537.0),
            (RomaniaCity::Oradea, 131.0, 571.0),
            (RomaniaCity::Pitesti, 320.0, 368.0),
            (RomaniaCity::RimnicuVilcea, 233.0, 410.0),
            (RomaniaCity::Sibiu, 207.0, 457.0),
            (RomaniaCity::Timisoara, 94.0, 410.0),
            (RomaniaCity::Urziceni, 456.0, 350.0),
            (RomaniaCity::Vaslui, 509.0, 444.0),
            (RomaniaCity::Zerind, 108.0, 531.0),
        ]
    }

    // https://user-images.githubusercontent.com/43790152/97784960-1a142580-1bc4-11eb-9070-39c03eb16df2.png
    fn romania_roads() -> Vec<(RomaniaCity, RomaniaCity, Weight)> {
        vec![
            (RomaniaCity::Oradea, RomaniaCity::Zerind, 71),
            (RomaniaCity::Oradea, RomaniaCity::Sibiu, 151),
            (RomaniaCity::Zerind, RomaniaCity::Arad, 75),
            (RomaniaCity::Arad, RomaniaCity::Sibiu, 140),
            (RomaniaCity::Arad, RomaniaCity::Timisoara, 118),
            (RomaniaCity::Timisoara, RomaniaCity::Lugoj, 111),
            (RomaniaCity::Lugoj, RomaniaCity::Mehadia, 70),
            (RomaniaCity::Mehadia, RomaniaCity::Dobreta, 75),
            (RomaniaCity::Dobreta, RomaniaCity::Craiova, 120),
            (RomaniaCity::Craiova, RomaniaCity::RimnicuVilcea, 146),
            (RomaniaCity::Craiova, RomaniaCity::Pitesti, 138),
            (RomaniaCity::RimnicuVilcea, RomaniaCity::Pitesti, 97),
            (RomaniaCity::RimnicuVilcea, RomaniaCity::Sibiu, 80),
            (RomaniaCity::Sibiu, RomaniaCity::Fagaras, 99),
            (RomaniaCity::Fagaras, RomaniaCity::Bucharest, 211),
            (RomaniaCity::Pitesti, RomaniaCity::Bucharest, 101),
            (RomaniaCity::Bucharest, RomaniaCity::Giurgiu, 90),
            (RomaniaCity::Bucharest, RomaniaCity::Urziceni, 85),
            (RomaniaCity::Urziceni, RomaniaCity::Hirsova, 98),
            (RomaniaCity::Hirsova, RomaniaCity::Eforie, 86),
            (RomaniaCity::Urziceni, RomaniaCity::Vaslui, 142),
            (RomaniaCity::Vaslui, RomaniaCity::Iasi, 92),
            (RomaniaCity::Iasi, RomaniaCity::Neamt, 87),
        ]
    }

    /// Undirected road map of Romania, distances in kilometers.
    pub fn romania_graph() -> GraphSnapshot {
        let vertices = romania_cities()
            .into_iter()
            .map(|(city, x, y)| Vertex::new(city.into(), x, y))
            .collect();
        let edges = romania_roads()
            .into_iter()
            .map(|(from, to, distance)| Edge::undirected(from.into(), to.into(), Some(distance)))
            .collect();

        GraphSnapshot::new(vertices, edges).unwrap()
    }

    pub fn vertices(ids: &[VertexId]) -> Vec<Vertex> {
        ids.iter()
            .map(|&id| Vertex::new(id, id as f64, 0.0))
            .collect()
    }

    pub fn snapshot(ids: &[VertexId], edges: Vec<Edge>) -> GraphSnapshot {
        GraphSnapshot::new(vertices(ids), edges).unwrap()
    }

    /// `width` x `height` grid of unit undirected edges. Vertex `row * width + col` sits
    /// at `(col, row)`.
    pub fn grid_graph(width: usize, height: usize) -> GraphSnapshot {
        let id = |col: usize, row: usize| (row * width + col) as VertexId;

        let mut vertices = Vec::with_capacity(width * height);
        let mut edges = Vec::new();

        for row in 0..height {
            for col in 0..width {
                vertices.push(Vertex::new(id(col, row), col as f64, row as f64));
                if col + 1 < width {
                    edges.push(Edge::undirected(id(col, row), id(col + 1, row), Some(1)));
                }
                if row + 1 < height {
                    edges.push(Edge::undirected(id(col, row), id(col, row + 1), Some(1)));
                }
            }
        }

        GraphSnapshot::new(vertices, edges).unwrap()
    }

    /// Random mixed graph over ids `1..=vertex_count`. Parallel edges and self loops are
    /// allowed, and some edges carry no weight.
    pub fn random_graph(
        rng: &mut impl Rng,
        vertex_count: usize,
        weights: RangeInclusive<Weight>,
    ) -> (Vec<Vertex>, Vec<Edge>) {
        let ids: Vec<VertexId> = (1..=vertex_count as VertexId).collect();
        let edge_count = rng.random_range(0..=vertex_count * 2);

        let edges = (0..edge_count)
            .map(|_| {
                let source = rng.random_range(1..=vertex_count as VertexId);
                let target = rng.random_range(1..=vertex_count as VertexId);
                let weight = if rng.random_bool(0.15) {
                    None
                } else {
                    Some(rng.random_range(weights.clone()))
                };
                Edge::new(source, target, rng.random_bool(0.5), weight)
            })
            .collect();

        (vertices(&ids), edges)
    }

    /// Cheapest edge that can be walked from `from` to `to`.
    pub fn min_edge_cost(edges: &[Edge], from: VertexId, to: VertexId) -> Option<Weight> {
        edges
            .iter()
            .filter(|edge| {
                (edge.source() == from && edge.target() == to)
                    || (!edge.is_directed() && edge.source() == to && edge.target() == from)
            })
            .map(Edge::cost)
            .min()
    }

    /// Cost of the cheapest simple path, found by enumerating all of them.
    pub fn brute_force_cost(
        vertices: &[Vertex],
        edges: &[Edge],
        start: VertexId,
        end: VertexId,
    ) -> Option<Weight> {
        fn visit(
            ids: &[VertexId],
            edges: &[Edge],
            vertex: VertexId,
            end: VertexId,
            cost: Weight,
            on_path: &mut Vec<VertexId>,
            best: &mut Option<Weight>,
        ) {
            if vertex == end {
                *best = Some(best.map_or(cost, |best| best.min(cost)));
                return;
            }

            for &next in ids {
                if on_path.contains(&next) {
                    continue;
                }
                if let Some(edge_cost) = min_edge_cost(edges, vertex, next) {
                    on_path.push(next);
                    visit(ids, edges, next, end, cost + edge_cost, on_path, best);
                    on_path.pop();
                }
            }
        }

        let ids: Vec<VertexId> = vertices.iter().map(Vertex::id).collect();
        let mut best = None;
        visit(&ids, edges, start, end, 0, &mut vec![start], &mut best);
        best
    }

    /// The reported cost must be the cost of walking the reported path.
    pub fn assert_path_cost(graph: &GraphSnapshot, result: &SearchResult) {
        let ids = result.path_ids();
        if ids.is_empty() {
            assert_eq!(result.path_cost(), None);
            return;
        }

        let cost: Weight = ids
            .windows(2)
            .map(|pair| {
                min_edge_cost(graph.edges(), pair[0], pair[1])
                    .unwrap_or_else(|| panic!("no edge from {} to {}", pair[0], pair[1]))
            })
            .sum();

        assert_eq!(result.path_cost(), Some(cost));
    }

    /// Every step of the closed cycle must follow an edge, and the steps must sum to a
    /// negative total.
    pub fn assert_cycle_is_negative(graph: &GraphSnapshot, cycle: &[VertexId]) {
        assert!(!cycle.is_empty());

        let total: Weight = (0..cycle.len())
            .map(|i| {
                let from = cycle[i];
                let to = cycle[(i + 1) % cycle.len()];
                min_edge_cost(graph.edges(), from, to)
                    .unwrap_or_else(|| panic!("no edge from {from} to {to} in cycle {cycle:?}"))
            })
            .sum();

        assert!(total < 0, "cycle {cycle:?} has total weight {total}");
    }
}
