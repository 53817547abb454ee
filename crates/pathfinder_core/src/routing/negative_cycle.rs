use crate::{graph_snapshot::GraphSnapshot, types::VertexIndex};

/// Looks for a cycle among the edge orientations that agree with the predecessor
/// assignment (`from -> to` with `parents[to] == Some(from)`).
///
/// The traversal is a depth-first search driven by an explicit stack. The first edge
/// that reaches a vertex still on the stack closes the reported cycle, which is
/// returned in traversal order starting at that vertex.
pub(crate) fn find_predecessor_cycle(
    graph: &GraphSnapshot,
    parents: &[Option<VertexIndex>],
) -> Option<Vec<VertexIndex>> {
    let vertex_count = graph.vertex_count();
    let mut successors: Vec<Vec<VertexIndex>> = vec![vec![]; vertex_count];

    for edge_id in 0..graph.edge_count() {
        for (from, to) in graph.arcs(edge_id) {
            if parents[to] == Some(from) {
                successors[from].push(to);
            }
        }
    }

    let mut visited = vec![false; vertex_count];
    let mut on_stack = vec![false; vertex_count];
    // (vertex, position of the next successor to look at)
    let mut stack: Vec<(VertexIndex, usize)> = Vec::new();

    for root in 0..vertex_count {
        if visited[root] {
            continue;
        }

        visited[root] = true;
        on_stack[root] = true;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (vertex, cursor) = *frame;

            let Some(&next) = successors[vertex].get(cursor) else {
                on_stack[vertex] = false;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            if on_stack[next] {
                let position = stack.iter().position(|&(placed, _)| placed == next)?;
                return Some(stack[position..].iter().map(|&(placed, _)| placed).collect());
            }

            if !visited[next] {
                visited[next] = true;
                on_stack[next] = true;
                stack.push((next, 0));
            }
        }
    }

    None
}

/// Walks `vertex_count` predecessor links back from a vertex that was still relaxed
/// after `vertex_count - 1` rounds, which is guaranteed to land on a cycle, then
/// collects that cycle in traversal order.
pub(crate) fn walk_back_to_cycle(
    parents: &[Option<VertexIndex>],
    relaxed_vertex: VertexIndex,
) -> Option<Vec<VertexIndex>> {
    let vertex_count = parents.len();
    let mut vertex = relaxed_vertex;
    for _ in 0..vertex_count {
        vertex = parents[vertex]?;
    }

    let mut cycle = vec![vertex];
    let mut current = parents[vertex]?;
    while current != vertex {
        if cycle.len() > vertex_count {
            return None;
        }
        cycle.push(current);
        current = parents[current]?;
    }

    cycle.reverse();
    cycle.rotate_right(1);
    Some(cycle)
}
