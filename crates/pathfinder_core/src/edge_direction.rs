/// Orientation in which an edge is walked, relative to its stored `(source, target)` pair.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum EdgeDirection {
    Forward,
    Backward,
}
