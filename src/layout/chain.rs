use serde::Serialize;

use super::grid::PlacedItem;

/// Groups smaller than this stay an open path.
pub const CLOSING_EDGE_MIN_POINTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    /// Euclidean distance between the endpoints, used to pace the draw-on
    /// animation.
    pub length: f32,
    /// The single edge looping the last point back to the middle one.
    pub closing: bool,
}

/// Chains points in order and, from four points on, closes the figure by
/// linking the last point back to point `n / 2`.
pub fn connect(points: &[PlacedItem]) -> Vec<Edge> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    let mut edges: Vec<Edge> = (0..n - 1)
        .map(|i| edge_between(points, i, i + 1, false))
        .collect();
    if n >= CLOSING_EDGE_MIN_POINTS {
        edges.push(edge_between(points, n - 1, n / 2, true));
    }
    edges
}

fn edge_between(points: &[PlacedItem], from: usize, to: usize, closing: bool) -> Edge {
    let a = &points[from];
    let b = &points[to];
    Edge {
        from,
        to,
        length: (b.x - a.x).hypot(b.y - a.y),
        closing,
    }
}
