use num_traits::real::Real;

use crate::{Point2D, idx::Idx, math::x_at_y, ring::{PolygonEdge, PolygonPoint}};

/// An edge crossing the sweep line, and the latest point a diagonal may be drawn up to from below it
#[derive(Debug, Clone, Copy)]
pub(crate) struct StatusElement<C: Real> {
    pub edge: PolygonEdge<C>,
    pub helper: Idx<PolygonPoint<C>>,
}

/// The edges currently crossing the sweep line.
///
/// Kept as an unordered list: each query scans every active edge.
#[derive(Debug)]
pub(crate) struct SweepStatus<C: Real> {
    elements: Vec<StatusElement<C>>,
}

impl<C: Real> SweepStatus<C> {
    pub fn new() -> Self {
        Self { elements: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn add(&mut self, edge: PolygonEdge<C>, helper: Idx<PolygonPoint<C>>) {
        self.elements.push(StatusElement { edge, helper });
    }

    /// Removes every element tracking `edge`, returning how many were removed
    pub fn remove(&mut self, edge: PolygonEdge<C>) -> usize {
        let before = self.elements.len();
        self.elements.retain(|e| e.edge != edge);
        before - self.elements.len()
    }

    /// Finds the active edge closest to the left of `point`.
    ///
    /// Each edge is evaluated at `point.y` using the positions in `view` (indexed like the polygon's points);
    /// the edge with the largest x not exceeding `point.x + epsilon` wins.
    pub fn search_left(&mut self, view: &[Point2D<C>], point: &Point2D<C>, epsilon: C) -> Option<&mut StatusElement<C>> {
        let limit = point.x() + epsilon;
        let mut best: Option<(usize, C)> = None;
        for (i, element) in self.elements.iter().enumerate() {
            let x = x_at_y(&view[element.edge.tail.usize()], &view[element.edge.head.usize()], point.y());
            if x <= limit && best.map_or(true, |(_, best_x)| x > best_x) {
                best = Some((i, x));
            }
        }

        let (i, _) = best?;
        self.elements.get_mut(i)
    }
}
