use log::trace;
use num_traits::real::Real;

use crate::{Point2D, classify::{VertexKind, classify}, errors::TriangulationError, idx::Idx, math::{is_later, sweep_order}, ring::{Diagonal, PolygonData, PolygonPoint}, status::SweepStatus};

/// Which way the sweep line travels over a polygon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDirection {
    /// Top to bottom; removes split and merge vertices that open upwards
    Down,
    /// Bottom to top; run on each piece of a [SweepDirection::Down] pass
    Up,
}

impl SweepDirection {
    fn is_reversed(self) -> bool {
        self == SweepDirection::Up
    }

    /// Where the sweep sees a point. An upward sweep is a downward sweep over the polygon turned upside down.
    fn view<C: Real>(self, p: &Point2D<C>) -> Point2D<C> {
        match self {
            SweepDirection::Down => *p,
            SweepDirection::Up => p.rotated_half_turn(),
        }
    }
}

/// Runs one sweep over `polygon`, returning the diagonals that resolve its split and merge vertices
/// for that direction.
///
/// After a [SweepDirection::Down] pass no piece has a split vertex; after the following
/// [SweepDirection::Up] pass on each piece no piece has a merge vertex either, so every piece is y-monotone.
pub(crate) fn plan_diagonals<C: Real>(polygon: &PolygonData<C>, direction: SweepDirection, epsilon: C) -> Result<Vec<Diagonal<C>>, TriangulationError> {
    let view: Vec<Point2D<C>> = polygon.iter_index().map(|pi| direction.view(polygon.coords(pi))).collect();

    let mut kinds = Vec::with_capacity(polygon.len());
    for pi in polygon.iter_index() {
        let p = polygon.point(pi);
        let kind = classify(polygon.coords(p.prev()), p.coords(), polygon.coords(p.next()), direction.is_reversed())
            .ok_or(TriangulationError::UnclassifiableVertex(p.index()))?;
        kinds.push(kind);
    }

    let mut order: Vec<Idx<PolygonPoint<C>>> = polygon.iter_index().collect();
    order.sort_by(|&a, &b| sweep_order(&view[a.usize()], &view[b.usize()]));

    let mut status = SweepStatus::new();
    let mut diagonals = Vec::new();

    for &pi in order.iter() {
        let p = polygon.point(pi);
        let kind = kinds[pi.usize()];
        trace!("{:?} sweep: {} (vertex {}) is {}", direction, pi, p.index(), kind);

        match kind {
            VertexKind::Start => {
                status.add(polygon.outgoing(pi), pi);
            }
            VertexKind::Stop => {
                status.remove(polygon.incoming(pi));
            }
            VertexKind::Regular => {
                if is_later(&view[p.next().usize()], &view[pi.usize()]) {
                    // Interior lies to the right: the tracked edge continues downwards
                    status.remove(polygon.incoming(pi));
                    status.add(polygon.outgoing(pi), pi);
                } else {
                    let element = status.search_left(&view, &view[pi.usize()], epsilon)
                        .ok_or(TriangulationError::NoLeftEdgeFound(p.index()))?;
                    element.helper = pi;
                }
            }
            VertexKind::Merge => {
                status.remove(polygon.incoming(pi));
                let element = status.search_left(&view, &view[pi.usize()], epsilon)
                    .ok_or(TriangulationError::NoLeftEdgeFound(p.index()))?;
                element.helper = pi;
            }
            VertexKind::Split => {
                let element = status.search_left(&view, &view[pi.usize()], epsilon)
                    .ok_or(TriangulationError::NoLeftEdgeFound(p.index()))?;
                let diagonal = Diagonal(element.helper, pi);
                trace!("{:?} sweep: diagonal {:?} (vertices {} and {})", direction, diagonal, polygon.point(diagonal.0).index(), p.index());
                element.helper = pi;
                diagonals.push(diagonal);
                status.add(polygon.outgoing(pi), pi);
            }
        }
    }

    if !status.is_empty() {
        trace!("{:?} sweep: {} edges still active after the last vertex", direction, status.len());
    }

    Ok(diagonals)
}

