use std::fmt;

use num_traits::real::Real;

use crate::{Point2D, errors::TriangulationError, idx::{Idx, IdxDisplay, SliceExt, VecExt}};

/// One corner of a [PolygonData] ring.
///
/// `prev`/`next` stand in for the incoming and outgoing edges; following `next` from any point
/// visits every point of the ring exactly once before returning.
#[derive(Debug, Clone)]
pub(crate) struct PolygonPoint<C: Real> {
    coords: Point2D<C>,
    index: usize,
    prev: Idx<PolygonPoint<C>>,
    next: Idx<PolygonPoint<C>>,
}

impl<C: Real> IdxDisplay for PolygonPoint<C> {
    fn fmt(f: &mut fmt::Formatter<'_>, idx: usize) -> fmt::Result {
        write!(f, "p{}", idx)
    }
}

impl<C: Real> PolygonPoint<C> {
    pub fn coords(&self) -> &Point2D<C> { &self.coords }
    /// Index of this point in the (orientation-normalized) input
    pub fn index(&self) -> usize { self.index }
    pub fn prev(&self) -> Idx<PolygonPoint<C>> { self.prev }
    pub fn next(&self) -> Idx<PolygonPoint<C>> { self.next }
}

/// A directed ring edge `tail -> head`, where `head` is `tail.next()`
pub(crate) struct PolygonEdge<C: Real> {
    pub tail: Idx<PolygonPoint<C>>,
    pub head: Idx<PolygonPoint<C>>,
}

// #[derive] would require C: Clone/PartialEq/Debug on the phantom type
impl<C: Real> Clone for PolygonEdge<C> {
    fn clone(&self) -> Self { *self }
}

impl<C: Real> Copy for PolygonEdge<C> { }

impl<C: Real> PartialEq for PolygonEdge<C> {
    fn eq(&self, other: &Self) -> bool {
        self.tail == other.tail && self.head == other.head
    }
}

impl<C: Real> Eq for PolygonEdge<C> { }

impl<C: Real> fmt::Debug for PolygonEdge<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.tail, self.head)
    }
}

/// An interior segment between two points of the same [PolygonData]
pub(crate) struct Diagonal<C: Real>(pub Idx<PolygonPoint<C>>, pub Idx<PolygonPoint<C>>);

impl<C: Real> Clone for Diagonal<C> {
    fn clone(&self) -> Self { *self }
}

impl<C: Real> Copy for Diagonal<C> { }

impl<C: Real> PartialEq for Diagonal<C> {
    fn eq(&self, other: &Self) -> bool {
        (self.0 == other.0 && self.1 == other.1) || (self.0 == other.1 && self.1 == other.0)
    }
}

impl<C: Real> fmt::Debug for Diagonal<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.0, self.1)
    }
}

/// One simple (sub)polygon, stored as an arena of [PolygonPoint]s linked into a ring.
///
/// Built fresh for every decomposition stage and dropped once its diagonals or triangles are emitted.
#[derive(Debug)]
pub(crate) struct PolygonData<C: Real> {
    points: Vec<PolygonPoint<C>>,
}

impl<C: Real> PolygonData<C> {
    /// Links the input points named by `ring` (in ring order) into a new polygon
    pub fn new(coords: &[Point2D<C>], ring: &[usize]) -> Result<Self, TriangulationError> {
        if ring.len() < 3 {
            let index = ring.first().copied().unwrap_or(0);
            return Err(TriangulationError::UnclassifiableVertex(index));
        }

        let n = ring.len();
        let mut points = Vec::with_capacity(n);
        for (i, &index) in ring.iter().enumerate() {
            let coords = *coords.get(index).ok_or_else(|| TriangulationError::internal(format!("Ring references vertex {} of {}", index, coords.len())))?;
            points.push_get_index(PolygonPoint {
                coords,
                index,
                prev: Idx::new((i + n - 1) % n),
                next: Idx::new((i + 1) % n),
            });
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn point(&self, pi: Idx<PolygonPoint<C>>) -> &PolygonPoint<C> {
        &self.points[pi]
    }

    pub fn coords(&self, pi: Idx<PolygonPoint<C>>) -> &Point2D<C> {
        &self.points[pi].coords
    }

    /// The edge leaving `pi`
    pub fn outgoing(&self, pi: Idx<PolygonPoint<C>>) -> PolygonEdge<C> {
        PolygonEdge { tail: pi, head: self.points[pi].next }
    }

    /// The edge arriving at `pi`
    pub fn incoming(&self, pi: Idx<PolygonPoint<C>>) -> PolygonEdge<C> {
        PolygonEdge { tail: self.points[pi].prev, head: pi }
    }

    pub fn iter_index(&self) -> impl Iterator<Item = Idx<PolygonPoint<C>>> + '_ {
        self.points.iter_index()
    }

    /// Input indices of the ring, starting from the first point
    pub fn ring_indices(&self) -> Vec<usize> {
        let mut ring = Vec::with_capacity(self.points.len());
        let start = Idx::new(0);
        let mut pi = start;
        loop {
            ring.push(self.points[pi].index);
            pi = self.points[pi].next;
            if pi == start {
                break;
            }
        }
        ring
    }
}
