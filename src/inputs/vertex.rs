use core::fmt;
use std::fmt::Debug;

use num_traits::real::Real;

/// A two-dimensional point.
///
/// The coordinate type must implement [num_traits::real::Real], reexported as [crate::Real].
pub trait Vertex {
    /// The type of the individual `x` and `y` coordinates
    type Coordinate: Real;

    /// The x [Vertex::Coordinate] value
    fn x(&self) -> Self::Coordinate;
    /// The y [Vertex::Coordinate] value
    fn y(&self) -> Self::Coordinate;
}

/// A plain `(x, y)` coordinate pair
#[derive(Clone, Copy, PartialEq)]
pub struct Point2D<C: Real>([C; 2]);

impl<C: Real> Point2D<C> {
    /// Creates a point from its coordinates
    pub fn new(x: C, y: C) -> Self { Self([x, y]) }

    /// Copies the coordinates out of any [Vertex]
    pub fn from_vertex<V: Vertex<Coordinate = C> + ?Sized>(v: &V) -> Self { Self([v.x(), v.y()]) }

    pub fn x(&self) -> C { self.0[0] }
    pub fn y(&self) -> C { self.0[1] }

    /// `true` if neither coordinate is NaN or infinite
    pub fn is_finite(&self) -> bool {
        // NaN fails both comparisons
        let max = C::max_value();
        self.x().abs() <= max && self.y().abs() <= max
    }

    /// The point mirrored through the origin
    pub(crate) fn rotated_half_turn(&self) -> Self {
        Self([-self.x(), -self.y()])
    }

    /// The vector from `self` to `other`
    pub(crate) fn to(&self, other: &Self) -> Self {
        Self([other.x() - self.x(), other.y() - self.y()])
    }
}

impl<C: Real> fmt::Debug for Point2D<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("Point2D");
        if let Some(x) = self.x().to_f64() {
            tuple.field(&x);
        }
        if let Some(y) = self.y().to_f64() {
            tuple.field(&y);
        }
        tuple.finish()
    }
}

impl<C: Real> fmt::Display for Point2D<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(x), Some(y)) = (self.x().to_f64(), self.y().to_f64()) {
            write!(f, "({}, {})", x, y)
        } else {
            write!(f, "Point2D<{}>", std::any::type_name::<C>())
        }
    }
}

impl<C: Real> Vertex for Point2D<C> {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.0[0]
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.0[1]
    }
}

impl<C: Real> From<(C, C)> for Point2D<C> {
    fn from((x, y): (C, C)) -> Self {
        Self::new(x, y)
    }
}

impl<C: Real> From<[C; 2]> for Point2D<C> {
    fn from(c: [C; 2]) -> Self {
        Self(c)
    }
}

impl<C: Debug + Real> Vertex for [C; 2] {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self[0]
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self[1]
    }
}

impl<C: Debug + Real> Vertex for (C, C) {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.0
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.1
    }
}
