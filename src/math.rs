use std::cmp::Ordering;

use num_traits::real::Real;

use crate::Point2D;

/// Orders points by when the sweep line reaches them: top to bottom, ties broken left to right.
///
/// `Ordering::Less` means `a` is reached first; `Ordering::Greater` means `a` is "later" than `b`.
pub(crate) fn sweep_order<C: Real>(a: &Point2D<C>, b: &Point2D<C>) -> Ordering {
    match b.y().partial_cmp(&a.y()) {
        Some(Ordering::Equal) => a.x().partial_cmp(&b.x()).unwrap_or(Ordering::Equal),
        Some(ordering) => ordering,
        None => Ordering::Equal,
    }
}

/// `true` if the sweep line reaches `a` after `b`
#[inline]
pub(crate) fn is_later<C: Real>(a: &Point2D<C>, b: &Point2D<C>) -> bool {
    sweep_order(a, b) == Ordering::Greater
}

/// z component of the cross product of two vectors
#[inline]
pub(crate) fn cross<C: Real>(u: &Point2D<C>, v: &Point2D<C>) -> C {
    u.x() * v.y() - u.y() * v.x()
}

#[inline]
pub(crate) fn dot<C: Real>(u: &Point2D<C>, v: &Point2D<C>) -> C {
    u.x() * v.x() + u.y() * v.y()
}

/// Twice the signed area of triangle `(o, a, b)`; positive when counterclockwise
#[inline]
pub(crate) fn orient<C: Real>(o: &Point2D<C>, a: &Point2D<C>, b: &Point2D<C>) -> C {
    cross(&o.to(a), &o.to(b))
}

/// Signed area of a closed outline by the shoelace formula; positive when counterclockwise
pub(crate) fn signed_area<C: Real>(points: &[Point2D<C>]) -> C {
    let two = C::one() + C::one();
    let mut sum = C::zero();
    for (i, p) in points.iter().enumerate() {
        let q = &points[(i + 1) % points.len()];
        sum = sum + p.x() * q.y() - q.x() * p.y();
    }
    sum / two
}

/// The x coordinate of the segment `a`-`b` where it crosses the horizontal line at `y`.
///
/// An endpoint lying exactly on the line is returned as is, which also covers horizontal segments.
pub(crate) fn x_at_y<C: Real>(a: &Point2D<C>, b: &Point2D<C>, y: C) -> C {
    if a.y() == y {
        a.x()
    } else if b.y() == y {
        b.x()
    } else {
        a.x() + (y - a.y()) * (b.x() - a.x()) / (b.y() - a.y())
    }
}

/// Signed angle turned when travelling along `d` and then along `e`, in `(-pi, pi]`; left turns are positive
#[inline]
pub(crate) fn turn_angle<C: Real>(d: &Point2D<C>, e: &Point2D<C>) -> C {
    cross(d, e).atan2(dot(d, e))
}
