use std::{cmp::Ordering, fmt};

use num_traits::real::Real;

use crate::{Point2D, math::{cross, sweep_order}};

/// The role a vertex plays when the sweep line passes over it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexKind {
    /// Both neighbours come later and the interior lies below; opens a new region
    Start,
    /// Both neighbours come later but the interior lies above; a diagonal must be drawn upwards
    Split,
    /// Both neighbours come earlier and the interior lies above; closes a region
    Stop,
    /// Both neighbours come earlier but the interior lies below; two regions join here
    Merge,
    /// One neighbour earlier, one later
    Regular,
}

impl VertexKind {
    /// The kind seen by a sweep running in the opposite direction
    pub fn reversed(self) -> Self {
        match self {
            Self::Start => Self::Stop,
            Self::Stop => Self::Start,
            Self::Split => Self::Merge,
            Self::Merge => Self::Split,
            Self::Regular => Self::Regular,
        }
    }
}

impl fmt::Display for VertexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Start => "start",
            Self::Split => "split",
            Self::Stop => "stop",
            Self::Merge => "merge",
            Self::Regular => "regular",
        };
        f.write_str(s)
    }
}

/// Classifies `v` from its ring neighbours `last` (incoming) and `next` (outgoing) on a counterclockwise ring.
///
/// With `reverse` set the result is reported for a bottom-to-top sweep, which swaps
/// [VertexKind::Start] with [VertexKind::Stop] and [VertexKind::Split] with [VertexKind::Merge].
/// Returns `None` when a neighbour coincides with `v` in sweep order.
pub fn classify<C: Real>(last: &Point2D<C>, v: &Point2D<C>, next: &Point2D<C>, reverse: bool) -> Option<VertexKind> {
    let last_order = sweep_order(last, v);
    let next_order = sweep_order(next, v);
    if last_order == Ordering::Equal || next_order == Ordering::Equal {
        return None;
    }

    // Left turn on a counterclockwise ring
    let convex = cross(&last.to(v), &v.to(next)) > C::zero();

    let kind = match (last_order, next_order) {
        (Ordering::Greater, Ordering::Greater) => if convex { VertexKind::Start } else { VertexKind::Split },
        (Ordering::Less, Ordering::Less) => if convex { VertexKind::Stop } else { VertexKind::Merge },
        _ => VertexKind::Regular,
    };

    Some(if reverse { kind.reversed() } else { kind })
}
