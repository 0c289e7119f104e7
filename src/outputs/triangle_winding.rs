/// The order the vertices in a triangle are listed in
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TriangleWinding {
    Counterclockwise,
    Clockwise,
}

impl TriangleWinding {
    /// The winding of an outline with the given signed (shoelace) area.
    ///
    /// Zero-area outlines count as clockwise, matching how they are normalized before triangulation.
    pub fn from_signed_area<C: num_traits::real::Real>(area: C) -> Self {
        if area > C::zero() {
            TriangleWinding::Counterclockwise
        } else {
            TriangleWinding::Clockwise
        }
    }

    /// The opposite winding
    pub fn reverse(self) -> Self {
        match self {
            TriangleWinding::Counterclockwise => TriangleWinding::Clockwise,
            TriangleWinding::Clockwise => TriangleWinding::Counterclockwise,
        }
    }
}
