use num_traits::{NumCast, real::Real};

use crate::TriangleWinding;

/// Slack used when looking for the active edge left of a vertex, see [TriangulationOptions::search_epsilon]
pub const DEFAULT_SEARCH_EPSILON: f64 = 1e-12;

/// Controls how a polygon is triangulated and how the triangles are reported
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangulationOptions {
    /// Winding of every output triangle. `None` matches the winding of the input outline.
    pub winding: Option<TriangleWinding>,
    /// Distance an active edge may lie to the right of a vertex and still count as left of it.
    ///
    /// Absorbs rounding in the x-at-y interpolation when an edge passes (almost) exactly through the vertex.
    pub search_epsilon: f64,
}

impl Default for TriangulationOptions {
    fn default() -> Self {
        Self {
            winding: None,
            search_epsilon: DEFAULT_SEARCH_EPSILON,
        }
    }
}

impl TriangulationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces every output triangle to `winding`
    pub fn with_winding(mut self, winding: TriangleWinding) -> Self {
        self.winding = Some(winding);
        self
    }

    pub fn with_search_epsilon(mut self, search_epsilon: f64) -> Self {
        self.search_epsilon = search_epsilon;
        self
    }

    /// [TriangulationOptions::search_epsilon] in the coordinate type, or zero if it cannot be represented
    pub(crate) fn epsilon<C: Real>(&self) -> C {
        <C as NumCast>::from(self.search_epsilon).unwrap_or_else(C::zero)
    }
}
