use std::convert::TryFrom;

use crate::{List, Point2D, TriangulationError, TriangulationOptions, triangulation::TriangulationState};

use super::vertex::Vertex;

/// An indexable, ordered polygon outline.
///
/// The outline is closed implicitly from the last vertex back to the first, and may run either clockwise
/// or counterclockwise. It must be simple: no self-intersections, no holes, no repeated adjacent vertices.
pub trait Polygon {
    /// The type of vertices of the polygon
    type Vertex: Vertex;

    /// Provides the number of vertices of the polygon
    fn vertex_count(&self) -> usize;

    /// Get the [Vertex] at `index`, where `index < self.vertex_count()`
    fn get_vertex(&self, index: usize) -> &Self::Vertex;
}

impl<V: Vertex> Polygon for [V] {
    type Vertex = V;

    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn get_vertex(&self, index: usize) -> &Self::Vertex {
        &self[index]
    }
}

impl<V: Vertex> Polygon for Vec<V> {
    type Vertex = V;

    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn get_vertex(&self, index: usize) -> &Self::Vertex {
        &self[index]
    }
}

/// `Triangulate` provides the triangulation functions to implementers of [Polygon].
///
/// This trait is sealed and is not intended to be manually implemented.
pub trait Triangulate: private::Sealed {
    /// Triangulates this polygon with the default [TriangulationOptions].
    ///
    /// Returns `3 * (n - 2)` indices into the polygon, each consecutive triple naming one triangle.
    /// Triangles wind the same way as the polygon.
    fn triangulate(&self) -> Result<Vec<usize>, TriangulationError>;

    /// Triangulates this polygon as configured by `options`
    fn triangulate_with(&self, options: &TriangulationOptions) -> Result<Vec<usize>, TriangulationError>;

    /// Appends the triangles of this polygon to `list`, converting each index to `I`
    /// (e.g. `u16` or `u32` for GPU index buffers).
    ///
    /// If any index does not fit in `I`, the list is truncated back to its original length and
    /// [TriangulationError::IndexOverflow] is returned.
    fn triangulate_into<I: TryFrom<usize>, L: List<I>>(&self, list: L, options: &TriangulationOptions) -> Result<L, TriangulationError>;
}

impl<P: Polygon + ?Sized> Triangulate for P {
    fn triangulate(&self) -> Result<Vec<usize>, TriangulationError> {
        self.triangulate_with(&TriangulationOptions::default())
    }

    fn triangulate_with(&self, options: &TriangulationOptions) -> Result<Vec<usize>, TriangulationError> {
        self.triangulate_into::<usize, _>(Vec::with_capacity(self.vertex_count().saturating_sub(2) * 3), options)
    }

    fn triangulate_into<I: TryFrom<usize>, L: List<I>>(&self, mut list: L, options: &TriangulationOptions) -> Result<L, TriangulationError> {
        let triangles = triangulate_polygon(self, options)?;

        let initial_len = list.len();
        list.reserve(triangles.len());
        for [a, b, c] in triangles {
            match (convert::<I>(a), convert::<I>(b), convert::<I>(c)) {
                (Ok(a), Ok(b), Ok(c)) => list.push(a, b, c),
                (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                    list.truncate(initial_len);
                    return Err(e);
                }
            }
        }
        Ok(list)
    }
}

/// Triangulates the polygon outlined by `points` with the default [TriangulationOptions].
///
/// ```
/// let square = [[0.0f64, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
/// let indices = monotone_triangulate::triangulate(&square).unwrap();
/// assert_eq!(indices.len(), 6);
/// ```
pub fn triangulate<V: Vertex>(points: &[V]) -> Result<Vec<usize>, TriangulationError> {
    points.triangulate()
}

fn convert<I: TryFrom<usize>>(index: usize) -> Result<I, TriangulationError> {
    I::try_from(index).map_err(|_| TriangulationError::IndexOverflow(index))
}

fn triangulate_polygon<P: Polygon + ?Sized>(polygon: &P, options: &TriangulationOptions) -> Result<Vec<[usize; 3]>, TriangulationError> {
    let points = (0..polygon.vertex_count())
        .map(|i| Point2D::from_vertex(polygon.get_vertex(i)))
        .collect();
    TriangulationState::new(points, options)?.build(options.winding)
}

mod private {
    pub trait Sealed { }

    impl<P: super::Polygon + ?Sized> Sealed for P { }
}
