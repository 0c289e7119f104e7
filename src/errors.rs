use std::{error, fmt};

use backtrace::Backtrace;

/// Describes why an input outline was rejected before any decomposition began
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidPolygon {
    /// The polygon has fewer than 3 vertices
    NotEnoughVertices(usize),
    /// The vertex at this index has a NaN or infinite coordinate
    NonFiniteVertex(usize),
}

impl fmt::Display for InvalidPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughVertices(vertices) => write!(f, "Polygon only contains {} vertices", vertices),
            Self::NonFiniteVertex(index) => write!(f, "Vertex {} has a non-finite coordinate", index),
        }
    }
}

impl error::Error for InvalidPolygon { }

#[derive(Debug)]
pub struct InternalError {
    pub msg: String,
    pub backtrace: Backtrace,
}

impl InternalError {
    #[cold]
    #[inline(always)]
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            backtrace: Backtrace::new_unresolved(),
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{:?}", self.msg, self.backtrace)
    }
}

impl error::Error for InternalError { }

/// Describes an error which occurred during triangulation
#[derive(Debug)]
#[non_exhaustive]
pub enum TriangulationError {
    /// The input was rejected up front (too few vertices, or non-finite coordinates)
    InvalidPolygon(InvalidPolygon),
    /// The vertex with this input index could not be ordered against its ring neighbours,
    /// usually because a neighbour coincides with it.
    UnclassifiableVertex(usize),
    /// No active edge was found to the left of the vertex with this input index during a sweep.
    ///
    /// This indicates a self-intersecting or otherwise malformed polygon.
    NoLeftEdgeFound(usize),
    /// The output index does not fit in the index type of the output [List](crate::List)
    IndexOverflow(usize),
    /// A triangulation precondition was violated in the provided polygon,
    /// or a triangulation bug was encountered.
    InternalError(InternalError),
}

impl TriangulationError {
    #[inline(always)]
    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        TriangulationError::InternalError(InternalError::new(msg))
    }
}

impl From<InvalidPolygon> for TriangulationError {
    fn from(e: InvalidPolygon) -> Self {
        Self::InvalidPolygon(e)
    }
}

impl From<InternalError> for TriangulationError {
    fn from(e: InternalError) -> Self {
        Self::InternalError(e)
    }
}

impl fmt::Display for TriangulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPolygon(error) => fmt::Display::fmt(error, f),
            Self::UnclassifiableVertex(index) => write!(f, "Vertex {} cannot be ordered against its neighbours", index),
            Self::NoLeftEdgeFound(index) => write!(f, "No edge found to the left of vertex {}; the polygon may be self-intersecting", index),
            Self::IndexOverflow(index) => write!(f, "Index {} does not fit in the output index type", index),
            Self::InternalError(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl error::Error for TriangulationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidPolygon(error) => Some(error),
            Self::InternalError(error) => Some(error),
            _ => None,
        }
    }
}
