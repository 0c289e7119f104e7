//! Triangulation of simple polygons by sweep-line decomposition into y-monotone pieces.
//!
//! A downward sweep adds diagonals at split vertices, an upward sweep over each resulting piece adds
//! diagonals at merge vertices, and every remaining y-monotone piece is triangulated in linear time.
//!
//! ```
//! use monotone_triangulate::{Triangulate, TriangulationOptions, TriangleWinding};
//!
//! let outline = vec![[0.0f32, 0.0], [4.0, 0.0], [4.0, 4.0], [2.0, 2.0], [0.0, 4.0]];
//! let indices = outline.triangulate().unwrap();
//! assert_eq!(indices.len(), 9);
//!
//! let options = TriangulationOptions::new().with_winding(TriangleWinding::Clockwise);
//! let gpu_indices = outline.triangulate_into(Vec::<u16>::new(), &options).unwrap();
//! assert_eq!(gpu_indices.len(), 9);
//! ```

mod idx;
mod math;
mod ring;
mod classify;
mod status;
mod diagonals;
mod split;
mod monotone;
mod triangulation;
mod options;
mod inputs;
mod outputs;
mod errors;

#[cfg(feature = "debugging")]
mod debug;

#[cfg(any(test, feature = "benchmarking"))]
pub mod tests;

pub use errors::{InternalError, InvalidPolygon, TriangulationError};
pub use options::{DEFAULT_SEARCH_EPSILON, TriangulationOptions};

pub use inputs::*;
pub use outputs::*;

pub use num_traits::real::Real;
