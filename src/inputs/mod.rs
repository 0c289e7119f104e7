mod polygon;
pub use polygon::{Polygon, Triangulate, triangulate};
mod vertex;
pub use vertex::{Point2D, Vertex};
