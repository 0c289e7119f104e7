pub mod polygon;
mod load_polygon_list;
mod vtest;
#[cfg(test)]
mod check;
use std::{env, path};

pub use vtest::VTest;
pub use load_polygon_list::load_polygon_list;
#[cfg(test)]
pub use check::{check_triangulation, check_triangulation_coverage, init_logger};

pub fn polygons_path() -> path::PathBuf {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_owned());
    path::Path::new(&manifest_dir).join("resources").join("polygons")
}
