use std::collections::HashSet;

use approx::assert_relative_eq;
use num_traits::ToPrimitive;

use crate::Vertex;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn to_f64<V: Vertex>(v: &V) -> [f64; 2] {
    [v.x().to_f64().unwrap(), v.y().to_f64().unwrap()]
}

fn signed_area(points: &[[f64; 2]]) -> f64 {
    let mut sum = 0.0;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        sum += p[0] * q[1] - q[0] * p[1];
    }
    sum / 2.0
}

/// Checks the triangle count, the index range, that the triangles add up to the polygon's area and
/// that each triangle winds like the polygon (or is degenerate).
///
/// Returns the polygon's signed area.
pub fn check_triangulation_coverage<V: Vertex>(points: &[V], indices: &[usize]) -> f64 {
    let n = points.len();
    // Relative to the first vertex, so that far-off outlines keep their precision
    let origin = to_f64(&points[0]);
    let points: Vec<[f64; 2]> = points.iter().map(|p| {
        let [x, y] = to_f64(p);
        [x - origin[0], y - origin[1]]
    }).collect();
    assert_eq!(indices.len(), 3 * (n - 2), "Wrong number of triangle indices");
    assert!(indices.iter().all(|&i| i < n), "Index out of range: {:?}", indices);

    let area = signed_area(&points);
    let tolerance = 1e-9 * area.abs().max(1.0);
    let mut total = 0.0;
    for triangle in indices.chunks(3) {
        let corners = [points[triangle[0]], points[triangle[1]], points[triangle[2]]];
        let triangle_area = signed_area(&corners);
        assert!(triangle_area * area.signum() >= -tolerance, "Triangle {:?} winds against the polygon (area {})", triangle, triangle_area);
        total += triangle_area;
    }
    assert_relative_eq!(total, area, epsilon = tolerance, max_relative = 1e-9);
    area
}

/// [check_triangulation_coverage], plus: no directed edge is used twice, every outline edge is used once in
/// the outline's direction, and every other edge is shared by exactly two triangles in opposite directions.
pub fn check_triangulation<V: Vertex>(points: &[V], indices: &[usize]) {
    check_triangulation_coverage(points, indices);

    let n = points.len();
    let mut edges = HashSet::new();
    for triangle in indices.chunks(3) {
        for &(a, b) in [(triangle[0], triangle[1]), (triangle[1], triangle[2]), (triangle[2], triangle[0])].iter() {
            assert!(edges.insert((a, b)), "Edge {} -> {} used twice", a, b);
        }
    }
    for i in 0..n {
        assert!(edges.contains(&(i, (i + 1) % n)), "Outline edge {} -> {} missing", i, (i + 1) % n);
    }
    for &(a, b) in edges.iter() {
        if b != (a + 1) % n {
            assert!(edges.contains(&(b, a)), "Diagonal {} -> {} has no matching {} -> {}", a, b, b, a);
        }
    }
}
