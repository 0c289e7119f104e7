use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;

use super::vtest::VTest;

pub fn square() -> Vec<VTest> {
    vec![
        (0.0, 0.0).into(),
        (1.0, 0.0).into(),
        (1.0, 1.0).into(),
        (0.0, 1.0).into(),
    ]
}

/// A square with a notch cut into its top edge
pub fn notched_pentagon() -> Vec<VTest> {
    vec![
        (0.0, 0.0).into(),
        (4.0, 0.0).into(),
        (4.0, 4.0).into(),
        (2.0, 2.0).into(),
        (0.0, 4.0).into(),
    ]
}

pub fn star() -> Vec<VTest> {
    vec![
        (1.0, 0.0).into(),
        (2.0, 2.0).into(),
        (0.0, 1.0).into(),
        (-2.0, 2.0).into(),
        (-1.0, 0.0).into(),
        (-2.0, -2.0).into(),
        (0.0, -1.0).into(),
        (2.0, -2.0).into(),
    ]
}

pub fn half_frame() -> Vec<VTest> {
    vec![
        (0., 0.).into(), (0.05, 0.05).into(), (0.95, 0.05).into(), (0.95, 0.95).into(), (1., 1.).into(), (1., 0.).into()
    ]
}

pub fn all() -> Vec<Vec<VTest>> {
    vec![square(), notched_pentagon(), star(), half_frame()]
}

/// A counterclockwise comb with `k` teeth pointing down and `k + 1` pointing up.
///
/// Every inner tip pointing down is a merge vertex and every inner tip pointing up is a split vertex.
/// `comb(2)` is a decagon.
pub fn comb(k: usize) -> Vec<[f64; 2]> {
    let mut points = Vec::with_capacity(4 * k + 2);
    for i in 0..=2 * k {
        points.push([i as f64, if i % 2 == 0 { -1.0 } else { 0.5 }]);
    }
    for i in (0..=2 * k).rev() {
        points.push([i as f64, if i % 2 == 0 { 3.0 } else { 1.5 }]);
    }
    points
}

/// A regular `n`-gon of radius 100, starting at the top and running clockwise
pub fn regular(n: usize) -> Vec<[f64; 2]> {
    (0..n).map(|i| {
        let theta = std::f64::consts::PI * 2. * (i as f64) / (n as f64);
        let (x, y) = theta.sin_cos();
        [x * 100., y * 100.]
    }).collect()
}

/// A random polygon that is star-shaped around the origin, running counterclockwise
pub fn random_star<R: Rng>(rng: &mut R, n: usize) -> Vec<[f64; 2]> {
    (0..n).map(|i| {
        let theta = std::f64::consts::PI * 2. * (i as f64 + rng.gen_range(0.0..0.9)) / (n as f64);
        let r = rng.gen_range(0.2..1.0);
        let (y, x) = theta.sin_cos();
        [x * r, y * r]
    }).collect()
}

/// A counterclockwise staircase with `steps` steps; every corner is axis-aligned
pub fn staircase(steps: usize) -> Vec<[f64; 2]> {
    let mut points = vec![[0.0, 0.0], [steps as f64, 0.0]];
    for i in (0..steps).rev() {
        points.push([i as f64 + 1.0, (steps - i) as f64]);
        points.push([i as f64, (steps - i) as f64]);
    }
    points
}

type Cell = (i32, i32);

/// The outline of a random hole-free polyomino of up to `cells` unit squares, running counterclockwise.
///
/// With `keep_collinear` the outline keeps a vertex at every unit step, so most vertices lie on a straight
/// edge. Returns `None` when the shape touches itself at a corner, which would not be a simple polygon.
pub fn random_polyomino<R: Rng>(rng: &mut R, cells: usize, keep_collinear: bool) -> Option<Vec<[f64; 2]>> {
    const DIRECTIONS: [Cell; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

    let mut shape = BTreeSet::new();
    shape.insert((0, 0));
    let mut attempts = 0;
    while shape.len() < cells && attempts < cells * 100 {
        attempts += 1;
        let (x, y) = *shape.iter().nth(rng.gen_range(0..shape.len()))?;
        let (dx, dy) = DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())];
        let cell = (x + dx, y + dy);
        if shape.contains(&cell) {
            continue;
        }
        shape.insert(cell);
        if has_hole(&shape) {
            shape.remove(&cell);
        }
    }

    outline(&shape, keep_collinear)
}

fn has_hole(shape: &BTreeSet<Cell>) -> bool {
    let x0 = shape.iter().map(|c| c.0).min().unwrap_or(0) - 1;
    let x1 = shape.iter().map(|c| c.0).max().unwrap_or(0) + 1;
    let y0 = shape.iter().map(|c| c.1).min().unwrap_or(0) - 1;
    let y1 = shape.iter().map(|c| c.1).max().unwrap_or(0) + 1;

    // Flood the empty cells from a corner of the padded bounding box
    let mut seen = BTreeSet::new();
    let mut stack = vec![(x0, y0)];
    while let Some(c) = stack.pop() {
        if c.0 < x0 || c.0 > x1 || c.1 < y0 || c.1 > y1 || shape.contains(&c) || !seen.insert(c) {
            continue;
        }
        stack.extend_from_slice(&[(c.0 + 1, c.1), (c.0 - 1, c.1), (c.0, c.1 + 1), (c.0, c.1 - 1)]);
    }

    let total = ((x1 - x0 + 1) * (y1 - y0 + 1)) as usize;
    seen.len() + shape.len() != total
}

fn outline(shape: &BTreeSet<Cell>, keep_collinear: bool) -> Option<Vec<[f64; 2]>> {
    // Unit boundary edges, directed with the shape on their left
    let mut edges: BTreeMap<Cell, Vec<Cell>> = BTreeMap::new();
    for &(x, y) in shape {
        let sides = [
            ((x, y), (x + 1, y), (x, y - 1)),
            ((x + 1, y), (x + 1, y + 1), (x + 1, y)),
            ((x + 1, y + 1), (x, y + 1), (x, y + 1)),
            ((x, y + 1), (x, y), (x - 1, y)),
        ];
        for &(a, b, neighbour) in sides.iter() {
            if !shape.contains(&neighbour) {
                edges.entry(a).or_default().push(b);
            }
        }
    }
    if edges.values().any(|heads| heads.len() > 1) {
        return None;
    }

    let (&start, heads) = edges.iter().next()?;
    let mut corners = vec![start];
    let mut current = heads[0];
    while current != start {
        corners.push(current);
        current = *edges.get(&current)?.first()?;
    }
    if corners.len() != edges.len() {
        return None;
    }

    let n = corners.len();
    let points = corners.iter().enumerate()
        .filter(|&(i, c)| {
            let (p, q) = (corners[(i + n - 1) % n], corners[(i + 1) % n]);
            let turn = (c.0 - p.0) * (q.1 - c.1) - (c.1 - p.1) * (q.0 - c.0);
            keep_collinear || turn != 0
        })
        .map(|(_, c)| [c.0 as f64, c.1 as f64])
        .collect();
    Some(points)
}
