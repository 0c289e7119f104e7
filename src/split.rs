use std::collections::HashSet;

use num_traits::real::Real;
use smallvec::SmallVec;

use crate::{errors::TriangulationError, idx::Idx, math::turn_angle, ring::{Diagonal, PolygonData, PolygonPoint}};

type PointIdx<C> = Idx<PolygonPoint<C>>;

/// Cuts `polygon` along `diagonals`, returning each resulting piece as a ring of input indices.
///
/// Every face is traced by walking its boundary and, at each point, taking the leftmost turn among the
/// ring's next point and the diagonals ending there. With no diagonals the polygon comes back unchanged.
pub(crate) fn split_polygon<C: Real>(polygon: &PolygonData<C>, diagonals: &[Diagonal<C>]) -> Result<Vec<Vec<usize>>, TriangulationError> {
    if diagonals.is_empty() {
        return Ok(vec![polygon.ring_indices()]);
    }

    let mut adjacent: Vec<SmallVec<[PointIdx<C>; 2]>> = vec![SmallVec::new(); polygon.len()];
    for &Diagonal(a, b) in diagonals {
        if !adjacent[a.usize()].contains(&b) {
            adjacent[a.usize()].push(b);
        }
        if !adjacent[b.usize()].contains(&a) {
            adjacent[b.usize()].push(a);
        }
    }

    let starts = polygon.iter_index()
        .map(|pi| (pi, polygon.point(pi).next()))
        .chain(polygon.iter_index().flat_map(|a| adjacent[a.usize()].iter().map(move |&b| (a, b))));

    let step_limit = polygon.len() + 2 * diagonals.len();
    let mut used: HashSet<(PointIdx<C>, PointIdx<C>)> = HashSet::new();
    let mut pieces = Vec::with_capacity(diagonals.len() + 1);

    for start in starts {
        if used.contains(&start) {
            continue;
        }

        let (mut from, mut to) = start;
        let mut piece = Vec::new();
        let mut steps = 0;
        loop {
            used.insert((from, to));
            piece.push(polygon.point(from).index());

            let next = leftmost_turn(polygon, &adjacent[to.usize()], from, to)
                .ok_or_else(|| TriangulationError::internal(format!("No way out of {} after arriving from {}", to, from)))?;
            from = to;
            to = next;

            steps += 1;
            if (from, to) == start {
                break;
            }
            if steps > step_limit {
                return Err(TriangulationError::internal(format!("Piece starting at {} -> {} did not close after {} steps", start.0, start.1, steps)));
            }
        }
        pieces.push(piece);
    }

    if pieces.len() != diagonals.len() + 1 {
        return Err(TriangulationError::internal(format!("{} diagonals split the polygon into {} pieces", diagonals.len(), pieces.len())));
    }

    Ok(pieces)
}

/// Of the ring successor of `to` and the points diagonally adjacent to it, picks the one turning furthest
/// left from the direction `from -> to`. Going straight back to `from` is never an option.
fn leftmost_turn<C: Real>(polygon: &PolygonData<C>, adjacent: &[PointIdx<C>], from: PointIdx<C>, to: PointIdx<C>) -> Option<PointIdx<C>> {
    let d = polygon.coords(from).to(polygon.coords(to));
    let ring_next = polygon.point(to).next();
    let mut best: Option<(PointIdx<C>, C)> = None;
    for &candidate in std::iter::once(&ring_next).chain(adjacent.iter()) {
        if candidate == from {
            continue;
        }
        let e = polygon.coords(to).to(polygon.coords(candidate));
        let angle = turn_angle(&d, &e);
        if best.map_or(true, |(_, best_angle)| angle > best_angle) {
            best = Some((candidate, angle));
        }
    }
    best.map(|(candidate, _)| candidate)
}
