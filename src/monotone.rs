use num_traits::real::Real;
use smallvec::{SmallVec, smallvec};

use crate::{errors::TriangulationError, idx::Idx, math::{orient, sweep_order}, ring::{PolygonData, PolygonPoint}};

type PointIdx<C> = Idx<PolygonPoint<C>>;

/// Triangulates one y-monotone piece, appending counterclockwise triangles of input indices to `triangles`.
///
/// The piece must be a counterclockwise ring whose boundary splits into a left chain (walking `next` from the
/// top point) and a right chain (walking `next` from the bottom point), each monotone in sweep order.
pub(crate) fn triangulate_monotone<C: Real>(polygon: &PolygonData<C>, triangles: &mut Vec<[usize; 3]>) -> Result<(), TriangulationError> {
    let m = polygon.len();
    if m == 3 {
        let ring = polygon.ring_indices();
        triangles.push([ring[0], ring[1], ring[2]]);
        return Ok(());
    }

    let mut order: Vec<PointIdx<C>> = polygon.iter_index().collect();
    order.sort_by(|&a, &b| sweep_order(polygon.coords(a), polygon.coords(b)));
    let top = order[0];
    let bottom = order[m - 1];

    // The top point counts as part of the left chain, the bottom point as part of neither
    let mut on_left = vec![false; m];
    let mut pi = top;
    while pi != bottom {
        on_left[pi.usize()] = true;
        pi = polygon.point(pi).next();
    }

    let index = |pi: PointIdx<C>| polygon.point(pi).index();
    // Triangle joining `v` to the stack edge `a`-`b`, where `a` came before `b` in sweep order
    let fan = |triangles: &mut Vec<[usize; 3]>, v_on_left: bool, v: PointIdx<C>, a: PointIdx<C>, b: PointIdx<C>| {
        if v_on_left {
            triangles.push([index(v), index(b), index(a)]);
        } else {
            triangles.push([index(v), index(a), index(b)]);
        }
    };

    let mut stack: SmallVec<[PointIdx<C>; 16]> = smallvec![order[0], order[1]];
    for &v in &order[2..m - 1] {
        let top = *stack.last().ok_or_else(|| TriangulationError::internal("Monotone stack emptied"))?;
        let v_on_left = on_left[v.usize()];

        if v_on_left != on_left[top.usize()] {
            // Opposite chain: v sees every point on the stack
            for pair in stack.windows(2) {
                fan(triangles, v_on_left, v, pair[0], pair[1]);
            }
            stack.clear();
            stack.push(top);
            stack.push(v);
        } else {
            let mut p = stack.pop().ok_or_else(|| TriangulationError::internal("Monotone stack emptied"))?;
            while let Some(&t) = stack.last() {
                let (v_coords, p_coords, t_coords) = (polygon.coords(v), polygon.coords(p), polygon.coords(t));
                if v_on_left {
                    if orient(t_coords, p_coords, v_coords) <= C::zero() {
                        break;
                    }
                    triangles.push([index(t), index(p), index(v)]);
                } else {
                    if orient(v_coords, p_coords, t_coords) <= C::zero() {
                        break;
                    }
                    triangles.push([index(v), index(p), index(t)]);
                }
                p = t;
                stack.pop();
            }
            stack.push(p);
            stack.push(v);
        }
    }

    // The bottom point closes both chains, so it sits opposite whichever chain is on the stack
    let top = *stack.last().ok_or_else(|| TriangulationError::internal("Monotone stack emptied"))?;
    let bottom_on_left = !on_left[top.usize()];
    for pair in stack.windows(2) {
        fan(triangles, bottom_on_left, bottom, pair[0], pair[1]);
    }

    Ok(())
}
