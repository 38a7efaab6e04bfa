/* ************************************************************************ **
** This file is part of splinalg, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use splinalg_vecmat::V3;

use crate::bicubic::BicubicSpline;

/// Control points for one tile of a quilted surface.
///
/// `a b c d` are the tile's own corners. The ring around them holds the
/// adjacent tiles' corners, which fix the slopes along shared edges:
///
/// ```text
///         e   f
///     l   a   b   g
///     k   d   c   h
///         j   i
/// ```
///
/// `u` runs from `a` toward `b`, and `v` from `a` toward `d`. Two tiles
/// sharing an edge see the same corners and the same ring points there, so
/// the surface is continuous with continuous edge-direction slopes across
/// the seam.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ControlNet {
    pub a: V3,
    pub b: V3,
    pub c: V3,
    pub d: V3,
    pub e: V3,
    pub f: V3,
    pub g: V3,
    pub h: V3,
    pub i: V3,
    pub j: V3,
    pub k: V3,
    pub l: V3,
}

/// Bicubic surface patch over the unit square, one scalar sheet per axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    sheets: [BicubicSpline; 3],
}

impl Tile {
    /// Build the patch interpolating a control net.
    ///
    /// Corner slopes are one-sided differences against the ring, and the
    /// mixed partials are taken to vanish.
    pub fn from_net(net: &ControlNet) -> Self {
        let ControlNet { a, b, c, d, e, f, g, h, i, j, k, l } = *net;

        // corner order (0,0), (1,0), (0,1), (1,1)
        let values = [a, b, d, c];
        let slopes_u = [a - l, g - b, d - k, h - c];
        let slopes_v = [a - e, b - f, j - d, i - c];

        Tile {
            sheets: [
                sheet(&values, &slopes_u, &slopes_v, 0),
                sheet(&values, &slopes_u, &slopes_v, 1),
                sheet(&values, &slopes_u, &slopes_v, 2),
            ],
        }
    }

    pub fn at(&self, u: f64, v: f64) -> V3
    { V3::from_fn(|k| self.sheets[k].value(u, v)) }

    /// Surface tangent along `u`.
    pub fn slope_u(&self, u: f64, v: f64) -> V3
    { V3::from_fn(|k| self.sheets[k].slope_u(u, v)) }

    /// Surface tangent along `v`.
    pub fn slope_v(&self, u: f64, v: f64) -> V3
    { V3::from_fn(|k| self.sheets[k].slope_v(u, v)) }

    /// Unit normal, oriented by the right-hand rule from `u` to `v`.
    ///
    /// Undefined where the tangents are parallel or vanish.
    pub fn normal(&self, u: f64, v: f64) -> V3
    { self.slope_u(u, v).cross(&self.slope_v(u, v)).unit() }
}

// one scalar sheet of the vector-valued patch
fn sheet(values: &[V3; 4], slopes_u: &[V3; 4], slopes_v: &[V3; 4], axis: usize) -> BicubicSpline {
    BicubicSpline::from_corners(
        layer(values, axis),
        layer(slopes_u, axis),
        layer(slopes_v, axis),
        [0.0; 4],
    )
}

fn layer(points: &[V3; 4], axis: usize) -> [f64; 4]
{ [points[0][axis], points[1][axis], points[2][axis], points[3][axis]] }

// ---------------------------------------------------------------------------
