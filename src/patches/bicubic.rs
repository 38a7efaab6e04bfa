/* ************************************************************************ **
** This file is part of splinalg, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use splinalg_vecmat::Matrix;

/// Bicubic polynomial on the unit square, in Hermite form.
///
/// Interpolates a value, both first partials, and the mixed partial given
/// at each of the four corners. Corner data is always ordered `(0,0)`,
/// `(1,0)`, `(0,1)`, `(1,1)` in `(u, v)` coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct BicubicSpline {
    // 4x4 coefficient matrix; entry (i, j) multiplies u^i v^j
    alpha: Matrix,
}

impl BicubicSpline {
    /// Construct from corner values, `u` and `v` partials, and mixed partials.
    pub fn from_corners(
        values: [f64; 4],
        slopes_u: [f64; 4],
        slopes_v: [f64; 4],
        slopes_uv: [f64; 4],
    ) -> Self {
        let [x00, x10, x01, x11] = values;
        let [xu00, xu10, xu01, xu11] = slopes_u;
        let [xv00, xv10, xv01, xv11] = slopes_v;
        let [xuv00, xuv10, xuv01, xuv11] = slopes_uv;

        let f = Matrix::from([
            [x00, x01, xv00, xv01],
            [x10, x11, xv10, xv11],
            [xu00, xu01, xuv00, xuv01],
            [xu10, xu11, xuv10, xuv11],
        ]);

        // the Hermite basis in the monomial basis, applied from both sides
        let left = Matrix::from([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [-3.0, 3.0, -2.0, -1.0],
            [2.0, -2.0, 1.0, 1.0],
        ]);
        let right = left.to_transpose();

        let alpha = &(&left * &f) * &right;
        trace!("assembled patch coefficients: {}", alpha);
        BicubicSpline { alpha }
    }

    pub fn value(&self, u: f64, v: f64) -> f64
    { self.contract(powers(u), powers(v)) }

    /// First derivative with respect to `u`.
    pub fn slope_u(&self, u: f64, v: f64) -> f64
    { self.contract(dpowers(u), powers(v)) }

    /// First derivative with respect to `v`.
    pub fn slope_v(&self, u: f64, v: f64) -> f64
    { self.contract(powers(u), dpowers(v)) }

    /// Mixed second derivative, `d^2 / du dv`.
    pub fn slope_uv(&self, u: f64, v: f64) -> f64
    { self.contract(dpowers(u), dpowers(v)) }

    fn contract(&self, us: [f64; 4], vs: [f64; 4]) -> f64 {
        let mut acc = 0.0;
        for i in 0..4 {
            for j in 0..4 {
                acc += us[i] * self.alpha[(i, j)] * vs[j];
            }
        }
        acc
    }
}

fn powers(t: f64) -> [f64; 4]
{ [1.0, t, t * t, t * t * t] }

fn dpowers(t: f64) -> [f64; 4]
{ [0.0, 1.0, 2.0 * t, 3.0 * t * t] }

// ---------------------------------------------------------------------------
