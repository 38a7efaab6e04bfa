/* ************************************************************************ **
** This file is part of splinalg, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

/// Cubic polynomial on the unit interval, in Hermite form.
///
/// Interpolates a value and slope given at each endpoint; the unique cubic
/// through `(0, x0)` and `(1, x1)` with those slopes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubicSpline {
    // coefficients of a t^3 + b t^2 + c t + d
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl CubicSpline {
    /// Construct from `(value, slope)` pairs at `t = 0` and `t = 1`.
    pub fn from_endpoints((x0, xd0): (f64, f64), (x1, xd1): (f64, f64)) -> Self {
        CubicSpline {
            a: xd0 + xd1 + 2.0 * (x0 - x1),
            b: 3.0 * (x1 - x0) - 2.0 * xd0 - xd1,
            c: xd0,
            d: x0,
        }
    }

    pub fn value(&self, t: f64) -> f64
    { ((self.a * t + self.b) * t + self.c) * t + self.d }

    /// First derivative with respect to `t`.
    pub fn slope(&self, t: f64) -> f64
    { (3.0 * self.a * t + 2.0 * self.b) * t + self.c }
}

// ---------------------------------------------------------------------------
