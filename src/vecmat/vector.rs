/* ************************************************************************ **
** This file is part of splinalg, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::ops::{Deref, DerefMut};

use crate::close::NearlyEq;
use crate::matrix::Matrix;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------

/// A 3-dimensional vector with operations for linear algebra.
///
/// Every operation returns a new value; nothing is mutated in place.
#[derive(Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct V3(pub [f64; 3]);

// ---------------------------------------------------------------------------
// the type behaves generally like its backing array

pub type Iter<'a> = std::slice::Iter<'a, f64>;

impl Deref for V3 {
    type Target = [f64; 3];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl DerefMut for V3 {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

// many methods take `I: IntoIterator`, which Deref does not help with
impl<'a> IntoIterator for &'a V3 {
    type Item = &'a f64;
    type IntoIter = Iter<'a>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter() }
}

// forward the debug impl without a surrounding "V3(...)", so that debug
// output doubles as a literal in most languages one might paste it into
impl fmt::Debug for V3 {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

// display formats each element for convenience, `[1, 0.25, 3]`
impl fmt::Display for V3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        fmt::Display::fmt(&self[0], f)?;
        for x in &self[1..] {
            write!(f, ", ")?;
            fmt::Display::fmt(x, f)?;
        }
        write!(f, "]")?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

impl V3 {
    /// Get a zero vector.
    #[inline(always)]
    pub fn zero() -> Self
    { V3([0.0; 3]) }

    /// Construct a vector from a function on indices.
    #[inline(always)]
    pub fn from_fn<F>(mut f: F) -> Self
    where F: FnMut(usize) -> f64,
    { V3([f(0), f(1), f(2)]) }

    /// Get a basis vector.
    #[inline(always)]
    pub fn axis_unit(i: usize) -> Self {
        let mut v = V3::zero();
        *v.get_mut(i)
            .unwrap_or_else(|| panic!("Invalid axis for 3d vector: {}", i)) = 1.0;
        v
    }

    /// Get the inner product of two vectors.
    ///
    /// It is recommended you write this as `V3::dot(a, b)`, rather than `a.dot(b)`.
    #[inline(always)]
    pub fn dot(&self, other: &Self) -> f64
    { (0..3).map(|k| self[k] * other[k]).sum() }

    /// Get the vector's squared magnitude.
    #[inline(always)]
    pub fn sqnorm(&self) -> f64
    { V3::dot(self, self) }

    /// Get the vector's magnitude.
    #[inline(always)]
    pub fn norm(&self) -> f64
    { self.sqnorm().sqrt() }

    /// Normalize the vector.
    ///
    /// The zero vector has no direction; normalizing it divides by zero and
    /// produces non-finite components. That precondition is the caller's to
    /// uphold, no runtime check is made.
    #[inline(always)]
    pub fn unit(&self) -> Self
    { *self / self.norm() }

    /// Cross-product. Only defined on 3-dimensional vectors.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        V3([
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        ])
    }

    /// Apply a function to each element.
    #[inline]
    pub fn map<F>(self, mut f: F) -> V3
    where F: FnMut(f64) -> f64,
    { V3([f(self[0]), f(self[1]), f(self[2])]) }

    /// Interpret the vector as a 3×1 column matrix.
    pub fn to_column(&self) -> Matrix
    { Matrix::from([[self[0]], [self[1]], [self[2]]]) }
}

/// Get the inner product of two vectors.
#[inline(always)]
pub fn dot(a: &V3, b: &V3) -> f64
{ V3::dot(a, b) }

impl NearlyEq for V3 {
    /// Squared Euclidean distance between two vectors.
    #[inline]
    fn sqdist(&self, other: &V3) -> f64
    { (*self - *other).sqnorm() }
}

// ---------------------------------------------------------------------------
// operators

impl Add for V3 {
    type Output = V3;

    #[inline]
    fn add(self, other: V3) -> V3
    { V3::from_fn(|k| self[k] + other[k]) }
}

impl Sub for V3 {
    type Output = V3;

    #[inline]
    fn sub(self, other: V3) -> V3
    { V3::from_fn(|k| self[k] - other[k]) }
}

impl Neg for V3 {
    type Output = V3;

    #[inline]
    fn neg(self) -> V3
    { self.map(|x| -x) }
}

// vector * scalar
impl Mul<f64> for V3 {
    type Output = V3;

    #[inline]
    fn mul(self, scalar: f64) -> V3
    { self.map(|x| x * scalar) }
}

// scalar * vector
impl Mul<V3> for f64 {
    type Output = V3;

    #[inline(always)]
    fn mul(self, vector: V3) -> V3
    { vector * self }
}

impl Div<f64> for V3 {
    type Output = V3;

    #[inline]
    fn div(self, scalar: f64) -> V3
    { self.map(|x| x / scalar) }
}

impl AddAssign for V3 {
    #[inline]
    fn add_assign(&mut self, other: V3)
    { *self = *self + other; }
}

impl SubAssign for V3 {
    #[inline]
    fn sub_assign(&mut self, other: V3)
    { *self = *self - other; }
}

impl MulAssign<f64> for V3 {
    #[inline]
    fn mul_assign(&mut self, scalar: f64)
    { *self = *self * scalar; }
}

impl DivAssign<f64> for V3 {
    #[inline]
    fn div_assign(&mut self, scalar: f64)
    { *self = *self / scalar; }
}

// ---------------------------------------------------------------------------
