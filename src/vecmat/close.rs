//! Approximate equality by squared distance.
//!
//! Floating-point arithmetic never guarantees bit-exact results across
//! equivalent computations, so the value types in this crate compare equal
//! whenever their squared distance falls below a fixed tolerance.

/// Squared-distance tolerance used by [`NearlyEq::nearly_eq`].
pub const SQDIST_TOL: f64 = 1.0e-20;

/// Test a squared distance against [`SQDIST_TOL`].
///
/// The comparison is strict; a squared distance of exactly `SQDIST_TOL`
/// is not within tolerance.
#[inline(always)]
pub fn sq_within_tol(sq: f64) -> bool
{ sq < SQDIST_TOL }

/// Approximate equality for the value types in this crate.
pub trait NearlyEq<Rhs: ?Sized = Self> {
    /// Summed squared difference between two values.
    ///
    /// Implementations on shaped types where the difference is not defined
    /// for all inputs (matrices of differing shape) return `INFINITY` for
    /// the incomparable cases, so that `nearly_eq` remains a total predicate.
    fn sqdist(&self, other: &Rhs) -> f64;

    /// True iff the squared distance to `other` is within [`SQDIST_TOL`].
    #[inline]
    fn nearly_eq(&self, other: &Rhs) -> bool
    { sq_within_tol(self.sqdist(other)) }
}

impl NearlyEq for f64 {
    #[inline]
    fn sqdist(&self, other: &f64) -> f64
    { (self - other) * (self - other) }
}

/// Assert that two values are [`NearlyEq::nearly_eq`].
///
/// An optional trailing format string replaces the default failure message.
#[macro_export]
macro_rules! assert_nearly_eq {
    ($a:expr, $b:expr $(,)*) => {
        $crate::assert_nearly_eq!($a, $b, "not nearly equal!")
    };
    ($a:expr, $b:expr, $($fmt:tt)+) => {{
        let a = &$a;
        let b = &$b;
        let sqdist = $crate::NearlyEq::sqdist(a, b);
        if !$crate::sq_within_tol(sqdist) {
            panic!(
                "{} (sqdist: {:e}, tol: {:e})\n left: {:?}\nright: {:?}",
                format!($($fmt)+), sqdist, $crate::SQDIST_TOL, a, b,
            );
        }
    }};
}
