/* ************************************************************************ **
** This file is part of splinalg, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

use slice_of_array::prelude::*;

use crate::close::NearlyEq;
use crate::vector::V3;

// ---------------------------------------------------------------------------

/// Error from combining two matrices whose shapes are not compatible.
#[derive(Debug, Fail)]
#[fail(display = "dimension mismatch in {}: {:?} vs {:?}", op, lhs, rhs)]
pub struct DimensionMismatchError {
    backtrace: failure::Backtrace,
    op: &'static str,
    lhs: (usize, usize),
    rhs: (usize, usize),
}

fn mismatch(op: &'static str, lhs: (usize, usize), rhs: (usize, usize)) -> DimensionMismatchError
{ DimensionMismatchError { backtrace: failure::Backtrace::new(), op, lhs, rhs } }

/// Error from constructing a matrix out of parts that do not describe one.
#[derive(Debug, Fail)]
#[fail(display = "cannot shape {} entries into a {:?} matrix", len, dims)]
pub struct InvalidShapeError {
    backtrace: failure::Backtrace,
    len: usize,
    dims: (usize, usize),
}

// ---------------------------------------------------------------------------

/// Owned dense matrix of `f64` with row-major storage and runtime dimensions.
///
/// A value type; every operation leaves its operands untouched and returns a
/// new matrix. The entry at `(row, col)` lives at `data[row * cols + col]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    // row-contiguous; invariant: rows * cols == data.len()
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

pub type ContiguousRows<'a> = std::slice::Chunks<'a, f64>;

impl Matrix {
    /// Construct from row-major entries and explicit dimensions.
    ///
    /// Fails unless the entry count is exactly `rows * cols`, with both
    /// dimensions at least 1. Shape is never inferred from the data.
    pub fn from_row_major_data(
        (rows, cols): (usize, usize),
        data: Vec<f64>,
    ) -> Result<Self, InvalidShapeError> {
        if rows == 0 || cols == 0 || data.len() != rows * cols {
            let backtrace = failure::Backtrace::new();
            return Err(InvalidShapeError { backtrace, len: data.len(), dims: (rows, cols) });
        }
        Ok(Matrix { data, rows, cols })
    }

    pub fn new_filled((rows, cols): (usize, usize), fill: f64) -> Self
    { Matrix { data: vec![fill; rows * cols], rows, cols } }

    /// Construct from a function on `(row, col)` indices.
    pub fn from_fn<F>((rows, cols): (usize, usize), mut f: F) -> Self
    where F: FnMut(usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Matrix { data, rows, cols }
    }

    /// Identity matrix of size `n`.
    pub fn eye(n: usize) -> Self
    { Matrix::from_fn((n, n), |r, c| if r == c { 1.0 } else { 0.0 }) }
}

// ---------------------------------------------------------------------------
// rotations
//
// Right-handed rotations about the coordinate axes. Angles are in degrees.

impl Matrix {
    /// Rotation about the x axis, by an angle in degrees.
    pub fn rotate_x(degrees: f64) -> Self {
        let (cos, sin) = trig(degrees);
        Matrix::from([
            [1.0, 0.0, 0.0],
            [0.0, cos, -sin],
            [0.0, sin, cos],
        ])
    }

    /// Rotation about the y axis, by an angle in degrees.
    pub fn rotate_y(degrees: f64) -> Self {
        let (cos, sin) = trig(degrees);
        Matrix::from([
            [cos, 0.0, sin],
            [0.0, 1.0, 0.0],
            [-sin, 0.0, cos],
        ])
    }

    /// Rotation about the z axis, by an angle in degrees.
    pub fn rotate_z(degrees: f64) -> Self {
        let (cos, sin) = trig(degrees);
        Matrix::from([
            [cos, -sin, 0.0],
            [sin, cos, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }
}

fn trig(degrees: f64) -> (f64, f64) {
    let radians = degrees.to_radians();
    (radians.cos(), radians.sin())
}

// ---------------------------------------------------------------------------
// conversions

macro_rules! impl_from_nested {
    ($([$r:tt, $c:tt])*) => {$(
        impl From<[[f64; $c]; $r]> for Matrix {
            fn from(rows: [[f64; $c]; $r]) -> Self
            { Matrix { data: rows.flat().to_vec(), rows: $r, cols: $c } }
        }
    )*};
}

impl_from_nested! {
    [2, 2] [3, 3] [4, 4]
    [2, 3] [3, 2] [3, 1]
}

impl<'a> From<&'a [V3]> for Matrix {
    /// Build the n×3 matrix whose rows are the given vectors.
    fn from(rows: &'a [V3]) -> Self {
        let mut data = Vec::with_capacity(rows.len() * 3);
        for v in rows {
            data.extend_from_slice(&v.0);
        }
        Matrix { data, rows: rows.len(), cols: 3 }
    }
}

// ---------------------------------------------------------------------------

impl Matrix {
    #[inline(always)]
    pub fn dims(&self) -> (usize, usize) { (self.rows, self.cols) }
    #[inline(always)]
    pub fn num_rows(&self) -> usize { self.rows }
    #[inline(always)]
    pub fn num_cols(&self) -> usize { self.cols }
    #[inline(always)]
    pub fn size(&self) -> usize { self.rows * self.cols }
    #[inline(always)]
    pub fn is_square(&self) -> bool { self.rows == self.cols }

    pub fn row_major_data(&self) -> &[f64] { self.data.as_ref() }
    pub fn rows(&self) -> ContiguousRows<'_> { self.data.chunks(self.cols) }

    pub fn to_transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.num_cols() {
            for r in 0..self.num_rows() {
                data.push(self[(r, c)]);
            }
        }
        Matrix { data, rows: self.cols, cols: self.rows }
    }

    /// Apply a function to each entry.
    pub fn map<F>(&self, mut f: F) -> Matrix
    where F: FnMut(f64) -> f64,
    { Matrix {
        data: self.data.iter().map(|&x| f(x)).collect(),
        rows: self.rows,
        cols: self.cols,
    }}
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline(always)]
    fn index(&self, (r, c): (usize, usize)) -> &f64
    { &self.data[r * self.cols + c] }
}

// ---------------------------------------------------------------------------
// arithmetic

impl Matrix {
    /// Entry-wise sum. Fails unless both shapes are identical.
    pub fn try_add(&self, other: &Matrix) -> Result<Matrix, DimensionMismatchError> {
        if self.dims() != other.dims() {
            return Err(mismatch("add", self.dims(), other.dims()));
        }
        let data = izip!(&self.data, &other.data).map(|(a, b)| a + b).collect();
        Ok(Matrix { data, rows: self.rows, cols: self.cols })
    }

    /// Entry-wise difference. Fails unless both shapes are identical.
    pub fn try_sub(&self, other: &Matrix) -> Result<Matrix, DimensionMismatchError> {
        if self.dims() != other.dims() {
            return Err(mismatch("subtract", self.dims(), other.dims()));
        }
        let data = izip!(&self.data, &other.data).map(|(a, b)| a - b).collect();
        Ok(Matrix { data, rows: self.rows, cols: self.cols })
    }

    /// Standard matrix product.
    ///
    /// Fails unless `self.num_cols() == other.num_rows()`. The output has one
    /// row per row of `self` and one column per column of `other`, with entry
    /// `(r, c)` the contraction of row `r` of `self` against column `c` of
    /// `other`.
    pub fn try_matmul(&self, other: &Matrix) -> Result<Matrix, DimensionMismatchError> {
        if self.num_cols() != other.num_rows() {
            return Err(mismatch("multiply", self.dims(), other.dims()));
        }
        Ok(Matrix::from_fn((self.rows, other.cols), |r, c| {
            (0..self.cols).map(|k| self[(r, k)] * other[(k, c)]).sum()
        }))
    }

    /// Product against a column vector: `out[r] = Σ_c self[r, c] * v[c]`.
    ///
    /// Requires a 3×3 matrix: the contraction needs 3 columns, and the output
    /// vector needs one component per row. To multiply a taller or shorter
    /// matrix against a vector, use `try_matmul` with `v.to_column()`.
    pub fn try_mul_v3(&self, vector: V3) -> Result<V3, DimensionMismatchError> {
        if self.dims() != (3, 3) {
            return Err(mismatch("multiply by vector", self.dims(), (3, 1)));
        }
        Ok(V3::from_fn(|r| (0..3).map(|c| self[(r, c)] * vector[c]).sum()))
    }

    /// Multiply by a matrix, vector, or scalar, picked at runtime.
    ///
    /// The operand kinds are closed over by [`Operand`], and the dispatch
    /// matches exhaustively; a kind added there cannot be overlooked here.
    /// Matrix and vector operands fail on incompatible shapes; a scalar
    /// operand always succeeds and scales entry-wise.
    pub fn multiply(&self, other: &Operand) -> Result<Operand, DimensionMismatchError> {
        match *other {
            Operand::Matrix(ref m) => self.try_matmul(m).map(Operand::Matrix),
            Operand::Vector(v) => self.try_mul_v3(v).map(Operand::Vector),
            Operand::Scalar(x) => Ok(Operand::Matrix(self * x)),
        }
    }
}

/// Right-hand operand for [`Matrix::multiply`].
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Matrix(Matrix),
    Vector(V3),
    Scalar(f64),
}

// row vector * matrix kernel; the transposed contraction of `try_mul_v3`
fn vecmat(vector: V3, matrix: &Matrix) -> Result<V3, DimensionMismatchError> {
    if matrix.dims() != (3, 3) {
        return Err(mismatch("multiply by row vector", (1, 3), matrix.dims()));
    }
    Ok(V3::from_fn(|c| (0..3).map(|r| vector[r] * matrix[(r, c)]).sum()))
}

// ---------------------------------------------------------------------------
// operators
//
// The operator forms panic where the `try_*` methods would fail; std's
// operator traits leave no room for a `Result`.

impl<'a> Neg for &'a Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix
    { self.map(|x| -x) }
}

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn add(self, other: &'b Matrix) -> Matrix {
        match self.try_add(other) {
            Ok(out) => out,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, 'b> Sub<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn sub(self, other: &'b Matrix) -> Matrix {
        match self.try_sub(other) {
            Ok(out) => out,
            Err(e) => panic!("{}", e),
        }
    }
}

// matrix * matrix
impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, other: &'b Matrix) -> Matrix {
        match self.try_matmul(other) {
            Ok(out) => out,
            Err(e) => panic!("{}", e),
        }
    }
}

// matrix * column vector
impl<'a> Mul<V3> for &'a Matrix {
    type Output = V3;

    fn mul(self, vector: V3) -> V3 {
        match self.try_mul_v3(vector) {
            Ok(out) => out,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, 'b> Mul<&'b V3> for &'a Matrix {
    type Output = V3;

    #[inline(always)]
    fn mul(self, vector: &'b V3) -> V3
    { self * *vector }
}

// row vector * matrix
impl<'a> Mul<&'a Matrix> for V3 {
    type Output = V3;

    fn mul(self, matrix: &'a Matrix) -> V3 {
        match vecmat(self, matrix) {
            Ok(out) => out,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a V3 {
    type Output = V3;

    #[inline(always)]
    fn mul(self, matrix: &'b Matrix) -> V3
    { *self * matrix }
}

// matrix * scalar
impl<'a> Mul<f64> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix
    { self.map(|x| x * scalar) }
}

// scalar * matrix
impl<'a> Mul<&'a Matrix> for f64 {
    type Output = Matrix;

    #[inline(always)]
    fn mul(self, matrix: &'a Matrix) -> Matrix
    { matrix * self }
}

// ---------------------------------------------------------------------------

impl NearlyEq for Matrix {
    /// Summed squared entry-wise difference.
    ///
    /// Matrices of differing shape have no difference; they are infinitely
    /// far apart, and never nearly equal.
    fn sqdist(&self, other: &Matrix) -> f64 {
        if self.dims() != other.dims() {
            return std::f64::INFINITY;
        }
        izip!(&self.data, &other.data).map(|(a, b)| (a - b) * (a - b)).sum()
    }
}

// display formats rows like nested array literals, `[[1, 2], [3, 4]]`
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (c, x) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                fmt::Display::fmt(x, f)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Matrix;

    use serde::de;
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Matrix {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut s = serializer.serialize_struct("Matrix", 3)?;
            s.serialize_field("data", self.row_major_data())?;
            s.serialize_field("rows", &self.num_rows())?;
            s.serialize_field("cols", &self.num_cols())?;
            s.end()
        }
    }

    // deserialization revalidates, so that no deserialized matrix can
    // violate the shape invariant
    impl<'de> Deserialize<'de> for Matrix {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            #[derive(Deserialize)]
            struct Raw {
                data: Vec<f64>,
                rows: usize,
                cols: usize,
            }

            let Raw { data, rows, cols } = Raw::deserialize(deserializer)?;
            Matrix::from_row_major_data((rows, cols), data).map_err(de::Error::custom)
        }
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_matrix((rows, cols): (usize, usize)) -> Matrix {
        let mut rng = rand::thread_rng();
        Matrix::from_fn((rows, cols), |_, _| rng.gen_range(-10.0, 10.0))
    }

    #[test]
    fn construction_validates_shape() {
        let m = Matrix::from_row_major_data((2, 3), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.dims(), (2, 3));

        assert!(Matrix::from_row_major_data((2, 3), vec![1.0; 5]).is_err());
        assert!(Matrix::from_row_major_data((0, 3), vec![]).is_err());

        let e = Matrix::from_row_major_data((2, 2), vec![1.0; 3]).unwrap_err();
        assert_eq!(e.to_string(), "cannot shape 3 entries into a (2, 2) matrix");
    }

    #[test]
    fn row_major_layout() {
        let m = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(m.row_major_data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0][..]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m[(1, 2)], 6.0);

        let rows: Vec<_> = m.rows().collect();
        assert_eq!(rows, vec![&[1.0, 2.0, 3.0][..], &[4.0, 5.0, 6.0][..]]);
    }

    #[test]
    fn transpose() {
        let m = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let t = m.to_transpose();
        assert_eq!(t.dims(), (3, 2));
        assert_eq!(t.row_major_data(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0][..]);
        assert_eq!(t.to_transpose(), m);
    }

    #[test]
    fn negation_roundtrip() {
        let m = Matrix::from([[1.0, -2.0], [0.5, 4.0]]);
        assert_eq!(-&m, m.map(|x| -x));

        for _ in 0..10 {
            let m = random_matrix((3, 4));
            assert_nearly_eq!(-&-&m, m);
        }
    }

    #[test]
    fn add_sub_roundtrip() {
        let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::from([[10.0, 20.0], [30.0, 40.0]]);
        assert_eq!(&a + &b, Matrix::from([[11.0, 22.0], [33.0, 44.0]]));

        for _ in 0..10 {
            let (a, b) = (random_matrix((4, 2)), random_matrix((4, 2)));
            assert_nearly_eq!(&(&a + &b) - &b, a);
        }
    }

    #[test]
    fn mismatched_shapes_are_an_error() {
        let a = random_matrix((2, 3));
        let b = random_matrix((3, 2));

        let e = a.try_add(&b).unwrap_err();
        assert_eq!(e.to_string(), "dimension mismatch in add: (2, 3) vs (3, 2)");
        assert!(a.try_sub(&b).is_err());

        // compatible for multiplication, incompatible entry-wise
        assert!(a.try_matmul(&b).is_ok());
        assert!(a.try_matmul(&a).is_err());
    }

    #[test]
    #[should_panic(expected = "dimension mismatch in add")]
    fn mismatched_add_operator_panics() {
        let _ = &random_matrix((2, 3)) + &random_matrix((3, 2));
    }

    #[test]
    fn matmul() {
        let a = Matrix::from([[1.0, 0.0, 0.0], [0.0, 2.0, 0.0]]);

        let b = Matrix::from([[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);
        assert_eq!(&a * &b, Matrix::from([[7.0, 8.0], [18.0, 20.0]]));

        let b = Matrix::from([[3.0, 4.0], [5.0, 6.0], [7.0, 8.0]]);
        assert_eq!(&a * &b, Matrix::from([[3.0, 4.0], [10.0, 12.0]]));
    }

    #[test]
    fn matmul_output_shape() {
        let a = random_matrix((1, 3));
        let b = random_matrix((3, 4));
        assert_eq!(a.try_matmul(&b).unwrap().dims(), (1, 4));
    }

    #[test]
    fn multiply_by_identity() {
        for n in 1..6 {
            let a = random_matrix((n, n));
            let eye = Matrix::eye(n);
            assert_nearly_eq!(&a * &eye, a);
            assert_nearly_eq!(&eye * &a, a);
        }
    }

    #[test]
    fn scalar_multiply() {
        let m = Matrix::from([[1.0, -2.0], [3.0, 0.5]]);
        assert_eq!(&m * 2.0, Matrix::from([[2.0, -4.0], [6.0, 1.0]]));
        assert_eq!(2.0 * &m, &m * 2.0);
    }

    #[test]
    fn matrix_times_vector() {
        // quarter turn about x sends +y to +z
        let r = Matrix::rotate_x(90.0);
        assert_nearly_eq!(&r * V3([1.0, 2.0, 3.0]), V3([1.0, -3.0, 2.0]));
        assert_nearly_eq!(&r * &V3([3.0, 2.0, 1.0]), V3([3.0, -1.0, 2.0]));

        let e = random_matrix((2, 3)).try_mul_v3(V3([1.0, 2.0, 3.0])).unwrap_err();
        assert_eq!(e.to_string(), "dimension mismatch in multiply by vector: (2, 3) vs (3, 1)");
    }

    #[test]
    fn row_vector_times_matrix() {
        let m = random_matrix((3, 3));
        let v = V3([1.0, -2.0, 0.25]);
        // contracting over rows is multiplication by the transpose
        assert_nearly_eq!(v * &m, &m.to_transpose() * v);
        assert_nearly_eq!(&v * &m, v * &m);
    }

    #[test]
    fn multiply_dispatch() {
        let m = Matrix::from([[0.0, -1.0], [1.0, 0.0]]);

        match m.multiply(&Operand::Matrix(m.clone())).unwrap() {
            Operand::Matrix(out) => assert_eq!(out, &Matrix::eye(2) * -1.0),
            out => panic!("expected a matrix, got {:?}", out),
        }

        match m.multiply(&Operand::Scalar(3.0)).unwrap() {
            Operand::Matrix(out) => assert_eq!(out, &m * 3.0),
            out => panic!("expected a matrix, got {:?}", out),
        }

        let r = Matrix::rotate_z(90.0);
        match r.multiply(&Operand::Vector(V3::axis_unit(0))).unwrap() {
            Operand::Vector(out) => assert_nearly_eq!(out, V3::axis_unit(1)),
            out => panic!("expected a vector, got {:?}", out),
        }

        assert!(m.multiply(&Operand::Vector(V3::zero())).is_err());
        assert!(m.multiply(&Operand::Matrix(Matrix::eye(3))).is_err());
    }

    #[test]
    fn rotations() {
        assert_nearly_eq!(Matrix::rotate_x(0.0), Matrix::eye(3));
        assert_nearly_eq!(&Matrix::rotate_y(90.0) * V3::axis_unit(2), V3::axis_unit(0));
        assert_nearly_eq!(&Matrix::rotate_z(90.0) * V3::axis_unit(0), V3::axis_unit(1));

        // a rotation and its inverse compose to the identity
        let m = &Matrix::rotate_x(31.0) * &Matrix::rotate_x(-31.0);
        assert_nearly_eq!(m, Matrix::eye(3));
    }

    #[test]
    fn nearly_eq_is_total_over_shapes() {
        let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::from_row_major_data((1, 4), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(a.sqdist(&b), std::f64::INFINITY);
        assert!(!a.nearly_eq(&b));
        assert!(a.nearly_eq(&a.clone()));
    }

    #[test]
    fn vector_conversions() {
        let vs = [V3([1.0, 2.0, 3.0]), V3([4.0, 5.0, 6.0])];
        let m = Matrix::from(&vs[..]);
        assert_eq!(m, Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]));

        let col = V3([1.0, 2.0, 3.0]).to_column();
        assert_eq!(col.dims(), (3, 1));
        assert_eq!(col.row_major_data(), &[1.0, 2.0, 3.0][..]);
    }

    #[test]
    fn formatting() {
        let m = Matrix::from([[1.0, 2.0], [3.0, 4.5]]);
        assert_eq!(format!("{}", m), "[[1, 2], [3, 4.5]]");
    }
}
