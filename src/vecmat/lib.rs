#[macro_use]
extern crate failure;
#[macro_use]
extern crate itertools;
#[cfg(test)]
extern crate rand;

#[macro_use]
mod close;
mod matrix;
mod vector;

//---------------------------
// public reexports; API

pub use crate::close::{sq_within_tol, NearlyEq, SQDIST_TOL};
pub use crate::matrix::{ContiguousRows, Matrix, Operand};
pub use crate::matrix::{DimensionMismatchError, InvalidShapeError};
pub use crate::vector::{dot, V3};
