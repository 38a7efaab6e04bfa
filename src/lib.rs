pub use splinalg_patches as patches;
pub use splinalg_vecmat as vecmat;

pub use splinalg_patches::{BicubicSpline, ControlNet, CubicSpline, Tile};
pub use splinalg_vecmat::{dot, sq_within_tol, SQDIST_TOL};
pub use splinalg_vecmat::{ContiguousRows, Matrix, NearlyEq, Operand, V3};
pub use splinalg_vecmat::{DimensionMismatchError, InvalidShapeError};

pub use splinalg_vecmat::assert_nearly_eq;
