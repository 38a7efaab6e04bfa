//! Hermite interpolation in one and two parameters.
//!
//! The patch types here interpolate values and first derivatives given at
//! the corners of a unit interval or unit square. Stitching tiles whose
//! shared corners agree on both produces a surface smooth across seams.

#[macro_use]
extern crate log;
#[macro_use]
extern crate splinalg_vecmat;

mod bicubic;
mod cubic;
mod tile;

//---------------------------
// public reexports; API

pub use crate::bicubic::BicubicSpline;
pub use crate::cubic::CubicSpline;
pub use crate::tile::{ControlNet, Tile};
