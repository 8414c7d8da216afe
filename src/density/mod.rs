//----------------------------------------
// density mod
//----------------------------------------
pub mod curves;
pub mod grid;
pub mod normal;
pub mod types;

pub use curves::{compute_curves, group_curve};
pub use types::{CurveSample, Group};
