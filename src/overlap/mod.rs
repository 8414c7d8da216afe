//----------------------------------------
// overlap mod
//----------------------------------------
pub mod error;
pub mod integrate;

pub use integrate::{analytic_overlap, curve_overlap};
