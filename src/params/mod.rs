//----------------------------------------
// params mod
//----------------------------------------
pub mod error;
pub mod types;

pub use types::{DistributionParameters, SliderRange, EFFECT_SIZE, SAMPLE_SIZE, SPREAD};
