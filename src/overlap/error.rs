//----------------------------------------
// overlap errors
//----------------------------------------
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlapErr {
    #[error("could not build normal distribution with sd {sd}: {reason}")]
    BadDistribution { sd: f64, reason: String },
}
