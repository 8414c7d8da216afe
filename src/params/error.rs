//----------------------------------------
// params errors
//----------------------------------------
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ParamsErr {
    #[error("{name} should be in [{min}, {max}]; got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{name} should be a finite number; got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("{name} should be a whole number; got {value}")]
    NotWhole { name: &'static str, value: f64 },
}
