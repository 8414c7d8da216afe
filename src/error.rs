//----------------------------------------
// Crate error type
//----------------------------------------
use crate::overlap::error::OverlapErr;
use crate::params::error::ParamsErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AovErr {
    #[error("while validating distribution parameters: {0}")]
    Params(#[from] ParamsErr),
    #[error("while computing curve overlap: {0}")]
    Overlap(#[from] OverlapErr),
}
