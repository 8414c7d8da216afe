//----------------------------------------
// render mod types
//----------------------------------------
use crate::density::{compute_curves, CurveSample, Group};
use crate::error::AovErr;
use crate::overlap::{analytic_overlap, curve_overlap};
use crate::params::DistributionParameters;
use crate::statistic::{compute_summary_statistic, SummaryStatistic};
use serde::Serialize;

/// Everything one render needs, recomputed from the parameters.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub parameters: DistributionParameters,
    pub statistic: SummaryStatistic,
    /// Control vs treatment 1 overlap on the grid.
    pub overlap: f64,
    /// Same overlap over the whole real line.
    pub analytic_overlap: f64,
    pub curves: Vec<CurveSample>,
}

impl Report {
    pub fn compute(params: DistributionParameters) -> Result<Report, AovErr> {
        log::debug!("recomputing report for {:?}", params);
        Ok(Report {
            parameters: params,
            statistic: compute_summary_statistic(params),
            overlap: curve_overlap(params, Group::Control, Group::Treatment1),
            analytic_overlap: analytic_overlap(params, Group::Control, Group::Treatment1)?,
            curves: compute_curves(params),
        })
    }
}
