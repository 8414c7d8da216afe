//----------------------------------------
// compute mod
//----------------------------------------
pub use crate::density::{compute_curves, group_curve, CurveSample, Group};
pub use crate::overlap::{analytic_overlap, curve_overlap};
pub use crate::params::DistributionParameters;
pub use crate::statistic::{compute_summary_statistic, SummaryStatistic};
