//----------------------------------------
// statistic mod
//----------------------------------------
pub mod f_approx;
pub mod types;

pub use f_approx::compute_summary_statistic;
pub use types::SummaryStatistic;
