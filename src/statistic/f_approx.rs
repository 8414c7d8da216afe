use crate::params::DistributionParameters;
use crate::statistic::types::SummaryStatistic;

/// Approximate F value: `effect_size² * sample_size / spread²`.
///
/// Signal (squared mean separation) over noise (within-group variance),
/// scaled by the sample size. This is a teaching proxy for the F ratio and
/// carries no degrees-of-freedom correction; it is not meant to be compared
/// against an F distribution.
pub fn compute_summary_statistic(params: DistributionParameters) -> SummaryStatistic {
    let signal = params.effect_size * params.effect_size;
    let noise = params.spread * params.spread;
    SummaryStatistic {
        value: signal * params.sample_size as f64 / noise,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f_approx(effect_size: f64, sample_size: u32, spread: f64) -> f64 {
        compute_summary_statistic(
            DistributionParameters::new(effect_size, sample_size, spread).unwrap(),
        )
        .value
    }

    #[test]
    fn default_parameters() {
        assert!((f_approx(2.0, 50, 1.0) - 200.0).abs() < 1e-12);
    }

    #[test]
    fn no_separation_no_signal() {
        assert_eq!(f_approx(0.0, 50, 1.0), 0.0);
        assert_eq!(f_approx(0.0, 200, 0.5), 0.0);
    }

    #[test]
    fn narrow_spread_large_sample() {
        assert!((f_approx(2.0, 200, 0.5) - 3200.0).abs() < 1e-9);
    }

    #[test]
    fn formats_to_one_decimal() {
        let stat = compute_summary_statistic(DistributionParameters::default());
        assert_eq!(format!("{}", stat), "200.0");
        let stat = SummaryStatistic { value: 63.2653 };
        assert_eq!(stat.to_string(), "63.3");
    }
}
