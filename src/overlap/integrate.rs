use crate::density::grid::grid;
use crate::density::normal::normal_pdf;
use crate::density::Group;
use crate::error::AovErr;
use crate::overlap::error::OverlapErr;
use crate::params::DistributionParameters;
use itertools::Itertools;
use statrs::distribution::{ContinuousCDF, Normal};

/// Trapezoidal rule over paired abscissae and ordinates.
/// `x` and `y` must have the same length.
pub fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len(), "abscissae and ordinates differ in length");
    x.iter()
        .zip(y.iter())
        .tuple_windows()
        .map(|((x_0, y_0), (x_1, y_1))| (x_1 - x_0) * (y_0 + y_1) / 2.0)
        .sum()
}

/// Area under the pointwise minimum of two group densities, integrated over
/// the evaluation grid.
pub fn curve_overlap(params: DistributionParameters, a: Group, b: Group) -> f64 {
    let (mean_a, mean_b) = (a.mean(&params), b.mean(&params));
    let x = grid();
    let y: Vec<f64> = x
        .iter()
        .map(|&x| normal_pdf(x, mean_a, params.spread).min(normal_pdf(x, mean_b, params.spread)))
        .collect();
    trapezoid(&x, &y)
}

/// Closed-form overlapping coefficient of two normals sharing `spread`:
/// `2 Φ(-|μa - μb| / 2σ)`, taken over the whole real line.
pub fn analytic_overlap(
    params: DistributionParameters,
    a: Group,
    b: Group,
) -> Result<f64, AovErr> {
    let half_gap = (a.mean(&params) - b.mean(&params)).abs() / 2.0;
    let dist = Normal::new(0.0, params.spread).map_err(|e| OverlapErr::BadDistribution {
        sd: params.spread,
        reason: e.to_string(),
    })?;
    Ok(2.0 * dist.cdf(-half_gap))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::params::SPREAD;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn overlap_decreases_between_any_two_effect_sizes(
            a in 0.001f64..=4.0,
            b in 0.001f64..=4.0,
            spread in SPREAD.min..=SPREAD.max,
            n in 20u32..=200,
        ) {
            prop_assume!((a - b).abs() >= 0.01);
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            let overlap = |effect_size| {
                curve_overlap(
                    DistributionParameters { effect_size, sample_size: n, spread },
                    Group::Control,
                    Group::Treatment1,
                )
            };
            prop_assert!(overlap(hi) < overlap(lo));
        }
    }
}
