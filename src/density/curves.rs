use crate::density::grid::{grid, GRID_POINTS};
use crate::density::normal::normal_pdf;
use crate::density::types::{CurveSample, Group};
use crate::params::DistributionParameters;

/// Samples one group's density over the grid.
pub fn group_curve(params: &DistributionParameters, group: Group) -> Vec<CurveSample> {
    let mean = group.mean(params);
    grid()
        .into_iter()
        .map(|x| CurveSample {
            x,
            density: normal_pdf(x, mean, params.spread),
            group,
        })
        .collect()
}

/// Samples all three group densities over the grid.
///
/// Returns `3 * GRID_POINTS` samples: every control sample, then treatment 1,
/// then treatment 2, each in increasing `x`. Parameters are assumed to be in
/// range; `spread` in particular must be positive.
pub fn compute_curves(params: DistributionParameters) -> Vec<CurveSample> {
    log::trace!("computing curves for {:?}", params);
    let mut samples = Vec::with_capacity(Group::ALL.len() * GRID_POINTS);
    for group in Group::ALL {
        samples.extend(group_curve(&params, group));
    }
    samples
}
