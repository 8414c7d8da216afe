use std::f64::consts::PI;

/// Density of N(mean, sd²) at `x`. `sd` must be positive.
pub fn normal_pdf(x: f64, mean: f64, sd: f64) -> f64 {
    let z = (x - mean) / sd;
    (-0.5 * z * z).exp() / (sd * (2.0 * PI).sqrt())
}
