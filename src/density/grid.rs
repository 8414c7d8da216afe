//----------------------------------------
// Evaluation grid
//----------------------------------------
pub const GRID_MIN: f64 = -5.0;
pub const GRID_MAX: f64 = 15.0;
pub const GRID_POINTS: usize = 500;

/// `n` evenly spaced points over `[start, stop]`, both endpoints included.
/// The last point is exactly `stop`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        stop
                    } else {
                        start + i as f64 * step
                    }
                })
                .collect()
        }
    }
}

/// The abscissae every curve is sampled on.
pub fn grid() -> Vec<f64> {
    linspace(GRID_MIN, GRID_MAX, GRID_POINTS)
}

pub fn grid_step() -> f64 {
    (GRID_MAX - GRID_MIN) / (GRID_POINTS - 1) as f64
}
