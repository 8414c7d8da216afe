//----------------------------------------
// params mod types
//----------------------------------------
use crate::error::AovErr;
use crate::params::error::ParamsErr;
use serde::Serialize;

/// Range, step and default of a single input control.
///
/// Mirrors a slider widget: values are clamped into `[min, max]` and snapped
/// to the nearest step counted from `min`. Every `min` is a whole number of
/// steps, so rounding to a multiple of `1 / steps_per_unit` lands on the same
/// positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub steps_per_unit: f64,
    pub default: f64,
}

pub const EFFECT_SIZE: SliderRange = SliderRange {
    name: "effect size",
    min: 0.0,
    max: 4.0,
    steps_per_unit: 10.0,
    default: 2.0,
};

pub const SAMPLE_SIZE: SliderRange = SliderRange {
    name: "sample size",
    min: 20.0,
    max: 200.0,
    steps_per_unit: 1.0,
    default: 50.0,
};

pub const SPREAD: SliderRange = SliderRange {
    name: "spread",
    min: 0.5,
    max: 2.0,
    steps_per_unit: 10.0,
    default: 1.0,
};

impl SliderRange {
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    /// Clamps `value` into range and snaps it to the slider step.
    /// Non-finite input falls back to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.default;
        }
        let clamped = value.clamp(self.min, self.max);
        let snapped = (clamped * self.steps_per_unit).round() / self.steps_per_unit;
        snapped.clamp(self.min, self.max)
    }

    pub fn check(&self, value: f64) -> Result<f64, ParamsErr> {
        if !value.is_finite() {
            return Err(ParamsErr::NotFinite {
                name: self.name,
                value,
            });
        }
        if !self.contains(value) {
            return Err(ParamsErr::OutOfRange {
                name: self.name,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }

    /// Like [`Self::check`], but also rejects values with a fractional part.
    pub fn check_whole(&self, value: f64) -> Result<f64, ParamsErr> {
        let value = self.check(value)?;
        if value.fract() != 0.0 {
            return Err(ParamsErr::NotWhole {
                name: self.name,
                value,
            });
        }
        Ok(value)
    }
}

/// The three inputs of the model.
///
/// Every field is expected to lie inside its [`SliderRange`]. The compute
/// functions do not re-check this; build values through [`Self::new`] or
/// [`Self::clamped`] at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionParameters {
    pub effect_size: f64,
    pub sample_size: u32,
    pub spread: f64,
}

impl Default for DistributionParameters {
    fn default() -> Self {
        DistributionParameters {
            effect_size: EFFECT_SIZE.default,
            sample_size: SAMPLE_SIZE.default as u32,
            spread: SPREAD.default,
        }
    }
}

impl DistributionParameters {
    /// Builds parameters, rejecting any field outside its range.
    pub fn new(effect_size: f64, sample_size: u32, spread: f64) -> Result<Self, AovErr> {
        Ok(DistributionParameters {
            effect_size: EFFECT_SIZE.check(effect_size)?,
            sample_size: SAMPLE_SIZE.check(sample_size as f64)? as u32,
            spread: SPREAD.check(spread)?,
        })
    }

    /// Builds parameters the way the sliders would: clamped and snapped.
    pub fn clamped(effect_size: f64, sample_size: f64, spread: f64) -> Self {
        DistributionParameters {
            effect_size: EFFECT_SIZE.clamp(effect_size),
            sample_size: SAMPLE_SIZE.clamp(sample_size) as u32,
            spread: SPREAD.clamp(spread),
        }
    }
}
