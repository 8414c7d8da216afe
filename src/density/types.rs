//----------------------------------------
// density mod types
//----------------------------------------
use crate::params::DistributionParameters;
use serde::Serialize;
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum Group {
    #[serde(rename = "Control (A)")]
    Control,
    #[serde(rename = "Treatment 1 (B)")]
    Treatment1,
    #[serde(rename = "Treatment 2 (C)")]
    Treatment2,
}

impl Group {
    /// Output order of the curves.
    pub const ALL: [Group; 3] = [Group::Control, Group::Treatment1, Group::Treatment2];

    pub fn label(&self) -> &'static str {
        match self {
            Group::Control => "Control (A)",
            Group::Treatment1 => "Treatment 1 (B)",
            Group::Treatment2 => "Treatment 2 (C)",
        }
    }

    /// Control sits at zero, treatment 1 shifts right by the effect size and
    /// treatment 2 shifts left by half of it.
    pub fn mean(&self, params: &DistributionParameters) -> f64 {
        match self {
            Group::Control => 0.0,
            Group::Treatment1 => params.effect_size,
            Group::Treatment2 => -params.effect_size / 2.0,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct CurveSample {
    pub x: f64,
    pub density: f64,
    pub group: Group,
}
