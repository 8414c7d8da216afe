//----------------------------------------
// statistic mod types
//----------------------------------------
use serde::Serialize;
use std::fmt;

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct SummaryStatistic {
    pub value: f64,
}

/// One decimal place, as shown on the card.
impl fmt::Display for SummaryStatistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.value)
    }
}
