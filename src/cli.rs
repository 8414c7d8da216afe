//----------------------------------------
// Command line arguments
//----------------------------------------
use aovcompute::error::AovErr;
use aovcompute::params::{DistributionParameters, EFFECT_SIZE, SAMPLE_SIZE, SPREAD};
use anyhow::Result;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Text card with the approximate F value
    #[default]
    Summary,
    /// Long-format x,density,group rows
    Table,
    /// Parameters, statistic, overlap and curves as JSON
    Json,
    /// Vega-Lite chart specification
    Vega,
}

/// Normal group curves and an approximate F value for one-way ANOVA
#[derive(Parser, Debug)]
#[command(name = "aovcompute")]
#[command(version)]
pub struct Args {
    /// Distance between group means, 0.0 to 4.0
    #[arg(short, long, default_value_t = EFFECT_SIZE.default, allow_negative_numbers = true)]
    pub effect_size: f64,

    /// Sample size per group, 20 to 200
    #[arg(short = 'n', long, default_value_t = SAMPLE_SIZE.default, allow_negative_numbers = true)]
    pub sample_size: f64,

    /// Within-group standard deviation, 0.5 to 2.0
    #[arg(short, long, default_value_t = SPREAD.default, allow_negative_numbers = true)]
    pub spread: f64,

    /// Clamp and snap out-of-range values like a slider instead of rejecting them
    #[arg(long)]
    pub clamp: bool,

    /// What to print
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Chart title for the vega format
    #[arg(long)]
    pub title: Option<String>,
}

impl Args {
    pub fn parameters(&self) -> Result<DistributionParameters> {
        if self.clamp {
            let params =
                DistributionParameters::clamped(self.effect_size, self.sample_size, self.spread);
            log::debug!("clamped input to {:?}", params);
            return Ok(params);
        }
        let sample_size = SAMPLE_SIZE
            .check_whole(self.sample_size)
            .map_err(AovErr::from)?;
        Ok(DistributionParameters::new(
            self.effect_size,
            sample_size as u32,
            self.spread,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["aovcompute"]);
        assert_eq!(args.format, OutputFormat::Summary);
        assert_eq!(args.parameters().unwrap(), DistributionParameters::default());
    }

    #[test]
    fn rejects_out_of_range_without_clamp() {
        let args = Args::parse_from(["aovcompute", "--spread", "3.0"]);
        assert!(args.parameters().is_err());
    }

    #[test]
    fn clamps_when_asked() {
        let args = Args::parse_from([
            "aovcompute",
            "--effect-size",
            "-1",
            "-n",
            "500",
            "--spread",
            "1.26",
            "--clamp",
        ]);
        let params = args.parameters().unwrap();
        assert_eq!(params.effect_size, 0.0);
        assert_eq!(params.sample_size, 200);
        assert_eq!(params.spread, 1.3);
    }

    #[test]
    fn clamps_negative_sample_size() {
        let args = Args::parse_from(["aovcompute", "-n", "-5", "--clamp"]);
        assert_eq!(args.parameters().unwrap().sample_size, 20);
    }

    #[test]
    fn clamps_fractional_sample_size() {
        let args = Args::parse_from(["aovcompute", "-n", "49.6", "--clamp"]);
        assert_eq!(args.parameters().unwrap().sample_size, 50);
    }

    #[test]
    fn rejects_fractional_sample_size_without_clamp() {
        let args = Args::parse_from(["aovcompute", "-n", "49.6"]);
        let err = args.parameters().unwrap_err();
        assert_eq!(
            err.to_string(),
            "while validating distribution parameters: \
            sample size should be a whole number; got 49.6"
        );
    }

    #[test]
    fn rejects_negative_sample_size_without_clamp() {
        let args = Args::parse_from(["aovcompute", "-n", "-5"]);
        assert!(args.parameters().is_err());
    }

    #[test]
    fn parses_format() {
        let args = Args::parse_from(["aovcompute", "-f", "vega"]);
        assert_eq!(args.format, OutputFormat::Vega);
    }
}
