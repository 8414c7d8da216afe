use crate::render::types::Report;
use std::io::{self, Write};

/// Text card with the approximate F value and how far the curves overlap.
pub fn render_summary<W: Write>(report: &Report, w: &mut W) -> io::Result<()> {
    let params = &report.parameters;
    writeln!(w, "Live F value (approx.)")?;
    writeln!(w, "    {}", report.statistic)?;
    writeln!(w)?;
    writeln!(
        w,
        "effect size {:.1}, sample size {}, spread {:.1}",
        params.effect_size, params.sample_size, params.spread
    )?;
    writeln!(
        w,
        "control / treatment 1 overlap: {:.1}% (whole line: {:.1}%)",
        report.overlap * 100.0,
        report.analytic_overlap * 100.0
    )?;
    writeln!(w)?;
    writeln!(w, "The less the curves overlap, the larger F gets.")?;
    writeln!(w, "That is the signal winning over the noise.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::DistributionParameters;

    fn card(params: DistributionParameters) -> String {
        let report = Report::compute(params).unwrap();
        let mut buf = Vec::new();
        render_summary(&report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn default_card() {
        let text = card(DistributionParameters::default());
        assert!(text.starts_with("Live F value (approx.)\n    200.0\n"));
        assert!(text.contains("effect size 2.0, sample size 50, spread 1.0"));
        assert!(text.contains("(whole line: 31.7%)"));
    }

    #[test]
    fn large_statistic_card() {
        let text = card(DistributionParameters::new(2.0, 200, 0.5).unwrap());
        assert!(text.contains("    3200.0\n"));
    }
}
