mod cli;

use aovcompute::render::{render_json, render_summary, render_table, vega_lite_spec, Report};
use aovcompute::render::vega::DEFAULT_TITLE;
use anyhow::Result;
use clap::Parser;
use cli::{Args, OutputFormat};
use std::io::{self, Write};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::debug!("arguments: {:?}", args);
    let params = args.parameters()?;
    let report = Report::compute(params)?;
    log::info!(
        "F approx {} for {:?}, overlap {:.4}",
        report.statistic,
        params,
        report.overlap
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Summary => render_summary(&report, &mut out)?,
        OutputFormat::Table => render_table(&report.curves, &mut out)?,
        OutputFormat::Json => writeln!(out, "{}", render_json(&report)?)?,
        OutputFormat::Vega => {
            let title = args.title.as_deref().unwrap_or(DEFAULT_TITLE);
            let spec = vega_lite_spec(&report.curves, title);
            writeln!(out, "{}", serde_json::to_string_pretty(&spec)?)?
        }
    }
    out.flush()?;
    Ok(())
}
