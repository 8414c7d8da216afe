use crate::density::CurveSample;
use std::io::{self, Write};

/// Long-format table, one row per sample.
pub fn render_table<W: Write>(curves: &[CurveSample], w: &mut W) -> io::Result<()> {
    writeln!(w, "x,density,group")?;
    for sample in curves {
        writeln!(w, "{},{},{}", sample.x, sample.density, sample.group)?;
    }
    Ok(())
}
