use anyhow::Result;
use std::fmt::Display;
use std::io::Write;

use orivec::{ColVec, RowVec};

use crate::config::DemoConfig;

pub fn render<V: Display>(value: &V, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, value),
        None => format!("{}", value),
    }
}

/// Runs the demo sequence and writes one rendered result per step.
///
/// Steps: `((s*r)/s+1)-1`, `n/r`, `r/s`, `c+c`, `r*c` (dot product) and the
/// masked selection `r[mask]`.
pub fn run_demo<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    config.validate()?;

    let r = RowVec::from_slice(&config.row);
    let c = ColVec::from_slice(&config.column);
    let mask = RowVec::from_slice(&config.mask);
    let s = config.scalar;
    let p = config.precision;

    log::debug!(
        "[orivec::demo] row length {}, {} masked entries",
        r.len(),
        mask.count_true()
    );

    let steps: Vec<(&str, String)> = vec![
        ("((s*r)/s+1)-1", render(&((((s * &r) / s) + 1.0) - 1.0), p)),
        ("n/r", render(&(config.numerator / &r), p)),
        ("r/s", render(&(&r / s), p)),
        ("c+c", render(&(&c + &c), p)),
        ("r*c", render(&(&r * &c), p)),
        ("r[mask]", render(&r.masked_select(&mask), p)),
    ];

    for (label, text) in steps {
        log::info!("[orivec::demo] {}", label);
        writeln!(out, "{}", text)?;
    }
    Ok(())
}
