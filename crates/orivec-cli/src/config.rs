use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Inputs for the `demo` subcommand.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub row: Vec<f64>,
    pub column: Vec<f64>,
    pub mask: Vec<bool>,
    /// Factor used by the scale/unscale chain and the halving step.
    pub scalar: f64,
    /// Left operand of the scalar-over-vector division.
    pub numerator: f64,
    /// Fixed decimals per element; `None` prints the shortest form.
    pub precision: Option<usize>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            row: vec![0.0, 1.0, 2.0, 3.0, 4.0],
            column: vec![0.0, 1.0, 2.0, 3.0, 4.0],
            mask: vec![false, true, true, true, false],
            scalar: 2.0,
            numerator: 3.0,
            precision: Some(6),
        }
    }
}

impl DemoConfig {
    /// Checks the length relations the demo relies on, so a bad config is
    /// reported instead of tripping a vector precondition.
    pub fn validate(&self) -> Result<()> {
        if self.row.len() != self.column.len() {
            anyhow::bail!(
                "row ({}) and column ({}) must have the same length",
                self.row.len(),
                self.column.len()
            );
        }
        if self.mask.len() != self.row.len() {
            anyhow::bail!(
                "mask ({}) must have the same length as row ({})",
                self.mask.len(),
                self.row.len()
            );
        }
        if self.scalar == 0.0 {
            anyhow::bail!("scalar must be non-zero");
        }
        Ok(())
    }
}

pub fn load_demo_config<P: AsRef<Path>>(path: P) -> Result<DemoConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: DemoConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
