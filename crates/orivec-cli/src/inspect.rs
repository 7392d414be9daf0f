//! `filter` and `stats` helpers.
use anyhow::{Context, Result};
use std::fmt;

use orivec::{ElementwiseCmp, Orientation, OrientedVec};

pub fn parse_values<O: Orientation>(text: &str) -> Result<OrientedVec<O, f64>> {
    text.parse::<OrientedVec<O, f64>>()
        .with_context(|| format!("Invalid vector: {:?}", text))
}

/// Open interval bounds; a missing side is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub greater_than: Option<f64>,
    pub less_than: Option<f64>,
}

pub fn filter_values<O: Orientation>(
    values: &OrientedVec<O, f64>,
    bounds: Bounds,
) -> OrientedVec<O, f64> {
    let mut mask = OrientedVec::<O, bool>::from_elem(values.len(), true);
    if let Some(low) = bounds.greater_than {
        mask = mask & values.greater(low);
    }
    if let Some(high) = bounds.less_than {
        mask = mask & values.less(high);
    }
    log::debug!(
        "[orivec::filter] keeping {} of {} values",
        mask.count_true(),
        values.len()
    );
    values.masked_select(&mask)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub len: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub sum: f64,
    pub mean: Option<f64>,
}

pub fn summarize<O: Orientation>(values: &OrientedVec<O, f64>) -> Summary {
    Summary {
        len: values.len(),
        min: values.try_min(),
        max: values.try_max(),
        sum: values.sum(),
        mean: values.mean(),
    }
}

fn or_na(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "length: {}", self.len)?;
        writeln!(f, "min: {}", or_na(self.min))?;
        writeln!(f, "max: {}", or_na(self.max))?;
        writeln!(f, "sum: {}", self.sum)?;
        write!(f, "mean: {}", or_na(self.mean))
    }
}
