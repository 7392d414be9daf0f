//! Text rendering and parsing.
//!
//! Rows render as `[e0, e1, ...]`; columns render one `|e,|` cell per line
//! with no enclosing brackets. Formatter flags are forwarded to every
//! element, so `format!("{:.6}", v)` prints six decimals per entry.
use std::fmt;
use std::str::FromStr;

use crate::element::Element;
use crate::error::ParseVecError;
use crate::orientation::{Orientation, OrientationKind};
use crate::vector::OrientedVec;

impl<O: Orientation, T: Element> fmt::Display for OrientedVec<O, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match O::KIND {
            OrientationKind::Row => {
                f.write_str("[")?;
                for (idx, value) in self.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(value, f)?;
                }
                f.write_str("]")
            }
            OrientationKind::Column => {
                for (idx, value) in self.iter().enumerate() {
                    if idx > 0 {
                        f.write_str("\n")?;
                    }
                    f.write_str("|")?;
                    fmt::Display::fmt(value, f)?;
                    f.write_str(",|")?;
                }
                Ok(())
            }
        }
    }
}

/// Accepts either layout whatever the target orientation; the type decides
/// the orientation of the result. Column cells may end in `,` or `;`.
impl<O: Orientation, T: Element + FromStr> FromStr for OrientedVec<O, T> {
    type Err = ParseVecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let tokens: Vec<&str> = if let Some(inner) = text.strip_prefix('[') {
            let inner = inner.strip_suffix(']').ok_or(ParseVecError::UnknownLayout)?;
            if inner.trim().is_empty() {
                Vec::new()
            } else {
                inner.split(',').map(str::trim).collect()
            }
        } else if text.is_empty() || text.starts_with('|') {
            let mut cells = Vec::new();
            for (line, raw) in text.lines().map(str::trim).enumerate() {
                let cell = raw
                    .strip_prefix('|')
                    .and_then(|c| c.strip_suffix('|'))
                    .ok_or(ParseVecError::MalformedCell { line })?;
                let cell = cell.trim_end_matches(|c: char| c == ',' || c == ';');
                cells.push(cell.trim());
            }
            cells
        } else {
            return Err(ParseVecError::UnknownLayout);
        };

        tokens
            .into_iter()
            .enumerate()
            .map(|(index, token)| {
                token.parse::<T>().map_err(|_| {
                    log::trace!("rejecting vector element {} ({:?})", index, token);
                    ParseVecError::InvalidElement {
                        index,
                        token: token.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<T>, _>>()
            .map(OrientedVec::new)
    }
}
