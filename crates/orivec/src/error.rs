use std::error::Error;
use std::fmt;

/// Failure to read a vector back from its textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseVecError {
    /// Neither `[..]` row syntax nor `|..|` column cells.
    UnknownLayout,
    /// Column line that is not wrapped in `|` delimiters.
    MalformedCell { line: usize },
    InvalidElement { index: usize, token: String },
}

impl fmt::Display for ParseVecError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseVecError::UnknownLayout => {
                write!(f, "expected `[a, b, ...]` or `|a,|` lines")
            }
            ParseVecError::MalformedCell { line } => {
                write!(f, "column cell on line {} is not enclosed in `|`", line + 1)
            }
            ParseVecError::InvalidElement { index, token } => {
                write!(f, "cannot parse element {} from {:?}", index, token)
            }
        }
    }
}

impl Error for ParseVecError {}
