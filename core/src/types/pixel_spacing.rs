use crate::error::{Result, SuvError};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// In-plane pixel spacing in millimeters (row, column)
///
/// `row` is the distance between adjacent rows (y), `col` the distance
/// between adjacent columns (x), in the order of PixelSpacing (0028,0030).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct PixelSpacing {
    pub row: f64,
    pub col: f64,
}

impl PixelSpacing {
    pub fn new(row: f64, col: f64) -> Self {
        Self { row, col }
    }

    /// Builds spacing from the decoded DS values of PixelSpacing
    pub fn from_values(values: &[f64]) -> Result<Self> {
        match values {
            [row, col, ..] => Ok(Self::new(*row, *col)),
            _ => Err(SuvError::InvalidValue(format!(
                "PixelSpacing needs two values, found {:?}",
                values
            ))),
        }
    }

    /// Parses pixel spacing from a loosely formatted string
    ///
    /// Accepts "2.0\\2.0", "2.0 2.0", "[2.0, 2.0]" and exponential notation.
    pub fn parse(s: &str) -> Result<Self> {
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| {
            Regex::new(r"[-+]?\d*\.?\d+(?:[eE][-+]?\d+)?").expect("Failed to compile regex")
        });

        let values = re
            .find_iter(s)
            .map(|m| m.as_str().parse::<f64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| {
                SuvError::InvalidValue(format!("Failed to parse PixelSpacing '{}': {}", s, e))
            })?;

        Self::from_values(&values)
    }
}

impl fmt::Display for PixelSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} mm", self.row, self.col)
    }
}
