//! Options for the determinant engine.
//!
//! Every combination of options computes the same value; they only choose
//! how much work the expansion does. The defaults match the classic
//! behavior: closed forms where available, expansion along the first row
//! otherwise.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which determinant algorithm to run.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetMethod {
    /// Closed forms for sizes up to 3, Laplace expansion above.
    #[default]
    Auto,
    /// General cofactor expansion for every size.
    Laplace,
}

impl FromStr for DetMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(DetMethod::Auto),
            "laplace" => Ok(DetMethod::Laplace),
            _ => Err(format!(
                "Unknown determinant method: {}. Expected `auto` or `laplace`",
                s
            )),
        }
    }
}

/// How to pick the expansion row at each level of Laplace expansion.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotRule {
    /// Always expand along row 0.
    #[default]
    FirstRow,
    /// Expand along the row with the most zero entries, so more terms of
    /// the cofactor sum vanish.
    MostZeros,
}

impl FromStr for PivotRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first_row" => Ok(PivotRule::FirstRow),
            "most_zeros" => Ok(PivotRule::MostZeros),
            _ => Err(format!(
                "Unknown pivot rule: {}. Expected `first_row` or `most_zeros`",
                s
            )),
        }
    }
}

/// Combined determinant options.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetOptions {
    pub method: DetMethod,
    pub pivot: PivotRule,
}

impl DetOptions {
    pub fn new(method: DetMethod, pivot: PivotRule) -> Self {
        Self { method, pivot }
    }
}
