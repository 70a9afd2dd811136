//! Counting token positions.
//!
//! A token stream is a sequence of position increments plus one terminal
//! increment observed after the last token. [`count_positions`] reduces such a
//! stream to a single number according to a [`CountingMode`].
//!
//! ```text
//! increments:  [0, 2, 1]   final: 4
//!
//! WithIncrements     0 + 2 + 1 + 4 = 7
//! WithoutIncrements  |{2, 1}|       = 2
//! ```
//!
//! # Examples
//!
//! ```
//! use kazoe::analysis::analyzer::CannedAnalyzer;
//! use kazoe::analysis::position::{count_positions, CountingMode};
//!
//! let analyzer = CannedAnalyzer::from_increments([0, 2, 1]).with_final_position_increment(4);
//!
//! let with = count_positions(&analyzer, "body", "", CountingMode::WithIncrements).unwrap();
//! let without = count_positions(&analyzer, "body", "", CountingMode::WithoutIncrements).unwrap();
//! assert_eq!((with, without), (7, 2));
//! ```

use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;

/// How a token stream is reduced to a position count.
///
/// Serialized as the boolean `countPositionsWithIncrements` flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum CountingMode {
    /// Sum every position increment, then add the final increment.
    #[default]
    WithIncrements,
    /// Count the tokens that advance the position.
    WithoutIncrements,
}

impl CountingMode {
    /// Map the `countPositionsWithIncrements` flag to a mode.
    pub fn from_flag(count_positions_with_increments: bool) -> Self {
        if count_positions_with_increments {
            CountingMode::WithIncrements
        } else {
            CountingMode::WithoutIncrements
        }
    }

    /// Whether this mode sums position increments.
    pub fn counts_increments(self) -> bool {
        matches!(self, CountingMode::WithIncrements)
    }
}

impl From<bool> for CountingMode {
    fn from(flag: bool) -> Self {
        CountingMode::from_flag(flag)
    }
}

impl From<CountingMode> for bool {
    fn from(mode: CountingMode) -> Self {
        mode.counts_increments()
    }
}

impl fmt::Display for CountingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountingMode::WithIncrements => write!(f, "with_increments"),
            CountingMode::WithoutIncrements => write!(f, "without_increments"),
        }
    }
}

/// Count the token positions `analyzer` produces for `text` under `field_name`.
///
/// Tokens are consumed in stream order. A token with a zero increment adds
/// nothing in either mode. The terminal increment only contributes when
/// counting with increments. Sums saturate at `usize::MAX`.
///
/// Analyzer failures are returned unchanged.
pub fn count_positions(
    analyzer: &dyn Analyzer,
    field_name: &str,
    text: &str,
    mode: CountingMode,
) -> Result<usize> {
    let mut stream = analyzer.token_stream(field_name, text)?;

    let mut count = 0usize;
    match mode {
        CountingMode::WithIncrements => {
            for token in stream.by_ref() {
                count = count.saturating_add(token.position_increment);
            }
            count = count.saturating_add(stream.final_position_increment());
        }
        CountingMode::WithoutIncrements => {
            for token in stream.by_ref() {
                if token.position_increment > 0 {
                    count += 1;
                }
            }
        }
    }

    trace!(
        "Counted {} positions for field '{}' with analyzer '{}' ({})",
        count,
        field_name,
        analyzer.name(),
        mode
    );

    Ok(count)
}
