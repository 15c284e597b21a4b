//! Reading whole files of formulas, one formula per line.
//!
//! Lines are never truncated. Blank lines (only whitespace) are skipped, every other line
//! must be a complete formula. Failures are reported per line, so the caller can decide
//! whether to skip a malformed line or reject the whole batch.

use crate::{BooleanExpression, ParseError};
use thiserror::Error;
use tracing::debug;

/// A formula that failed to parse, together with its (1-based) line number.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("line {line}: {source}")]
pub struct LineError {
    pub line: usize,
    #[source]
    pub source: ParseError,
}

/// Parse every non-blank line of `text` into an independent `BooleanExpression`.
///
/// Each entry carries the 1-based number of the line it comes from.
pub fn parse_lines(text: &str) -> Vec<(usize, Result<BooleanExpression, LineError>)> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let line_number = i + 1;
            let result = BooleanExpression::parse(line).map_err(|source| {
                debug!(line = line_number, error = %source, "cannot parse formula");
                LineError {
                    line: line_number,
                    source,
                }
            });
            (line_number, result)
        })
        .collect()
}

/// Parse a whole system of formulas, failing on the first malformed line.
pub fn parse_system(text: &str) -> Result<Vec<BooleanExpression>, LineError> {
    parse_lines(text)
        .into_iter()
        .map(|(_, result)| result)
        .collect()
}
