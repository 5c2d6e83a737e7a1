//! Kit error types
//!
//! Style resolution itself cannot fail; errors only arise when reading
//! component settings from text.

use thiserror::Error;

/// Failure to parse a variant, size or state name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown {kind} `{value}` (expected one of: {expected})")]
    Unknown {
        kind: &'static str,
        value: String,
        expected: String,
    },
}
