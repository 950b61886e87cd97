//! # Input/Output for cnvrs.
//!
//! Readers for the three inputs of the reconciliation commands (CNVnator
//! calls, concatenated merged calls and reference windows), the
//! zero-coverage filter for coverage BED files, and small helpers for
//! writing tab separated output to stdout or disk.
//!
//! Every reader accepts plain or gzip'd files, or `-` for stdin, and fails
//! on the first malformed line.
pub mod cnvnator;
pub mod coverage;
pub mod merged;
pub mod tsv;
pub mod windows;

// re-expose core functions
pub use cnvnator::*;
pub use coverage::*;
pub use merged::*;
pub use tsv::*;
pub use windows::*;

use cnvrs_core::errors::FormatError;

pub(crate) fn parse_float(value: &str, field: &'static str, line: usize) -> Result<f64, FormatError> {
    value.trim().parse::<f64>().map_err(|_| FormatError::NotNumeric {
        line,
        field,
        value: value.to_string(),
    })
}
