use std::io::{BufRead, Write};

use log::debug;

use cnvrs_core::errors::{FormatError, Result};

use crate::parse_float;

const COVERAGE_FIELDS: usize = 5;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CoverageFilterStats {
    pub kept: usize,
    pub dropped: usize,
}

///
/// Copy a five column coverage BED (`chrom start end feature coverage`,
/// whitespace separated) to `writer`, leaving out rows whose coverage is
/// zero. Kept rows are written unchanged.
///
pub fn filter_zero_coverage<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
) -> Result<CoverageFilterStats> {
    let mut stats = CoverageFilterStats::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != COVERAGE_FIELDS {
            return Err(FormatError::FieldCount {
                line: line_no,
                expected: COVERAGE_FIELDS,
                found: fields.len(),
            }
            .into());
        }

        let coverage = parse_float(fields[4], "coverage", line_no)?;
        if coverage == 0.0 {
            stats.dropped += 1;
            continue;
        }

        writeln!(writer, "{}", line)?;
        stats.kept += 1;
    }

    writer.flush()?;
    debug!(
        "Kept {} coverage rows, dropped {} with zero coverage",
        stats.kept, stats.dropped
    );

    Ok(stats)
}
