use std::io::BufRead;
use std::path::Path;

use log::debug;

use cnvrs_core::errors::{FormatError, Result};
use cnvrs_core::models::locus::parse_coordinate;
use cnvrs_core::models::{ReferenceWindow, WindowSet};
use cnvrs_core::utils::get_dynamic_reader_w_stdin;

const WINDOW_FIELDS: usize = 3;

///
/// Read reference windows from a three column BED (`chrom, start, end`).
/// Windows are taken as given: they are expected to be sorted and
/// non-overlapping per chromosome already.
///
pub fn read_windows<R: BufRead>(reader: R) -> Result<WindowSet> {
    let mut windows = WindowSet::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let line_no = idx + 1;

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != WINDOW_FIELDS {
            return Err(FormatError::FieldCount {
                line: line_no,
                expected: WINDOW_FIELDS,
                found: fields.len(),
            }
            .into());
        }

        let start = parse_coordinate(fields[1], "start", line_no)?;
        let end = parse_coordinate(fields[2], "end", line_no)?;
        if start > end {
            return Err(FormatError::InvertedInterval {
                line: line_no,
                start,
                end,
            }
            .into());
        }

        windows.push(ReferenceWindow {
            chr: fields[0].to_string(),
            start,
            end,
        });
    }

    debug!(
        "Read {} windows on {} chromosomes",
        windows.len(),
        windows.chromosomes().count()
    );

    Ok(windows)
}

pub fn read_windows_file<P: AsRef<Path>>(path: P) -> Result<WindowSet> {
    let reader = get_dynamic_reader_w_stdin(path.as_ref())?;
    read_windows(reader)
}
