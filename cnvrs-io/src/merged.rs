use std::io::BufRead;
use std::path::Path;

use log::debug;

use cnvrs_core::errors::{FormatError, Result};
use cnvrs_core::models::locus::parse_coordinate;
use cnvrs_core::models::{CallType, GenomicInterval, SampleCollection};
use cnvrs_core::utils::get_dynamic_reader_w_stdin;

use crate::parse_float;

const MERGED_FIELDS: usize = 6;

///
/// Read concatenated pairwise-merge outputs
/// (`sample, chrom, start, end, callType, score`) into a [SampleCollection].
///
/// No significance filter is applied here; the calls were filtered before
/// they were merged.
pub fn read_merged_calls<R: BufRead>(reader: R) -> Result<SampleCollection> {
    let mut collection = SampleCollection::new();
    let mut n_calls = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let line_no = idx + 1;

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != MERGED_FIELDS {
            return Err(FormatError::FieldCount {
                line: line_no,
                expected: MERGED_FIELDS,
                found: fields.len(),
            }
            .into());
        }

        let start = parse_coordinate(fields[2], "start", line_no)?;
        let end = parse_coordinate(fields[3], "end", line_no)?;
        if start > end {
            return Err(FormatError::InvertedInterval {
                line: line_no,
                start,
                end,
            }
            .into());
        }

        collection.push(
            fields[0],
            GenomicInterval {
                chr: fields[1].to_string(),
                start,
                end,
                call_type: CallType::from(fields[4]),
                score: parse_float(fields[5], "score", line_no)?,
            },
        );
        n_calls += 1;
    }

    debug!(
        "Read {} merged calls for {} samples",
        n_calls,
        collection.len()
    );

    Ok(collection)
}

pub fn read_merged_calls_file<P: AsRef<Path>>(path: P) -> Result<SampleCollection> {
    let reader = get_dynamic_reader_w_stdin(path.as_ref())?;
    read_merged_calls(reader)
}
