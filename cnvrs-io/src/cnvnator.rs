use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use cnvrs_core::config::ReconcileConfig;
use cnvrs_core::consts::DEFAULT_SIGNIFICANCE;
use cnvrs_core::errors::{FormatError, Result};
use cnvrs_core::models::locus::{normalize_chromosome, parse_coordinate};
use cnvrs_core::models::{CallType, GenomicInterval, IntervalSet, Locus};
use cnvrs_core::utils::get_dynamic_reader_w_stdin;

use crate::parse_float;

/// Column arrangement of a CNV call record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordLayout {
    /// CNVnator output: `type, [label:]chrom:start-end, length, normRD, e1, e2, e3, e4, q0`.
    #[default]
    Locus,
    /// Separate columns: `chrom, start, end, type, normRD, e1`.
    Columns,
}

impl RecordLayout {
    pub fn field_count(&self) -> usize {
        match self {
            RecordLayout::Locus => 9,
            RecordLayout::Columns => 6,
        }
    }
}

impl FromStr for RecordLayout {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "locus" | "cnvnator" => Ok(RecordLayout::Locus),
            "columns" => Ok(RecordLayout::Columns),
            _ => Err(format!(
                "Invalid record layout: {}. Valid options are 'locus' or 'columns'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngestOptions {
    pub threshold: f64,
    pub layout: RecordLayout,
    pub strip_chr_prefix: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        IngestOptions {
            threshold: DEFAULT_SIGNIFICANCE,
            layout: RecordLayout::default(),
            strip_chr_prefix: true,
        }
    }
}

impl From<&ReconcileConfig> for IngestOptions {
    fn from(config: &ReconcileConfig) -> Self {
        IngestOptions {
            threshold: config.significance_threshold,
            layout: RecordLayout::default(),
            strip_chr_prefix: config.strip_chr_prefix,
        }
    }
}

/// A parsed record before the significance filter.
struct CallRecord {
    interval: GenomicInterval,
    eval1: f64,
}

fn parse_record(line: &str, line_no: usize, options: &IngestOptions) -> Result<CallRecord> {
    let fields: Vec<&str> = line.split('\t').collect();
    let expected = options.layout.field_count();
    if fields.len() != expected {
        return Err(FormatError::FieldCount {
            line: line_no,
            expected,
            found: fields.len(),
        }
        .into());
    }

    let (chr, start, end, kind, score_str, eval_str) = match options.layout {
        RecordLayout::Locus => {
            let locus = Locus::parse(fields[1], line_no)?;
            (locus.chr, locus.start, locus.end, fields[0], fields[3], fields[4])
        }
        RecordLayout::Columns => (
            fields[0].to_string(),
            parse_coordinate(fields[1], "start", line_no)?,
            parse_coordinate(fields[2], "end", line_no)?,
            fields[3],
            fields[4],
            fields[5],
        ),
    };

    if start > end {
        return Err(FormatError::InvertedInterval {
            line: line_no,
            start,
            end,
        }
        .into());
    }

    let score = parse_float(score_str, "normalized_rd", line_no)?;
    let eval1 = parse_float(eval_str, "eval1", line_no)?;

    let chr = match options.strip_chr_prefix {
        true => normalize_chromosome(&chr).to_string(),
        false => chr,
    };

    let call_type = CallType::from(kind);

    Ok(CallRecord {
        interval: GenomicInterval {
            chr,
            start,
            end,
            call_type,
            score,
        },
        eval1,
    })
}

///
/// Read CNV calls into an [IntervalSet], keeping only calls whose `eval1` is
/// strictly below `options.threshold`. Filtered calls are dropped without
/// any diagnostic; a malformed line aborts the whole read.
///
/// # Arguments
/// - reader: buffered source of tab-separated call records
/// - options: layout, threshold and chromosome naming
pub fn read_cnvnator<R: BufRead>(reader: R, options: &IngestOptions) -> Result<IntervalSet> {
    let mut set = IntervalSet::new();
    let mut dropped = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let record = parse_record(line, idx + 1, options)?;
        if record.eval1 < options.threshold {
            set.push(record.interval);
        } else {
            dropped += 1;
        }
    }

    let covered: u64 = set.iter().map(|call| u64::from(call.width())).sum();
    debug!(
        "Kept {} calls ({} bp) on {} chromosomes, dropped {} at eval1 >= {}",
        set.len(),
        covered,
        set.chromosomes().count(),
        dropped,
        options.threshold
    );

    Ok(set)
}

/// Read CNV calls from a file (plain or `.gz`), or stdin when `path` is `-`.
pub fn read_cnvnator_file<P: AsRef<Path>>(path: P, options: &IngestOptions) -> Result<IntervalSet> {
    let reader = get_dynamic_reader_w_stdin(path.as_ref())?;
    read_cnvnator(reader, options)
}
