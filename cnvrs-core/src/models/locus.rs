use std::fmt::{self, Display};

use crate::errors::FormatError;

///
/// A `[label:]chrom:start-end` token as written by CNVnator, e.g.
/// `x1156_PM_chrIV:2001-17000` or `42R31:chrIV:2001-17000`.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Locus {
    pub label: Option<String>,
    pub chr: String,
    pub start: u32,
    pub end: u32,
}

impl Locus {
    ///
    /// Parse a locus token. `line` is only used to annotate errors.
    ///
    /// Coordinates are split off at the last `:`; whatever precedes the
    /// previous `:` (if any) is the label.
    ///
    pub fn parse(token: &str, line: usize) -> Result<Self, FormatError> {
        let malformed = || FormatError::Locus {
            line,
            token: token.to_string(),
        };

        let (name, coords) = token.rsplit_once(':').ok_or_else(malformed)?;
        let (start_str, end_str) = coords.split_once('-').ok_or_else(malformed)?;

        let (label, chr) = match name.rsplit_once(':') {
            Some((label, chr)) => (Some(label.to_string()), chr),
            None => (None, name),
        };
        if chr.is_empty() {
            return Err(malformed());
        }

        let start = parse_coordinate(start_str, "start", line)?;
        let end = parse_coordinate(end_str, "end", line)?;

        Ok(Locus {
            label,
            chr: chr.to_string(),
            start,
            end,
        })
    }
}

impl Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            write!(f, "{}:", label)?;
        }
        write!(f, "{}:{}-{}", self.chr, self.start, self.end)
    }
}

pub fn parse_coordinate(value: &str, field: &'static str, line: usize) -> Result<u32, FormatError> {
    value.trim().parse::<u32>().map_err(|_| FormatError::NotNumeric {
        line,
        field,
        value: value.to_string(),
    })
}

///
/// Reduce a contig name to the part after its last `chr`, so that
/// `x1156_PM_chrIV`, `chrIV` and `IV` all name the same chromosome.
/// Names without `chr` (`Mito`, `XV`) are returned unchanged.
///
pub fn normalize_chromosome(name: &str) -> &str {
    match name.rfind("chr") {
        Some(idx) if idx + 3 < name.len() => &name[idx + 3..],
        _ => name,
    }
}
