use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::consts::STDIN_PATH;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> std::io::Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(e.kind(), format!("Failed to open file {:?}: {}", path, e))
    })?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - file_path: path to the file to read, or '-' for stdin
pub fn get_dynamic_reader_w_stdin(file_path: &Path) -> std::io::Result<BufReader<Box<dyn Read>>> {
    if file_path == Path::new(STDIN_PATH) {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        get_dynamic_reader(file_path)
    }
}

///
/// Render a score the way the pipeline always has: shortest representation
/// that parses back to the same value, with a decimal point even for whole
/// numbers (`2.0`, `0.4`, `3.0931949999999997`).
///
/// Magnitudes below `1e-4` or from `1e16` up switch to exponent notation with
/// a signed, two-digit exponent (`3.0000000000000004e-05`, `1e+16`).
///
pub fn format_score(value: f64) -> String {
    if !value.is_finite() {
        return match value {
            v if v.is_nan() => "nan".to_string(),
            v if v > 0.0 => "inf".to_string(),
            _ => "-inf".to_string(),
        };
    }

    let sci = format!("{:e}", value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if value != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let s = value.to_string();
    if s.contains('.') { s } else { format!("{}.0", s) }
}

/// Round to `digits` decimal places, correctly rounded on the exact binary
/// value (`1.0005` is stored just below the tie and rounds to `1.0`).
pub fn round_to(value: f64, digits: u32) -> f64 {
    format!("{:.*}", digits as usize, value)
        .parse::<f64>()
        .unwrap_or(value)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
