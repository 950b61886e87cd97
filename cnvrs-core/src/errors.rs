use thiserror::Error;

/// A record that could not be turned into an interval. Every variant carries
/// the 1-based line number of the offending record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: malformed locus `{token}`, expected `[label:]chrom:start-end`")]
    Locus { line: usize, token: String },

    #[error("line {line}: field `{field}` is not numeric: `{value}`")]
    NotNumeric {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: start {start} is greater than end {end}")]
    InvertedInterval { line: usize, start: u32, end: u32 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Significance threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("Chromosome ordering is empty")]
    EmptyChromosomeOrder,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum CnvError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Chromosome or sample `{key}` not found in {collection}")]
    KeyNotFound {
        key: String,
        collection: &'static str,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CnvError>;
