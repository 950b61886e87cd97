use std::convert::Infallible;
use std::fmt::{self, Display};
use std::str::FromStr;

///
/// The kind of copy-number event a caller reported.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub enum CallType {
    Deletion,
    Duplication,
    Other(String),
}

impl From<&str> for CallType {
    fn from(s: &str) -> Self {
        match s {
            "deletion" => CallType::Deletion,
            "duplication" => CallType::Duplication,
            other => CallType::Other(other.to_string()),
        }
    }
}

impl FromStr for CallType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CallType::from(s))
    }
}

impl Display for CallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallType::Deletion => write!(f, "deletion"),
            CallType::Duplication => write!(f, "duplication"),
            CallType::Other(label) => write!(f, "{}", label),
        }
    }
}

///
/// One CNV call: a closed, 1-based coordinate range on a chromosome with the
/// caller's label and a score (normalized read depth or fold change).
///
#[derive(PartialEq, Debug, Clone)]
pub struct GenomicInterval {
    pub chr: String,
    pub start: u32,
    pub end: u32,
    pub call_type: CallType,
    pub score: f64,
}

impl GenomicInterval {
    /// Number of bases covered, both ends included.
    pub fn width(&self) -> u32 {
        self.end - self.start + 1
    }
}
