/// Calls with `eval1` at or above this value are dropped on ingestion.
pub const DEFAULT_SIGNIFICANCE: f64 = 0.05;

pub const DEFAULT_DIGITS: u32 = 3;

/// S. cerevisiae nuclear chromosomes followed by the mitochondrial contig.
pub const YEAST_CHROMOSOMES: [&str; 17] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV",
    "XV", "XVI", "Mito",
];

pub const STDIN_PATH: &str = "-";
