use crate::models::GenomicInterval;
use crate::models::ordered_map::OrderedMap;

///
/// IntervalSet struct, all calls read from one CNV file grouped by
/// chromosome. Chromosomes and the intervals within each chromosome keep the
/// order they were read in; nothing is sorted or deduplicated.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntervalSet {
    by_chr: OrderedMap<Vec<GenomicInterval>>,
}

impl IntervalSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, interval: GenomicInterval) {
        self.by_chr
            .entry_or_default(&interval.chr)
            .push(interval);
    }

    ///
    /// Intervals on `chr` in insertion order, `None` if the chromosome never
    /// appeared in the input.
    ///
    pub fn get(&self, chr: &str) -> Option<&[GenomicInterval]> {
        self.by_chr.get(chr).map(Vec::as_slice)
    }

    pub fn chromosomes(&self) -> impl Iterator<Item = &str> {
        self.by_chr.keys()
    }

    /// Iterate `(chromosome, intervals)` pairs in chromosome insertion order.
    pub fn iter_chromosomes(&self) -> impl Iterator<Item = (&str, &[GenomicInterval])> {
        self.by_chr.iter().map(|(chr, v)| (chr, v.as_slice()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &GenomicInterval> {
        self.by_chr.values().flatten()
    }

    /// Total number of intervals across chromosomes.
    pub fn len(&self) -> usize {
        self.by_chr.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_chr.is_empty()
    }
}

impl FromIterator<GenomicInterval> for IntervalSet {
    fn from_iter<T: IntoIterator<Item = GenomicInterval>>(iter: T) -> Self {
        let mut set = IntervalSet::new();
        for interval in iter {
            set.push(interval);
        }
        set
    }
}
