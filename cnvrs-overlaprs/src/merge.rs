use std::fmt::{self, Display};

use cnvrs_core::models::{CallType, GenomicInterval, IntervalSet};
use cnvrs_core::utils::format_score;

use crate::classify::Relation;
use crate::traits::Span;

///
/// The shared part of two calls for the same sample, one from each bin size.
///
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapRecord {
    pub sample: String,
    pub chr: String,
    pub start: u32,
    pub end: u32,
    /// Taken from the call of the first set.
    pub call_type: CallType,
    pub mean_score: f64,
}

impl OverlapRecord {
    fn from_pair(sample: &str, a: &GenomicInterval, b: &GenomicInterval) -> Option<Self> {
        match a.relation_to(b) {
            Relation::Overlap { start, end } => Some(OverlapRecord {
                sample: sample.to_string(),
                chr: a.chr.clone(),
                start,
                end,
                call_type: a.call_type.clone(),
                mean_score: (a.score + b.score) / 2.0,
            }),
            Relation::Before | Relation::After => None,
        }
    }
}

impl Display for OverlapRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.sample,
            self.chr,
            self.start,
            self.end,
            self.call_type,
            format_score(self.mean_score)
        )
    }
}

///
/// Merge two call sets of one sample into their overlapping sub-intervals.
///
/// Chromosomes are visited in `first`'s order and skipped unless `second`
/// has them too. Within a chromosome every call of `first` is compared
/// against every call of `second` (outer loop over `first`, inner over
/// `second`, both in read order), and each overlapping pair yields one
/// record carrying the mean of the two scores.
///
/// Records are produced lazily so they can be written as they come.
///
/// # Example
/// ```
/// use cnvrs_core::models::{CallType, GenomicInterval, IntervalSet};
/// use cnvrs_overlaprs::pairwise_merge;
///
/// let call = |start, end, score| GenomicInterval {
///     chr: "IV".to_string(),
///     start,
///     end,
///     call_type: CallType::Deletion,
///     score,
/// };
/// let first: IntervalSet = vec![call(2001, 17000, 0.5)].into_iter().collect();
/// let second: IntervalSet = vec![call(10000, 20000, 0.3)].into_iter().collect();
///
/// let merged: Vec<String> = pairwise_merge("x1156", &first, &second)
///     .map(|r| r.to_string())
///     .collect();
/// assert_eq!(merged, vec!["x1156\tIV\t10000\t17000\tdeletion\t0.4"]);
/// ```
pub fn pairwise_merge<'a>(
    sample: &'a str,
    first: &'a IntervalSet,
    second: &'a IntervalSet,
) -> impl Iterator<Item = OverlapRecord> + 'a {
    first
        .iter_chromosomes()
        .filter_map(move |(chr, calls_a)| second.get(chr).map(|calls_b| (calls_a, calls_b)))
        .flat_map(move |(calls_a, calls_b)| {
            calls_a.iter().flat_map(move |a| {
                calls_b
                    .iter()
                    .filter_map(move |b| OverlapRecord::from_pair(sample, a, b))
            })
        })
}

/// Eager form of [pairwise_merge].
pub fn collect_pairwise_merge(
    sample: &str,
    first: &IntervalSet,
    second: &IntervalSet,
) -> Vec<OverlapRecord> {
    pairwise_merge(sample, first, second).collect()
}
