use crate::models::ordered_map::OrderedMap;
use crate::models::{GenomicInterval, IntervalSet};

///
/// Merged calls of many samples, keyed by sample name. Samples iterate in
/// the order they first appeared in the input.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleCollection {
    samples: OrderedMap<IntervalSet>,
}

impl SampleCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: &str, interval: GenomicInterval) {
        self.samples.entry_or_default(sample).push(interval);
    }

    pub fn get(&self, sample: &str) -> Option<&IntervalSet> {
        self.samples.get(sample)
    }

    /// Sample names in order of first appearance.
    pub fn sample_names(&self) -> Vec<String> {
        self.samples.keys().map(str::to_string).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IntervalSet)> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CallType;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_sample_order_is_first_appearance() {
        let mut collection = SampleCollection::new();
        for (sample, chr) in [("42R31", "I"), ("1A2", "I"), ("42R31", "XV")] {
            collection.push(
                sample,
                GenomicInterval {
                    chr: chr.to_string(),
                    start: 1,
                    end: 12000,
                    call_type: CallType::Deletion,
                    score: 0.06,
                },
            );
        }

        assert_eq!(collection.sample_names(), vec!["42R31", "1A2"]);
        assert_eq!(collection.get("42R31").unwrap().len(), 2);
        assert_eq!(collection.len(), 2);
    }
}
