use std::fmt::{self, Display};

use log::debug;

use cnvrs_core::errors::{CnvError, Result};
use cnvrs_core::models::{GenomicInterval, IntervalSet, ReferenceWindow, SampleCollection, WindowSet};
use cnvrs_core::utils::{format_score, mean, round_to};

use crate::traits::Span;

///
/// What one sample contributes to one window.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowValue {
    /// No call of the sample lies inside the window.
    Empty,
    /// Exactly one call; its score as read.
    Single(f64),
    /// Several calls; their mean, already rounded.
    Mean(f64),
}

impl WindowValue {
    ///
    /// Collapse the scores of the calls found in a window.
    ///
    /// # Arguments
    /// - scores: scores of the contained calls
    /// - digits: decimal places kept for a mean of several scores
    pub fn from_scores(scores: &[f64], digits: u32) -> Self {
        match scores {
            [] => WindowValue::Empty,
            [single] => WindowValue::Single(*single),
            many => match mean(many) {
                Some(m) => WindowValue::Mean(round_to(m, digits)),
                None => WindowValue::Empty,
            },
        }
    }

    pub fn value(&self) -> Option<f64> {
        match *self {
            WindowValue::Empty => None,
            WindowValue::Single(v) | WindowValue::Mean(v) => Some(v),
        }
    }
}

impl Display for WindowValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(v) => write!(f, "{}", format_score(v)),
            None => Ok(()),
        }
    }
}

///
/// One output row: a reference window and one value per sample.
///
#[derive(Debug, Clone, PartialEq)]
pub struct WindowAssignment {
    pub chr: String,
    pub start: u32,
    pub end: u32,
    pub values: Vec<WindowValue>,
}

impl Display for WindowAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.chr, self.start, self.end)?;
        for value in &self.values {
            write!(f, "\t{}", value)?;
        }
        Ok(())
    }
}

///
/// Builds a [WindowAssignment] one sample column at a time.
///
pub struct WindowAssignmentBuilder<'w> {
    window: &'w ReferenceWindow,
    digits: u32,
    values: Vec<WindowValue>,
}

impl<'w> WindowAssignmentBuilder<'w> {
    pub fn new(window: &'w ReferenceWindow, digits: u32) -> Self {
        WindowAssignmentBuilder {
            window,
            digits,
            values: Vec::new(),
        }
    }

    ///
    /// Add the next sample column from that sample's calls on the window's
    /// chromosome. Only calls lying entirely inside the window count.
    ///
    pub fn sample<'c, I>(mut self, calls: I) -> Self
    where
        I: IntoIterator<Item = &'c GenomicInterval>,
    {
        let scores: Vec<f64> = calls
            .into_iter()
            .filter(|call| self.window.contains(*call))
            .map(|call| call.score)
            .collect();
        self.values
            .push(WindowValue::from_scores(&scores, self.digits));
        self
    }

    pub fn build(self) -> WindowAssignment {
        WindowAssignment {
            chr: self.window.chr.clone(),
            start: self.window.start,
            end: self.window.end,
            values: self.values,
        }
    }
}

///
/// The full result of a windowed aggregation: sample names for the header
/// and one row per window.
///
#[derive(Debug, Clone, PartialEq)]
pub struct WindowTable {
    pub samples: Vec<String>,
    pub rows: Vec<WindowAssignment>,
}

impl WindowTable {
    /// Header line: three empty columns, then the sample names.
    pub fn header(&self) -> String {
        format!("\t\t\t{}", self.samples.join("\t"))
    }
}

impl Display for WindowTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

///
/// Assign every sample's merged calls to fixed reference windows.
///
/// For each chromosome of `chromosomes`, each window of that chromosome and
/// each sample of `sample_order`, the scores of the sample's calls fully
/// contained in the window are collapsed into a [WindowValue].
///
/// # Arguments
/// - chromosomes: chromosomes to report, in output order
/// - windows: reference windows, already sorted per chromosome
/// - samples: merged calls per sample
/// - sample_order: column order of the samples
/// - digits: rounding of means over several calls
///
/// # Errors
/// [CnvError::KeyNotFound] when a chromosome of `chromosomes` has no windows
/// or a name of `sample_order` is not in `samples`.
pub fn aggregate_windows(
    chromosomes: &[String],
    windows: &WindowSet,
    samples: &SampleCollection,
    sample_order: &[String],
    digits: u32,
) -> Result<WindowTable> {
    let sample_sets: Vec<&IntervalSet> = sample_order
        .iter()
        .map(|name| {
            samples.get(name).ok_or_else(|| CnvError::KeyNotFound {
                key: name.clone(),
                collection: "merged calls",
            })
        })
        .collect::<Result<_>>()?;

    let mut rows: Vec<WindowAssignment> = Vec::new();

    for chr in chromosomes {
        let chr_windows = windows.get(chr).ok_or_else(|| CnvError::KeyNotFound {
            key: chr.clone(),
            collection: "reference windows",
        })?;

        for window in chr_windows {
            let row = sample_sets
                .iter()
                .fold(WindowAssignmentBuilder::new(window, digits), |builder, set| {
                    builder.sample(set.get(chr).unwrap_or_default())
                })
                .build();
            rows.push(row);
        }
    }

    debug!(
        "Aggregated {} samples into {} windows over {} chromosomes",
        sample_order.len(),
        rows.len(),
        chromosomes.len()
    );

    Ok(WindowTable {
        samples: sample_order.to_vec(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use cnvrs_core::models::CallType;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn make_window(chr: &str, start: u32, end: u32) -> ReferenceWindow {
        ReferenceWindow {
            chr: chr.to_string(),
            start,
            end,
        }
    }

    fn make_call(chr: &str, start: u32, end: u32, score: f64) -> GenomicInterval {
        GenomicInterval {
            chr: chr.to_string(),
            start,
            end,
            call_type: CallType::Duplication,
            score,
        }
    }

    fn to_strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[fixture]
    fn samples() -> SampleCollection {
        let mut samples = SampleCollection::new();
        samples.push("A", make_call("I", 1001, 12000, 3.0931949999999997));
        samples.push("B", make_call("I", 1001, 2000, 1.0));
        samples.push("B", make_call("I", 3001, 4000, 2.0));
        samples.push("B", make_call("I", 5001, 6000, 3.0));
        samples.push("A", make_call("XV", 1, 12000, 0.0649642));
        samples
    }

    #[fixture]
    fn windows() -> WindowSet {
        vec![
            make_window("I", 1, 12000),
            make_window("I", 12001, 30000),
            make_window("XV", 1, 15000),
        ]
        .into_iter()
        .collect()
    }

    #[rstest]
    #[case(&[], WindowValue::Empty)]
    #[case(&[0.0649642], WindowValue::Single(0.0649642))]
    #[case(&[1.0, 2.0, 3.0], WindowValue::Mean(2.0))]
    #[case(&[1.0, 1.0, 2.0], WindowValue::Mean(1.333))]
    #[case(&[1.0, 1.001], WindowValue::Mean(1.0))]
    fn test_from_scores(#[case] scores: &[f64], #[case] expected: WindowValue) {
        assert_eq!(WindowValue::from_scores(scores, 3), expected);
    }

    #[rstest]
    fn test_value_rendering() {
        assert_eq!(WindowValue::Empty.to_string(), "");
        assert_eq!(WindowValue::Mean(2.0).to_string(), "2.0");
        assert_eq!(WindowValue::Single(0.0649642).to_string(), "0.0649642");
        assert_eq!(WindowValue::from_scores(&[1.0, 1.001], 3).to_string(), "1.0");
        assert_eq!(WindowValue::Single(0.00002).to_string(), "2e-05");
    }

    #[rstest]
    fn test_containment_is_full() {
        let call = make_call("I", 100, 150, 1.0);
        let wide = make_window("I", 90, 160);
        let narrow = make_window("I", 100, 140);

        let row = WindowAssignmentBuilder::new(&wide, 3)
            .sample([&call])
            .build();
        assert_eq!(row.values, vec![WindowValue::Single(1.0)]);

        let row = WindowAssignmentBuilder::new(&narrow, 3)
            .sample([&call])
            .build();
        assert_eq!(row.values, vec![WindowValue::Empty]);
    }

    #[rstest]
    fn test_aggregate_windows(samples: SampleCollection, windows: WindowSet) {
        let table = aggregate_windows(
            &to_strings(&["I", "XV"]),
            &windows,
            &samples,
            &samples.sample_names(),
            3,
        )
        .unwrap();

        assert_eq!(table.header(), "\t\t\tA\tB");
        let lines: Vec<String> = table.rows.iter().map(|r| r.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "I\t1\t12000\t3.0931949999999997\t2.0",
                "I\t12001\t30000\t\t",
                "XV\t1\t15000\t0.0649642\t",
            ]
        );
    }

    #[rstest]
    fn test_caller_sample_order(samples: SampleCollection, windows: WindowSet) {
        let table =
            aggregate_windows(&to_strings(&["I"]), &windows, &samples, &to_strings(&["B", "A"]), 3)
                .unwrap();

        assert_eq!(table.header(), "\t\t\tB\tA");
        assert_eq!(
            table.rows[0].values,
            vec![
                WindowValue::Mean(2.0),
                WindowValue::Single(3.0931949999999997)
            ]
        );
    }

    #[rstest]
    fn test_missing_chromosome_fails(samples: SampleCollection, windows: WindowSet) {
        let result = aggregate_windows(
            &to_strings(&["I", "Mito"]),
            &windows,
            &samples,
            &samples.sample_names(),
            3,
        );
        match result {
            Err(CnvError::KeyNotFound { key, .. }) => assert_eq!(key, "Mito"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[rstest]
    fn test_unknown_sample_fails(samples: SampleCollection, windows: WindowSet) {
        let result = aggregate_windows(
            &to_strings(&["I"]),
            &windows,
            &samples,
            &to_strings(&["A", "C"]),
            3,
        );
        assert!(matches!(result, Err(CnvError::KeyNotFound { .. })));
    }

    #[rstest]
    fn test_table_display(samples: SampleCollection, windows: WindowSet) {
        let table = aggregate_windows(
            &to_strings(&["XV"]),
            &windows,
            &samples,
            &samples.sample_names(),
            3,
        )
        .unwrap();
        assert_eq!(table.to_string(), "\t\t\tA\tB\nXV\t1\t15000\t0.0649642\t\n");
    }
}
