//! Interval overlap reconciliation for CNV call sets.
//!
//! Two drivers share one primitive, [`classify`], which decides how two
//! closed intervals on the same chromosome relate and where they overlap:
//!
//! - [`pairwise_merge`]: reconcile two call sets of one sample (typically
//!   CNVnator runs at two bin sizes) into their overlapping sub-intervals,
//!   averaging the two scores.
//! - [`aggregate_windows`]: bucket the merged calls of many samples into
//!   fixed reference windows, one column per sample.
//!
//! ## Quick Start
//!
//! ```rust
//! use cnvrs_overlaprs::{Relation, classify};
//!
//! // closed intervals: touching at 20 is an overlap of one base
//! assert_eq!(classify(10u32, 20, 20, 30), Relation::Overlap { start: 20, end: 20 });
//! assert_eq!(classify(10u32, 20, 21, 30), Relation::Before);
//! ```

/// Interval pair classification.
pub mod classify;

/// Pairwise merge of two call sets.
pub mod merge;

/// Coordinate access shared by calls and windows.
pub mod traits;

/// Windowed aggregation across samples.
pub mod windows;

// re-exports
pub use self::classify::{Relation, classify};
pub use self::merge::{OverlapRecord, collect_pairwise_merge, pairwise_merge};
pub use self::traits::Span;
pub use self::windows::{
    WindowAssignment, WindowAssignmentBuilder, WindowTable, WindowValue, aggregate_windows,
};
