use cnvrs_core::models::{GenomicInterval, ReferenceWindow};

use crate::classify::{Relation, classify};

/// Anything with closed, 1-based `[start, end]` coordinates.
pub trait Span {
    fn start(&self) -> u32;
    fn end(&self) -> u32;

    /// Classify `self` (as A) against `other` (as B).
    fn relation_to<S: Span + ?Sized>(&self, other: &S) -> Relation<u32> {
        classify(self.start(), self.end(), other.start(), other.end())
    }

    /// True when `other` lies entirely inside `self`, both ends included.
    fn contains<S: Span + ?Sized>(&self, other: &S) -> bool {
        other.start() >= self.start() && other.end() <= self.end()
    }
}

impl Span for GenomicInterval {
    fn start(&self) -> u32 {
        self.start
    }

    fn end(&self) -> u32 {
        self.end
    }
}

impl Span for ReferenceWindow {
    fn start(&self) -> u32 {
        self.start
    }

    fn end(&self) -> u32 {
        self.end
    }
}
