use num_traits::PrimInt;

/// How interval A lies relative to interval B on the same chromosome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation<I> {
    /// A ends before B starts.
    Before,
    /// A starts after B ends.
    After,
    /// A and B share the closed range `[start, end]`.
    Overlap { start: I, end: I },
}

impl<I: Copy> Relation<I> {
    pub fn is_overlap(&self) -> bool {
        matches!(self, Relation::Overlap { .. })
    }

    /// The shared range, if any.
    pub fn region(&self) -> Option<(I, I)> {
        match *self {
            Relation::Overlap { start, end } => Some((start, end)),
            _ => None,
        }
    }
}

///
/// Classify closed interval A = `[a_start, a_end]` against B =
/// `[b_start, b_end]` and compute the overlap region branch by branch.
///
/// Both ends are inclusive, so intervals touching at one coordinate
/// (`a_end == b_start`) overlap on that single coordinate.
///
/// # Example
/// ```text
/// A: 2001-17000
/// B: 10000-20000
/// classify(A, B): Overlap 10000-17000
/// ```
#[inline]
pub fn classify<I: PrimInt>(a_start: I, a_end: I, b_start: I, b_end: I) -> Relation<I> {
    if a_end < b_start {
        return Relation::Before;
    }
    if a_start > b_end {
        return Relation::After;
    }

    let (start, end) = if a_start <= b_start {
        if a_end <= b_end {
            (b_start, a_end)
        } else {
            (b_start, b_end)
        }
    } else if a_end <= b_end {
        (a_start, a_end)
    } else {
        (a_start, b_end)
    };

    Relation::Overlap { start, end }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    #[rstest]
    #[case((10, 20), (20, 30), Relation::Overlap { start: 20, end: 20 })]
    #[case((10, 20), (21, 30), Relation::Before)]
    #[case((21, 30), (10, 20), Relation::After)]
    #[case((2001, 17000), (10000, 20000), Relation::Overlap { start: 10000, end: 17000 })]
    #[case((10000, 20000), (2001, 17000), Relation::Overlap { start: 10000, end: 17000 })]
    // nested both ways
    #[case((100, 500), (200, 300), Relation::Overlap { start: 200, end: 300 })]
    #[case((200, 300), (100, 500), Relation::Overlap { start: 200, end: 300 })]
    #[case((100, 200), (100, 200), Relation::Overlap { start: 100, end: 200 })]
    #[case((5, 5), (5, 5), Relation::Overlap { start: 5, end: 5 })]
    fn test_classify(
        #[case] a: (u32, u32),
        #[case] b: (u32, u32),
        #[case] expected: Relation<u32>,
    ) {
        assert_eq!(classify(a.0, a.1, b.0, b.1), expected);
    }

    #[rstest]
    fn test_region() {
        assert_eq!(classify(1u32, 10, 5, 15).region(), Some((5, 10)));
        assert_eq!(classify(1u32, 4, 5, 15).region(), None);
        assert!(!classify(16u32, 20, 5, 15).is_overlap());
    }

    #[rstest]
    fn test_signed_coordinates() {
        assert_eq!(
            classify(-10i64, 0, -5, 5),
            Relation::Overlap { start: -5, end: 0 }
        );
    }

    #[rstest]
    fn test_branches_agree_with_min_max() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10_000 {
            let a_start: u32 = rng.gen_range(0..200);
            let a_end = a_start + rng.gen_range(0..100);
            let b_start: u32 = rng.gen_range(0..200);
            let b_end = b_start + rng.gen_range(0..100);

            let ab = classify(a_start, a_end, b_start, b_end);
            let ba = classify(b_start, b_end, a_start, a_end);

            assert_eq!(ab.is_overlap(), ba.is_overlap());
            assert_eq!(ab.region(), ba.region());

            let lo = a_start.max(b_start);
            let hi = a_end.min(b_end);
            match ab.region() {
                Some(region) => assert_eq!(region, (lo, hi)),
                None => assert!(lo > hi),
            }
        }
    }
}
