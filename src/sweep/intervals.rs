/// A byte range in which instructions are masked. Both ends are included
/// in membership tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisabledInterval {
    pub begin: usize,
    pub end: usize,
}

impl DisabledInterval {
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.begin && offset <= self.end
    }
}

/// Disjoint intervals ordered by `begin`, as produced by the sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisabledIntervals {
    intervals: Vec<DisabledInterval>,
}

impl DisabledIntervals {
    /// Wrap intervals the sweep already produced in ascending order.
    pub(crate) fn from_sorted(intervals: Vec<DisabledInterval>) -> Self {
        Self { intervals }
    }

    /// Whether `offset` lies inside any interval.
    pub fn contains(&self, offset: usize) -> bool {
        // First interval whose end is not below the offset is the only candidate.
        let idx = self.intervals.partition_point(|iv| iv.end < offset);
        self.intervals
            .get(idx)
            .is_some_and(|iv| iv.contains(offset))
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DisabledInterval> {
        self.intervals.iter()
    }

    pub fn as_slice(&self) -> &[DisabledInterval] {
        &self.intervals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pairs: &[(usize, usize)]) -> DisabledIntervals {
        DisabledIntervals::from_sorted(
            pairs
                .iter()
                .map(|&(begin, end)| DisabledInterval { begin, end })
                .collect(),
        )
    }

    #[test]
    fn test_membership_is_inclusive_on_both_ends() {
        let ivs = set(&[(10, 20)]);
        assert!(!ivs.contains(9));
        assert!(ivs.contains(10));
        assert!(ivs.contains(15));
        assert!(ivs.contains(20));
        assert!(!ivs.contains(21));
    }

    #[test]
    fn test_membership_across_several_intervals() {
        let ivs = set(&[(0, 3), (10, 12), (30, 40)]);
        for offset in [0, 3, 10, 11, 12, 30, 40] {
            assert!(ivs.contains(offset), "offset {offset} should be disabled");
        }
        for offset in [4, 9, 13, 29, 41, 1000] {
            assert!(!ivs.contains(offset), "offset {offset} should be active");
        }
    }

    #[test]
    fn test_empty_set_masks_nothing() {
        let ivs = DisabledIntervals::default();
        assert!(ivs.is_empty());
        assert!(!ivs.contains(0));
    }
}
