use tracing::{debug, trace};

use super::intervals::{DisabledInterval, DisabledIntervals};
use crate::scanner::{Marker, MarkerKind};

/// Sweep the toggle markers left to right and collect the disabled ranges.
///
/// A disabled range opens right after a `don't()` and closes at the end of
/// the next `do()`. A range still open when the markers run out closes at
/// `text_len`. Markers that do not change the state are ignored.
pub fn compute_disabled_intervals(
    enables: &[Marker],
    disables: &[Marker],
    text_len: usize,
) -> DisabledIntervals {
    let mut events: Vec<Marker> = enables.iter().chain(disables).copied().collect();
    events.sort_unstable_by_key(|m| (m.start, m.kind));

    let mut intervals = Vec::new();
    let mut pending_start: Option<usize> = None;

    for event in &events {
        match (event.kind, pending_start) {
            (MarkerKind::Disable, None) => {
                trace!(offset = event.start, "entering disabled region");
                pending_start = Some(event.end);
            }
            (MarkerKind::Enable, Some(begin)) => {
                trace!(offset = event.start, "leaving disabled region");
                intervals.push(DisabledInterval {
                    begin,
                    end: event.end,
                });
                pending_start = None;
            }
            _ => {}
        }
    }

    if let Some(begin) = pending_start {
        intervals.push(DisabledInterval {
            begin,
            end: text_len,
        });
    }

    debug!(
        markers = events.len(),
        intervals = intervals.len(),
        "computed disabled intervals"
    );

    DisabledIntervals::from_sorted(intervals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn enable(start: usize) -> Marker {
        Marker {
            start,
            end: start + 4,
            kind: MarkerKind::Enable,
        }
    }

    fn disable(start: usize) -> Marker {
        Marker {
            start,
            end: start + 7,
            kind: MarkerKind::Disable,
        }
    }

    fn pairs(ivs: &DisabledIntervals) -> Vec<(usize, usize)> {
        ivs.iter().map(|iv| (iv.begin, iv.end)).collect()
    }

    #[test]
    fn test_no_markers_yields_no_intervals() {
        let ivs = compute_disabled_intervals(&[], &[], 100);
        assert!(ivs.is_empty());
    }

    #[test]
    fn test_disable_then_enable() {
        let ivs = compute_disabled_intervals(&[enable(30)], &[disable(10)], 100);
        assert_eq!(pairs(&ivs), vec![(17, 34)]);
    }

    #[test]
    fn test_unclosed_disable_runs_to_text_end() {
        let ivs = compute_disabled_intervals(&[], &[disable(5)], 64);
        assert_eq!(pairs(&ivs), vec![(12, 64)]);
    }

    #[test]
    fn test_redundant_markers_are_no_ops() {
        // enable, disable, disable, enable, enable, disable
        let enables = [enable(0), enable(40), enable(50)];
        let disables = [disable(10), disable(20), disable(60)];
        let ivs = compute_disabled_intervals(&enables, &disables, 80);
        assert_eq!(pairs(&ivs), vec![(17, 44), (67, 80)]);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let enables = [enable(90), enable(30)];
        let disables = [disable(60), disable(10)];
        let ivs = compute_disabled_intervals(&enables, &disables, 120);
        assert_eq!(pairs(&ivs), vec![(17, 34), (67, 94)]);
    }

    #[test]
    fn test_disable_wins_tie_at_equal_start() {
        let ivs = compute_disabled_intervals(&[enable(10)], &[disable(10)], 50);
        // disable is processed first, so the enable at the same offset closes it
        assert_eq!(ivs.len(), 1);
        assert_eq!(ivs.as_slice()[0].end, 14);
    }

    #[test]
    fn test_sweep_is_repeatable() {
        let enables = [enable(30), enable(80)];
        let disables = [disable(10), disable(50)];
        let first = compute_disabled_intervals(&enables, &disables, 100);
        let second = compute_disabled_intervals(&enables, &disables, 100);
        assert_eq!(first, second);
    }

    #[test]
    fn test_intervals_are_disjoint_and_ordered() {
        let enables: Vec<Marker> = (0..20).map(|i| enable(i * 50 + 30)).collect();
        let disables: Vec<Marker> = (0..20).map(|i| disable(i * 50 + 5)).collect();
        let ivs = compute_disabled_intervals(&enables, &disables, 1000);

        assert_eq!(ivs.len(), 20);
        for w in ivs.as_slice().windows(2) {
            assert!(w[0].end < w[1].begin, "{:?} overlaps {:?}", w[0], w[1]);
        }
    }
}
