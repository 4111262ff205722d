// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Threshold-based merging of closed time ranges.
//!
//! The merge collapses an unordered collection of `TimeRange<T>` values into
//! the minimal sorted, non-overlapping set, treating any two ranges whose
//! gap is at most a caller-supplied threshold as one. It is a single pass
//! over start-sorted input with one accumulator; total cost is the sort
//! (O(N log N)) plus a linear scan (O(N)). The pure entry point never
//! touches the caller's collection, and an in-place variant is provided for
//! callers that own their `Vec` and want to reuse its allocation.

use crate::range::TimeRange;
use num_traits::Num;
use std::cmp::Ordering;

/// Checks whether the given ranges are sorted by start and pairwise
/// separated by a gap strictly greater than `threshold`.
///
/// Returns `true` if no adjacent pair could be merged further, `false`
/// otherwise. Incomparable bounds (float `NaN`) never count as mergeable.
#[inline(always)]
fn is_sorted_and_separated<T>(ranges: &[TimeRange<T>], threshold: T) -> bool
where
    T: Num + Copy + PartialOrd,
{
    ranges
        .windows(2)
        .all(|w| !(w[1].start() <= w[0].end() + threshold))
}

/// Merges a list of closed time ranges in place, coalescing any two ranges
/// separated by a gap of at most `threshold`.
///
/// This function sorts the ranges by start, then performs a linear,
/// in-place compaction: a running accumulator keeps its start and extends
/// its end to the maximum seen while successive ranges fall within the
/// threshold, and is emitted once a range falls outside it. The output is
/// sorted by start and, for any non-negative threshold, disjoint.
///
/// Ranges with `end < start` (see `TimeRange::from_raw`) and negative
/// thresholds are not rejected; both flow through the plain numeric
/// comparisons.
///
/// Complexity:
/// - O(N log N) for sorting + O(N) for compaction.
///
/// # Examples
///
/// ```rust
/// # use spanfuse::merge::merge_time_ranges_in_place;
/// # use spanfuse::range::TimeRange;
///
/// let mut ranges = vec![TimeRange::new(6, 10), TimeRange::new(1, 5)];
/// merge_time_ranges_in_place(&mut ranges, 1);
/// assert_eq!(ranges, vec![TimeRange::new(1, 10)]);
/// ```
pub fn merge_time_ranges_in_place<T>(ranges: &mut Vec<TimeRange<T>>, threshold: T)
where
    T: Num + Copy + PartialOrd,
{
    if ranges.is_empty() {
        return;
    }

    ranges.sort_unstable_by(|a, b| {
        a.start()
            .partial_cmp(&b.start())
            .unwrap_or(Ordering::Equal)
    });

    let mut write_index = 0;
    for read_index in 1..ranges.len() {
        let current = ranges[write_index];
        let next = ranges[read_index];

        if next.start() <= current.end() + threshold {
            // Extend: the accumulator keeps its start, the end grows to the
            // maximum seen so far.
            if current.end() < next.end() {
                ranges[write_index] = TimeRange::from_raw(current.start(), next.end());
            }
        } else {
            write_index += 1;
            ranges[write_index] = next;
        }
    }
    ranges.truncate(write_index + 1);

    debug_assert!(
        is_sorted_and_separated(ranges, threshold),
        "`merge_time_ranges_in_place` output is not sorted and separated"
    );
}

/// Merges a collection of closed time ranges into the minimal sorted,
/// non-overlapping set, treating any two ranges separated by a gap of at
/// most `threshold` as mergeable.
///
/// The caller's slice is copied and never mutated or reordered. An empty
/// slice yields an empty `Vec`. Each returned range's bounds are the
/// min/max aggregation of the input ranges that merged into it; no points
/// are invented or dropped.
///
/// The result is sorted ascending by start, and every consecutive pair
/// `(a, b)` satisfies `b.start() > a.end() + threshold`, so no further
/// merging is possible under the same threshold.
///
/// # Examples
///
/// ```rust
/// # use spanfuse::merge::merge_time_ranges;
/// # use spanfuse::range::TimeRange;
///
/// let ranges = [
///     TimeRange::new(1, 5),
///     TimeRange::new(3, 7),
///     TimeRange::new(10, 12),
/// ];
/// assert_eq!(
///     merge_time_ranges(&ranges, 0),
///     vec![TimeRange::new(1, 7), TimeRange::new(10, 12)]
/// );
///
/// // A gap of exactly the threshold merges.
/// let ranges = [TimeRange::new(1, 5), TimeRange::new(6, 10)];
/// assert_eq!(merge_time_ranges(&ranges, 1), vec![TimeRange::new(1, 10)]);
/// ```
pub fn merge_time_ranges<T>(ranges: &[TimeRange<T>], threshold: T) -> Vec<TimeRange<T>>
where
    T: Num + Copy + PartialOrd,
{
    let mut merged = ranges.to_vec();
    merge_time_ranges_in_place(&mut merged, threshold);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    type Millis = i64;

    fn tr(s: Millis, e: Millis) -> TimeRange<Millis> {
        TimeRange::new(s, e)
    }

    #[test]
    fn test_empty_input() {
        let ranges: Vec<TimeRange<Millis>> = vec![];
        assert!(merge_time_ranges(&ranges, 0).is_empty());
        assert!(merge_time_ranges(&ranges, 5).is_empty());
        assert!(merge_time_ranges(&ranges, -3).is_empty());
    }

    #[test]
    fn test_single_range_passes_through() {
        let ranges = vec![tr(5, 10)];
        assert_eq!(merge_time_ranges(&ranges, 100), vec![tr(5, 10)]);
    }

    #[test]
    fn test_overlap_merges_at_zero_threshold() {
        let ranges = vec![tr(1, 5), tr(3, 7), tr(10, 12)];
        assert_eq!(
            merge_time_ranges(&ranges, 0),
            vec![tr(1, 7), tr(10, 12)]
        );
    }

    #[test]
    fn test_touching_ranges_merge_at_zero_threshold() {
        let ranges = vec![tr(1, 5), tr(5, 8)];
        assert_eq!(merge_time_ranges(&ranges, 0), vec![tr(1, 8)]);
    }

    #[test]
    fn test_gap_equal_to_threshold_merges() {
        let ranges = vec![tr(1, 5), tr(6, 10)];
        assert_eq!(merge_time_ranges(&ranges, 1), vec![tr(1, 10)]);
    }

    #[test]
    fn test_gap_above_threshold_does_not_merge() {
        let ranges = vec![tr(1, 5), tr(7, 10)];
        assert_eq!(merge_time_ranges(&ranges, 1), vec![tr(1, 5), tr(7, 10)]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let ranges = vec![tr(1, 2), tr(1, 2), tr(1, 2)];
        assert_eq!(merge_time_ranges(&ranges, 0), vec![tr(1, 2)]);
    }

    #[test]
    fn test_contained_range_absorbed() {
        let ranges = vec![tr(0, 20), tr(5, 10)];
        assert_eq!(merge_time_ranges(&ranges, 0), vec![tr(0, 20)]);
    }

    #[test]
    fn test_unsorted_input() {
        let ranges = vec![tr(10, 12), tr(1, 5), tr(3, 7)];
        assert_eq!(
            merge_time_ranges(&ranges, 0),
            vec![tr(1, 7), tr(10, 12)]
        );
    }

    #[test]
    fn test_input_not_mutated() {
        let ranges = vec![tr(10, 12), tr(1, 5)];
        let _ = merge_time_ranges(&ranges, 0);
        // The caller's collection keeps its order and contents.
        assert_eq!(ranges, vec![tr(10, 12), tr(1, 5)]);
    }

    #[test]
    fn test_order_independence() {
        let a = tr(1, 5);
        let b = tr(4, 9);
        let c = tr(12, 20);
        let expected = vec![tr(1, 9), tr(12, 20)];

        let permutations = [
            [a, b, c],
            [a, c, b],
            [b, a, c],
            [b, c, a],
            [c, a, b],
            [c, b, a],
        ];
        for p in permutations {
            assert_eq!(merge_time_ranges(&p, 0), expected);
        }
    }

    #[test]
    fn test_idempotence() {
        let ranges = vec![tr(0, 3), tr(2, 6), tr(9, 11), tr(14, 14), tr(15, 20)];
        for threshold in [0, 1, 2, 100] {
            let once = merge_time_ranges(&ranges, threshold);
            let twice = merge_time_ranges(&once, threshold);
            assert_eq!(once, twice, "threshold {}", threshold);
        }
    }

    #[test]
    fn test_maximality() {
        let ranges = vec![tr(0, 3), tr(5, 8), tr(10, 14), tr(20, 25), tr(26, 30)];
        for threshold in [0, 1, 2, 5] {
            let merged = merge_time_ranges(&ranges, threshold);
            for w in merged.windows(2) {
                assert!(
                    w[1].start() - w[0].end() > threshold,
                    "adjacent pair {} and {} still mergeable at threshold {}",
                    w[0],
                    w[1],
                    threshold
                );
            }
        }
    }

    #[test]
    fn test_coverage() {
        let ranges = vec![tr(0, 3), tr(2, 6), tr(9, 11), tr(15, 20), tr(19, 22)];
        let merged = merge_time_ranges(&ranges, 0);

        for input in &ranges {
            let covering: Vec<_> = merged
                .iter()
                .filter(|m| m.contains_range(*input))
                .collect();
            assert_eq!(
                covering.len(),
                1,
                "input {} must fall within exactly one output range",
                input
            );
        }
    }

    #[test]
    fn test_negative_threshold_is_stricter() {
        // Touching ranges no longer merge.
        let ranges = vec![tr(1, 5), tr(5, 9)];
        assert_eq!(merge_time_ranges(&ranges, -1), vec![tr(1, 5), tr(5, 9)]);

        // An overlap of more than one unit still does.
        let ranges = vec![tr(1, 5), tr(3, 9)];
        assert_eq!(merge_time_ranges(&ranges, -1), vec![tr(1, 9)]);
    }

    #[test]
    fn test_inverted_range_does_not_crash() {
        // end < start is not validated; the comparisons run as-is.
        let ranges = vec![TimeRange::from_raw(10, 2), TimeRange::from_raw(1, 5)];
        let merged = merge_time_ranges(&ranges, 0);
        assert!(!merged.is_empty());
    }

    #[test]
    fn test_float_ranges() {
        let ranges = vec![
            TimeRange::new(0.0, 1.0),
            TimeRange::new(1.5, 2.0),
            TimeRange::new(4.0, 5.0),
        ];
        assert_eq!(
            merge_time_ranges(&ranges, 0.5),
            vec![TimeRange::new(0.0, 2.0), TimeRange::new(4.0, 5.0)]
        );
        assert_eq!(merge_time_ranges(&ranges, 0.25), ranges);
    }

    #[test]
    fn test_large_threshold_collapses_everything() {
        let ranges = vec![tr(0, 1), tr(100, 101), tr(1000, 1001)];
        assert_eq!(merge_time_ranges(&ranges, 1_000_000), vec![tr(0, 1001)]);
    }

    #[test]
    fn test_in_place_reuses_allocation() {
        let mut ranges = vec![tr(6, 10), tr(1, 5), tr(20, 25)];
        let capacity = ranges.capacity();
        merge_time_ranges_in_place(&mut ranges, 1);
        assert_eq!(ranges, vec![tr(1, 10), tr(20, 25)]);
        assert_eq!(ranges.capacity(), capacity);
    }

    #[test]
    fn test_is_sorted_and_separated() {
        let separated = vec![tr(0, 5), tr(7, 10)];
        assert!(is_sorted_and_separated(&separated, 1));
        assert!(!is_sorted_and_separated(&separated, 2));

        let unsorted = vec![tr(7, 10), tr(0, 5)];
        assert!(!is_sorted_and_separated(&unsorted, 0));
    }

    #[test]
    fn test_epoch_millisecond_spans() {
        // Two playback windows 800ms apart plus a distant one.
        let ranges = vec![
            tr(1_700_000_000_000, 1_700_000_060_000),
            tr(1_700_000_060_800, 1_700_000_120_000),
            tr(1_700_010_000_000, 1_700_010_030_000),
        ];
        let merged = merge_time_ranges(&ranges, 1_000);
        assert_eq!(
            merged,
            vec![
                tr(1_700_000_000_000, 1_700_000_120_000),
                tr(1_700_010_000_000, 1_700_010_030_000),
            ]
        );
    }
}
