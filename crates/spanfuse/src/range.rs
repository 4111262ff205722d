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

use num_traits::Num;
use std::ops::{Bound, RangeBounds, RangeInclusive};

/// A closed time range `[start, end]` defined by an inclusive start and an
/// inclusive end.
///
/// Both bounds belong to the range, so two ranges that touch at a single
/// point intersect. The typical instantiation is `TimeRange<i64>` over epoch
/// milliseconds, but any numeric type supporting subtraction and comparison
/// works, including floats.
///
/// # Invariants
///
/// The validated constructors (`new`, `try_new`) require `start <= end`.
/// `from_raw` and the pair conversions deliberately skip that check; the
/// merge logic assumes `start <= end` for its gap interpretation to be
/// meaningful but never relies on it for memory safety.
#[derive(Clone, Copy, PartialEq)]
pub struct TimeRange<T>
where
    T: Num + Copy + PartialOrd,
{
    start: T,
    end: T,
}

impl<T> TimeRange<T>
where
    T: Num + Copy + PartialOrd,
{
    /// Creates a new `TimeRange`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanfuse::range::TimeRange;
    ///
    /// let r = TimeRange::new(0, 10);
    /// assert_eq!(r.duration(), 10);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        assert!(
            start <= end,
            "Invalid time range: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Creates a new `TimeRange` if the inputs are valid.
    ///
    /// Returns `None` if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanfuse::range::TimeRange;
    ///
    /// assert!(TimeRange::try_new(0, 10).is_some());
    /// assert!(TimeRange::try_new(10, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Creates a new `TimeRange` from raw bounds without any validation.
    ///
    /// A range with `end < start` is accepted verbatim. Such a range flows
    /// through every predicate and through the merge with plain numeric
    /// comparisons; the results are well-defined but may be unintuitive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanfuse::range::TimeRange;
    ///
    /// let r = TimeRange::from_raw(10, 0);
    /// assert_eq!(r.start(), 10);
    /// assert_eq!(r.end(), 0);
    /// ```
    #[inline]
    pub const fn from_raw(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// Returns the inclusive start bound of the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanfuse::range::TimeRange;
    ///
    /// let r = TimeRange::new(5, 10);
    /// assert_eq!(r.start(), 5);
    /// ```
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the inclusive end bound of the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanfuse::range::TimeRange;
    ///
    /// let r = TimeRange::new(5, 10);
    /// assert_eq!(r.end(), 10);
    /// ```
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns the duration of the range (`end - start`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanfuse::range::TimeRange;
    ///
    /// assert_eq!(TimeRange::new(10, 25).duration(), 15);
    /// ```
    #[inline]
    pub fn duration(&self) -> T {
        self.end - self.start
    }

    /// Returns `true` if the range covers a single instant (`start == end`).
    ///
    /// A closed range is never empty; the degenerate case is one point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanfuse::range::TimeRange;
    ///
    /// assert!(TimeRange::new(10, 10).is_instant());
    /// assert!(!TimeRange::new(10, 11).is_instant());
    /// ```
    #[inline]
    pub fn is_instant(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `value` lies within `[start, end]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanfuse::range::TimeRange;
    ///
    /// let r = TimeRange::new(0, 10);
    /// assert!(r.contains_point(0));
    /// assert!(r.contains_point(10));
    /// assert!(!r.contains_point(11));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns `true` if `other` lies entirely within `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanfuse::range::TimeRange;
    ///
    /// let outer = TimeRange::new(0, 10);
    /// assert!(outer.contains_range(TimeRange::new(2, 8)));
    /// assert!(!outer.contains_range(TimeRange::new(2, 11)));
    /// ```
    #[inline]
    pub fn contains_range(&self, other: Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns `true` if this range intersects `other`.
    ///
    /// Both bounds are inclusive, so ranges that merely touch at an
    /// endpoint intersect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanfuse::range::TimeRange;
    ///
    /// let a = TimeRange::new(0, 10);
    /// assert!(a.intersects(TimeRange::new(5, 15)));
    /// assert!(a.intersects(TimeRange::new(10, 20))); // Touching
    /// assert!(!a.intersects(TimeRange::new(11, 20)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns the gap between two strictly disjoint ranges as a plain
    /// distance (end of the earlier to start of the later).
    ///
    /// Returns `None` if the ranges intersect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanfuse::range::TimeRange;
    ///
    /// let a = TimeRange::new(0, 5);
    /// let b = TimeRange::new(8, 12);
    /// assert_eq!(a.gap_to(b), Some(3));
    /// assert_eq!(b.gap_to(a), Some(3));
    /// assert_eq!(a.gap_to(TimeRange::new(4, 6)), None);
    /// ```
    #[inline]
    pub fn gap_to(&self, other: Self) -> Option<T> {
        if self.end < other.start {
            Some(other.start - self.end)
        } else if other.end < self.start {
            Some(self.start - other.end)
        } else {
            None
        }
    }

    /// Returns `true` if the two ranges intersect or are separated by a gap
    /// no larger than `threshold`.
    ///
    /// This is the pairwise merge criterion: two ranges for which this holds
    /// collapse into their hull. A negative threshold is taken literally and
    /// demands overlap beyond mere touching.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanfuse::range::TimeRange;
    ///
    /// let a = TimeRange::new(1, 5);
    /// assert!(a.mergeable_within(TimeRange::new(6, 10), 1)); // Gap of 1
    /// assert!(!a.mergeable_within(TimeRange::new(7, 10), 1)); // Gap of 2
    /// ```
    #[inline]
    pub fn mergeable_within(&self, other: Self, threshold: T) -> bool {
        other.start <= self.end + threshold && self.start <= other.end + threshold
    }

    /// Returns the smallest range covering both `self` and `other`,
    /// regardless of any gap between them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanfuse::range::TimeRange;
    ///
    /// let a = TimeRange::new(0, 5);
    /// let b = TimeRange::new(10, 15);
    /// assert_eq!(a.hull(b), TimeRange::new(0, 15));
    /// ```
    #[inline]
    pub fn hull(&self, other: Self) -> Self {
        let start = if other.start < self.start {
            other.start
        } else {
            self.start
        };
        let end = if other.end > self.end {
            other.end
        } else {
            self.end
        };
        Self { start, end }
    }

    /// Merges two ranges into their hull if they satisfy the threshold
    /// criterion, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanfuse::range::TimeRange;
    ///
    /// let a = TimeRange::new(1, 5);
    /// let b = TimeRange::new(6, 10);
    /// assert_eq!(a.merge_within(b, 1), Some(TimeRange::new(1, 10)));
    /// assert_eq!(a.merge_within(b, 0), None);
    /// ```
    #[inline]
    pub fn merge_within(&self, other: Self, threshold: T) -> Option<Self> {
        if self.mergeable_within(other, threshold) {
            Some(self.hull(other))
        } else {
            None
        }
    }
}

impl<T> Default for TimeRange<T>
where
    T: Num + Copy + PartialOrd,
{
    #[inline]
    fn default() -> Self {
        Self {
            start: T::zero(),
            end: T::zero(),
        }
    }
}

impl<T> std::fmt::Debug for TimeRange<T>
where
    T: Num + Copy + PartialOrd + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeRange")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> std::fmt::Display for TimeRange<T>
where
    T: Num + Copy + PartialOrd + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T> From<(T, T)> for TimeRange<T>
where
    T: Num + Copy + PartialOrd,
{
    /// Converts a `(start, end)` pair verbatim, without validation.
    #[inline]
    fn from(pair: (T, T)) -> Self {
        Self::from_raw(pair.0, pair.1)
    }
}

impl<T> From<TimeRange<T>> for (T, T)
where
    T: Num + Copy + PartialOrd,
{
    #[inline]
    fn from(range: TimeRange<T>) -> Self {
        (range.start, range.end)
    }
}

impl<T> From<RangeInclusive<T>> for TimeRange<T>
where
    T: Num + Copy + PartialOrd,
{
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::from_raw(start, end)
    }
}

impl<T> From<TimeRange<T>> for RangeInclusive<T>
where
    T: Num + Copy + PartialOrd,
{
    #[inline]
    fn from(range: TimeRange<T>) -> Self {
        range.start..=range.end
    }
}

impl<T> RangeBounds<T> for TimeRange<T>
where
    T: Num + Copy + PartialOrd,
{
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(&self.start)
    }

    fn end_bound(&self) -> Bound<&T> {
        Bound::Included(&self.end)
    }
}
