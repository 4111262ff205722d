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

//! # Spanfuse
//!
//! Closed time-range primitives and threshold-based range merging.
//!
//! The crate revolves around one operation: collapsing an unordered
//! collection of closed ranges `[start, end]` into the minimal sorted,
//! non-overlapping set, where two ranges separated by a gap no larger than
//! a caller-supplied threshold count as one. The typical domain is spans of
//! epoch milliseconds (`i64`), but every API is generic over any numeric
//! type that supports subtraction and comparison, so `f64` works just as
//! well.
//!
//! ## Modules
//!
//! - `range`: The generic closed range type `TimeRange<T>` with validated
//!   and raw constructors, predicates (intersection, containment,
//!   threshold mergeability), measurements, gap computation, and
//!   conversions to/from pairs and `std::ops::RangeInclusive`.
//! - `merge`: The merge itself, as a pure slice-in/`Vec`-out function and
//!   as an allocation-reusing in-place variant.
//!
//! ## Example
//!
//! ```rust
//! use spanfuse::merge::merge_time_ranges;
//! use spanfuse::range::TimeRange;
//!
//! let ranges = [
//!     TimeRange::new(1, 5),
//!     TimeRange::new(3, 7),
//!     TimeRange::new(10, 12),
//! ];
//! let merged = merge_time_ranges(&ranges, 0);
//! assert_eq!(merged, vec![TimeRange::new(1, 7), TimeRange::new(10, 12)]);
//! ```

pub mod merge;
pub mod range;
