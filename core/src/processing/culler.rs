use std::cmp::Ordering;
use std::ops::Range;

use crate::interface::VisiblePortion;
use crate::math::search::lower_bound_by;
use crate::processing::index::SeriesIndex;

/// Contiguous run of series items that can overlap the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize,
}

impl VisibleRange {
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }

    pub fn indices(&self) -> Range<usize> {
        self.start_index..self.end_index
    }
}

/// Binary-search culling against a viewport.
pub struct Culler;

impl Culler {
    /// Items `start_index..end_index` are exactly those with
    /// `offset_end >= viewport.start_ratio` and `offset_start <= viewport.end_ratio`.
    ///
    /// Intervals touching a viewport edge count as visible. The result is only
    /// meaningful when the series satisfies its ordering precondition; an
    /// unsorted series yields an arbitrary (but in-bounds) range.
    pub fn cull(series: &SeriesIndex, viewport: VisiblePortion) -> VisibleRange {
        let start_index = lower_bound_by(&series.offset_ends, |end| {
            end.total_cmp(&viewport.start_ratio)
        });
        let end_index = lower_bound_by(&series.offset_starts, |start| {
            if *start <= viewport.end_ratio {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        });

        VisibleRange {
            start_index,
            end_index: end_index.max(start_index),
        }
    }
}
