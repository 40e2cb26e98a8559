use crate::interface::{CategoryPalette, DetectionCategory, DetectionInterval, Rgba, TimelineWindow};
use crate::prelude::{TimelineError, TimelineResult};
use crate::telemetry::log::LogManager;

/// One indexed interval with its resolved display color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesItem {
    pub detection: DetectionInterval,
    pub color: Rgba,
}

/// Parallel day-fraction arrays for one category.
///
/// `offset_starts[i]`, `offset_ends[i]` and `items[i]` describe the same
/// interval. Culling relies on both offset arrays being ascending, which holds
/// when the source intervals were sorted by start time and non-overlapping.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesIndex {
    pub category: DetectionCategory,
    pub offset_starts: Vec<f64>,
    pub offset_ends: Vec<f64>,
    pub items: Vec<SeriesItem>,
}

impl SeriesIndex {
    pub fn empty(category: DetectionCategory) -> Self {
        Self {
            category,
            offset_starts: Vec::new(),
            offset_ends: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checks the ordering precondition in O(n).
    ///
    /// Culling never calls this; it is for data layers that want to verify a
    /// feed once instead of paying for it on every frame.
    pub fn validate_ordering(&self) -> TimelineResult<()> {
        for idx in 0..self.len() {
            let start = self.offset_starts[idx];
            let end = self.offset_ends[idx];
            let overlaps_previous = idx > 0 && start < self.offset_ends[idx - 1];
            if !(start <= end) || overlaps_previous {
                return Err(TimelineError::UnsortedSeries {
                    category: self.category,
                    index: idx,
                });
            }
        }
        Ok(())
    }
}

/// Builds per-category series indexes from raw detections.
pub struct IntervalIndex;

impl IntervalIndex {
    /// Indexes the detections of `category`, preserving input order.
    pub fn build(
        detections: &[DetectionInterval],
        category: DetectionCategory,
        window: &TimelineWindow,
        palette: &CategoryPalette,
    ) -> SeriesIndex {
        let color = palette.color_for(category);
        let mut series = SeriesIndex::empty(category);

        for detection in detections.iter().filter(|d| d.category == category) {
            series
                .offset_starts
                .push(window.offset_of(detection.start_time));
            series.offset_ends.push(window.offset_of(detection.end_time));
            series.items.push(SeriesItem {
                detection: *detection,
                color,
            });
        }

        LogManager::scoped("timelinecore::index").detail(&format!(
            "indexed {} {} intervals of {} detections",
            series.len(),
            category,
            detections.len()
        ));
        series
    }

    /// One index per category present in `detections`, in category order.
    pub fn build_all(
        detections: &[DetectionInterval],
        window: &TimelineWindow,
        palette: &CategoryPalette,
    ) -> Vec<SeriesIndex> {
        DetectionCategory::ALL
            .iter()
            .filter(|category| detections.iter().any(|d| d.category == **category))
            .map(|category| Self::build(detections, *category, window, palette))
            .collect()
    }
}
