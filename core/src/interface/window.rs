use serde::{Deserialize, Serialize};

use crate::prelude::{TimelineError, TimelineResult};

/// Seconds since the Unix epoch.
pub type Timestamp = f64;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// The full day being visualized.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TimelineWindow {
    pub start_of_day: Timestamp,
    pub end_of_day: Timestamp,
}

impl TimelineWindow {
    pub fn new(start_of_day: Timestamp, end_of_day: Timestamp) -> TimelineResult<Self> {
        if !(end_of_day > start_of_day) {
            return Err(TimelineError::InvalidWindow {
                start: start_of_day,
                end: end_of_day,
            });
        }
        Ok(Self {
            start_of_day,
            end_of_day,
        })
    }

    /// A 24 hour window starting at `start_of_day`.
    pub fn for_day(start_of_day: Timestamp) -> Self {
        Self {
            start_of_day,
            end_of_day: start_of_day + SECONDS_PER_DAY,
        }
    }

    pub fn day_seconds(&self) -> f64 {
        self.end_of_day - self.start_of_day
    }

    /// Day-fraction offset of `time`. Times outside the window map outside [0, 1].
    pub fn offset_of(&self, time: Timestamp) -> f64 {
        let day_seconds = self.day_seconds();
        if day_seconds <= 0.0 {
            return 0.0;
        }
        (time - self.start_of_day) / day_seconds
    }

    pub fn time_at(&self, offset: f64) -> Timestamp {
        self.start_of_day + offset * self.day_seconds()
    }

    /// Wall-clock span covered by `viewport`.
    pub fn visible_span(&self, viewport: VisiblePortion) -> TimeSpan {
        TimeSpan {
            time_start: self.time_at(viewport.start_ratio),
            time_end: self.time_at(viewport.end_ratio),
        }
    }

    pub fn full_span(&self) -> TimeSpan {
        TimeSpan {
            time_start: self.start_of_day,
            time_end: self.end_of_day,
        }
    }
}

/// Wall-clock bounds of the currently visible window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TimeSpan {
    pub time_start: Timestamp,
    pub time_end: Timestamp,
}

/// The sub-range of the day currently on screen.
///
/// Well-formed portions satisfy `0 <= start_ratio <= end_ratio <= 1`. The pan/zoom
/// controller owns this value; a degenerate portion simply renders nothing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct VisiblePortion {
    pub start_ratio: f64,
    pub end_ratio: f64,
}

impl VisiblePortion {
    pub fn new(start_ratio: f64, end_ratio: f64) -> Self {
        Self {
            start_ratio,
            end_ratio,
        }
    }

    pub fn full() -> Self {
        Self::new(0.0, 1.0)
    }

    pub fn width(&self) -> f64 {
        self.end_ratio - self.start_ratio
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.width() > 0.0)
    }
}

impl Default for VisiblePortion {
    fn default() -> Self {
        Self::full()
    }
}
