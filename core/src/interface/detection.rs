use serde::{Deserialize, Serialize};
use std::fmt;

use crate::interface::window::Timestamp;

/// Kind of event a detection interval represents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DetectionCategory {
    Person,
    Vehicle,
    Animal,
    Motion,
    Package,
    Face,
    LicensePlate,
    Audio,
}

impl DetectionCategory {
    pub const ALL: [DetectionCategory; 8] = [
        DetectionCategory::Person,
        DetectionCategory::Vehicle,
        DetectionCategory::Animal,
        DetectionCategory::Motion,
        DetectionCategory::Package,
        DetectionCategory::Face,
        DetectionCategory::LicensePlate,
        DetectionCategory::Audio,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DetectionCategory::Person => "PERSON",
            DetectionCategory::Vehicle => "VEHICLE",
            DetectionCategory::Animal => "ANIMAL",
            DetectionCategory::Motion => "MOTION",
            DetectionCategory::Package => "PACKAGE",
            DetectionCategory::Face => "FACE",
            DetectionCategory::LicensePlate => "LICENSE_PLATE",
            DetectionCategory::Audio => "AUDIO",
        }
    }
}

impl fmt::Display for DetectionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Categorized time range supplied by the data source.
///
/// Intervals of one category are expected sorted by start time and
/// non-overlapping; nothing in this crate re-sorts them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DetectionInterval {
    pub id: u64,
    pub category: DetectionCategory,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
}

impl DetectionInterval {
    pub fn new(
        id: u64,
        category: DetectionCategory,
        start_time: Timestamp,
        end_time: Timestamp,
    ) -> Self {
        Self {
            id,
            category,
            start_time,
            end_time,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Identity of the interval: data sources may number ids per category.
    pub fn key(&self) -> (DetectionCategory, u64) {
        (self.category, self.id)
    }
}
