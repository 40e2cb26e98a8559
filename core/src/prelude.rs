use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::interface::DetectionCategory;

/// Discrete zoom tier, ordered from the coarsest to the finest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScaleDetailLevel {
    Day,
    QuarterDay,
    Hour,
    TenMinutes,
    Minute,
}

impl ScaleDetailLevel {
    pub const ALL: [ScaleDetailLevel; 5] = [
        ScaleDetailLevel::Day,
        ScaleDetailLevel::QuarterDay,
        ScaleDetailLevel::Hour,
        ScaleDetailLevel::TenMinutes,
        ScaleDetailLevel::Minute,
    ];

    /// Picks the tier matching a viewport that spans `visible_width` of the day.
    ///
    /// A width exactly on a threshold picks the coarser tier.
    pub fn for_visible_width(visible_width: f64) -> Self {
        if visible_width >= 0.25 {
            ScaleDetailLevel::Day
        } else if visible_width >= 1.0 / 24.0 {
            ScaleDetailLevel::QuarterDay
        } else if visible_width >= 1.0 / 144.0 {
            ScaleDetailLevel::Hour
        } else if visible_width >= 1.0 / 1440.0 {
            ScaleDetailLevel::TenMinutes
        } else {
            ScaleDetailLevel::Minute
        }
    }
}

impl FromStr for ScaleDetailLevel {
    type Err = TimelineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "day" => Ok(ScaleDetailLevel::Day),
            "quarter-day" => Ok(ScaleDetailLevel::QuarterDay),
            "hour" => Ok(ScaleDetailLevel::Hour),
            "ten-minutes" => Ok(ScaleDetailLevel::TenMinutes),
            "minute" => Ok(ScaleDetailLevel::Minute),
            other => Err(TimelineError::InvalidConfig(format!(
                "unknown detail level {other:?}"
            ))),
        }
    }
}

/// Minimum rendered width per zoom tier, as a fraction of the day.
///
/// Coarser tiers must never have a smaller minimum than finer ones.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MinWidthTable {
    pub day: f64,
    pub quarter_day: f64,
    pub hour: f64,
    pub ten_minutes: f64,
    pub minute: f64,
}

impl Default for MinWidthTable {
    fn default() -> Self {
        Self {
            day: 0.004,
            quarter_day: 0.001,
            hour: 0.0002,
            ten_minutes: 0.000_03,
            minute: 0.0,
        }
    }
}

impl MinWidthTable {
    /// Same minimum at every tier.
    pub fn uniform(width: f64) -> Self {
        Self {
            day: width,
            quarter_day: width,
            hour: width,
            ten_minutes: width,
            minute: width,
        }
    }

    pub fn min_width(&self, level: ScaleDetailLevel) -> f64 {
        match level {
            ScaleDetailLevel::Day => self.day,
            ScaleDetailLevel::QuarterDay => self.quarter_day,
            ScaleDetailLevel::Hour => self.hour,
            ScaleDetailLevel::TenMinutes => self.ten_minutes,
            ScaleDetailLevel::Minute => self.minute,
        }
    }

    pub fn validate(&self) -> TimelineResult<()> {
        let mut previous = f64::INFINITY;
        for level in ScaleDetailLevel::ALL {
            let width = self.min_width(level);
            if !(0.0..=1.0).contains(&width) {
                return Err(TimelineError::InvalidDetailTable(format!(
                    "{:?} minimum width {} outside [0, 1]",
                    level, width
                )));
            }
            if width > previous {
                return Err(TimelineError::InvalidDetailTable(format!(
                    "{:?} minimum width {} exceeds the coarser tier ({})",
                    level, width, previous
                )));
            }
            previous = width;
        }
        Ok(())
    }
}

/// Renderer-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    pub min_widths: MinWidthTable,
    /// Alpha multiplier applied to the hovered interval.
    pub hover_opacity: f32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            min_widths: MinWidthTable::default(),
            hover_opacity: 0.6,
        }
    }
}

impl RendererConfig {
    pub fn validate(&self) -> TimelineResult<()> {
        self.min_widths.validate()?;
        if !(0.0..=1.0).contains(&self.hover_opacity) {
            return Err(TimelineError::InvalidConfig(format!(
                "hover opacity {} outside [0, 1]",
                self.hover_opacity
            )));
        }
        Ok(())
    }
}

/// Errors raised while constructing or configuring the timeline.
///
/// Rendering itself never fails: degenerate input renders nothing.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TimelineError {
    #[error("invalid timeline window: start {start} must precede end {end}")]
    InvalidWindow { start: f64, end: f64 },
    #[error("invalid color: {0}")]
    InvalidColor(String),
    #[error("invalid detail table: {0}")]
    InvalidDetailTable(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("{category} series is not sorted and non-overlapping at item {index}")]
    UnsortedSeries {
        category: DetectionCategory,
        index: usize,
    },
}

pub type TimelineResult<T> = Result<T, TimelineError>;
