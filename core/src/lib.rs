//! Interval virtualization core for zoomable day timelines.
//!
//! Categorized detection intervals are indexed once per day, culled against
//! the visible viewport by binary search, widened at coarse zoom so they stay
//! perceivable, and turned into pixel-space draw commands with hover tracking.

pub mod interface;
pub mod math;
pub mod prelude;
pub mod processing;
pub mod telemetry;

pub use interface::{
    BandLayout, CategoryPalette, DetectionCategory, DetectionInterval, DrawCommand, Frame, Rgba,
    TimeSpan, TimelineWindow, Timestamp, VisiblePortion,
};
pub use prelude::{ScaleDetailLevel, TimelineError, TimelineResult};
pub use processing::{
    CallbackListener, Culler, HoverListener, HoverState, HoverTracker, IntervalIndex, SeriesIndex,
    SizeBumper, TimelineRenderer,
};
