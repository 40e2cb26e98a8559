pub mod detection;
pub mod draw;
pub mod palette;
pub mod window;

pub use detection::{DetectionCategory, DetectionInterval};
pub use draw::{BandLayout, DrawCommand, Frame};
pub use palette::{CategoryPalette, CategoryStyle, Rgba};
pub use window::{TimeSpan, TimelineWindow, Timestamp, VisiblePortion};
