pub mod bumper;
pub mod culler;
pub mod hover;
pub mod index;
pub mod renderer;

pub use bumper::SizeBumper;
pub use culler::{Culler, VisibleRange};
pub use hover::{CallbackListener, HoverListener, HoverState, HoverTracker};
pub use index::{IntervalIndex, SeriesIndex, SeriesItem};
pub use renderer::TimelineRenderer;
