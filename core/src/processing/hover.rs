use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::interface::{DetectionInterval, Frame, TimeSpan, Timestamp};
use crate::math::viewport::ViewportMapper;
use crate::telemetry::log::LogManager;

/// Receives pointer enter/leave notifications for drawn intervals.
pub trait HoverListener {
    fn on_event_mouse_enter(&mut self, detection: &DetectionInterval);
    fn on_event_mouse_leave(&mut self, detection: &DetectionInterval);
}

/// Adapts a pair of closures into a [`HoverListener`].
pub struct CallbackListener<E, L> {
    on_enter: E,
    on_leave: L,
}

impl<E, L> CallbackListener<E, L>
where
    E: FnMut(&DetectionInterval),
    L: FnMut(&DetectionInterval),
{
    pub fn new(on_enter: E, on_leave: L) -> Self {
        Self { on_enter, on_leave }
    }
}

impl<E, L> HoverListener for CallbackListener<E, L>
where
    E: FnMut(&DetectionInterval),
    L: FnMut(&DetectionInterval),
{
    fn on_event_mouse_enter(&mut self, detection: &DetectionInterval) {
        (self.on_enter)(detection)
    }

    fn on_event_mouse_leave(&mut self, detection: &DetectionInterval) {
        (self.on_leave)(detection)
    }
}

/// Which interval the pointer is over, if any, and where the pointer is.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoverState {
    hovered: Option<DetectionInterval>,
    pointer_ratio: Option<f64>,
    /// Fingerprint of the drawn interval set the pointer was last tracked on.
    visible: Option<u64>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<&DetectionInterval> {
        self.hovered.as_ref()
    }

    pub fn is_hovering(&self, detection: &DetectionInterval) -> bool {
        let key = detection.key();
        self.hovered.is_some_and(|hovered| hovered.key() == key)
    }

    /// Pointer position as a 0..1 ratio of the drawing surface width.
    pub fn pointer_ratio(&self) -> Option<f64> {
        self.pointer_ratio
    }

    /// Wall-clock time under the pointer within the visible `span`.
    pub fn pointer_time(&self, span: TimeSpan) -> Option<Timestamp> {
        self.pointer_ratio
            .map(|ratio| ViewportMapper::time_from_ratio(ratio, span))
    }
}

/// Idle/Hovered state machine over the draw commands of a frame.
///
/// Each entry onto an interval fires exactly one enter and each exit exactly
/// one leave. Rapid movement is last-write-wins; nothing is debounced.
pub struct HoverTracker {
    logger: LogManager,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self {
            logger: LogManager::scoped("timelinecore::hover"),
        }
    }

    /// Pointer moved to pixel `(x, y)` over a surface `surface_width` wide.
    pub fn pointer_moved(
        &self,
        state: &mut HoverState,
        frame: &Frame,
        surface_width: f64,
        x: f64,
        y: f64,
        listener: &mut dyn HoverListener,
    ) {
        state.pointer_ratio = if surface_width > 0.0 {
            Some((x / surface_width).clamp(0.0, 1.0))
        } else {
            None
        };
        state.visible = Some(visible_fingerprint(frame));
        let target = frame.hit_test(x, y).map(|command| command.detection);
        self.transition(state, target, listener);
    }

    /// Pointer left the drawing surface.
    pub fn pointer_left(&self, state: &mut HoverState, listener: &mut dyn HoverListener) {
        state.pointer_ratio = None;
        state.visible = None;
        self.transition(state, None, listener);
    }

    /// Call after every re-render. Any change to the set of drawn intervals
    /// (pan, zoom, new data) drops the hover with a single leave; the next
    /// pointer move hit-tests the new frame.
    pub fn reconcile(&self, state: &mut HoverState, frame: &Frame, listener: &mut dyn HoverListener) {
        let fingerprint = visible_fingerprint(frame);
        let changed = state.visible.is_some_and(|previous| previous != fingerprint);
        state.visible = Some(fingerprint);

        let vanished = state
            .hovered
            .is_some_and(|detection| !frame.contains_detection(&detection));
        if changed || vanished {
            self.transition(state, None, listener);
        }
    }

    fn transition(
        &self,
        state: &mut HoverState,
        target: Option<DetectionInterval>,
        listener: &mut dyn HoverListener,
    ) {
        let current = state.hovered.map(|detection| detection.key());
        let next = target.map(|detection| detection.key());
        if current == next {
            return;
        }

        if let Some(previous) = state.hovered.take() {
            self.logger
                .frame(&format!("leave {} #{}", previous.category, previous.id));
            listener.on_event_mouse_leave(&previous);
        }
        if let Some(next) = target {
            self.logger.frame(&format!("enter {} #{}", next.category, next.id));
            listener.on_event_mouse_enter(&next);
            state.hovered = Some(next);
        }
    }
}

impl Default for HoverTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn visible_fingerprint(frame: &Frame) -> u64 {
    let mut hasher = DefaultHasher::new();
    frame.len().hash(&mut hasher);
    for command in &frame.commands {
        command.detection.key().hash(&mut hasher);
    }
    hasher.finish()
}
