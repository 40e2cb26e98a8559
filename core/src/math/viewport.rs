use crate::interface::{TimeSpan, Timestamp, VisiblePortion};

/// Conversions between day-fraction offsets and the visible viewport.
pub struct ViewportMapper;

impl ViewportMapper {
    /// Position of `offset` inside `viewport`, 0 at its left edge and 1 at its right.
    ///
    /// Returns 0 for a degenerate viewport; callers render nothing in that case.
    pub fn local_ratio(offset: f64, viewport: VisiblePortion) -> f64 {
        let width = viewport.width();
        if !(width > 0.0) {
            return 0.0;
        }
        (offset - viewport.start_ratio) / width
    }

    /// Inverse of [`ViewportMapper::local_ratio`], back to a day-fraction offset.
    pub fn global_offset(local_ratio: f64, viewport: VisiblePortion) -> f64 {
        viewport.start_ratio + local_ratio * viewport.width()
    }

    /// Wall-clock time under a 0..1 pointer position within the visible span.
    pub fn time_from_ratio(pointer_ratio: f64, span: TimeSpan) -> Timestamp {
        span.time_start + pointer_ratio * (span.time_end - span.time_start)
    }
}
