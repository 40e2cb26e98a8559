use crate::interface::{BandLayout, DrawCommand, Frame, VisiblePortion};
use crate::math::viewport::ViewportMapper;
use crate::prelude::{RendererConfig, ScaleDetailLevel, TimelineResult};
use crate::processing::bumper::SizeBumper;
use crate::processing::culler::Culler;
use crate::processing::hover::HoverState;
use crate::processing::index::SeriesIndex;
use crate::telemetry::log::LogManager;
use crate::telemetry::metrics::{MetricsRecorder, RenderMetrics};

/// Turns a series index into pixel-space draw commands for one viewport.
pub struct TimelineRenderer {
    config: RendererConfig,
    bumper: SizeBumper,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl TimelineRenderer {
    pub fn new(config: RendererConfig) -> TimelineResult<Self> {
        config.validate()?;
        Ok(Self {
            bumper: SizeBumper::new(config.min_widths),
            config,
            logger: LogManager::scoped("timelinecore::render"),
            metrics: MetricsRecorder::new(),
        })
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn bumper(&self) -> &SizeBumper {
        &self.bumper
    }

    /// Culls, bumps and maps the series for one frame.
    ///
    /// A degenerate viewport or a zero-width surface renders nothing. The
    /// hovered interval, if drawn, gets its alpha scaled by the hover opacity.
    pub fn render(
        &self,
        series: &SeriesIndex,
        viewport: VisiblePortion,
        level: ScaleDetailLevel,
        layout: BandLayout,
        hover: &HoverState,
    ) -> Frame {
        if viewport.is_degenerate() || !(layout.width > 0.0) {
            self.logger.frame(&format!(
                "skipping {} frame: viewport {:?}, width {}",
                series.category, viewport, layout.width
            ));
            self.metrics.record_degenerate();
            return Frame::new();
        }

        let range = Culler::cull(series, viewport);
        let mut commands = Vec::with_capacity(range.len());
        for idx in range.indices() {
            let item = &series.items[idx];
            let (start, end) =
                self.bumper
                    .bump(series.offset_starts[idx], series.offset_ends[idx], level);
            let left = ViewportMapper::local_ratio(start, viewport);
            let right = ViewportMapper::local_ratio(end, viewport);
            let fill = if hover.is_hovering(&item.detection) {
                item.color.scale_alpha(self.config.hover_opacity)
            } else {
                item.color
            };

            commands.push(DrawCommand {
                x: left * layout.width,
                y: layout.y,
                width: (right - left) * layout.width,
                height: layout.height,
                fill,
                detection: item.detection,
            });
        }

        self.logger.frame(&format!(
            "{} frame: {} of {} intervals visible ({}..{})",
            series.category,
            commands.len(),
            series.len(),
            range.start_index,
            range.end_index
        ));
        self.metrics.record_frame(commands.len());
        Frame { commands }
    }

    pub fn metrics(&self) -> RenderMetrics {
        self.metrics.snapshot()
    }
}
