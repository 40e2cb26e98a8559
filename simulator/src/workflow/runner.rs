use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use timelinecore::processing::HoverTracker;
use timelinecore::telemetry::RenderMetrics;
use timelinecore::{
    BandLayout, DetectionCategory, DetectionInterval, Frame, HoverListener, HoverState,
    IntervalIndex, TimelineRenderer, TimelineWindow,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HoverEventKind {
    Enter,
    Leave,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HoverEvent {
    pub kind: HoverEventKind,
    pub detection_id: u64,
    pub category: DetectionCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandSummary {
    pub category: DetectionCategory,
    pub label: String,
    pub indexed: usize,
    pub visible: usize,
    pub y: f64,
}

pub struct WorkflowResult {
    pub bands: Vec<BandSummary>,
    pub frame: Frame,
    pub hover_events: Vec<HoverEvent>,
    pub metrics: RenderMetrics,
}

#[derive(Default)]
struct HoverLog {
    events: Vec<HoverEvent>,
}

impl HoverListener for HoverLog {
    fn on_event_mouse_enter(&mut self, detection: &DetectionInterval) {
        self.events.push(HoverEvent {
            kind: HoverEventKind::Enter,
            detection_id: detection.id,
            category: detection.category,
        });
    }

    fn on_event_mouse_leave(&mut self, detection: &DetectionInterval) {
        self.events.push(HoverEvent {
            kind: HoverEventKind::Leave,
            detection_id: detection.id,
            category: detection.category,
        });
    }
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Renders one band per category and, when `sweep` is set, drags a pointer
    /// across every band from left to right before leaving the surface.
    pub fn execute(
        &self,
        detections: &[DetectionInterval],
        window: &TimelineWindow,
        sweep: bool,
    ) -> anyhow::Result<WorkflowResult> {
        let renderer = TimelineRenderer::new(self.config.renderer.clone())
            .context("initializing timeline renderer")?;
        let viewport = self.config.viewport();
        let level = self.config.detail_level();
        let width = self.config.surface_width;

        let series = IntervalIndex::build_all(detections, window, &self.config.palette);
        let mut bands = Vec::with_capacity(series.len());
        let mut frame = Frame::new();
        for (row, index) in series.iter().enumerate() {
            index
                .validate_ordering()
                .with_context(|| format!("checking {} detections", index.category))?;

            let layout = BandLayout::new(
                width,
                row as f64 * (self.config.band_height + self.config.band_gap),
                self.config.band_height,
            );
            let band = renderer.render(index, viewport, level, layout, &HoverState::new());
            bands.push(BandSummary {
                category: index.category,
                label: self.config.palette.label_for(index.category),
                indexed: index.len(),
                visible: band.len(),
                y: layout.y,
            });
            frame.extend(band);
        }

        let mut hover_log = HoverLog::default();
        if sweep {
            let tracker = HoverTracker::new();
            let mut hover = HoverState::new();
            for band in &bands {
                let y = band.y + self.config.band_height / 2.0;
                let mut x = 0.0;
                while x <= width {
                    tracker.pointer_moved(&mut hover, &frame, width, x, y, &mut hover_log);
                    x += 1.0;
                }
                tracker.pointer_left(&mut hover, &mut hover_log);
            }
        }

        Ok(WorkflowResult {
            bands,
            frame,
            hover_events: hover_log.events,
            metrics: renderer.metrics(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::build_detections_from_config;
    use std::collections::HashMap;

    fn runner(viewport_start: f64, viewport_end: f64) -> Runner {
        let mut cfg = WorkflowConfig::from_args(720.0, viewport_start, viewport_end, None, 5);
        cfg.generator.mean_gap_s = 900.0;
        Runner::new(cfg)
    }

    #[test]
    fn runner_renders_one_band_per_category() {
        let runner = runner(0.0, 1.0);
        let generator = &runner.config().generator;
        let detections = build_detections_from_config(generator).unwrap();
        let result = runner
            .execute(&detections, &generator.window(), false)
            .unwrap();

        assert_eq!(result.bands.len(), generator.categories.len());
        let total: usize = result.bands.iter().map(|band| band.indexed).sum();
        assert_eq!(total, detections.len());
        assert_eq!(result.frame.len(), detections.len());
        assert_eq!(result.metrics.frames, result.bands.len());
        assert!(result.hover_events.is_empty());
    }

    #[test]
    fn zoomed_runner_draws_fewer_commands() {
        let full = runner(0.0, 1.0);
        let zoomed = runner(0.4, 0.45);
        let generator = &full.config().generator;
        let detections = build_detections_from_config(generator).unwrap();
        let window = generator.window();

        let full_result = full.execute(&detections, &window, false).unwrap();
        let zoomed_result = zoomed.execute(&detections, &window, false).unwrap();
        assert!(zoomed_result.frame.len() < full_result.frame.len());
    }

    #[test]
    fn sweep_balances_enter_and_leave() {
        let runner = runner(0.0, 1.0);
        let generator = &runner.config().generator;
        let detections = build_detections_from_config(generator).unwrap();
        let result = runner
            .execute(&detections, &generator.window(), true)
            .unwrap();

        assert!(!result.hover_events.is_empty());
        let mut balance: HashMap<(DetectionCategory, u64), i32> = HashMap::new();
        for event in &result.hover_events {
            let delta = match event.kind {
                HoverEventKind::Enter => 1,
                HoverEventKind::Leave => -1,
            };
            let entry = balance
                .entry((event.category, event.detection_id))
                .or_default();
            *entry += delta;
            assert!((0..=1).contains(&*entry));
        }
        assert!(balance.values().all(|open| *open == 0));
    }

    #[test]
    fn degenerate_viewport_renders_no_commands() {
        let runner = runner(0.4, 0.4);
        let generator = &runner.config().generator;
        let detections = build_detections_from_config(generator).unwrap();
        let result = runner
            .execute(&detections, &generator.window(), true)
            .unwrap();

        assert!(result.frame.is_empty());
        assert!(result.hover_events.is_empty());
        assert_eq!(result.metrics.degenerate_frames, result.bands.len());
    }

    #[test]
    fn unsorted_feed_is_reported() {
        let runner = runner(0.0, 1.0);
        let window = TimelineWindow::for_day(0.0);
        let detections = [
            DetectionInterval::new(1, DetectionCategory::Person, 5_000.0, 6_000.0),
            DetectionInterval::new(2, DetectionCategory::Person, 1_000.0, 2_000.0),
        ];
        let err = match runner.execute(&detections, &window, false) {
            Ok(_) => panic!("unsorted feed accepted"),
            Err(err) => err,
        };
        assert!(format!("{err:#}").contains("PERSON"));
    }
}
