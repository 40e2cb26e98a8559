use serde::{Deserialize, Serialize};
use timelinecore::{DrawCommand, ScaleDetailLevel, TimeSpan, TimelineWindow, VisiblePortion};

use crate::workflow::runner::{BandSummary, HoverEvent, WorkflowResult};

/// Everything one offline run produced, ready to serialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameReport {
    pub window: TimelineWindow,
    pub viewport: VisiblePortion,
    pub level: ScaleDetailLevel,
    pub visible_span: TimeSpan,
    pub detections: usize,
    pub bands: Vec<BandSummary>,
    pub commands: Vec<DrawCommand>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hover_events: Vec<HoverEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seek_time: Option<f64>,
}

impl FrameReport {
    pub fn new(
        window: TimelineWindow,
        viewport: VisiblePortion,
        level: ScaleDetailLevel,
        detections: usize,
        result: WorkflowResult,
    ) -> Self {
        Self {
            window,
            viewport,
            level,
            visible_span: window.visible_span(viewport),
            detections,
            bands: result.bands,
            commands: result.frame.commands,
            hover_events: result.hover_events,
            seek_time: None,
        }
    }

    pub fn summary(&self) -> String {
        let visible: usize = self.bands.iter().map(|band| band.visible).sum();
        format!(
            "detections={} bands={} visible={} commands={} hover_events={}",
            self.detections,
            self.bands.len(),
            visible,
            self.commands.len(),
            self.hover_events.len()
        )
    }
}
