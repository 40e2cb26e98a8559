use std::sync::Mutex;

/// Counters accumulated across render passes.
pub struct MetricsRecorder {
    inner: Mutex<RenderMetrics>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderMetrics {
    pub frames: usize,
    pub commands: usize,
    pub degenerate_frames: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RenderMetrics::default()),
        }
    }

    pub fn record_frame(&self, commands: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.frames += 1;
            metrics.commands += commands;
        }
    }

    pub fn record_degenerate(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.frames += 1;
            metrics.degenerate_frames += 1;
        }
    }

    pub fn snapshot(&self) -> RenderMetrics {
        if let Ok(metrics) = self.inner.lock() {
            *metrics
        } else {
            RenderMetrics::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
