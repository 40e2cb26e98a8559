use serde::{Deserialize, Serialize};

use crate::interface::detection::DetectionInterval;
use crate::interface::palette::Rgba;

/// Pixel geometry of one category band on the drawing surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BandLayout {
    pub width: f64,
    pub y: f64,
    pub height: f64,
}

impl BandLayout {
    pub fn new(width: f64, y: f64, height: f64) -> Self {
        Self { width, y, height }
    }

    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.y && y <= self.y + self.height
    }
}

/// Rectangle ready to hand to any 2D drawing surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DrawCommand {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgba,
    pub detection: DetectionInterval,
}

impl DrawCommand {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Draw commands of one render pass, in paint order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Appends another band's commands, painting them on top.
    pub fn extend(&mut self, other: Frame) {
        self.commands.extend(other.commands);
    }

    /// Topmost command under the pointer.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&DrawCommand> {
        self.commands.iter().rev().find(|cmd| cmd.contains(x, y))
    }

    pub fn contains_detection(&self, detection: &DetectionInterval) -> bool {
        let key = detection.key();
        self.commands.iter().any(|cmd| cmd.detection.key() == key)
    }
}
