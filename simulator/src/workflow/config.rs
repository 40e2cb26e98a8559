use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use timelinecore::prelude::RendererConfig;
use timelinecore::{CategoryPalette, ScaleDetailLevel, VisiblePortion};

use crate::generator::profile::GeneratorConfig;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub surface_width: f64,
    pub band_height: f64,
    pub band_gap: f64,
    pub viewport_start: f64,
    pub viewport_end: f64,
    /// Zoom tier; derived from the viewport width when absent.
    pub level: Option<ScaleDetailLevel>,
    pub renderer: RendererConfig,
    pub palette: CategoryPalette,
    pub generator: GeneratorConfig,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            surface_width: 1440.0,
            band_height: 24.0,
            band_gap: 8.0,
            viewport_start: 0.0,
            viewport_end: 1.0,
            level: None,
            renderer: RendererConfig::default(),
            palette: CategoryPalette::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        surface_width: f64,
        viewport_start: f64,
        viewport_end: f64,
        level: Option<ScaleDetailLevel>,
        seed: u64,
    ) -> Self {
        let mut config = Self {
            surface_width,
            viewport_start,
            viewport_end,
            level,
            ..Default::default()
        };
        config.generator.seed = seed;
        config
    }

    pub fn viewport(&self) -> VisiblePortion {
        VisiblePortion::new(self.viewport_start, self.viewport_end)
    }

    pub fn detail_level(&self) -> ScaleDetailLevel {
        self.level
            .unwrap_or_else(|| ScaleDetailLevel::for_visible_width(self.viewport().width()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use timelinecore::{DetectionCategory, Rgba};

    #[test]
    fn config_from_args_sets_viewport_and_seed() {
        let cfg = WorkflowConfig::from_args(800.0, 0.25, 0.5, None, 9);
        assert_eq!(cfg.viewport(), VisiblePortion::new(0.25, 0.5));
        assert_eq!(cfg.generator.seed, 9);
        assert_eq!(cfg.detail_level(), ScaleDetailLevel::Day);
    }

    #[test]
    fn explicit_level_wins_over_viewport() {
        let cfg = WorkflowConfig::from_args(800.0, 0.0, 1.0, Some(ScaleDetailLevel::Hour), 0);
        assert_eq!(cfg.detail_level(), ScaleDetailLevel::Hour);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"surface_width: 960\n\
viewport_start: 0.1\n\
viewport_end: 0.2\n\
level: QUARTER_DAY\n\
renderer:\n  hover_opacity: 0.4\n  min_widths:\n    day: 0.01\n\
palette:\n  categories:\n    PERSON:\n      color: \"#112233\"\n      label: People\n\
generator:\n  seed: 11\n  categories: [PERSON, AUDIO]\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();

        assert_eq!(cfg.surface_width, 960.0);
        assert_eq!(cfg.detail_level(), ScaleDetailLevel::QuarterDay);
        assert_eq!(cfg.renderer.hover_opacity, 0.4);
        assert_eq!(cfg.renderer.min_widths.day, 0.01);
        assert_eq!(
            cfg.palette.color_for(DetectionCategory::Person),
            Rgba::rgb(0x11, 0x22, 0x33)
        );
        assert_eq!(
            cfg.palette.color_for(DetectionCategory::Audio),
            CategoryPalette::DEFAULT_COLOR
        );
        assert_eq!(cfg.generator.seed, 11);
        assert_eq!(cfg.band_height, 24.0);
    }

    #[test]
    fn config_load_reports_bad_color() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"palette:\n  categories:\n    PERSON:\n      color: red\n")
            .unwrap();
        let path = temp.into_temp_path();
        let err = WorkflowConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("invalid color"));
    }
}
