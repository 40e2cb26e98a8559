use crate::report::model::FrameReport;
use anyhow::Context;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes frame reports as pretty-printed JSON.
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, report: &FrameReport) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        let file = File::create(&self.path)
            .with_context(|| format!("creating report {}", self.path.display()))?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut out, report)
            .with_context(|| format!("writing report {}", self.path.display()))?;
        out.flush()
            .with_context(|| format!("flushing report {}", self.path.display()))?;
        log::info!("report written to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::build_detections_from_config;
    use crate::workflow::config::WorkflowConfig;
    use crate::workflow::runner::Runner;
    use tempfile::NamedTempFile;

    #[test]
    fn writer_persists_report_json() {
        let cfg = WorkflowConfig::from_args(360.0, 0.0, 0.5, None, 1);
        let runner = Runner::new(cfg.clone());
        let detections = build_detections_from_config(&cfg.generator).unwrap();
        let window = cfg.generator.window();
        let result = runner.execute(&detections, &window, true).unwrap();
        let report = FrameReport::new(
            window,
            cfg.viewport(),
            cfg.detail_level(),
            detections.len(),
            result,
        );

        let temp = NamedTempFile::new().unwrap();
        let writer = ReportWriter::new(temp.path());
        writer.write(&report).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(writer.path()).unwrap()).unwrap();
        assert_eq!(written["level"], "DAY");
        assert_eq!(written["detections"], detections.len());
        assert_eq!(
            written["commands"].as_array().unwrap().len(),
            report.commands.len()
        );
        assert_eq!(written["visible_span"]["time_end"], window.time_at(0.5));
        assert!(report.summary().starts_with("detections="));
    }
}
