use anyhow::{ensure, Context};
use clap::Parser;
use generator::profile::build_detections_from_config;
use log::info;
use report::model::FrameReport;
use report::writer::ReportWriter;
use std::path::PathBuf;
use timelinecore::math::ViewportMapper;
use timelinecore::ScaleDetailLevel;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod generator;
mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Offline driver for the timeline virtualization core")]
struct Args {
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Drawing surface width in pixels
    #[arg(long, default_value_t = 1440.0)]
    width: f64,
    #[arg(long, default_value_t = 0.0)]
    viewport_start: f64,
    #[arg(long, default_value_t = 1.0)]
    viewport_end: f64,
    /// Zoom tier (day, quarter-day, hour, ten-minutes, minute); derived from the viewport if omitted
    #[arg(long)]
    level: Option<ScaleDetailLevel>,
    /// Generator seed
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Sweep a pointer across every band and record hover callbacks
    #[arg(long, default_value_t = false)]
    sweep: bool,
    /// Pointer position (0..1 of the surface) to translate into wall-clock time
    #[arg(long)]
    seek: Option<f64>,
    /// Write the frame report as JSON
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(
            args.width,
            args.viewport_start,
            args.viewport_end,
            args.level,
            args.seed,
        )
    };

    let window = workflow_config.generator.window();
    let detections = build_detections_from_config(&workflow_config.generator)
        .context("generating synthetic detections")?;
    info!(
        "generated {} detections for day starting at {}",
        detections.len(),
        window.start_of_day
    );

    let runner = Runner::new(workflow_config);
    let result = runner
        .execute(&detections, &window, args.sweep)
        .context("rendering timeline frame")?;
    for band in &result.bands {
        info!(
            "{:<14} {:>4} indexed {:>4} visible",
            band.label, band.indexed, band.visible
        );
    }
    info!(
        "renderer metrics: {} frames, {} commands, {} skipped",
        result.metrics.frames, result.metrics.commands, result.metrics.degenerate_frames
    );

    let mut report = FrameReport::new(
        window,
        runner.config().viewport(),
        runner.config().detail_level(),
        detections.len(),
        result,
    );

    if let Some(ratio) = args.seek {
        ensure!(
            (0.0..=1.0).contains(&ratio),
            "seek position {} outside [0, 1]",
            ratio
        );
        let time = ViewportMapper::time_from_ratio(ratio, report.visible_span);
        info!("seek {:.3} -> {:.1}", ratio, time);
        report.seek_time = Some(time);
    }

    println!("Offline run -> {}", report.summary());

    if let Some(path) = args.output {
        let writer = ReportWriter::new(path);
        writer.write(&report)?;
        println!("Report -> {}", writer.path().display());
    }

    Ok(())
}
