use anyhow::Context;

use scripture_viz::config::PipelineConfig;
use scripture_viz::pipeline::{self, ArtifactStatus, RunOutcome};
use scripture_viz::render::PlottersRenderer;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PipelineConfig::default();
    let renderer = PlottersRenderer::default();

    let outcome = pipeline::run(&config, &renderer).with_context(|| {
        format!("visualizing {}", config.input_path.display())
    })?;

    if let RunOutcome::Completed {
        total_records,
        filtered_records,
        missing_terms,
        artifacts,
    } = outcome
    {
        let written = artifacts
            .iter()
            .filter(|a| a.status == ArtifactStatus::Written)
            .count();
        log::info!(
            "{written}/{} charts written from {filtered_records} of {total_records} words",
            artifacts.len()
        );
        if !missing_terms.is_empty() {
            log::debug!("terms absent from the table: {}", missing_terms.join(", "));
        }
        for artifact in &artifacts {
            if let ArtifactStatus::Skipped { reason } = &artifact.status {
                log::debug!("skipped {}: {reason}", artifact.path.display());
            }
        }
    }
    Ok(())
}
