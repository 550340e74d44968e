use std::path::PathBuf;

use crate::color::{CORAL, SKY_BLUE};
use crate::config::PipelineConfig;
use crate::data::filter::filter_table;
use crate::data::loader::load_file;
use crate::data::model::FrequencyTable;
use crate::data::ranker::{rank, sort_descending};
use crate::data::selector::select_terms;
use crate::error::PipelineError;
use crate::render::{BarChart, Capability, Renderer, WordCloud};

// ---------------------------------------------------------------------------
// Run outcome
// ---------------------------------------------------------------------------

/// Orchestrator states, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CheckInput,
    Process,
    RenderAll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactStatus {
    Written,
    Skipped { reason: String },
}

/// An output file and whether it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub path: PathBuf,
    pub status: ArtifactStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing to do: the upstream job has not produced its output yet.
    InputMissing { path: PathBuf },
    Completed {
        total_records: usize,
        filtered_records: usize,
        /// Thematic terms with no record in the table.
        missing_terms: Vec<String>,
        artifacts: Vec<RenderedArtifact>,
    },
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Run CHECK_INPUT → PROCESS → RENDER_ALL.
///
/// A missing input is reported and returned as [`RunOutcome::InputMissing`].
/// An unavailable word-cloud engine skips that one artifact. Every other
/// failure is returned as an error and aborts the run.
pub fn run<R: Renderer + ?Sized>(
    config: &PipelineConfig,
    renderer: &R,
) -> Result<RunOutcome, PipelineError> {
    log::debug!("stage {:?}", Stage::CheckInput);
    if !config.input_path.exists() {
        return Ok(input_missing(config));
    }

    log::debug!("stage {:?}", Stage::Process);
    std::fs::create_dir_all(&config.output_dir)?;

    log::info!("Reading word-count results...");
    let table = match load_file(&config.input_path) {
        Ok(table) => table,
        Err(PipelineError::InputNotFound { .. }) => return Ok(input_missing(config)),
        Err(e) => return Err(e),
    };
    log::info!("Total unique words: {}", table.len());

    let filtered = filter_table(&table, config.min_count, &config.stopwords);
    log::info!("Significant words after filtering: {}", filtered.len());

    log::debug!("stage {:?}", Stage::RenderAll);
    let (artifacts, missing_terms) = render_all(config, renderer, &table, &filtered)?;

    log::info!(
        "Visualization complete. See the '{}' directory.",
        config.output_dir.display()
    );

    Ok(RunOutcome::Completed {
        total_records: table.len(),
        filtered_records: filtered.len(),
        missing_terms,
        artifacts,
    })
}

fn input_missing(config: &PipelineConfig) -> RunOutcome {
    log::error!("Input file not found: {}", config.input_path.display());
    log::error!("Run the analysis first with: {}", config.remediation_hint);
    RunOutcome::InputMissing {
        path: config.input_path.clone(),
    }
}

fn render_all<R: Renderer + ?Sized>(
    config: &PipelineConfig,
    renderer: &R,
    table: &FrequencyTable,
    filtered: &FrequencyTable,
) -> Result<(Vec<RenderedArtifact>, Vec<String>), PipelineError> {
    let mut artifacts = Vec::with_capacity(3);

    // Ranked bars over the filtered table.
    let top = rank(filtered, config.top_n);
    let path = config.output_dir.join(&config.ranked_chart.file_name);
    renderer.bar_chart(
        &BarChart {
            title: &config.ranked_chart.title,
            x_desc: "Words",
            y_desc: "Frequency",
            records: &top,
            color: SKY_BLUE,
        },
        &path,
    )?;
    artifacts.push(written(path));

    // Thematic terms over the unfiltered table.
    let selection = select_terms(table, &config.terms);
    let terms = sort_descending(&selection.table);
    let path = config.output_dir.join(&config.terms_chart.file_name);
    renderer.bar_chart(
        &BarChart {
            title: &config.terms_chart.title,
            x_desc: "Theological terms",
            y_desc: "Frequency",
            records: &terms,
            color: CORAL,
        },
        &path,
    )?;
    artifacts.push(written(path));

    // Word cloud over the filtered table, only when the engine is usable.
    let path = config.output_dir.join(&config.word_cloud.file_name);
    match renderer.word_cloud_capability() {
        Capability::Available => {
            let (frequencies, collapsed) = filtered.word_frequencies();
            if collapsed > 0 {
                log::warn!(
                    "{collapsed} duplicate word(s) collapsed in the word cloud, last count kept"
                );
            }
            renderer.word_cloud(
                &WordCloud {
                    title: &config.word_cloud.title,
                    frequencies: &frequencies,
                    max_words: config.max_cloud_words,
                },
                &path,
            )?;
            artifacts.push(written(path));
        }
        Capability::Unavailable { capability, remedy } => {
            log::warn!("Could not create the word cloud: {capability} is not available");
            log::warn!("To enable it: {remedy}");
            artifacts.push(RenderedArtifact {
                path,
                status: ArtifactStatus::Skipped {
                    reason: format!("{capability} unavailable; {remedy}"),
                },
            });
        }
    }

    Ok((artifacts, selection.missing))
}

fn written(path: PathBuf) -> RenderedArtifact {
    RenderedArtifact {
        path,
        status: ArtifactStatus::Written,
    }
}
