use std::path::PathBuf;

use crate::data::filter::{StopwordSet, DEFAULT_MIN_COUNT};
use crate::data::ranker::DEFAULT_TOP_N;
use crate::data::selector::TermSetQuery;

// ---------------------------------------------------------------------------
// Pipeline configuration
// ---------------------------------------------------------------------------

/// Every knob of a run. `main` uses [`PipelineConfig::default`]; nothing is
/// read from flags or the environment.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Word-count output of the upstream batch job.
    pub input_path: PathBuf,
    /// Directory receiving the PNG artifacts. Created if missing.
    pub output_dir: PathBuf,
    /// Command suggested when the input file is missing.
    pub remediation_hint: String,

    pub min_count: u64,
    pub top_n: usize,
    pub max_cloud_words: usize,
    pub stopwords: StopwordSet,
    pub terms: TermSetQuery,

    pub ranked_chart: ChartOutput,
    pub terms_chart: ChartOutput,
    pub word_cloud: ChartOutput,
}

/// Title and file name of one artifact.
#[derive(Debug, Clone)]
pub struct ChartOutput {
    pub title: String,
    pub file_name: String,
}

impl ChartOutput {
    pub fn new(title: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            file_name: file_name.into(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("./tmp/bible_word_count.txt"),
            output_dir: PathBuf::from("./visualizations"),
            remediation_hint: "./scripts/run_analysis.sh".to_string(),
            min_count: DEFAULT_MIN_COUNT,
            top_n: DEFAULT_TOP_N,
            max_cloud_words: 150,
            stopwords: StopwordSet::default(),
            terms: TermSetQuery::theological(),
            ranked_chart: ChartOutput::new(
                format!("The {DEFAULT_TOP_N} most frequent words in the Holy Bible"),
                "top_bible_words.png",
            ),
            terms_chart: ChartOutput::new(
                "Frequency of theological terms in the Bible",
                "theological_terms.png",
            ),
            word_cloud: ChartOutput::new(
                "Holy Bible word cloud",
                "bible_word_cloud.png",
            ),
        }
    }
}
