//! Renderers: prepared dataset in, PNG file out.
//!
//! The orchestrator talks to a [`Renderer`]; [`PlottersRenderer`] is the
//! production implementation drawing with `plotters` into an RGB buffer that
//! is then encoded with `image`.

pub mod bar;
pub mod cloud;

use std::path::Path;

use plotters::style::RGBColor;

use crate::data::model::FrequencyTable;
use crate::error::PipelineError;

// ---------------------------------------------------------------------------
// Render requests
// ---------------------------------------------------------------------------

/// One bar per record, drawn in table order.
#[derive(Debug, Clone)]
pub struct BarChart<'a> {
    pub title: &'a str,
    pub x_desc: &'a str,
    pub y_desc: &'a str,
    pub records: &'a FrequencyTable,
    pub color: RGBColor,
}

/// Unique `(word, count)` pairs, in table order, laid out as a cloud of at
/// most `max_words` words.
#[derive(Debug, Clone)]
pub struct WordCloud<'a> {
    pub title: &'a str,
    pub frequencies: &'a [(String, u64)],
    pub max_words: usize,
}

/// Whether an optional rendering capability can be used in this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    Available,
    Unavailable { capability: String, remedy: String },
}

// ---------------------------------------------------------------------------
// Renderer seam
// ---------------------------------------------------------------------------

pub trait Renderer {
    /// Draw a bar chart (ranked words or thematic terms) to `output`.
    fn bar_chart(&self, chart: &BarChart<'_>, output: &Path) -> Result<(), PipelineError>;

    /// Check the word-cloud layout engine before asking for a cloud.
    fn word_cloud_capability(&self) -> Capability;

    /// Draw a word cloud to `output`.
    fn word_cloud(&self, cloud: &WordCloud<'_>, output: &Path) -> Result<(), PipelineError>;
}

/// Bitmap renderer backed by `plotters`.
#[derive(Debug, Clone)]
pub struct PlottersRenderer {
    pub font_family: String,
}

impl Default for PlottersRenderer {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
        }
    }
}

impl Renderer for PlottersRenderer {
    fn bar_chart(&self, chart: &BarChart<'_>, output: &Path) -> Result<(), PipelineError> {
        bar::draw_bar_chart(chart, &self.font_family, output)
    }

    fn word_cloud_capability(&self) -> Capability {
        cloud::check_capability(&self.font_family)
    }

    fn word_cloud(&self, cloud: &WordCloud<'_>, output: &Path) -> Result<(), PipelineError> {
        cloud::draw_word_cloud(cloud, &self.font_family, output)
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Wrap a tightly packed RGB buffer drawn by `plotters`.
pub(crate) fn rgb_image(
    buffer: Vec<u8>,
    (width, height): (u32, u32),
) -> Result<image::RgbImage, PipelineError> {
    image::RgbImage::from_raw(width, height, buffer).ok_or_else(|| {
        PipelineError::Render(format!("pixel buffer does not match {width}x{height}"))
    })
}

/// Encode a tightly packed RGB buffer as a PNG at `output`.
pub(crate) fn save_png(
    buffer: Vec<u8>,
    size: (u32, u32),
    output: &Path,
) -> Result<(), PipelineError> {
    rgb_image(buffer, size)?.save_with_format(output, image::ImageFormat::Png)?;
    Ok(())
}

pub(crate) fn render_err(e: impl std::fmt::Display) -> PipelineError {
    PipelineError::Render(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_png_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.png");

        save_png(vec![255; 4 * 3 * 3], (4, 3), &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 3));
    }

    #[test]
    #[ignore = "needs a system sans-serif font; run with `cargo test -- --ignored`"]
    fn test_plotters_renderer_writes_pngs() {
        let renderer = PlottersRenderer::default();
        assert_eq!(renderer.word_cloud_capability(), Capability::Available);

        let dir = tempfile::tempdir().unwrap();
        let table: FrequencyTable = [("grace", 45), ("love", 30), ("Jerusalem", 12)]
            .into_iter()
            .map(|(w, c)| crate::data::model::FrequencyRecord::new(w, c))
            .collect();

        let bars = dir.path().join("bars.png");
        renderer
            .bar_chart(
                &BarChart {
                    title: "top",
                    x_desc: "Words",
                    y_desc: "Frequency",
                    records: &table,
                    color: crate::color::SKY_BLUE,
                },
                &bars,
            )
            .unwrap();
        let decoded = image::open(&bars).unwrap();
        assert_eq!((decoded.width(), decoded.height()), bar::BAR_CHART_SIZE);

        let (frequencies, _) = table.word_frequencies();
        let cloud_path = dir.path().join("cloud.png");
        renderer
            .word_cloud(
                &WordCloud {
                    title: "cloud",
                    frequencies: &frequencies,
                    max_words: 150,
                },
                &cloud_path,
            )
            .unwrap();
        let decoded = image::open(&cloud_path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), cloud::CANVAS_SIZE);
    }

    #[test]
    fn test_save_png_rejects_short_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let err = save_png(vec![0; 5], (4, 3), &dir.path().join("bad.png")).unwrap_err();
        assert!(matches!(err, PipelineError::Render(_)));
    }
}
