//! Word cloud: layout by the `wcloud` engine, title and framing by `plotters`.
//!
//! `wcloud` sizes words by their normalised token frequency in a text, so the
//! `(word, count)` pairs are expanded into a synthetic corpus first.

use std::path::Path;

use crate::error::PipelineError;

use super::{Capability, WordCloud};

/// Full image size, in pixels.
pub const CANVAS_SIZE: (u32, u32) = (1000, 800);
/// Area the words are laid out in, centred below the title.
pub const CLOUD_SIZE: (u32, u32) = (800, 400);
/// Repetitions of the most frequent word in the synthetic corpus.
pub const CORPUS_SCALE: u64 = 2_000;

const ENGINE: &str = "word-cloud layout engine";
#[cfg(feature = "wordcloud")]
const LAYOUT_SEED: u64 = 42;

/// The words the cloud is built from: stable sort by count, so ties keep
/// table order, then cut to `max_words`.
pub fn cloud_words(frequencies: &[(String, u64)], max_words: usize) -> Vec<(String, u64)> {
    let mut words = frequencies.to_vec();
    words.sort_by(|a, b| b.1.cmp(&a.1));
    words.truncate(max_words);
    words
}

/// Expand counts into a space-separated corpus in which the most frequent
/// word appears [`CORPUS_SCALE`] times and every non-zero word at least once.
pub fn cloud_corpus(words: &[(String, u64)]) -> String {
    let max = words.iter().map(|(_, c)| *c).max().unwrap_or(0);
    if max == 0 {
        return String::new();
    }

    let mut corpus = String::new();
    for (word, count) in words.iter().filter(|(_, c)| *c > 0) {
        let repeats = ((*count as f64 / max as f64) * CORPUS_SCALE as f64)
            .round()
            .max(1.0) as u64;
        for _ in 0..repeats {
            corpus.push_str(word);
            corpus.push(' ');
        }
    }
    corpus
}

// ---------------------------------------------------------------------------
// Capability check
// ---------------------------------------------------------------------------

/// Check the layout engine is compiled in and the title font can be measured.
#[cfg(feature = "wordcloud")]
pub fn check_capability(font_family: &str) -> Capability {
    use plotters::style::{FontDesc, FontFamily, FontStyle};

    let font = FontDesc::new(FontFamily::from(font_family), 20.0, FontStyle::Normal);
    match font.box_size("Ag") {
        Ok(_) => Capability::Available,
        Err(e) => Capability::Unavailable {
            capability: format!("{ENGINE} (font '{font_family}': {e})"),
            remedy: format!("install a '{font_family}' TrueType font, e.g. the DejaVu fonts"),
        },
    }
}

#[cfg(not(feature = "wordcloud"))]
pub fn check_capability(_font_family: &str) -> Capability {
    Capability::Unavailable {
        capability: ENGINE.to_string(),
        remedy: "rebuild with `cargo build --features wordcloud`".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Lay out at most `max_words` words on a [`CLOUD_SIZE`] white canvas.
///
/// An empty or all-zero input yields a blank canvas.
#[cfg(feature = "wordcloud")]
pub fn generate_cloud(
    frequencies: &[(String, u64)],
    max_words: usize,
) -> Result<image::RgbaImage, PipelineError> {
    use std::collections::HashSet;

    use wcloud::{Tokenizer, WordCloudSize};

    let (width, height) = CLOUD_SIZE;
    let words = cloud_words(frequencies, max_words);
    let corpus = cloud_corpus(&words);
    if corpus.is_empty() {
        return Ok(image::RgbaImage::from_pixel(
            width,
            height,
            image::Rgba([255, 255, 255, 255]),
        ));
    }

    // Stopwords were already removed upstream; the engine must not drop more.
    let tokenizer = Tokenizer::default()
        .with_max_words(max_words as _)
        .with_filter(HashSet::new());
    let engine = wcloud::WordCloud::default()
        .with_tokenizer(tokenizer)
        .with_background_color([255, 255, 255, 255].into())
        .with_rng_seed(LAYOUT_SEED);

    let rendered = engine.generate_from_text(
        &corpus,
        WordCloudSize::FromDimensions { width, height },
        1.0,
    );
    log::debug!("laid out {} distinct words", words.len());

    // Re-wrap through raw bytes: the engine may link a different `image` release.
    let (w, h) = (rendered.width(), rendered.height());
    image::RgbaImage::from_raw(w, h, rendered.into_raw())
        .ok_or_else(|| PipelineError::Render(format!("word cloud buffer does not match {w}x{h}")))
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

#[cfg(not(feature = "wordcloud"))]
pub fn draw_word_cloud(
    _cloud: &WordCloud<'_>,
    _font_family: &str,
    _output: &Path,
) -> Result<(), PipelineError> {
    Err(PipelineError::CapabilityUnavailable {
        capability: ENGINE.to_string(),
        remedy: "rebuild with `cargo build --features wordcloud`".to_string(),
    })
}

/// Lay out the cloud, put it under a title and save it as a PNG at `output`.
#[cfg(feature = "wordcloud")]
pub fn draw_word_cloud(
    cloud: &WordCloud<'_>,
    font_family: &str,
    output: &Path,
) -> Result<(), PipelineError> {
    use plotters::prelude::*;
    use plotters::style::text_anchor::{HPos, Pos, VPos};

    use super::{render_err, rgb_image};

    let layout = generate_cloud(cloud.frequencies, cloud.max_words)?;

    let (width, height) = CANVAS_SIZE;
    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, CANVAS_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let title_style = TextStyle::from((font_family, 28).into_font())
            .pos(Pos::new(HPos::Center, VPos::Top));
        root.draw_text(cloud.title, &title_style, (width as i32 / 2, 30))
            .map_err(render_err)?;
        root.present().map_err(render_err)?;
    }

    let mut canvas = rgb_image(buffer, CANVAS_SIZE)?;
    let layout = image::DynamicImage::ImageRgba8(layout).to_rgb8();
    let x0 = width.saturating_sub(layout.width()) / 2;
    let y0 = height.saturating_sub(layout.height()) / 2;
    image::imageops::overlay(&mut canvas, &layout, x0 as i64, y0 as i64);

    canvas.save_with_format(output, image::ImageFormat::Png)?;
    log::info!("Word cloud saved as {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(rows: &[(&str, u64)]) -> Vec<(String, u64)> {
        rows.iter().map(|&(w, c)| (w.to_string(), c)).collect()
    }

    #[test]
    fn test_cloud_words_keep_table_order_for_ties() {
        let freq = pairs(&[("mercy", 30), ("grace", 45), ("amen", 30), ("peace", 2)]);

        assert_eq!(
            cloud_words(&freq, 150),
            pairs(&[("grace", 45), ("mercy", 30), ("amen", 30), ("peace", 2)])
        );
        assert_eq!(
            cloud_words(&freq, 2),
            pairs(&[("grace", 45), ("mercy", 30)])
        );
    }

    #[test]
    fn test_cloud_corpus_scales_counts() {
        let corpus = cloud_corpus(&pairs(&[("grace", 4000), ("love", 1000), ("hope", 1)]));
        let count = |w: &str| corpus.split_whitespace().filter(|t| *t == w).count() as u64;

        assert_eq!(count("grace"), CORPUS_SCALE);
        assert_eq!(count("love"), CORPUS_SCALE / 4);
        assert_eq!(count("hope"), 1);
    }

    #[test]
    fn test_cloud_corpus_empty_and_zero() {
        assert!(cloud_corpus(&[]).is_empty());
        assert!(cloud_corpus(&pairs(&[("nothing", 0)])).is_empty());
    }

    #[cfg(feature = "wordcloud")]
    #[test]
    fn test_generate_cloud_fills_cloud_area() {
        let freq = pairs(&[("grace", 45), ("love", 30), ("Jerusalem", 12), ("mercy", 11)]);
        let layout = generate_cloud(&freq, 150).unwrap();
        assert_eq!((layout.width(), layout.height()), CLOUD_SIZE);
    }

    #[cfg(feature = "wordcloud")]
    #[test]
    fn test_generate_cloud_blank_for_empty_input() {
        let layout = generate_cloud(&[], 150).unwrap();
        assert_eq!((layout.width(), layout.height()), CLOUD_SIZE);
        assert!(layout.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[cfg(not(feature = "wordcloud"))]
    #[test]
    fn test_capability_unavailable_without_feature() {
        let cap = check_capability("sans-serif");
        assert!(matches!(cap, Capability::Unavailable { .. }));
    }
}
