use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::data::model::FrequencyTable;
use crate::error::PipelineError;

use super::{render_err, save_png, BarChart};

/// Canvas size of both bar charts, in pixels.
pub const BAR_CHART_SIZE: (u32, u32) = (1200, 800);

// ---------------------------------------------------------------------------
// Bar chart (ranked words, thematic terms)
// ---------------------------------------------------------------------------

/// Render `chart` to a PNG at `output`.
///
/// An empty table still produces a chart with axes and title.
pub fn draw_bar_chart(
    chart: &BarChart<'_>,
    font_family: &str,
    output: &Path,
) -> Result<(), PipelineError> {
    let (width, height) = BAR_CHART_SIZE;
    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, BAR_CHART_SIZE).into_drawing_area();
        plot_bars(&root, chart, font_family).map_err(render_err)?;
        root.present().map_err(render_err)?;
    }
    save_png(buffer, BAR_CHART_SIZE, output)?;
    log::info!("Chart saved as {}", output.display());
    Ok(())
}

/// Upper bound of the y axis: leaves room for the value annotations.
pub fn y_axis_bound(max_count: u64) -> u64 {
    max_count.saturating_add(max_count / 10).saturating_add(1)
}

/// Number of x segments and the y bound for a table. An empty table still
/// gets one empty segment and a unit axis.
pub fn chart_extent(records: &FrequencyTable) -> (usize, u64) {
    (records.len().max(1), y_axis_bound(records.max_count()))
}

fn plot_bars<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &BarChart<'_>,
    family: &str,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let records = chart.records.records();
    let (segments, y_bound) = chart_extent(chart.records);
    let labels: Vec<&str> = records.iter().map(|r| r.word.as_str()).collect();

    let mut ctx = ChartBuilder::on(root)
        .caption(chart.title, (family, 28).into_font())
        .margin(20)
        .x_label_area_size(120)
        .y_label_area_size(80)
        .build_cartesian_2d(
            (0..segments).into_segmented(),
            0u64..y_bound,
        )?;

    // Word labels are rotated so long words don't collide.
    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(segments)
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => labels.get(*i).map(|s| s.to_string()).unwrap_or_default(),
            _ => String::new(),
        })
        .x_label_style(
            (family, 14)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .x_desc(chart.x_desc)
        .y_desc(chart.y_desc)
        .axis_desc_style((family, 18).into_font())
        .draw()?;

    ctx.draw_series(
        Histogram::vertical(&ctx)
            .style(chart.color.filled())
            .margin(8)
            .data(records.iter().enumerate().map(|(i, r)| (i, r.count))),
    )?;

    let annotation =
        TextStyle::from((family, 14).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
    ctx.draw_series(records.iter().enumerate().map(|(i, r)| {
        Text::new(
            r.count.to_string(),
            (SegmentValue::CenterOf(i), r.count),
            annotation.clone(),
        )
    }))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::SKY_BLUE;
    use crate::data::model::FrequencyRecord;

    #[test]
    fn test_y_axis_bound_leaves_headroom() {
        assert_eq!(y_axis_bound(0), 1);
        assert_eq!(y_axis_bound(100), 111);
        assert!(y_axis_bound(9000) > 9000);
        assert_eq!(y_axis_bound(u64::MAX), u64::MAX);
        assert_eq!(y_axis_bound(u64::MAX - 5), u64::MAX);
    }

    #[test]
    fn test_chart_extent_of_empty_table() {
        assert_eq!(chart_extent(&FrequencyTable::default()), (1, 1));

        let table: FrequencyTable = [("grace", 45), ("love", 30)]
            .into_iter()
            .map(|(w, c)| FrequencyRecord::new(w, c))
            .collect();
        assert_eq!(chart_extent(&table), (2, 50));
    }

    #[test]
    #[ignore = "needs a system sans-serif font; run with `cargo test -- --ignored`"]
    fn test_renders_empty_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        let empty = FrequencyTable::default();

        draw_bar_chart(
            &BarChart {
                title: "nothing to rank",
                x_desc: "Words",
                y_desc: "Frequency",
                records: &empty,
                color: SKY_BLUE,
            },
            "sans-serif",
            &path,
        )
        .unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), BAR_CHART_SIZE);
    }
}
