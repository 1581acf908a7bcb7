//! Bar chart of sentiment counts.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use plotters::prelude::*;
use tracing::{info, warn};

use super::table::{ReportTable, SentimentTally};
use crate::nlp::sentiment::SentimentLabel;

/// File the `analyze` command writes into the working directory.
pub const CHART_FILENAME: &str = "grafico_sentimentos.png";

const CHART_SIZE: (u32, u32) = (800, 600);

fn label_color(label: SentimentLabel) -> RGBColor {
    match label {
        SentimentLabel::Positive => RGBColor(0x4C, 0xAF, 0x50),
        SentimentLabel::Negative => RGBColor(0xF4, 0x43, 0x36),
        SentimentLabel::Neutral => RGBColor(0xFF, 0xC1, 0x07),
    }
}

/// Uppercase every letter that follows a non-letter and lowercase the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_letter = false;
    for ch in text.chars() {
        if after_letter {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        after_letter = ch.is_alphabetic();
    }
    out
}

pub fn chart_title(query: &str) -> String {
    format!("Sentiment Analysis for: \"{}\"", title_case(query))
}

/// Render the label counts of `table` to a PNG at `path`, replacing any
/// existing file.
pub fn plot_results(table: &ReportTable, query: &str, path: &Path) -> Result<PathBuf> {
    let tally = table.tally();
    if tally.is_empty() {
        return Err(anyhow!("no scored articles to plot"));
    }
    draw_tally(&tally, &chart_title(query), path)
        .with_context(|| format!("rendering chart to {}", path.display()))?;
    info!(path = %path.display(), total = tally.total(), "saved chart");
    Ok(path.to_path_buf())
}

/// Horizontal extent of the bar for `labels[idx]`: from its own segment
/// start to the next label's, or to the axis end for the last one.
fn bar_span(
    labels: &[SentimentLabel],
    idx: usize,
) -> (SegmentValue<&SentimentLabel>, SegmentValue<&SentimentLabel>) {
    let end = match labels.get(idx + 1) {
        Some(next) => SegmentValue::Exact(next),
        None => SegmentValue::Last,
    };
    (SegmentValue::Exact(&labels[idx]), end)
}

fn draw_tally(tally: &SentimentTally, title: &str, path: &Path) -> Result<()> {
    let labels = tally.labels();
    let y_max = tally.max_count() as u32 + 1;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(labels.as_slice().into_segmented(), 0u32..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Sentiment")
        .y_desc("Number of articles")
        .x_labels(labels.len())
        .x_label_formatter(&|value| match value {
            SegmentValue::CenterOf(label) => label.to_string(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(labels.iter().enumerate().map(|(idx, label)| {
        let (start, end) = bar_span(&labels, idx);
        let mut bar = Rectangle::new(
            [(start, 0), (end, tally.get(*label) as u32)],
            label_color(*label).filled(),
        );
        bar.set_margin(0, 0, 25, 25);
        bar
    }))?;

    root.present()?;
    Ok(())
}

/// Open the saved chart in the system image viewer.
pub fn display_chart(path: &Path) {
    if let Err(err) = opener::open(path) {
        warn!(%err, path = %path.display(), "could not open chart viewer");
    }
}
