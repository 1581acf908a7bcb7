//! Scored article table and its console rendering.

use anyhow::Result;
use indexmap::IndexMap;
use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::debug;

use crate::{
    data::newsapi::Article,
    nlp::sentiment::{analyze_sentiment, SentimentLabel},
};

/// Maximum rows shown before the console table is elided.
pub const MAX_DISPLAY_ROWS: usize = 500;
/// Maximum characters shown per text cell.
pub const MAX_DISPLAY_STR_LEN: usize = 80;
const TABLE_WIDTH: usize = 200;

/// One article headline with its sentiment.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredArticle {
    pub title: String,
    pub source: String,
    pub label: SentimentLabel,
    pub compound: f64,
    pub url: String,
}

/// Scored articles in API response order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportTable {
    rows: Vec<ScoredArticle>,
}

impl ReportTable {
    pub fn rows(&self) -> &[ScoredArticle] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Count rows per label, in display order, omitting absent labels.
    pub fn tally(&self) -> SentimentTally {
        let mut counts: IndexMap<SentimentLabel, usize> = SentimentLabel::ALL
            .into_iter()
            .map(|label| (label, 0))
            .collect();
        for row in &self.rows {
            *counts.entry(row.label).or_default() += 1;
        }
        counts.retain(|_, count| *count > 0);
        SentimentTally { counts }
    }

    /// Columnar view used for console output.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let titles: Vec<&str> = self.rows.iter().map(|r| r.title.as_str()).collect();
        let sources: Vec<&str> = self.rows.iter().map(|r| r.source.as_str()).collect();
        let labels: Vec<&str> = self.rows.iter().map(|r| r.label.as_str()).collect();
        let scores: Vec<String> = self
            .rows
            .iter()
            .map(|r| format!("{:.2}", r.compound))
            .collect();
        let urls: Vec<&str> = self.rows.iter().map(|r| r.url.as_str()).collect();

        let df = DataFrame::new(vec![
            Series::new("Title".into(), titles),
            Series::new("Source".into(), sources),
            Series::new("Sentiment".into(), labels),
            Series::new("Score (Compound)".into(), scores),
            Series::new("URL".into(), urls),
        ])?;
        Ok(df)
    }
}

/// Label counts derived from a [`ReportTable`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentimentTally {
    counts: IndexMap<SentimentLabel, usize>,
}

impl SentimentTally {
    pub fn get(&self, label: SentimentLabel) -> usize {
        self.counts.get(&label).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SentimentLabel, usize)> + '_ {
        self.counts.iter().map(|(label, count)| (*label, *count))
    }

    pub fn labels(&self) -> Vec<SentimentLabel> {
        self.counts.keys().copied().collect()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Score every article with a non-empty title; the rest are skipped.
pub fn build_table(articles: &[Article]) -> ReportTable {
    let rows = articles
        .iter()
        .filter_map(|article| {
            let title = article.title.as_deref().filter(|t| !t.is_empty())?;
            let sentiment = analyze_sentiment(title);
            Some(ScoredArticle {
                title: title.to_string(),
                source: article.source.name.clone().unwrap_or_default(),
                label: sentiment.label,
                compound: sentiment.compound,
                url: article.url.clone().unwrap_or_default(),
            })
        })
        .collect::<Vec<_>>();
    debug!(input = articles.len(), scored = rows.len(), "built report table");
    ReportTable { rows }
}

/// Raise polars' console limits to fit the report. Mutates the process
/// environment, so call it once at startup before any other thread runs.
pub fn configure_display() {
    std::env::set_var("POLARS_FMT_MAX_ROWS", MAX_DISPLAY_ROWS.to_string());
    std::env::set_var("POLARS_FMT_STR_LEN", MAX_DISPLAY_STR_LEN.to_string());
    std::env::set_var("POLARS_FMT_MAX_COLS", "8");
    std::env::set_var("POLARS_TABLE_WIDTH", TABLE_WIDTH.to_string());
}

/// Render the table for the console, without the URL column.
pub fn render_table(table: &ReportTable) -> Result<String> {
    let view = table
        .to_frame()?
        .select(["Title", "Source", "Sentiment", "Score (Compound)"])?;
    Ok(view.to_string())
}

/// Print the table to stdout under a section heading.
pub fn print_table(table: &ReportTable) -> Result<()> {
    let rendered = render_table(table)?;
    println!("\n--- News Sentiment Analysis ---");
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::newsapi::ArticleSource;

    fn article(title: Option<&str>, source: &str, url: &str) -> Article {
        Article {
            title: title.map(str::to_string),
            source: ArticleSource {
                id: None,
                name: Some(source.to_string()),
            },
            url: Some(url.to_string()),
            ..Article::default()
        }
    }

    #[test]
    fn tally_sums_to_table_length_in_display_order() {
        let articles = vec![
            article(Some("Terrible disaster strikes the city"), "A", "u1"),
            article(Some("Wonderful amazing victory"), "B", "u2"),
            article(Some("Horrible crash kills many"), "C", "u3"),
        ];
        let table = build_table(&articles);
        let tally = table.tally();
        assert_eq!(tally.total(), table.len());
        assert_eq!(tally.get(SentimentLabel::Negative), 2);
        assert_eq!(tally.get(SentimentLabel::Positive), 1);
        assert_eq!(tally.get(SentimentLabel::Neutral), 0);
        assert_eq!(
            tally.labels(),
            vec![SentimentLabel::Positive, SentimentLabel::Negative]
        );
        assert_eq!(tally.max_count(), 2);
    }

    #[test]
    fn frame_has_one_row_per_article() {
        let table = build_table(&[article(Some("Quiet day"), "A", "u1")]);
        let df = table.to_frame().unwrap();
        assert_eq!(df.height(), 1);
        assert_eq!(df.width(), 5);
    }

    #[test]
    fn rendered_table_omits_url_and_rounds_scores() {
        let table = build_table(&[article(Some("Great breakthrough in AI"), "X", "u1")]);
        let rendered = render_table(&table).unwrap();
        assert!(rendered.contains("Great breakthrough in AI"));
        assert!(rendered.contains("Score (Compound)"));
        assert!(!rendered.contains("URL"));
        let score = format!("{:.2}", table.rows()[0].compound);
        assert!(rendered.contains(&score));
    }

    #[test]
    fn empty_table_has_empty_tally() {
        let table = build_table(&[]);
        assert!(table.is_empty());
        assert!(table.tally().is_empty());
    }
}
