//! Reporting layer: console table and sentiment chart.

pub mod chart;
pub mod table;

pub use chart::{display_chart, plot_results, CHART_FILENAME};
pub use table::{build_table, configure_display, print_table, ReportTable, ScoredArticle, SentimentTally};
