//! CLI entry-point for the fetch, score and report pipeline.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    config::Settings,
    data::newsapi::NewsClient,
    report::{self, CHART_FILENAME},
};

/// Query used when none is given on the command line.
pub const DEFAULT_QUERY: &str = "inteligência artificial";

/// Args for the `analyze` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Search text passed verbatim to NewsAPI.
    #[arg(long, short, default_value = DEFAULT_QUERY)]
    pub query: String,
    /// Save the chart without opening an image viewer.
    #[arg(long)]
    pub no_show: bool,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let api_key = settings.require_api_key()?;
    report::configure_display();
    let client = NewsClient::new(&settings)?;

    let articles = client.fetch_news(api_key, &args.query).await;
    if articles.is_empty() {
        return Ok(());
    }

    let table = report::build_table(&articles);
    if table.is_empty() {
        info!("no article carried a title; nothing to report");
        return Ok(());
    }
    report::print_table(&table)?;

    let cwd = std::env::current_dir().context("resolving working directory")?;
    let path = report::plot_results(&table, &args.query, Path::new(CHART_FILENAME))?;
    println!(
        "\nChart saved as '{CHART_FILENAME}' in directory: {}",
        cwd.display()
    );

    if !args.no_show {
        report::display_chart(&path);
    }
    Ok(())
}
