//! Command-line interface wiring for news-sentiment.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod analyze;
pub mod score;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Headline sentiment explorer for NewsAPI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Analyze(args) => analyze::run(args, settings).await,
            Commands::Score(args) => score::run(args).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch news for a query, score headlines, print the table and chart it.
    Analyze(analyze::Args),
    /// Score one text and print its label and compound score.
    Score(score::Args),
}
