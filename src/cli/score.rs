//! CLI entry-point for scoring a single piece of text.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::nlp::sentiment::analyze_sentiment;

/// Args for the `score` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Text to score, typically a headline.
    #[arg(long, short)]
    pub text: String,
}

#[instrument]
pub async fn run(args: Args) -> Result<()> {
    let sentiment = analyze_sentiment(&args.text);
    println!("{}\t{:.2}", sentiment.label, sentiment.compound);
    Ok(())
}
