//! Entry point wiring CLI dispatch to pipeline modules.

use anyhow::Result;
use news_sentiment::{cli::Cli, config::Settings, logging};
use tracing::{info, instrument};

#[tokio::main(flavor = "current_thread")]
#[instrument]
async fn main() -> Result<()> {
    logging::init_tracing()?;
    let settings = Settings::load()?;
    let cli = Cli::parse();

    info!(?cli, "starting command");
    cli.dispatch(settings).await
}
