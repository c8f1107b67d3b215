use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cvefeed::app::AppContext;
use cvefeed::cli::{commands, Cli, Commands};
use cvefeed::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing on stderr so it stays out of listings
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config.feed);

    let ctx = AppContext::new(&config.feed)?;

    match cli.command() {
        Commands::Browse => commands::browse(&ctx, &config).await?,
        Commands::List => commands::list(&ctx, &config).await?,
    }

    Ok(())
}
