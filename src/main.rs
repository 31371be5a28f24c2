use clap::Parser;
use tagsync::{config::Config, registry::DockerHubClient, runner::VersionUpdater};
use tracing_subscriber::EnvFilter;

/// Everything the run needs is a compile-time constant in `Config::default()`.
#[derive(Parser)]
#[command(name = "tagsync", version)]
#[command(about = "Sync Chart.yaml and values.yaml with the newest published image tag")]
struct Cli {
    /// Log selection details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("tagsync={level}")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::default();
    let source = DockerHubClient::new(&config)?;
    VersionUpdater::new(config, source).run().await?;
    Ok(())
}
