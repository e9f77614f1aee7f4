use clap::Parser;

use storefront_rs::cli::{self, Cli, Commands};
use storefront_rs::config::{ConfigLoader, LoggerConfig};
use storefront_rs::server::Server;

/// Installs the global tracing subscriber from the logger settings.
///
/// RUST_LOG takes precedence over the configured level when set.
fn init_tracing(config: &LoggerConfig) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.colored);

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = match &cli.config {
        Some(path) => ConfigLoader::with_file(path.clone()),
        None => ConfigLoader::new()?,
    };
    if let Some(env) = &cli.env {
        loader = loader.with_environment(env.clone().into());
    }

    let mut settings = loader.load()?;
    cli::config_merger::apply_cli_overrides(&mut settings, &cli);

    init_tracing(&settings.logger);

    cli::executor::execute_command(&cli, settings.clone()).await?;

    match &cli.command {
        Some(Commands::Serve { dry_run: true, .. }) | Some(Commands::Migrate { .. }) => Ok(()),
        _ => Server::new(settings).run().await,
    }
}
