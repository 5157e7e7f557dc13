use campus_cms::cli::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campus=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { path, name }) => {
            campus_cms::cli::init::run(path, name).await?;
        }
        Some(Commands::Serve {
            host,
            port,
            production,
        }) => {
            campus_cms::cli::serve::run(&cli.config, host, port, production).await?;
        }
        Some(Commands::Migrate) => {
            campus_cms::cli::migrate::run(&cli.config).await?;
        }
        Some(Commands::Token { command }) => {
            campus_cms::cli::token::run(&cli.config, command).await?;
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
