mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::run(),
        Commands::Submit { wound, file } => commands::submit::run(&wound, file.as_deref()),
        Commands::Series { wound } => commands::series::run(&wound),
        Commands::Trends { wound } => commands::trends::run(&wound),
        Commands::Alerts { wound } => commands::alerts::run(&wound),
        Commands::Log { text } => commands::log::run(&text.join(" ")),
        Commands::Report => commands::report::run(),
        Commands::Status => commands::status::run(),
        Commands::Version => commands::version::run(),
    }
}
