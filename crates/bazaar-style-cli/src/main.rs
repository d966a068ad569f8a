use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bazaar_style_cli::{
    cli::{Cli, Commands},
    commands,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG still wins when set
    let env_filter = EnvFilter::builder()
        .with_default_directive(cli.level_filter().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check => commands::check::execute(cli.config).await,
        Commands::Show { format } => commands::show::execute(cli.config, format.into()).await,
        Commands::Init {
            path,
            format,
            force,
        } => commands::init::execute(path, format.into(), force).await,
        Commands::Export { output, force } => {
            commands::export::execute(cli.config, output, force).await
        }
        Commands::Matches { paths, strict } => {
            commands::matches::execute(cli.config, paths, strict).await
        }
        Commands::Schema => commands::schema::execute(),
    }
}
