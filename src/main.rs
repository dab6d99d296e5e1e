use clap::Parser;
use auth_cache_adapter::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli::init();

    match cli.command {
        Command::Cache(command) => cli::cache::run(command, &config).await,
        Command::Status => cli::status::run(&config),
    }
}
