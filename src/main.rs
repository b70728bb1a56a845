use clap::Parser;
use newsbias::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    newsbias::logging::init_tracing();
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    newsbias::ui::runtime::run(config).await
}
