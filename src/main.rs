use clap::Parser;
use halmi::catalog::load_catalog;
use halmi::cli::Cli;
use halmi::commands::handle_runtime_commands;
use halmi::services::config::{load_config, resolve_data_dir};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config().unwrap_or_default();
    let data_dir = resolve_data_dir(cli.data.as_deref(), &config);
    let catalog = load_catalog(&data_dir)?;

    handle_runtime_commands(&cli, &catalog)
}
