use crate::args::{Cli, Commands};
use crate::config::load_catalog;
use crate::handlers;
use anyhow::Result;
use grasshunt_engine::process_logs;

pub fn run(cli: Cli) -> Result<()> {
    let catalog = load_catalog(cli.catalog.as_deref())?;
    let report = process_logs(&cli.log_root, &catalog)?;

    match cli.command {
        Commands::Report { verbose } => handlers::report::handle(&report, cli.format, verbose),
        Commands::Scenes => handlers::scenes::handle(&report, cli.format),
        Commands::Players => handlers::players::handle(&report, cli.format),
    }
}
