use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use crate::context::ExecutionContext;
use crate::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config = Config::load(cli.config.as_deref())?;
    let ctx = ExecutionContext::new(config, cli.format, cli.utc_offset_minutes)?;

    match cli.command {
        Commands::View {
            table,
            filter,
            page,
            items_per_page,
            loading,
        } => {
            let page = usize::try_from(page.saturating_sub(1)).unwrap_or(usize::MAX);
            handlers::view::handle(&ctx, &table, &filter, page, items_per_page, loading)
        }

        Commands::Columns { table, filter } => handlers::columns::handle(&ctx, &table, &filter),

        Commands::Export {
            table,
            filter,
            to,
            output,
        } => handlers::export::handle(&ctx, &table, &filter, to, output),
    }
}
