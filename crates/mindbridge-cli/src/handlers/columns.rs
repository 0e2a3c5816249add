use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use crate::presentation;
use crate::types::OutputFormat;
use anyhow::Result;
use std::path::Path;

pub fn handle(ctx: &ExecutionContext, table_path: &Path, filter: &FilterArgs) -> Result<()> {
    let view = ctx.open_view(table_path, filter, None)?;
    let entries = view.state().visibility.entries();

    match ctx.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(entries)?),
        OutputFormat::Plain => print!("{}", presentation::columns::render(entries)),
    }

    Ok(())
}
