use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use crate::presentation;
use crate::types::OutputFormat;
use anyhow::Result;
use mindbridge_types::ItemsPerPage;
use std::path::Path;

pub fn handle(
    ctx: &ExecutionContext,
    table_path: &Path,
    filter: &FilterArgs,
    page: usize,
    items_per_page: Option<ItemsPerPage>,
    loading: bool,
) -> Result<()> {
    let mut view = ctx.open_view(table_path, filter, items_per_page)?;
    view.set_current_page(page);
    view.set_loading(loading);

    let frame = view.frame();

    match ctx.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&frame)?),
        OutputFormat::Plain => print!("{}", presentation::table::render(&frame)),
    }

    Ok(())
}
