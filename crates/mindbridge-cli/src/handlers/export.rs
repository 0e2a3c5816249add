use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use crate::types::{ExportFormat, OutputFormat};
use anyhow::{Context, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub fn handle(
    ctx: &ExecutionContext,
    table_path: &Path,
    filter: &FilterArgs,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let view = ctx.open_view(table_path, filter, None)?;
    let export = view.export();

    let output_path =
        output.unwrap_or_else(|| PathBuf::from(export.file_name(format.extension())));

    let file = fs::File::create(&output_path)
        .with_context(|| format!("Failed to create file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export.write_csv(&mut writer)?,
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &export.to_json())?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;

    log::info!(
        "exported {} rows x {} columns as {}",
        export.records.len(),
        export.headers.len(),
        format
    );

    match ctx.format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "path": output_path.display().to_string(),
                "rows": export.records.len(),
                "columns": export.headers,
            })
        ),
        OutputFormat::Plain => println!(
            "Exported {} rows to {}",
            export.records.len(),
            output_path.display()
        ),
    }

    Ok(())
}
