use crate::args::FilterArgs;
use crate::config::{Config, display_offset};
use crate::types::OutputFormat;
use anyhow::{Context, Result, bail};
use chrono::FixedOffset;
use mindbridge_engine::{ComparatorRegistry, TableView};
use mindbridge_types::{ItemsPerPage, TableData};
use std::path::Path;

/// Settings resolved once per invocation and shared by all handlers.
pub struct ExecutionContext {
    pub config: Config,
    pub format: OutputFormat,
    pub display_offset: FixedOffset,
}

impl ExecutionContext {
    pub fn new(
        config: Config,
        format: OutputFormat,
        utc_offset_minutes: Option<i32>,
    ) -> Result<Self> {
        let display_offset =
            display_offset(utc_offset_minutes.or(config.table.utc_offset_minutes))?;
        Ok(Self {
            config,
            format,
            display_offset,
        })
    }

    pub fn load_table(&self, path: &Path) -> Result<TableData> {
        let mut table = TableData::load(path)
            .with_context(|| format!("Failed to load table: {}", path.display()))?;

        if table.caption.is_none() {
            table.caption = self.config.table.caption.clone();
        }
        if table.caption.is_none() {
            table.caption = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned());
        }

        log::info!(
            "loaded {} rows, {} columns from {}",
            table.data.len(),
            table.columns.len(),
            path.display()
        );
        Ok(table)
    }

    /// Mounts a view over `path` with config and command-line settings applied.
    ///
    /// Flags win over config: `--items-per-page` over `items_per_page`,
    /// `--show-all` over both `hidden_columns` and `--hide`.
    pub fn open_view(
        &self,
        path: &Path,
        filter: &FilterArgs,
        items_per_page: Option<ItemsPerPage>,
    ) -> Result<TableView> {
        let table = self.load_table(path)?;
        let registry = ComparatorRegistry::standard(self.display_offset);

        let mut view = TableView::with_registry(table, registry)
            .with_items_per_page(
                items_per_page
                    .or(self.config.table.items_per_page)
                    .unwrap_or_default(),
            )
            .with_row_styles(self.config.table.row_styles()?);

        for name in &self.config.table.hidden_columns {
            view.set_column_hidden(name, true);
        }

        for name in &filter.hide {
            if !view.set_column_hidden(name, true) {
                bail!("Unknown column: {}", name);
            }
        }

        if filter.show_all {
            view.show_all_columns();
        }

        view.on_filter(&filter.filter);
        Ok(view)
    }
}
