use crate::types::{ExportFormat, LogLevel, OutputFormat};
use clap::{Args, Parser, Subcommand};
use mindbridge_types::ItemsPerPage;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mindbridge")]
#[command(about = "Filter, page and export MindBridge dashboard tables", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Config file (default: MINDBRIDGE_CONFIG or the user config dir)"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(
        long,
        global = true,
        allow_hyphen_values = true,
        help = "Offset from UTC used to display times of day (default: local time)"
    )]
    pub utc_offset_minutes: Option<i32>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show one page of a table
    View {
        /// Table document: {"columns": [...], "data": [...]}
        table: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u64).range(1..),
            help = "Page number, starting at 1"
        )]
        page: u64,

        #[arg(long, help = "Rows per page, or 'all' to disable paging")]
        items_per_page: Option<ItemsPerPage>,

        #[arg(long, help = "Show the loading placeholder instead of rows")]
        loading: bool,
    },

    /// List columns and whether they are shown
    Columns {
        table: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Write the filtered rows of the visible columns to a file
    Export {
        table: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, default_value = "csv")]
        to: ExportFormat,

        #[arg(long, help = "Output path (default: <caption>.<ext> in the current directory)")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    #[arg(long, default_value = "", help = "Free-text search over filterable columns")]
    pub filter: String,

    #[arg(long = "hide", value_name = "COLUMN", help = "Hide a column by name (repeatable)")]
    pub hide: Vec<String>,

    #[arg(long, help = "Show every column, including ones hidden by config")]
    pub show_all: bool,
}
