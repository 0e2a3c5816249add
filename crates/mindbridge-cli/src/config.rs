use anyhow::{Context, Result, bail};
use chrono::{FixedOffset, Local, Offset};
use mindbridge_types::{ConditionalRowStyle, ItemsPerPage, RowPredicate, RowStyle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Environment variable pointing at an alternative config file
pub const CONFIG_ENV: &str = "MINDBRIDGE_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit path
/// 2. MINDBRIDGE_CONFIG environment variable
/// 3. `<config dir>/mindbridge/config.toml`
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV)
        && !env_path.is_empty()
    {
        return Some(PathBuf::from(env_path));
    }

    dirs::config_dir().map(|dir| dir.join("mindbridge").join("config.toml"))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub table: TableConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_per_page: Option<ItemsPerPage>,

    /// Used when the table document has no caption of its own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default)]
    pub hidden_columns: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,

    #[serde(default)]
    pub row_styles: Vec<RowStyleRule>,
}

/// `[[table.row_styles]]` entry: exactly one of `equals` / `contains`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowStyleRule {
    pub field: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equals: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains: Option<String>,

    pub style: BTreeMap<String, String>,
}

impl RowStyleRule {
    pub fn to_conditional(&self) -> Result<ConditionalRowStyle> {
        let when = match (&self.equals, &self.contains) {
            (Some(value), None) => RowPredicate::FieldEquals {
                field: self.field.clone(),
                value: value.clone(),
            },
            (None, Some(text)) => RowPredicate::FieldContains {
                field: self.field.clone(),
                text: text.clone(),
            },
            _ => bail!(
                "row style for field '{}' needs exactly one of 'equals' or 'contains'",
                self.field
            ),
        };
        Ok(ConditionalRowStyle::new(when, RowStyle(self.style.clone())))
    }
}

impl TableConfig {
    pub fn row_styles(&self) -> Result<Vec<ConditionalRowStyle>> {
        self.row_styles
            .iter()
            .map(RowStyleRule::to_conditional)
            .collect()
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Offset used to display times of day; the host's local offset by default.
pub fn display_offset(utc_offset_minutes: Option<i32>) -> Result<FixedOffset> {
    match utc_offset_minutes {
        Some(minutes) => minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .with_context(|| format!("UTC offset out of range: {} minutes", minutes)),
        None => Ok(Local::now().offset().fix()),
    }
}
