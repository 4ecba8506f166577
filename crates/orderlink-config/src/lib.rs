use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use orderlink_core::layout::{
    DEFAULT_ITEM_END, DEFAULT_ITEM_START, DEFAULT_NOTES_COLUMN, DEFAULT_TOTAL_COLUMN,
};
use orderlink_core::{CoreError, MessageTemplate, PipelineOptions, SheetLayout, SummaryOptions};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "orderlink";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_LINK_LABEL: &str = "فتح واتساب";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub pipeline: PipelineOptions,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Wrap links in a spreadsheet `HYPERLINK` formula.
    pub hyperlink: bool,
    pub link_label: String,
    pub done_column: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            hyperlink: true,
            link_label: DEFAULT_LINK_LABEL.to_string(),
            done_column: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid layout: {0}")]
    InvalidLayout(#[source] CoreError),
    #[error("invalid message template: {0}")]
    InvalidTemplate(#[source] CoreError),
    #[error("invalid export.link_label: must not be empty")]
    EmptyLinkLabel,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    layout: Option<LayoutFile>,
    message: Option<MessageFile>,
    export: Option<ExportFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LayoutFile {
    notes_column: Option<usize>,
    total_column: Option<usize>,
    item_start: Option<usize>,
    item_end: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct MessageFile {
    template: Option<String>,
    items_on_new_lines: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExportFile {
    hyperlink: Option<bool>,
    link_label: Option<String>,
    done_column: Option<bool>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(layout) = parsed.layout {
        config.pipeline.layout = SheetLayout::new(
            layout.notes_column.unwrap_or(DEFAULT_NOTES_COLUMN),
            layout.total_column.unwrap_or(DEFAULT_TOTAL_COLUMN),
            layout.item_start.unwrap_or(DEFAULT_ITEM_START),
            layout.item_end.unwrap_or(DEFAULT_ITEM_END),
        )
        .map_err(ConfigError::InvalidLayout)?;
    }

    if let Some(message) = parsed.message {
        if let Some(template) = message.template {
            config.pipeline.template =
                MessageTemplate::parse(&template).map_err(ConfigError::InvalidTemplate)?;
        }
        if let Some(items_on_new_lines) = message.items_on_new_lines {
            config.pipeline.summary = SummaryOptions { items_on_new_lines };
        }
    }

    if let Some(export) = parsed.export {
        if let Some(hyperlink) = export.hyperlink {
            config.export.hyperlink = hyperlink;
        }
        if let Some(label) = export.link_label {
            if label.trim().is_empty() {
                return Err(ConfigError::EmptyLinkLabel);
            }
            config.export.link_label = label;
        }
        if let Some(done_column) = export.done_column {
            config.export.done_column = done_column;
        }
    }

    Ok(config)
}
