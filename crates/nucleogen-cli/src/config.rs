use crate::error::{CliError, Result};
use nucleogen::core::io::table::TableOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialConfig {
    output_dir: Option<PathBuf>,
    table: Option<PartialTableConfig>,
}

#[derive(Deserialize, Debug, Default, Clone, Copy)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialTableConfig {
    scale: Option<f64>,
    height_offset: Option<f64>,
}

/// Resolved settings: built-in defaults overlaid with the optional config
/// file. CLI flags are applied on top by the individual commands.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Directory that default-named output files are written to.
    pub output_dir: PathBuf,
    /// Defaults for the tabular dump.
    pub table: TableOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            table: TableOptions::default(),
        }
    }
}

impl Settings {
    /// Loads settings, merging the config file over the defaults when a
    /// path is given.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Io` if the file cannot be read and
    /// `CliError::Config` if it is not valid TOML or contains unknown
    /// fields.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let partial = match path {
            Some(path) => {
                debug!("Loading configuration from {:?}", path);
                let content = std::fs::read_to_string(path)?;
                toml::from_str::<PartialConfig>(&content).map_err(|e| {
                    CliError::Config(format!("failed to parse '{}': {}", path.display(), e))
                })?
            }
            None => PartialConfig::default(),
        };

        let mut settings = Settings::default();
        if let Some(output_dir) = partial.output_dir {
            settings.output_dir = output_dir;
        }
        if let Some(table) = partial.table {
            if let Some(scale) = table.scale {
                settings.table.scale = scale;
            }
            if let Some(height_offset) = table.height_offset {
                settings.table.height_offset = height_offset;
            }
        }

        Ok(settings)
    }
}
