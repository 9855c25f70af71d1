//! Configuration settings for report rendering

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::defaults;
use crate::error::{Error, Result};

/// Options controlling how a [`QueryError`](crate::QueryError) is rendered.
///
/// The defaults produce the standard report layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Include the "Params:" line
    #[serde(default = "default_show_params")]
    pub show_params: bool,

    /// Point at the server error position with a caret excerpt
    #[serde(default = "default_annotate_position")]
    pub annotate_position: bool,
}

fn default_show_params() -> bool {
    defaults::SHOW_PARAMS
}
fn default_annotate_position() -> bool {
    defaults::ANNOTATE_POSITION
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_params: default_show_params(),
            annotate_position: default_annotate_position(),
        }
    }
}

impl RenderOptions {
    /// Parse options from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse render options: {}", e)))
    }

    /// Load options from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Load options using config-rs (file + environment variables)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        } else {
            builder = builder.add_source(File::with_name("pgdiag").required(false));
        }

        // Override with environment variables (PGDIAG_SHOW_PARAMS, ...)
        builder = builder.add_source(
            Environment::with_prefix(defaults::ENV_PREFIX)
                .prefix_separator("_")
                .try_parsing(true),
        );

        let options: RenderOptions = builder.build()?.try_deserialize()?;
        debug!(?options, "loaded render options");

        Ok(options)
    }
}
