//! Project file loading.
//!
//! A project file is YAML or JSON. Token families sit at the top level and
//! an optional `options` key carries naming and output settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Options, TokenConfig};
use crate::error::{DtokError, Result};

/// A token project loaded from disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    #[serde(default)]
    pub options: Options,

    #[serde(flatten)]
    pub tokens: TokenConfig,
}

impl ProjectFile {
    /// Load a project file, choosing the format from its extension.
    ///
    /// `.json` is read as JSON; anything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DtokError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read token file: {}", e),
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            Self::parse_json(&content)
        } else {
            Self::parse_yaml(&content)
        }
    }

    /// Parse a project from a YAML string.
    pub fn parse_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| DtokError::Parse {
            message: format!("Invalid token file: {}", e),
            help: Some("Each family needs a `modes` list of {name, tokens} entries".to_string()),
        })
    }

    /// Parse a project from a JSON string.
    pub fn parse_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| DtokError::Parse {
            message: format!("Invalid token file: {}", e),
            help: Some("Each family needs a `modes` list of {name, tokens} entries".to_string()),
        })
    }
}
