//! Project configuration (mkenv.yaml) data structures
//!
//! Optional file in the project root supplying defaults for flags that are
//! not given on the command line or through `MKENV_*` variables.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::config::{parse_failed, read_failed};
use crate::error::{MkenvError, Result};

/// File name looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "mkenv.yaml";

/// Project configuration (mkenv.yaml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Environment directory name
    pub target: Option<String>,

    /// Wheels directory; a leading `~/` is expanded
    pub wheels_dir: Option<PathBuf>,

    /// Main requirement file (default requirements.txt)
    pub requirements: Option<PathBuf>,

    /// Requirement file added by --dev (default requirements-dev.txt)
    pub dev_requirements: Option<PathBuf>,

    /// Constraints file passed with -c when present (default constraints.txt)
    pub constraints: Option<PathBuf>,

    pub python: Option<PathBuf>,

    #[serde(default)]
    pub always_copy: bool,
}

impl ProjectConfig {
    /// Parse project configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes as unit, not as an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Option<Self> = serde_yaml::from_str(yaml)?;
        Ok(config.unwrap_or_default())
    }

    /// Load `mkenv.yaml` from `project_root`, or defaults if there is none
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(PROJECT_CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| read_failed(&path, e.to_string()))?;
        Self::from_yaml(&content).map_err(|e| match e {
            MkenvError::ConfigParseFailed { reason, .. } => parse_failed(&path, reason),
            other => other,
        })
    }
}
