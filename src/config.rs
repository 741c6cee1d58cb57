// src/config.rs
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Explicit, immutable run configuration.
///
/// Built once from defaults, an optional JSON file, and command-line
/// overrides, then passed into the pipeline by reference. Nothing reads
/// these values from ambient state.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Tree searched recursively for daily binary inputs
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Root of the date-partitioned output tree
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Alternative CDL template; the bundled one is used when unset
    #[serde(default)]
    pub template: Option<PathBuf>,

    #[serde(default = "default_software_repository")]
    pub software_repository: String,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("/disks/sidads_staging/DATASETS/nsidc0740_AS2_nrt_nasateam_seaice_v1")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("/share/apps/nsidc0803")
}

fn default_software_repository() -> String {
    "https://github.com/nsidc/nsidc0803".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            template: None,
            software_repository: default_software_repository(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}
