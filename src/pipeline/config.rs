//! Runtime settings of the pipeline, loadable from a JSON file.
//!
//! Page geometry is fixed and lives in `resolutio_layout::config`; only the
//! environment around the layout (where the emblem comes from, where output
//! goes, how eagerly previews refresh) is configurable.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ICON_PATH: &str = "Spun.png";
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Emblem path relative to `asset_dir`.
    pub icon_path: String,
    pub asset_dir: PathBuf,
    /// Quiet interval before a watched source is re-rendered.
    pub debounce_ms: u64,
    pub output_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            icon_path: DEFAULT_ICON_PATH.to_string(),
            asset_dir: PathBuf::from("."),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            output_dir: PathBuf::from("."),
        }
    }
}

impl PipelineConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Where a document named `file_name` is written.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Resolves relative directories against `base`, typically the folder
    /// holding the config file.
    pub fn relative_to(mut self, base: &Path) -> Self {
        if self.asset_dir.is_relative() {
            self.asset_dir = base.join(&self.asset_dir);
        }
        if self.output_dir.is_relative() {
            self.output_dir = base.join(&self.output_dir);
        }
        self
    }
}
