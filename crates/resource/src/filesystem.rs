//! Assets read from a directory on the local filesystem.
//!
//! Paths are resolved below the asset directory. A leading `/` refers to the
//! asset directory itself, the way `/Spun.png` refers to the web root, and
//! any path that would leave the directory is refused.

use resolutio_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct FilesystemResourceProvider {
    asset_dir: PathBuf,
    /// Canonical form of `asset_dir`, when it exists.
    canonical_dir: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(asset_dir: P) -> Self {
        let asset_dir = asset_dir.as_ref().to_path_buf();
        let canonical_dir = asset_dir.canonicalize().ok();
        Self {
            asset_dir,
            canonical_dir,
        }
    }

    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }

    /// Maps an asset path to a file inside the asset directory.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        if relative.as_os_str().is_empty()
            || relative
                .components()
                .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return None;
        }

        let full = self.asset_dir.join(relative);
        match (full.canonicalize(), &self.canonical_dir) {
            // Symlinks may still point elsewhere.
            (Ok(canonical), Some(base)) => canonical.starts_with(base).then_some(canonical),
            _ => Some(full),
        }
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full = self
            .resolve(path)
            .ok_or_else(|| ResourceError::NotFound(format!("{path} (outside the asset directory)")))?;

        log::debug!("Loading asset '{}' from {}", path, full.display());
        std::fs::read(&full).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(path.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_some_and(|p| p.is_file())
    }

    fn name(&self) -> &'static str {
        "filesystem"
    }
}
